use crate::common::{NonZeroUInt, UInt};
use rand::{
    distributions::{DistIter, Distribution, Uniform},
    rngs::StdRng,
    Rng, SeedableRng,
};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Source of die outcomes. Every value returned lies in `1..=sides`.
pub trait Roller {
    type RollIter<'a>: Iterator<Item = UInt> + 'a
    where
        Self: 'a;

    fn roll(&mut self, sides: NonZeroUInt) -> UInt;

    fn roll_iter(&mut self, num: usize, sides: NonZeroUInt) -> Self::RollIter<'_>;
}

impl<R: Rng> Roller for R {
    type RollIter<'a> = std::iter::Take<DistIter<Uniform<UInt>, &'a mut Self, UInt>>
    where
        Self: 'a;

    fn roll(&mut self, sides: NonZeroUInt) -> UInt {
        self.gen_range(1..=sides.get())
    }

    fn roll_iter(&mut self, num: usize, sides: NonZeroUInt) -> Self::RollIter<'_> {
        Uniform::new_inclusive(1, sides.get())
            .sample_iter(self)
            .take(num)
    }
}

/// Replays a fixed list of outcomes, cycling when it runs out.
///
/// Each outcome is folded into `1..=sides` of the die being rolled, so a
/// script never produces an impossible face. An empty script always rolls 1.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRoller {
    values: Vec<UInt>,
    next: usize,
}

impl ScriptedRoller {
    pub fn new(values: impl IntoIterator<Item = UInt>) -> Self {
        Self {
            values: values.into_iter().collect(),
            next: 0,
        }
    }
}

impl Roller for ScriptedRoller {
    type RollIter<'a> = ScriptedIter<'a>;

    fn roll(&mut self, sides: NonZeroUInt) -> UInt {
        let value = if self.values.is_empty() {
            1
        } else {
            self.values[self.next % self.values.len()]
        };
        self.next = self.next.wrapping_add(1);
        value.saturating_sub(1) % sides.get() + 1
    }

    fn roll_iter(&mut self, num: usize, sides: NonZeroUInt) -> Self::RollIter<'_> {
        ScriptedIter {
            roller: self,
            num,
            sides,
        }
    }
}

pub struct ScriptedIter<'a> {
    roller: &'a mut ScriptedRoller,
    num: usize,
    sides: NonZeroUInt,
}

impl Iterator for ScriptedIter<'_> {
    type Item = UInt;

    fn next(&mut self) -> Option<Self::Item> {
        if self.num == 0 {
            None
        } else {
            self.num -= 1;
            Some(self.roller.roll(self.sides))
        }
    }
}

/// One generator shared by every clone, locked for the duration of each
/// draw. Lets many concurrent evaluations consume a single seeded stream.
#[derive(Debug)]
pub struct SharedRoller<R> {
    inner: Arc<Mutex<R>>,
}

impl<R> SharedRoller<R> {
    pub fn new(roller: R) -> Self {
        Self {
            inner: Arc::new(Mutex::new(roller)),
        }
    }

    // A poisoned generator is still usable.
    fn lock(&self) -> MutexGuard<'_, R> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SharedRoller<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R> Clone for SharedRoller<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: Roller> Roller for SharedRoller<R> {
    type RollIter<'a> = std::vec::IntoIter<UInt>
    where
        Self: 'a;

    fn roll(&mut self, sides: NonZeroUInt) -> UInt {
        self.lock().roll(sides)
    }

    fn roll_iter(&mut self, num: usize, sides: NonZeroUInt) -> Self::RollIter<'_> {
        let mut guard = self.lock();
        let rolls: Vec<_> = guard.roll_iter(num, sides).collect();
        rolls.into_iter()
    }
}
