use crate::common::UInt;

/// Ceilings applied to every parse and evaluation.
///
/// These bound the work a single expression can cause, so hostile input such
/// as `999999d999999` or thousands of nested parentheses is rejected with an
/// error instead of exhausting memory or the stack.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RollConfig {
    /// Largest dice count allowed in a single term.
    pub max_dice: UInt,
    /// Largest number of sides allowed on a die.
    pub max_sides: UInt,
    /// Largest number of dice rolled across a whole expression.
    pub max_rolls: usize,
    /// Deepest expression tree the parser will build.
    pub max_depth: usize,
}

impl RollConfig {
    pub const fn new(max_dice: UInt, max_sides: UInt, max_rolls: usize, max_depth: usize) -> Self {
        Self {
            max_dice,
            max_sides,
            max_rolls,
            max_depth,
        }
    }

    pub fn with_max_dice(mut self, max_dice: UInt) -> Self {
        self.max_dice = max_dice;
        self
    }

    pub fn with_max_sides(mut self, max_sides: UInt) -> Self {
        self.max_sides = max_sides;
        self
    }

    pub fn with_max_rolls(mut self, max_rolls: usize) -> Self {
        self.max_rolls = max_rolls;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for RollConfig {
    fn default() -> Self {
        Self::new(1000, 1_000_000, 10_000, 64)
    }
}
