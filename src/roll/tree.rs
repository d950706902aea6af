use super::stringify::{CompactStringifier, ExplainStringifier};
use super::visit::{AcceptRoll, VisitRoll};
use super::{error::SemanticError, RResult};
use crate::common::*;
use std::fmt;

#[enum_dispatch::enum_dispatch]
pub trait Eval {
    fn value(&self) -> Int;
}

/// One resolved evaluation of an expression.
///
/// The dice were rolled exactly once when this was built; the value and both
/// descriptions are read from the same outcomes and never re-roll.
#[derive(Debug, Clone, PartialEq)]
pub struct Roll {
    pub(crate) tree: RollTree,
    value: Int,
}

impl Roll {
    pub(crate) fn new(tree: RollTree) -> Self {
        let value = tree.value();
        Self { tree, value }
    }

    pub fn value(&self) -> Int {
        self.value
    }

    pub fn tree(&self) -> &RollTree {
        &self.tree
    }

    /// `explain == false` gives the notation (`2d6 + 3`), `true` lists every
    /// die outcome in its place (`[4, 2] + 3`).
    pub fn description(&self, explain: bool) -> String {
        if explain {
            ExplainStringifier::new().stringify(self)
        } else {
            CompactStringifier::new().stringify(self)
        }
    }

    /// The value followed by the explained form, e.g. `9 = [4, 2] + 3`.
    pub fn explanation(&self) -> String {
        format!("{} = {}", self.value, self.description(true))
    }
}

impl Eval for Roll {
    fn value(&self) -> Int {
        self.value
    }
}

impl fmt::Display for Roll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.explanation())
    }
}

#[derive(Debug, Clone, PartialEq)]
#[enum_dispatch::enum_dispatch(Eval, AcceptRoll)]
pub enum RollTree {
    Literal(Literal),
    Dice(Dice),
    Grouping(Grouping),
    Binary(Binary),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Literal {
    pub value: Int,
}

impl Literal {
    pub fn new(value: Int) -> Self {
        Self { value }
    }
}

impl Eval for Literal {
    fn value(&self) -> Int {
        self.value
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Dice {
    pub count: NonZeroUInt,
    pub sides: NonZeroUInt,
    pub rolls: NonEmpty<UInt>,
    total: Int,
}

impl Dice {
    pub fn new(count: NonZeroUInt, sides: NonZeroUInt, rolls: NonEmpty<UInt>) -> RResult<Self> {
        let total = rolls
            .iter()
            .try_fold(0 as Int, |acc, &x| acc.checked_add(x.into()))
            .ok_or(SemanticError::Overflow)?;
        Ok(Self {
            count,
            sides,
            rolls,
            total,
        })
    }
}

impl Eval for Dice {
    fn value(&self) -> Int {
        self.total
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Grouping(pub Box<RollTree>);

impl Grouping {
    pub fn new(inner: RollTree) -> Self {
        Self(Box::new(inner))
    }
}

impl Eval for Grouping {
    fn value(&self) -> Int {
        self.0.value()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Binary {
    pub left: Box<RollTree>,
    pub op: BinaryOperator,
    pub right: Box<RollTree>,
    value: Int,
}

impl Binary {
    pub fn new(left: RollTree, op: BinaryOperator, right: RollTree) -> RResult<Self> {
        let value = op.apply(left.value(), right.value())?;
        Ok(Self {
            left: Box::new(left),
            op,
            right: Box::new(right),
            value,
        })
    }
}

impl Eval for Binary {
    fn value(&self) -> Int {
        self.value
    }
}
