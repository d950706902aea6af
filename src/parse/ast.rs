use crate::common::*;
use crate::roll::{DiceParam, SemanticError};

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Expr {
    Literal(Int),
    Dice(Dice),
    Grouping(Box<Expr>),
    Binary(Binary),
}

impl Expr {
    pub fn new_literal(x: Int) -> Self {
        Self::Literal(x)
    }

    pub fn new_dice(dice: Dice) -> Self {
        Self::Dice(dice)
    }

    pub fn new_grouping(inner: Self) -> Self {
        Self::Grouping(Box::new(inner))
    }

    pub fn new_binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::Binary(Binary::new(op, left, right))
    }

    /// Height of the tree rooted at this node; leaves have depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Self::Literal(_) | Self::Dice(_) => 1,
            Self::Grouping(inner) => inner.depth() + 1,
            Self::Binary(bin) => bin.depth,
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Binary {
    pub op: BinaryOperator,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    depth: usize,
}

impl Binary {
    pub fn new(op: BinaryOperator, left: Expr, right: Expr) -> Self {
        let depth = left.depth().max(right.depth()) + 1;
        Self {
            op,
            left: Box::new(left),
            right: Box::new(right),
            depth,
        }
    }
}

/// `count` dice with `sides` faces each.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Dice {
    pub count: NonZeroUInt,
    pub sides: NonZeroUInt,
}

impl Dice {
    /// Validates raw parsed numbers. Zero or negative values are
    /// [`SemanticError::InvalidDice`].
    pub fn new(count: Int, sides: Int) -> Result<Self, SemanticError> {
        if count < 1 || sides < 1 {
            return Err(SemanticError::InvalidDice { count, sides });
        }
        Ok(Self {
            count: to_param(DiceParam::Count, count)?,
            sides: to_param(DiceParam::Sides, sides)?,
        })
    }
}

fn to_param(param: DiceParam, value: Int) -> Result<NonZeroUInt, SemanticError> {
    UInt::try_from(value)
        .ok()
        .and_then(NonZeroUInt::new)
        .ok_or(SemanticError::DiceLimitExceeded {
            param,
            value,
            limit: UInt::MAX.into(),
        })
}
