use crate::common::Int;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SemanticError {
    #[error("cannot divide by zero")]
    DivisionByZero,
    #[error("invalid dice {count}d{sides}: count and sides must be at least 1")]
    InvalidDice { count: Int, sides: Int },
    #[error("dice {param} of {value} exceeds the limit of {limit}")]
    DiceLimitExceeded {
        param: DiceParam,
        value: Int,
        limit: Int,
    },
    #[error("too many dice rolled; at most {limit} are allowed per expression")]
    TooManyRolls { limit: usize },
    #[error("integer overflow")]
    Overflow,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DiceParam {
    Count,
    Sides,
}

impl fmt::Display for DiceParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Count => "count",
            Self::Sides => "sides",
        })
    }
}
