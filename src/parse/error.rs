use super::lexer::Token;
use std::fmt;
use std::ops::Range;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("error at position {} ({slice:?}): {kind}", .span.start)]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub span: Range<usize>,
    pub slice: String,
}

impl SyntaxError {
    pub fn new(kind: SyntaxErrorKind, span: Range<usize>, slice: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            slice: slice.into(),
        }
    }

    pub fn position(&self) -> usize {
        self.span.start
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SyntaxErrorKind {
    UnexpectedCharacter,
    UnexpectedToken {
        found: Token,
        expected: Vec<&'static str>,
    },
    UnbalancedParens,
    EmptyExpression,
    NumberTooLarge,
    TooDeep {
        limit: usize,
    },
}

impl fmt::Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedCharacter => f.write_str("unexpected character"),
            Self::UnexpectedToken { found, expected } => {
                write!(f, "unexpected token: found {}, expected ", found)?;
                fmt_expected(expected, f)
            }
            Self::UnbalancedParens => f.write_str("unbalanced parentheses"),
            Self::EmptyExpression => f.write_str("empty expression"),
            Self::NumberTooLarge => f.write_str("number is too large"),
            Self::TooDeep { limit } => {
                write!(f, "expression is nested more than {} levels deep", limit)
            }
        }
    }
}

fn fmt_expected(expected: &[&str], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match expected {
        [] => Ok(()),
        [a] => f.write_str(a),
        [a, b] => write!(f, "{} or {}", a, b),
        [init @ .., last] => {
            for exp in init {
                write!(f, "{}, ", exp)?;
            }
            write!(f, "or {}", last)
        }
    }
}
