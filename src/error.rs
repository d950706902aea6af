use crate::parse::SyntaxError;
use crate::roll::SemanticError;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),
    #[error("{0}")]
    Semantic(#[from] SemanticError),
}

impl Error {
    pub fn is_syntax(&self) -> bool {
        matches!(self, Self::Syntax(_))
    }

    pub fn is_semantic(&self) -> bool {
        matches!(self, Self::Semantic(_))
    }
}
