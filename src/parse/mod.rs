pub mod ast;
mod error;
mod lexer;
mod parser;
pub mod visit;

pub use error::{SyntaxError, SyntaxErrorKind};
pub use lexer::{tokenize, Lexeme, Token};
pub use parser::Parser;

/// Builds an expression tree from a token sequence produced by [`tokenize`].
pub fn parse(tokens: Vec<Lexeme<'_>>, max_depth: usize) -> Result<ast::Expr, crate::Error> {
    Parser::new(tokens, max_depth).parse()
}

/// Tokenizes and parses `s` in one step.
pub fn parse_str(s: &str, max_depth: usize) -> Result<ast::Expr, crate::Error> {
    parse(tokenize(s)?, max_depth)
}
