use super::error::{SyntaxError, SyntaxErrorKind};
use crate::common::*;
use logos::{Logos, Span};
use std::fmt;

#[derive(Logos, Debug, Copy, Clone, Eq, PartialEq)]
pub enum Token {
    #[regex(r"[0-9]+", |lex| lex.slice().parse())]
    Number(Int),

    #[token("d")]
    #[token("D")]
    Dice,

    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,

    // Appended by `tokenize`, never matched.
    End,

    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    #[error]
    Error,
}

impl Token {
    pub const ADDITION_OPS: &'static [Self] = &[Self::Plus, Self::Minus];

    pub const MULTIPLICATION_OPS: &'static [Self] = &[Self::Star, Self::Slash];

    pub fn as_str(&self) -> &'static str {
        use Token::*;

        match self {
            Number(_) => "<number>",
            Dice => "'d'",
            LeftParen => "'('",
            RightParen => "')'",
            Plus => "'+'",
            Minus => "'-'",
            Star => "'*'",
            Slash => "'/'",
            End => "<end of input>",
            Error => "<error>",
        }
    }

    pub fn as_binary_op(&self) -> Option<BinaryOperator> {
        use BinaryOperator::*;
        Some(match self {
            Self::Plus => Add,
            Self::Minus => Sub,
            Self::Star => Mul,
            Self::Slash => Div,
            _ => return None,
        })
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(x) => fmt::Display::fmt(x, f),
            _ => f.write_str(self.as_str()),
        }
    }
}

/// A token together with where it was found in the input.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme<'a> {
    pub token: Token,
    pub span: Span,
    pub slice: &'a str,
}

/// Splits `input` into tokens, always terminated by a [`Token::End`].
///
/// Whitespace only separates tokens. Digit runs are consumed greedily; one
/// that does not fit an [`Int`] is reported as
/// [`SyntaxErrorKind::NumberTooLarge`].
pub fn tokenize(input: &str) -> Result<Vec<Lexeme<'_>>, SyntaxError> {
    let mut lexer = Token::lexer(input);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next() {
        let span = lexer.span();
        let slice = lexer.slice();
        if token == Token::Error {
            let kind = if !slice.is_empty() && slice.bytes().all(|b| b.is_ascii_digit()) {
                SyntaxErrorKind::NumberTooLarge
            } else {
                SyntaxErrorKind::UnexpectedCharacter
            };
            return Err(SyntaxError::new(kind, span, slice));
        }
        tokens.push(Lexeme { token, span, slice });
    }

    let end = input.len();
    tokens.push(Lexeme {
        token: Token::End,
        span: end..end,
        slice: "",
    });
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(s: &str, expected: &[Token]) {
        let actual: Vec<_> = tokenize(s).unwrap().into_iter().map(|l| l.token).collect();
        assert_eq!(actual, expected);
    }

    fn check_err(s: &str, kind: SyntaxErrorKind, position: usize) {
        let err = tokenize(s).unwrap_err();
        assert_eq!(err.kind, kind);
        assert_eq!(err.position(), position);
    }

    #[test]
    fn test_lex_dice() {
        use Token::*;
        check("2d6+3", &[Number(2), Dice, Number(6), Plus, Number(3), End]);
        check("D20", &[Dice, Number(20), End]);
        check(
            " 1d20 - 1d4 * 2 ",
            &[
                Number(1),
                Dice,
                Number(20),
                Minus,
                Number(1),
                Dice,
                Number(4),
                Star,
                Number(2),
                End,
            ],
        );
    }

    #[test]
    fn test_lex_parens() {
        use Token::*;
        check(
            "(1d4+1)/2",
            &[
                LeftParen,
                Number(1),
                Dice,
                Number(4),
                Plus,
                Number(1),
                RightParen,
                Slash,
                Number(2),
                End,
            ],
        );
    }

    #[test]
    fn test_lex_empty() {
        check("", &[Token::End]);
        check(" \t\n", &[Token::End]);
    }

    #[test]
    fn test_lex_end_span() {
        let tokens = tokenize("1d6 ").unwrap();
        let end = tokens.last().unwrap();
        assert_eq!(end.token, Token::End);
        assert_eq!(end.span, 4..4);
    }

    #[test]
    fn test_lex_unexpected_character() {
        check_err("2x6", SyntaxErrorKind::UnexpectedCharacter, 1);
        check_err("1d6 % 2", SyntaxErrorKind::UnexpectedCharacter, 4);
        check_err("1d6!", SyntaxErrorKind::UnexpectedCharacter, 3);
    }

    #[test]
    fn test_lex_number_too_large() {
        check_err(
            "1d99999999999999999999999999",
            SyntaxErrorKind::NumberTooLarge,
            2,
        );
    }
}
