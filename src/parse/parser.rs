use super::ast::{Dice, Expr};
use super::error::{SyntaxError, SyntaxErrorKind};
use super::lexer::{Lexeme, Token};
use crate::common::*;
use crate::Error;

type PResult<T = Expr> = Result<T, Error>;

/// Precedence-climbing parser over a token vector with one token of
/// lookahead.
///
/// ```text
/// expr   := term (('+' | '-') term)*
/// term   := factor (('*' | '/') factor)*
/// factor := dice | number | '(' expr ')'
/// dice   := [number] 'd' number
/// ```
pub struct Parser<'a> {
    tokens: Vec<Lexeme<'a>>,
    pos: usize,
    max_depth: usize,
    nesting: usize,
}

impl<'a> Parser<'a> {
    const FACTOR_START: &'static [&'static str] = &["<number>", "'d'", "'('"];

    const AFTER_EXPRESSION: &'static [&'static str] =
        &["'+'", "'-'", "'*'", "'/'", "<end of input>"];

    pub fn new(tokens: Vec<Lexeme<'a>>, max_depth: usize) -> Self {
        Self {
            tokens,
            pos: 0,
            max_depth,
            nesting: 0,
        }
    }

    pub fn parse(mut self) -> PResult {
        if self.matches(Token::End) {
            return self.error(SyntaxErrorKind::EmptyExpression);
        }

        let expr = self.parse_expression()?;

        match self.peek() {
            Token::End => Ok(expr),
            Token::RightParen => self.error(SyntaxErrorKind::UnbalancedParens),
            _ => self.unexpected_token(Self::AFTER_EXPRESSION),
        }
    }

    fn peek(&self) -> Token {
        self.tokens.get(self.pos).map_or(Token::End, |l| l.token)
    }

    fn advance(&mut self) -> Token {
        let token = self.peek();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    fn matches(&self, kind: Token) -> bool {
        self.peek() == kind
    }

    fn match_op(&mut self, options: &[Token]) -> Option<BinaryOperator> {
        let token = self.peek();
        if options.contains(&token) {
            self.advance();
            token.as_binary_op()
        } else {
            None
        }
    }

    fn error_at<T>(&self, pos: usize, kind: SyntaxErrorKind) -> PResult<T> {
        let err = match self.tokens.get(pos) {
            Some(lexeme) => SyntaxError::new(kind, lexeme.span.clone(), lexeme.slice),
            None => {
                let end = self.tokens.last().map_or(0, |l| l.span.end);
                SyntaxError::new(kind, end..end, "")
            }
        };
        Err(err.into())
    }

    fn error<T>(&self, kind: SyntaxErrorKind) -> PResult<T> {
        self.error_at(self.pos, kind)
    }

    fn unexpected_token<T>(&self, expected: &[&'static str]) -> PResult<T> {
        self.error(SyntaxErrorKind::UnexpectedToken {
            found: self.peek(),
            expected: expected.to_vec(),
        })
    }

    fn check_depth(&self, expr: Expr) -> PResult {
        if expr.depth() > self.max_depth {
            self.error(SyntaxErrorKind::TooDeep {
                limit: self.max_depth,
            })
        } else {
            Ok(expr)
        }
    }

    fn parse_expression(&mut self) -> PResult {
        let mut lhs = self.parse_term()?;

        while let Some(op) = self.match_op(Token::ADDITION_OPS) {
            let rhs = self.parse_term()?;
            lhs = self.check_depth(Expr::new_binary(op, lhs, rhs))?;
        }

        Ok(lhs)
    }

    fn parse_term(&mut self) -> PResult {
        let mut lhs = self.parse_factor()?;

        while let Some(op) = self.match_op(Token::MULTIPLICATION_OPS) {
            let rhs = self.parse_factor()?;
            lhs = self.check_depth(Expr::new_binary(op, lhs, rhs))?;
        }

        Ok(lhs)
    }

    fn parse_factor(&mut self) -> PResult {
        match self.peek() {
            Token::LeftParen => self.parse_grouping(),
            Token::Number(x) => {
                self.advance();
                if self.matches(Token::Dice) {
                    self.parse_dice(x)
                } else {
                    Ok(Expr::new_literal(x))
                }
            }
            // An omitted count means a single die.
            Token::Dice => self.parse_dice(1),
            Token::RightParen if self.nesting == 0 => {
                self.error(SyntaxErrorKind::UnbalancedParens)
            }
            _ => self.unexpected_token(Self::FACTOR_START),
        }
    }

    fn parse_grouping(&mut self) -> PResult {
        let open = self.pos;
        if self.nesting >= self.max_depth {
            return self.error(SyntaxErrorKind::TooDeep {
                limit: self.max_depth,
            });
        }

        self.advance();
        self.nesting += 1;
        let inner = self.parse_expression()?;
        self.nesting -= 1;

        match self.peek() {
            Token::RightParen => {
                self.advance();
            }
            Token::End => return self.error_at(open, SyntaxErrorKind::UnbalancedParens),
            _ => return self.unexpected_token(&["')'"]),
        }

        self.check_depth(Expr::new_grouping(inner))
    }

    fn parse_dice(&mut self, count: Int) -> PResult {
        self.advance();
        let sides = match self.peek() {
            Token::Number(x) => x,
            _ => return self.unexpected_token(&["<number>"]),
        };
        self.advance();

        let dice = Dice::new(count, sides)?;
        Ok(Expr::new_dice(dice))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::tokenize;
    use crate::roll::SemanticError;

    const MAX_DEPTH: usize = 64;

    fn parse(s: &str) -> PResult {
        Parser::new(tokenize(s)?, MAX_DEPTH).parse()
    }

    fn check(s: &str, expected: Expr) {
        assert_eq!(parse(s).unwrap(), expected);
    }

    fn check_err(s: &str, kind: SyntaxErrorKind, position: usize) {
        match parse(s) {
            Err(Error::Syntax(err)) => {
                assert_eq!(err.kind, kind, "input {:?}", s);
                assert_eq!(err.position(), position, "input {:?}", s);
            }
            other => panic!("expected syntax error for {:?}, got {:?}", s, other),
        }
    }

    fn check_unexpected(s: &str, position: usize) {
        match parse(s) {
            Err(Error::Syntax(err)) => {
                assert!(
                    matches!(err.kind, SyntaxErrorKind::UnexpectedToken { .. }),
                    "input {:?}: {:?}",
                    s,
                    err
                );
                assert_eq!(err.position(), position, "input {:?}", s);
            }
            other => panic!("expected syntax error for {:?}, got {:?}", s, other),
        }
    }

    fn dice(count: Int, sides: Int) -> Expr {
        Expr::new_dice(Dice::new(count, sides).unwrap())
    }

    fn lit(x: Int) -> Expr {
        Expr::new_literal(x)
    }

    #[test]
    fn test_parse_atoms() {
        check("7", lit(7));
        check("1d20", dice(1, 20));
        check("d6", dice(1, 6));
        check("D6", dice(1, 6));
        check(" 3 d 8 ", dice(3, 8));
        check("(2)", Expr::new_grouping(lit(2)));
    }

    #[test]
    fn test_parse_binary() {
        use BinaryOperator::*;
        check("2d6+3", Expr::new_binary(Add, dice(2, 6), lit(3)));
        check(
            "1d20-1d4*2",
            Expr::new_binary(Sub, dice(1, 20), Expr::new_binary(Mul, dice(1, 4), lit(2))),
        );
        check(
            "(1d4+1)*2",
            Expr::new_binary(
                Mul,
                Expr::new_grouping(Expr::new_binary(Add, dice(1, 4), lit(1))),
                lit(2),
            ),
        );
    }

    #[test]
    fn test_parse_left_associative() {
        use BinaryOperator::*;
        check(
            "10 - 3 - 2",
            Expr::new_binary(Sub, Expr::new_binary(Sub, lit(10), lit(3)), lit(2)),
        );
        check(
            "12 / 3 * 2",
            Expr::new_binary(Mul, Expr::new_binary(Div, lit(12), lit(3)), lit(2)),
        );
    }

    #[test]
    fn test_parse_syntax_errors() {
        check_unexpected("d", 1);
        check_unexpected("2d", 2);
        check_unexpected("1d6+", 4);
        check_unexpected("1d6 * * 2", 6);
        check_unexpected("()", 1);
        check_unexpected("1d4d6", 3);
        check_unexpected("2 3", 2);
        check_unexpected("(2)d6", 3);
        check_err("(1d6", SyntaxErrorKind::UnbalancedParens, 0);
        check_err("1 + (2 * (3)", SyntaxErrorKind::UnbalancedParens, 4);
        check_err("1d6)", SyntaxErrorKind::UnbalancedParens, 3);
        check_err(")", SyntaxErrorKind::UnbalancedParens, 0);
        check_err("", SyntaxErrorKind::EmptyExpression, 0);
        check_err("   ", SyntaxErrorKind::EmptyExpression, 3);
    }

    #[test]
    fn test_parse_invalid_dice() {
        assert_eq!(
            parse("0d6"),
            Err(Error::Semantic(SemanticError::InvalidDice { count: 0, sides: 6 }))
        );
        assert_eq!(
            parse("1d0"),
            Err(Error::Semantic(SemanticError::InvalidDice { count: 1, sides: 0 }))
        );
    }

    #[test]
    fn test_parse_too_deep() {
        let nested = format!("{}1{}", "(".repeat(200), ")".repeat(200));
        match parse(&nested) {
            Err(Error::Syntax(err)) => {
                assert_eq!(err.kind, SyntaxErrorKind::TooDeep { limit: MAX_DEPTH })
            }
            other => panic!("expected depth error, got {:?}", other),
        }

        let chain = vec!["1"; 200].join("+");
        match parse(&chain) {
            Err(Error::Syntax(err)) => {
                assert_eq!(err.kind, SyntaxErrorKind::TooDeep { limit: MAX_DEPTH })
            }
            other => panic!("expected depth error, got {:?}", other),
        }

        let shallow = format!("{}1{}", "(".repeat(10), ")".repeat(10));
        assert!(parse(&shallow).is_ok());
    }

    #[test]
    fn test_parse_without_end_token() {
        let mut tokens = tokenize("1d6").unwrap();
        tokens.pop();
        assert_eq!(Parser::new(tokens, MAX_DEPTH).parse().unwrap(), dice(1, 6));
    }
}
