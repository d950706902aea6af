//! Parser and evaluator for tabletop dice notation such as `2d6+3` or
//! `(1d4+1)*2`.
//!
//! ```
//! use dice_notation::{parse_with, roll::ScriptedRoller, RollConfig};
//!
//! let roll = parse_with("2d6+3", ScriptedRoller::new([4, 2]), &RollConfig::default()).unwrap();
//! assert_eq!(roll.value(), 9);
//! assert_eq!(roll.description(false), "2d6 + 3");
//! assert_eq!(roll.description(true), "[4, 2] + 3");
//! ```

mod common;
mod config;
mod error;
pub mod parse;
pub mod roll;

pub use common::{BinaryOperator, Int, NonZeroUInt, UInt};
pub use config::RollConfig;
pub use error::Error;
pub use roll::{Roll, Roller};

use tracing::debug;

/// Parses and evaluates `input` with the default ceilings and a thread-local
/// random source.
pub fn parse(input: &str) -> Result<Roll, Error> {
    parse_with(input, rand::thread_rng(), &RollConfig::default())
}

/// Parses and evaluates `input`, drawing every die from `roller`.
pub fn parse_with<R: Roller>(input: &str, roller: R, config: &RollConfig) -> Result<Roll, Error> {
    let result = parse::parse_str(input, config.max_depth)
        .and_then(|expr| roll::evaluate(&expr, roller, config).map_err(Error::from));
    if let Err(err) = &result {
        debug!(input, %err, "rejected dice expression");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::SyntaxErrorKind;
    use crate::roll::{DiceParam, ScriptedRoller, SemanticError};

    fn roll(s: &str, draws: &[UInt]) -> Result<Roll, Error> {
        parse_with(s, ScriptedRoller::new(draws.iter().copied()), &RollConfig::default())
    }

    #[test]
    fn test_two_dice_plus_modifier() {
        let roll = roll("2d6+3", &[4, 2]).unwrap();
        assert_eq!(roll.value(), 9);
        assert_eq!(roll.description(false), "2d6 + 3");
        assert_eq!(roll.description(true), "[4, 2] + 3");
        assert_eq!(roll.explanation(), "9 = [4, 2] + 3");
    }

    #[test]
    fn test_single_d20() {
        let roll = roll("1d20", &[15]).unwrap();
        assert_eq!(roll.value(), 15);
        assert_eq!(roll.description(false), "1d20");
        assert_eq!(roll.description(true), "[15]");
    }

    #[test]
    fn test_accepted_grammar() {
        for s in ["1d20", "2d6+3", "(1d4+1)*2", "d6", "1d20-1d4*2", "  4 "] {
            assert!(parse(s).is_ok(), "{:?} should parse", s);
        }
    }

    #[test]
    fn test_rejected_grammar() {
        for s in ["d", "2d", "1d6+", "(1d6", "1d6)", "", "2x6", "1d4d6", "-3"] {
            let err = parse(s).unwrap_err();
            assert!(err.is_syntax(), "{:?} gave {:?}", s, err);
        }
    }

    #[test]
    fn test_semantic_errors() {
        assert_eq!(
            parse("1d6/0").unwrap_err(),
            Error::Semantic(SemanticError::DivisionByZero)
        );
        assert_eq!(
            parse("0d6").unwrap_err(),
            Error::Semantic(SemanticError::InvalidDice { count: 0, sides: 6 })
        );
        assert_eq!(
            parse("1d0").unwrap_err(),
            Error::Semantic(SemanticError::InvalidDice { count: 1, sides: 0 })
        );
        assert!(matches!(
            parse("999999d999999").unwrap_err(),
            Error::Semantic(SemanticError::DiceLimitExceeded {
                param: DiceParam::Count,
                ..
            })
        ));
    }

    #[test]
    fn test_hostile_input() {
        let digits = "9".repeat(10_000);
        match parse(&digits).unwrap_err() {
            Error::Syntax(err) => assert_eq!(err.kind, SyntaxErrorKind::NumberTooLarge),
            other => panic!("unexpected {:?}", other),
        }

        let nested = format!("{}1d6{}", "(".repeat(100_000), ")".repeat(100_000));
        assert!(parse(&nested).unwrap_err().is_syntax());

        let chain = vec!["1d6"; 100_000].join("+");
        assert!(parse(&chain).unwrap_err().is_syntax());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            parse("1d6 ? 2").unwrap_err().to_string(),
            "syntax error: error at position 4 (\"?\"): unexpected character"
        );
        assert_eq!(
            parse("1d6/0").unwrap_err().to_string(),
            "cannot divide by zero"
        );
    }
}
