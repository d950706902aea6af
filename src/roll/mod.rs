mod ctx;
mod error;
mod roller;
mod stringify;
mod tree;
mod visit;

use crate::config::RollConfig;
use crate::parse::ast;

type RResult<T> = Result<T, SemanticError>;

pub use ctx::{DefaultRoller, RollContext};
pub use error::{DiceParam, SemanticError};
pub use roller::{Roller, ScriptedIter, ScriptedRoller, SharedRoller};
pub use stringify::{CompactStringifier, ExplainStringifier, Stringify};
pub use tree::{Binary, Dice, Eval, Grouping, Literal, Roll, RollTree};
pub use visit::{AcceptRoll, VisitRoll};

/// Evaluates `expr` once, drawing every die from `roller`.
pub fn evaluate<R: Roller>(expr: &ast::Expr, roller: R, config: &RollConfig) -> RResult<Roll> {
    RollContext::new(*config, roller).eval(expr)
}
