use super::{error::*, roller::Roller, tree::*, RResult};
use crate::common::*;
use crate::config::RollConfig;
use crate::parse::{
    ast,
    visit::{self, Accept},
};
use tracing::debug;
use vec1::vec1;

pub type DefaultRoller = rand::rngs::ThreadRng;

/// Walks an expression tree once, rolling each dice term and folding the
/// arithmetic, while enforcing the dice ceilings of a [`RollConfig`].
pub struct RollContext<R = DefaultRoller> {
    config: RollConfig,
    rolls: usize,
    roller: R,
}

impl<R: Roller> RollContext<R> {
    pub fn new(config: RollConfig, roller: R) -> Self {
        Self {
            config,
            rolls: 0,
            roller,
        }
    }

    fn check_dice(&self, dice: &ast::Dice) -> RResult<()> {
        let limits = [
            (DiceParam::Count, dice.count.get(), self.config.max_dice),
            (DiceParam::Sides, dice.sides.get(), self.config.max_sides),
        ];
        for (param, value, limit) in limits {
            if value > limit {
                return Err(SemanticError::DiceLimitExceeded {
                    param,
                    value: value.into(),
                    limit: limit.into(),
                });
            }
        }
        Ok(())
    }

    fn count_rolls(&mut self, n: usize) -> RResult<()> {
        self.rolls = self.rolls.saturating_add(n);
        if self.rolls > self.config.max_rolls {
            Err(SemanticError::TooManyRolls {
                limit: self.config.max_rolls,
            })
        } else {
            Ok(())
        }
    }

    /// Rolls every die of `dice`, rejecting it first if it breaks a ceiling.
    pub fn roll(&mut self, dice: &ast::Dice) -> RResult<NonEmpty<UInt>> {
        self.check_dice(dice)?;
        let count = dice.count.get() as usize;
        self.count_rolls(count)?;

        let mut rolls = vec1![self.roller.roll(dice.sides)];
        rolls.extend(self.roller.roll_iter(count - 1, dice.sides));
        Ok(rolls)
    }

    pub fn eval(&mut self, expr: &ast::Expr) -> RResult<Roll> {
        let tree = expr.accept(self)?;
        let roll = Roll::new(tree);
        debug!(value = roll.value(), rolls = self.rolls, "evaluated expression");
        Ok(roll)
    }
}

impl Default for RollContext {
    fn default() -> Self {
        Self::new(RollConfig::default(), rand::thread_rng())
    }
}

impl<R: Roller> visit::AstVisitor for RollContext<R> {
    type Output = RResult<RollTree>;

    fn visit_literal(&mut self, x: Int) -> Self::Output {
        Ok(Literal::new(x).into())
    }

    fn visit_dice(&mut self, dice: &ast::Dice) -> Self::Output {
        let rolls = self.roll(dice)?;
        debug!(
            count = dice.count.get(),
            sides = dice.sides.get(),
            rolls = ?rolls,
            "rolled dice"
        );
        Ok(Dice::new(dice.count, dice.sides, rolls)?.into())
    }

    fn visit_grouping(&mut self, inner: &ast::Expr) -> Self::Output {
        let value = inner.accept(self)?;
        Ok(Grouping::new(value).into())
    }

    fn visit_binary(&mut self, op: BinaryOperator, l: &ast::Expr, r: &ast::Expr) -> Self::Output {
        let left = l.accept(self)?;
        let right = r.accept(self)?;
        Ok(Binary::new(left, op, right)?.into())
    }
}
