use super::tree::{Binary, Dice, Grouping, Literal, Roll};
use super::visit::{AcceptRoll, VisitRoll};

/// Renders an evaluated tree. Only numbers already in the tree are printed;
/// nothing is recomputed or re-rolled.
pub trait Stringify {
    fn stringify<A: AcceptRoll>(&mut self, a: &A) -> String {
        a.accept(self)
    }

    fn str_roll(&mut self, roll: &Roll) -> String {
        self.stringify(roll.tree())
    }

    fn str_literal(&mut self, lit: &Literal) -> String {
        lit.value.to_string()
    }

    fn str_dice(&mut self, dice: &Dice) -> String;

    fn str_grouping(&mut self, g: &Grouping) -> String {
        let inner = self.stringify(&*g.0);
        format!("({})", inner)
    }

    fn str_binary(&mut self, bin: &Binary) -> String {
        let l = self.stringify(&*bin.left);
        let r = self.stringify(&*bin.right);
        format!("{} {} {}", l, bin.op, r)
    }
}

/// `2d6 + 3`
#[derive(Default)]
pub struct CompactStringifier;

impl CompactStringifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stringify<A: AcceptRoll>(&mut self, roll: &A) -> String {
        Stringify::stringify(self, roll)
    }
}

impl Stringify for CompactStringifier {
    fn str_dice(&mut self, dice: &Dice) -> String {
        format!("{}d{}", dice.count, dice.sides)
    }
}

/// `[4, 2] + 3`
#[derive(Default)]
pub struct ExplainStringifier;

impl ExplainStringifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stringify<A: AcceptRoll>(&mut self, roll: &A) -> String {
        Stringify::stringify(self, roll)
    }
}

impl Stringify for ExplainStringifier {
    fn str_dice(&mut self, dice: &Dice) -> String {
        let the_dice = dice
            .rolls
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        format!("[{}]", the_dice)
    }
}

impl<S: ?Sized> VisitRoll for S
where
    S: Stringify,
{
    type Output = String;

    fn visit_roll(&mut self, x: &Roll) -> Self::Output {
        self.str_roll(x)
    }

    fn visit_literal(&mut self, x: &Literal) -> Self::Output {
        self.str_literal(x)
    }

    fn visit_dice(&mut self, x: &Dice) -> Self::Output {
        self.str_dice(x)
    }

    fn visit_grouping(&mut self, x: &Grouping) -> Self::Output {
        self.str_grouping(x)
    }

    fn visit_binary(&mut self, x: &Binary) -> Self::Output {
        self.str_binary(x)
    }
}
