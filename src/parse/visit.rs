use crate::common::*;
use crate::parse::ast;

pub trait AstVisitor {
    type Output;

    fn visit<T: ?Sized>(&mut self, node: &T) -> Self::Output
    where
        T: Accept<Self>,
    {
        node.accept(self)
    }

    fn visit_literal(&mut self, x: Int) -> Self::Output;

    fn visit_dice(&mut self, dice: &ast::Dice) -> Self::Output;

    fn visit_grouping(&mut self, inner: &ast::Expr) -> Self::Output;

    fn visit_binary(&mut self, op: BinaryOperator, l: &ast::Expr, r: &ast::Expr) -> Self::Output;
}

pub trait Accept<V: AstVisitor + ?Sized> {
    fn accept(&self, v: &mut V) -> V::Output;
}

impl<V: AstVisitor + ?Sized> Accept<V> for ast::Expr {
    fn accept(&self, v: &mut V) -> V::Output {
        match self {
            Self::Literal(x) => v.visit_literal(*x),
            Self::Dice(x) => v.visit_dice(x),
            Self::Grouping(x) => v.visit_grouping(x),
            Self::Binary(x) => v.visit_binary(x.op, &x.left, &x.right),
        }
    }
}
