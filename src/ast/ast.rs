use std::fmt::Display;

use crate::Span;

use super::expressions::{BinaryExpr, CallExpr, NumberExpr, VariableExpr};

/// Expression
///
/// Every node owns its children. Parentheses in the source never produce a
/// node of their own.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(NumberExpr),
    Variable(VariableExpr),
    Binary(BinaryExpr),
    Call(CallExpr),
}

impl Expr {
    /// Returns the span of the expression.
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Number(expr) => &expr.span,
            Expr::Variable(expr) => &expr.span,
            Expr::Binary(expr) => &expr.span,
            Expr::Call(expr) => &expr.span,
        }
    }
}

/// Renders the tree as an S-expression, e.g. `(+ 1 (* x f(2, y)))`.
impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Number(expr) => write!(f, "{}", expr.value),
            Expr::Variable(expr) => write!(f, "{}", expr.name),
            Expr::Binary(expr) => write!(f, "({} {} {})", expr.op, expr.lhs, expr.rhs),
            Expr::Call(expr) => {
                write!(f, "{}(", expr.callee)?;
                for (i, arg) in expr.args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
        }
    }
}
