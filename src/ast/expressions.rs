use crate::Span;

use super::ast::Expr;

/// Number Expression
/// Represents a numeric literal in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberExpr {
    pub value: f64,
    pub span: Span,
}

/// Variable Expression
/// Represents a reference to a named value.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableExpr {
    pub name: String,
    pub span: Span,
}

/// Binary Expression
/// An infix operator applied to two operands. The operator is the raw
/// character the lexer produced, so any configured operator can appear.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub op: char,
    pub lhs: Box<Expr>,
    pub rhs: Box<Expr>,
    pub span: Span,
}

/// Call Expression
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: String,
    pub args: Vec<Expr>,
    pub span: Span,
}
