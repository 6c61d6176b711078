use std::fmt::Display;

use crate::Span;

use super::ast::Expr;

/// Name given to the prototype wrapping a top-level expression. User
/// prototypes may not use it.
pub const ANONYMOUS_FUNCTION_NAME: &str = "__anon_expr";

/// Function prototype: a name and its parameter names in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Prototype {
    pub name: String,
    pub params: Vec<String>,
    pub span: Span,
}

impl Prototype {
    pub fn is_anonymous(&self) -> bool {
        self.name == ANONYMOUS_FUNCTION_NAME
    }
}

impl Display for Prototype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name, self.params.join(" "))
    }
}

/// A prototype with a single-expression body.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub prototype: Prototype,
    pub body: Expr,
}

impl Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.prototype.is_anonymous() {
            write!(f, "{}", self.body)
        } else {
            write!(f, "def {} {}", self.prototype, self.body)
        }
    }
}

/// One parsed top-level construct.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Definition(Function),
    Extern(Prototype),
    TopLevelExpr(Function),
}

impl Item {
    pub fn describe(&self) -> &'static str {
        match self {
            Item::Definition(_) => "a function definition",
            Item::Extern(_) => "an extern",
            Item::TopLevelExpr(_) => "a top-level expr",
        }
    }
}

impl Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Item::Definition(function) | Item::TopLevelExpr(function) => write!(f, "{}", function),
            Item::Extern(prototype) => write!(f, "extern {}", prototype),
        }
    }
}
