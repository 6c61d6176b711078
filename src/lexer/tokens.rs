use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("def", TokenKind::Def);
        map.insert("extern", TokenKind::Extern);
        map
    };
}

/// The kind of a token. Identifier text and numeric values are not stored
/// here; they are read from the lexer right after the token is produced.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,

    // Commands
    Def,
    Extern,

    // Primary
    Identifier,
    Number,

    /// Any other character, operators and punctuation included.
    Char(char),
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Char(c) => write!(f, "{}", c),
            TokenKind::Def => write!(f, "def"),
            TokenKind::Extern => write!(f, "extern"),
            _ => write!(f, "{:?}", self),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}
