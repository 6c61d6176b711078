use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::errors::errors::ErrorImpl;

lazy_static! {
    /// Binary operator precedences used unless the caller configures its own.
    /// Higher binds tighter.
    pub static ref DEFAULT_PRECEDENCE: HashMap<char, i32> = {
        let mut map = HashMap::new();
        map.insert('<', 10);
        map.insert('+', 20);
        map.insert('-', 20);
        map.insert('*', 40);
        map
    };
}

/// Precedence of any token that is not a binary operator.
pub const NOT_AN_OPERATOR: i32 = -1;

/// Characters that already mean something to the grammar or the lexer and
/// so cannot be made into binary operators.
const STRUCTURAL_CHARS: &[char] = &['(', ')', ',', '.', '#', '_'];

/// Maps operator characters to their binary precedence.
///
/// Built once before parsing; the parser only reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct PrecedenceTable {
    binop_precedence: HashMap<char, i32>,
}

impl PrecedenceTable {
    /// A table with no binary operators at all.
    pub fn empty() -> Self {
        PrecedenceTable {
            binop_precedence: HashMap::new(),
        }
    }

    pub fn insert(&mut self, op: char, precedence: i32) {
        self.binop_precedence.insert(op, precedence);
    }

    /// Returns the precedence of `op`, or `None` if it is missing or not positive.
    pub fn get(&self, op: char) -> Option<i32> {
        self.binop_precedence
            .get(&op)
            .copied()
            .filter(|precedence| *precedence > 0)
    }
}

impl Default for PrecedenceTable {
    fn default() -> Self {
        PrecedenceTable {
            binop_precedence: DEFAULT_PRECEDENCE.clone(),
        }
    }
}

/// Parses an `OP=N` override such as `/=40`.
pub fn parse_precedence_override(entry: &str) -> Result<(char, i32), ErrorImpl> {
    let invalid = || ErrorImpl::InvalidPrecedence {
        entry: entry.to_string(),
    };

    let mut chars = entry.chars();
    let op = chars.next().ok_or_else(invalid)?;

    if !op.is_ascii_punctuation() || STRUCTURAL_CHARS.contains(&op) {
        return Err(invalid());
    }

    if chars.next() != Some('=') {
        return Err(invalid());
    }

    match chars.as_str().parse::<i32>() {
        Ok(precedence) if precedence > 0 => Ok((op, precedence)),
        _ => Err(invalid()),
    }
}
