//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! The parser pulls tokens from the lexer one at a time and builds the tree
//! with recursive descent. Binary operators are handled by precedence
//! climbing over a configurable [`lookups::PrecedenceTable`].
//!
//! Rules recurse once per level of nesting in the source, so very deeply
//! nested input is bounded only by the call stack.

pub mod decl;
pub mod expr;
pub mod lookups;
pub mod parser;

#[cfg(test)]
mod tests;
