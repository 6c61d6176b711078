//! Lexical analysis.
//!
//! The lexer turns a stream of characters into tokens on demand. It handles:
//!
//! - Keywords (`def`, `extern`) and identifiers
//! - Numeric literals, read as `f64`
//! - `#` line comments and whitespace, which never reach the parser
//! - Every other character, passed through as a single-character token
//!
//! Input may come from a string or from any reader through [`source::ReaderChars`].

pub mod lexer;
pub mod source;
pub mod tokens;
