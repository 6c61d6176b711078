//! Error types for the lexer and parser.
//!
//! Every parse failure is a syntax error at the current token. It carries
//! a static message, the text of the offending token and its position, so
//! callers can render it with [`crate::display_error`].

pub mod errors;
