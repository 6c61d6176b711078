//! Parser state and the batch entry point.
//!
//! The parser holds a single token of lookahead pulled from its lexer. The
//! grammar rules live in [`super::expr`] and [`super::decl`] as free
//! functions over `&mut Parser`.

use crate::{
    ast::declarations::Item,
    errors::errors::Error,
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    decl::parse_item,
    lookups::{PrecedenceTable, NOT_AN_OPERATOR},
};

/// The main parser structure that maintains parsing state.
pub struct Parser<'a> {
    /// Source of tokens, also holding the payload of the current token
    lexer: Lexer<'a>,
    /// The one token of lookahead
    cur_token: Token,
    /// Binary operator precedences, fixed for the session
    binop_precedence: PrecedenceTable,
}

impl<'a> Parser<'a> {
    /// Creates a parser and reads the first token, so the current token is
    /// valid straight away.
    pub fn new(mut lexer: Lexer<'a>, binop_precedence: PrecedenceTable) -> Self {
        let cur_token = lexer.next_token();

        Parser {
            lexer,
            cur_token,
            binop_precedence,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.cur_token
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.cur_token.kind
    }

    /// Pulls the next token from the lexer, makes it current and returns it.
    pub fn advance(&mut self) -> &Token {
        self.cur_token = self.lexer.next_token();
        &self.cur_token
    }

    /// Returns the binary precedence of the current token, or
    /// [`NOT_AN_OPERATOR`] if it is not a configured operator.
    pub fn current_precedence(&self) -> i32 {
        match self.cur_token.kind {
            TokenKind::Char(c) if c.is_ascii() => {
                self.binop_precedence.get(c).unwrap_or(NOT_AN_OPERATOR)
            }
            _ => NOT_AN_OPERATOR,
        }
    }

    /// Identifier text of the current token.
    pub fn identifier_text(&self) -> &str {
        self.lexer.identifier_text()
    }

    /// Numeric value of the current token.
    pub fn numeric_value(&self) -> f64 {
        self.lexer.numeric_value()
    }

    /// Returns how the current token reads in the source, for diagnostics.
    pub fn describe_current(&self) -> String {
        match self.cur_token.kind {
            TokenKind::Identifier => self.identifier_text().to_string(),
            TokenKind::Number => self.numeric_value().to_string(),
            kind => kind.to_string(),
        }
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.cur_token.span.start.clone()
    }
}

/// Drives `parse_item` to end of input, handing each item or error to
/// `report` as soon as it is produced.
///
/// After every failure exactly one token is skipped before the next attempt,
/// so the loop always makes progress.
pub fn parse_items(parser: &mut Parser, mut report: impl FnMut(Result<Item, Error>)) {
    while let Some(result) = parse_item(parser) {
        let failed = result.is_err();
        report(result);

        if failed {
            parser.advance();
        }
    }
}

/// Parses a whole source text into its top-level items.
///
/// A construct that fails to parse is reported and skipped, see
/// [`parse_items`].
pub fn parse(
    source: &str,
    file: Option<String>,
    binop_precedence: PrecedenceTable,
) -> (Vec<Item>, Vec<Error>) {
    let mut parser = Parser::new(Lexer::new(source, file), binop_precedence);

    let mut items = vec![];
    let mut errors = vec![];

    parse_items(&mut parser, |result| match result {
        Ok(item) => items.push(item),
        Err(error) => errors.push(error),
    });

    (items, errors)
}
