use std::rc::Rc;

use crate::{MK_SPAN, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// A forward-only tokenizer over a stream of characters.
///
/// The lexer holds exactly one character of lookahead. The text of the last
/// identifier and the value of the last number are kept on the lexer and are
/// only valid until the next call to [`Lexer::next_token`].
pub struct Lexer<'a> {
    chars: Box<dyn Iterator<Item = char> + 'a>,
    /// The last character read but not yet consumed, `None` at end of input.
    last_char: Option<char>,
    /// Byte offset of `last_char`.
    last_pos: u32,
    /// Byte offset of the character after `last_char`.
    next_pos: u32,
    identifier_str: String,
    num_val: f64,
    file: Rc<String>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, file: Option<String>) -> Lexer<'a> {
        Lexer::from_chars(source.chars(), file)
    }

    /// Creates a lexer pulling from any character source, such as
    /// [`super::source::ReaderChars`] over standard input.
    pub fn from_chars<I>(chars: I, file: Option<String>) -> Lexer<'a>
    where
        I: Iterator<Item = char> + 'a,
    {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            chars: Box::new(chars),
            // A blank so the first call starts by reading real input.
            last_char: Some(' '),
            last_pos: 0,
            next_pos: 0,
            identifier_str: String::new(),
            num_val: 0.0,
            file: file_name,
        }
    }

    /// Text of the most recent `Identifier`, `Def` or `Extern` token.
    pub fn identifier_text(&self) -> &str {
        &self.identifier_str
    }

    /// Value of the most recent `Number` token.
    pub fn numeric_value(&self) -> f64 {
        self.num_val
    }

    pub fn file(&self) -> &Rc<String> {
        &self.file
    }

    fn bump(&mut self) {
        self.last_pos = self.next_pos;
        self.last_char = self.chars.next();

        if let Some(c) = self.last_char {
            self.next_pos = self.next_pos.saturating_add(c.len_utf8() as u32);
        }
    }

    pub fn next_token(&mut self) -> Token {
        loop {
            while matches!(self.last_char, Some(c) if c.is_whitespace()) {
                self.bump();
            }

            let start = self.last_pos;

            match self.last_char {
                Some(c) if c.is_ascii_alphabetic() || c == '_' => {
                    return self.lex_identifier(start);
                }
                Some(c) if c.is_ascii_digit() || c == '.' => {
                    return self.lex_number(start);
                }
                Some('#') => self.skip_comment(),
                None => {
                    return MK_TOKEN!(TokenKind::EOF, MK_SPAN!(start, start, self.file));
                }
                Some(c) => {
                    self.bump();
                    return MK_TOKEN!(TokenKind::Char(c), MK_SPAN!(start, self.last_pos, self.file));
                }
            }
        }
    }

    fn lex_identifier(&mut self, start: u32) -> Token {
        self.identifier_str.clear();

        while let Some(c) = self.last_char {
            if !(c.is_ascii_alphanumeric() || c == '_') {
                break;
            }
            self.identifier_str.push(c);
            self.bump();
        }

        let kind = RESERVED_LOOKUP
            .get(self.identifier_str.as_str())
            .copied()
            .unwrap_or(TokenKind::Identifier);

        MK_TOKEN!(kind, MK_SPAN!(start, self.last_pos, self.file))
    }

    /// Scans `digit* ('.' digit*)?`. A second `.` ends the literal and stays
    /// in the input for the next token.
    fn lex_number(&mut self, start: u32) -> Token {
        let mut num_str = String::new();
        let mut decimal_seen = false;

        while let Some(c) = self.last_char {
            if c == '.' {
                if decimal_seen {
                    break;
                }
                decimal_seen = true;
            } else if !c.is_ascii_digit() {
                break;
            }
            num_str.push(c);
            self.bump();
        }

        // A lone "." is accepted and reads as zero.
        self.num_val = num_str.parse().unwrap_or(0.0);

        MK_TOKEN!(TokenKind::Number, MK_SPAN!(start, self.last_pos, self.file))
    }

    fn skip_comment(&mut self) {
        loop {
            self.bump();
            match self.last_char {
                None | Some('\n') | Some('\r') => break,
                _ => {}
            }
        }
    }
}
