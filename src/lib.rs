#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

/// A byte offset into a named source.
///
/// Offsets stop growing at `u32::MAX`, so every position in a source longer
/// than 4 GiB reads as that value.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Maps a byte offset to `(line number, line text, column)`.
///
/// Offsets at or past the end of the source land at the end of the last line.
pub fn get_line_at_position(content: &str, position: u32) -> (usize, String, usize) {
    let pos = position as usize;

    let mut start = 0;
    let mut line_number = 1;
    let mut last_line = "";

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return (line_number, line.to_string(), line_pos);
        }

        last_line = line;
        start = end;
        line_number += 1;
    }

    if last_line.is_empty() {
        return (1, String::new(), 0);
    }

    let trimmed = last_line.trim_end_matches(&['\n', '\r'][..]);
    (line_number - 1, trimmed.to_string(), trimmed.len())
}


pub fn display_error(error: &Error, source: &str, file: &str) {
    /*
        Error: UnknownToken (found `)`, ...)
        -> input.ks
           |
        2  | 1 + )
           | ----^
    */

    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {}", error.get_error_name());
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    eprintln!("-> {}", file);
    eprintln!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    eprintln!("{} | {}", line_string, line_text_removed.trim_end());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    eprintln!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.chars().take_while(|c| *c == ' ').count();

    (String::from(&string[start..]), start)
}
