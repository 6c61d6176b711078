use std::{io::BufRead, vec::IntoIter};

/// Lazily decodes characters from a buffered reader, one line at a time.
///
/// An I/O or UTF-8 error ends the stream, the same as end of input.
pub struct ReaderChars<R: BufRead> {
    reader: R,
    line: IntoIter<char>,
    done: bool,
}

impl<R: BufRead> ReaderChars<R> {
    pub fn new(reader: R) -> Self {
        ReaderChars {
            reader,
            line: Vec::new().into_iter(),
            done: false,
        }
    }

    fn fill(&mut self) -> bool {
        let mut buffer = String::new();
        match self.reader.read_line(&mut buffer) {
            Ok(0) | Err(_) => {
                self.done = true;
                false
            }
            Ok(_) => {
                self.line = buffer.chars().collect::<Vec<char>>().into_iter();
                true
            }
        }
    }
}

impl<R: BufRead> Iterator for ReaderChars<R> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        loop {
            if let Some(c) = self.line.next() {
                return Some(c);
            }

            if self.done || !self.fill() {
                return None;
            }
        }
    }
}
