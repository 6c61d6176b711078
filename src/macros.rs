//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_SPAN!` - Creates a Span between two byte offsets of one file

/// Creates a Token instance.
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $span:expr) => {
        Token {
            kind: $kind,
            span: $span,
        }
    };
}

/// Creates a Span from a start and end byte offset in `$file`.
///
/// `$file` is an `Rc<String>` and is cloned for each end of the span.
#[macro_export]
macro_rules! MK_SPAN {
    ($start:expr, $end:expr, $file:expr) => {
        $crate::Span {
            start: $crate::Position($start, ::std::rc::Rc::clone(&$file)),
            end: $crate::Position($end, ::std::rc::Rc::clone(&$file)),
        }
    };
}
