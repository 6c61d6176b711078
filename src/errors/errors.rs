use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnknownToken { .. } => "UnknownToken",
            ErrorImpl::ExpectedCloseParen { .. } => "ExpectedCloseParen",
            ErrorImpl::ExpectedArgumentListDelimiter { .. } => "ExpectedArgumentListDelimiter",
            ErrorImpl::ExpectedFunctionName { .. } => "ExpectedFunctionName",
            ErrorImpl::ExpectedPrototypeOpenParen { .. } => "ExpectedPrototypeOpenParen",
            ErrorImpl::ExpectedPrototypeCloseParen { .. } => "ExpectedPrototypeCloseParen",
            ErrorImpl::ReservedFunctionName { .. } => "ReservedFunctionName",
            ErrorImpl::InvalidPrecedence { .. } => "InvalidPrecedence",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnknownToken { token } => ErrorTip::Suggestion(format!(
                "found `{}`, expected a number, an identifier or `(`",
                token
            )),
            ErrorImpl::ExpectedCloseParen { token } => ErrorTip::Suggestion(format!(
                "found `{}`, is a closing parenthesis missing?",
                token
            )),
            ErrorImpl::ExpectedArgumentListDelimiter { token } => ErrorTip::Suggestion(format!(
                "found `{}`, arguments are separated by `,`",
                token
            )),
            ErrorImpl::ExpectedFunctionName { token } => {
                ErrorTip::Suggestion(format!("found `{}` where the function name belongs", token))
            }
            ErrorImpl::ExpectedPrototypeOpenParen { token } => {
                ErrorTip::Suggestion(format!("found `{}` after the function name", token))
            }
            ErrorImpl::ExpectedPrototypeCloseParen { token } => ErrorTip::Suggestion(format!(
                "found `{}`, parameters are bare identifiers without commas",
                token
            )),
            ErrorImpl::ReservedFunctionName { .. } => ErrorTip::None,
            ErrorImpl::InvalidPrecedence { .. } => ErrorTip::Suggestion(String::from(
                "precedences are written as OP=N, e.g. `/=40`",
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unknown token when expecting an expression")]
    UnknownToken { token: String },
    #[error("expected ')'")]
    ExpectedCloseParen { token: String },
    #[error("expected ')' or ',' in argument list")]
    ExpectedArgumentListDelimiter { token: String },
    #[error("Expected function name in prototype")]
    ExpectedFunctionName { token: String },
    #[error("Expected '(' in prototype")]
    ExpectedPrototypeOpenParen { token: String },
    #[error("Expected ')' in prototype")]
    ExpectedPrototypeCloseParen { token: String },
    #[error("Function name '{name}' is reserved")]
    ReservedFunctionName { name: String },
    #[error("invalid operator precedence {entry:?}")]
    InvalidPrecedence { entry: String },
}
