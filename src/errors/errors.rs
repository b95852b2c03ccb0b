use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
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

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::ExpectedToken { .. } => "ExpectedToken",
            ErrorImpl::IntParseError { .. } => "IntParseError",
            ErrorImpl::ExpectedRecordField { .. } => "ExpectedRecordField",
            ErrorImpl::UnquoteOutsideQuotation => "UnquoteOutsideQuotation",
            ErrorImpl::InvalidAssignmentTarget => "InvalidAssignmentTarget",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, no parser is registered for it here",
                token
            )),
            ErrorImpl::ExpectedToken { expected, found } => ErrorTip::Suggestion(format!(
                "Expected {} but found `{}`",
                expected, found
            )),
            ErrorImpl::IntParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid integer: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::ExpectedRecordField { found } => ErrorTip::Suggestion(format!(
                "Found `{}` where a `name:` field was expected; a record must use field syntax for every element",
                found
            )),
            ErrorImpl::UnquoteOutsideQuotation => ErrorTip::Suggestion(String::from(
                "An unquote is only allowed inside a `{ ... }` expression literal",
            )),
            ErrorImpl::InvalidAssignmentTarget => ErrorTip::Suggestion(String::from(
                "Only names, unary message sends, and calls can be assigned to",
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

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("expected {expected} but found: {found:?}")]
    ExpectedToken { expected: String, found: String },
    #[error("error parsing integer: {token:?}")]
    IntParseError { token: String },
    #[error("expected record field, found: {found:?}")]
    ExpectedRecordField { found: String },
    #[error("unquote outside of quotation")]
    UnquoteOutsideQuotation,
    #[error("invalid assignment target")]
    InvalidAssignmentTarget,
}
