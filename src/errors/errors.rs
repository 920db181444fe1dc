use std::fmt::Display;

use thiserror::Error;

use crate::token::tokens::TokenKind;
use crate::Position;

/// A parse failure: which check failed, and where in the token stream.
///
/// Every failure is a syntax mismatch; the internal variant records the
/// specific well-formedness check that rejected the input.
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

    pub fn get_position(&self) -> Position {
        self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::MalformedStruct { .. } => "MalformedStruct",
            ErrorImpl::InvalidUsingDeclaration => "InvalidUsingDeclaration",
            ErrorImpl::EmptyProgram => "EmptyProgram",
            ErrorImpl::MissingEndOfProgram => "MissingEndOfProgram",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { kind } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, no declaration starts here",
                kind
            )),
            ErrorImpl::MalformedStruct { name } => ErrorTip::Suggestion(format!(
                "Struct `{}` has a malformed body or is missing its terminator",
                name
            )),
            ErrorImpl::InvalidUsingDeclaration => ErrorTip::Suggestion(String::from(
                "Alias declarations must use the `using` keyword and the assignment operator",
            )),
            ErrorImpl::EmptyProgram => ErrorTip::None,
            ErrorImpl::MissingEndOfProgram => ErrorTip::Suggestion(String::from(
                "Token streams must end with an end-of-program token",
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
    #[error("unexpected token: {kind}")]
    UnexpectedToken { kind: TokenKind },
    #[error("malformed struct declaration: {name:?}")]
    MalformedStruct { name: String },
    #[error("invalid using declaration")]
    InvalidUsingDeclaration,
    #[error("empty program")]
    EmptyProgram,
    #[error("missing end of program token")]
    MissingEndOfProgram,
}
