//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::token::tokens::TokenKind;
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            kind: TokenKind::Operator,
        },
        Position(10),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::MalformedStruct {
            name: "Header".to_string(),
        },
        Position(42),
    );

    assert_eq!(error.get_position(), Position(42));
}

#[test]
fn test_error_tip_names_the_struct() {
    let error = Error::new(
        ErrorImpl::MalformedStruct {
            name: "Header".to_string(),
        },
        Position(0),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("Header")),
        ErrorTip::None => panic!("expected a suggestion"),
    }
}

#[test]
fn test_unexpected_token_tip_names_the_kind() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            kind: TokenKind::ScopeClose,
        },
        Position(3),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("ScopeClose")),
        ErrorTip::None => panic!("expected a suggestion"),
    }
}

#[test]
fn test_empty_program_has_no_tip() {
    let error = Error::new(ErrorImpl::EmptyProgram, Position(0));

    assert!(matches!(error.get_tip(), ErrorTip::None));
    assert_eq!(error.get_error_name(), "EmptyProgram");
}
