//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::TokenKind;
use crate::Position;
use std::rc::Rc;

fn at(offset: u32) -> Position {
    Position(offset, Rc::new("test.monkey".to_string()))
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Assignment,
            found: TokenKind::Int,
        },
        at(42),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_position().1.as_str(), "test.monkey");
}

#[test]
fn test_unexpected_token_message() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Assignment,
            found: TokenKind::Int,
        },
        at(0),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.to_string(), "expected next token to be =, got INT instead");
}

#[test]
fn test_integer_parse_message() {
    let error = Error::new(
        ErrorImpl::IntegerParseError {
            literal: "99999999999999999999".to_string(),
        },
        at(0),
    );

    assert_eq!(error.get_error_name(), "IntegerParseError");
    assert_eq!(
        error.to_string(),
        "could not parse \"99999999999999999999\" as integer"
    );
}

#[test]
fn test_no_prefix_parse_fn_message() {
    let error = Error::new(ErrorImpl::NoPrefixParseFn { kind: TokenKind::Semicolon }, at(0));

    assert_eq!(error.get_error_name(), "NoPrefixParseFn");
    assert_eq!(error.to_string(), "no prefix parse function for ; found");
}

#[test]
fn test_no_infix_parse_fn_message() {
    let error = Error::new(ErrorImpl::NoInfixParseFn { kind: TokenKind::Comma }, at(0));

    assert_eq!(error.get_error_name(), "NoInfixParseFn");
    assert_eq!(error.to_string(), "no infix parse function for , found");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::CloseParen,
            found: TokenKind::Semicolon,
        },
        at(0),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_unclosed_block() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::CloseCurly,
            found: TokenKind::EOF,
        },
        at(0),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains('}')),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
