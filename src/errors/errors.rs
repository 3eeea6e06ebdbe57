use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

#[derive(Debug, Clone, PartialEq)]
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
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::IntegerParseError { .. } => "IntegerParseError",
            ErrorImpl::NoPrefixParseFn { .. } => "NoPrefixParseFn",
            ErrorImpl::NoInfixParseFn { .. } => "NoInfixParseFn",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { expected, found } => match (expected, found) {
                (TokenKind::CloseCurly, TokenKind::EOF) => {
                    ErrorTip::Suggestion(String::from("Block is never closed, did you miss a `}`?"))
                }
                (_, TokenKind::EOF) => ErrorTip::Suggestion(format!(
                    "Input ended early, expected `{}`",
                    expected
                )),
                _ => ErrorTip::None,
            },
            ErrorImpl::IntegerParseError { literal } => ErrorTip::Suggestion(format!(
                "Invalid integer: `{}`, is it above the 64-bit integer limit?",
                literal
            )),
            ErrorImpl::NoPrefixParseFn { kind: TokenKind::Illegal } => {
                ErrorTip::Suggestion(String::from("Source contains a character Monkey does not recognise"))
            }
            ErrorImpl::NoPrefixParseFn { .. } => {
                ErrorTip::Suggestion(String::from("This token cannot start an expression"))
            }
            ErrorImpl::NoInfixParseFn { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

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
    #[error("expected next token to be {expected}, got {found} instead")]
    UnexpectedToken { expected: TokenKind, found: TokenKind },
    #[error("could not parse {literal:?} as integer")]
    IntegerParseError { literal: String },
    #[error("no prefix parse function for {kind} found")]
    NoPrefixParseFn { kind: TokenKind },
    #[error("no infix parse function for {kind} found")]
    NoInfixParseFn { kind: TokenKind },
}
