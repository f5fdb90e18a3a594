use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

/// A syntax error together with the position of the token that caused it.
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

    /// The user-facing message, e.g. `expected next token to be ASSIGN, got INT instead`.
    pub fn message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::PeekMismatch { .. } => "PeekMismatch",
            ErrorImpl::NoPrefixParseFn { .. } => "NoPrefixParseFn",
            ErrorImpl::IntegerParse { .. } => "IntegerParse",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::PeekMismatch { expected, found } => ErrorTip::Suggestion(format!(
                "Expected `{}` but found `{}`",
                expected, found
            )),
            ErrorImpl::NoPrefixParseFn { kind: TokenKind::Illegal, literal } => {
                ErrorTip::Suggestion(format!("Unrecognised character `{}`", literal))
            }
            ErrorImpl::NoPrefixParseFn { literal, .. } => ErrorTip::Suggestion(format!(
                "`{}` cannot start an expression",
                literal
            )),
            ErrorImpl::IntegerParse { literal } => ErrorTip::Suggestion(format!(
                "Invalid integer: `{}`, is it above the 64-bit integer limit?",
                literal
            )),
            ErrorImpl::NestingTooDeep { .. } => {
                ErrorTip::Suggestion(String::from("Break the expression into smaller ones"))
            }
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
    PeekMismatch { expected: TokenKind, found: TokenKind },
    #[error("no prefix parse function for token kind {kind}")]
    NoPrefixParseFn { kind: TokenKind, literal: String },
    #[error("could not parse {literal:?} as integer")]
    IntegerParse { literal: String },
    #[error("expression nested more than {limit} levels deep")]
    NestingTooDeep { limit: usize },
}
