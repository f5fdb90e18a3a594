//! Lexical analysis.
//!
//! This module contains the lexer (tokenizer) that turns source text into
//! a stream of tokens for parsing. It handles:
//!
//! - Lazy, one-token-at-a-time scanning driven by anchored regex patterns
//! - Recognition of keywords, identifiers, integer literals, and operators
//! - Token position tracking for error reporting
//! - Illegal characters, which become `Illegal` tokens rather than errors

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
