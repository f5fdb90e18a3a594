//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It uses a Pratt parser for expressions
//! with operator precedence and handles:
//!
//! - Statement parsing (`let`, `return`, expression statements)
//! - Expression parsing (identifiers, integers, prefix and infix operators)
//! - Error collection and statement-level recovery
//!
//! Expressions are parsed with prefix and infix handlers looked up by token
//! kind, and a precedence table that decides how tightly operators bind.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
