//! Syntax error types.
//!
//! This module defines the errors the parser accumulates while building the
//! AST. Each error carries:
//!
//! - A specific variant describing what went wrong
//! - The source position of the offending token
//! - A short name and an optional suggestion for rendering

pub mod errors;
