//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the program-level entry
//! points. The parser reads tokens lazily from a [`Lexer`] through a two-token
//! window (current + peek) and dispatches through lookup tables for:
//! - Statement handlers
//! - Prefix handlers, for tokens that start an expression
//! - Infix handlers, for tokens that continue one
//!
//! Syntax errors never abort the parse. They are collected and the offending
//! statement is dropped from the program. Expression nesting is capped at
//! [`MAX_EXPR_DEPTH`] so long operator chains cannot exhaust the stack.

use std::collections::HashMap;

use tracing::debug;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    lookups::{
        create_token_lookups, precedence_of, InfixHandler, InfixLookup, Precedence,
        PrefixHandler, PrefixLookup, StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// Token kinds that begin a statement; error recovery stops in front of them.
const STMT_STARTS: &[TokenKind] = &[TokenKind::Let, TokenKind::Return];

/// Deepest expression nesting accepted before the statement is rejected.
pub const MAX_EXPR_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Source of further tokens
    lexer: Lexer,
    /// The token under the cursor
    current: Token,
    /// One token of lookahead
    peek: Token,
    /// Syntax errors in the order they were found
    errors: Vec<Error>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for prefix expression handlers
    prefix_lookup: PrefixLookup,
    /// Lookup table for infix expression handlers
    infix_lookup: InfixLookup,
    /// Expressions currently being parsed
    depth: usize,
}

impl Parser {
    /// Creates a parser and primes `current` and `peek` with the first two tokens.
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();

        let mut parser = Parser {
            lexer,
            current,
            peek,
            errors: vec![],
            stmt_lookup: HashMap::new(),
            prefix_lookup: HashMap::new(),
            infix_lookup: HashMap::new(),
            depth: 0,
        };
        create_token_lookups(&mut parser);
        parser
    }

    pub fn current_token(&self) -> &Token {
        &self.current
    }

    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    /// Shifts `peek` into `current` and pulls the next token from the lexer.
    pub fn advance(&mut self) {
        self.current = std::mem::replace(&mut self.peek, self.lexer.next_token());
    }

    /// Advances only if the next token is `expected_kind`.
    ///
    /// Otherwise records a peek mismatch and leaves the cursor where it is.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> bool {
        let peek = self.peek_token();
        if peek.kind == expected_kind {
            self.advance();
            return true;
        }

        let found = peek.kind;
        let position = peek.span.start.clone();
        self.push_error(
            ErrorImpl::PeekMismatch {
                expected: expected_kind,
                found,
            },
            position,
        );
        false
    }

    pub fn current_precedence(&self) -> Precedence {
        precedence_of(self.current.kind)
    }

    pub fn peek_precedence(&self) -> Precedence {
        precedence_of(self.peek.kind)
    }

    pub fn push_error(&mut self, error: ErrorImpl, position: Position) {
        debug!(offset = position.0, "syntax error: {}", error);
        self.errors.push(Error::new(error, position));
    }

    /// Errors collected so far, in detection order.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the prefix handler lookup table.
    pub fn get_prefix_lookup(&self) -> &PrefixLookup {
        &self.prefix_lookup
    }

    /// Returns a reference to the infix handler lookup table.
    pub fn get_infix_lookup(&self) -> &InfixLookup {
        &self.infix_lookup
    }

    /// Registers an infix handler for a token.
    pub fn infix(&mut self, kind: TokenKind, infix_fn: InfixHandler) {
        self.infix_lookup.insert(kind, infix_fn);
    }

    /// Registers a prefix handler for a token.
    pub fn prefix(&mut self, kind: TokenKind, prefix_fn: PrefixHandler) {
        self.prefix_lookup.insert(kind, prefix_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Enters one level of expression nesting.
    ///
    /// Past [`MAX_EXPR_DEPTH`] this records an error, skips the rest of the
    /// statement and returns `false`.
    pub fn enter_expr(&mut self) -> bool {
        if self.depth >= MAX_EXPR_DEPTH {
            let position = self.current.span.start.clone();
            self.push_error(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_EXPR_DEPTH,
                },
                position,
            );
            self.synchronize();
            return false;
        }

        self.depth += 1;
        true
    }

    pub fn exit_expr(&mut self) {
        self.depth -= 1;
    }

    /// Skips the rest of a statement that failed to parse.
    ///
    /// Stops on `;` or `EOF`, or just before a token that starts a new statement,
    /// so the caller's `advance` lands on the next statement.
    pub fn synchronize(&mut self) {
        while !matches!(self.current.kind, TokenKind::Semicolon | TokenKind::EOF)
            && !self.peek.is_one_of_many(STMT_STARTS)
        {
            self.advance();
        }
    }

    /// Parses statements until `EOF`.
    ///
    /// Statements that fail to parse are left out of the program; their errors
    /// stay available through [`Parser::errors`].
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while self.current_token_kind() != TokenKind::EOF {
            if let Some(stmt) = parse_stmt(self) {
                program.statements.push(stmt);
            }
            self.advance();
        }

        debug!(
            statements = program.len(),
            errors = self.errors.len(),
            "parsed program"
        );
        program
    }
}

/// Parses a complete source into a program and the syntax errors found in it.
///
/// `file` names the source in error positions and defaults to `shell`.
pub fn parse(source: &str, file: Option<String>) -> (Program, Vec<Error>) {
    let mut parser = Parser::new(Lexer::new(source, file));
    let program = parser.parse_program();

    (program, parser.into_errors())
}
