use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::ast::{Expression, Statement},
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum Precedence {
    Lowest,
    Equals,      // ==
    LessGreater, // > or <
    Sum,         // +
    Product,     // *
    Prefix,      // -x or !x
    Call,        // reserved for call syntax
}

lazy_static! {
    pub static ref PRECEDENCE_LOOKUP: HashMap<TokenKind, Precedence> = {
        let mut map = HashMap::new();
        map.insert(TokenKind::Equals, Precedence::Equals);
        map.insert(TokenKind::NotEquals, Precedence::Equals);
        map.insert(TokenKind::Less, Precedence::LessGreater);
        map.insert(TokenKind::Greater, Precedence::LessGreater);
        map.insert(TokenKind::Plus, Precedence::Sum);
        map.insert(TokenKind::Minus, Precedence::Sum);
        map.insert(TokenKind::Asterisk, Precedence::Product);
        map.insert(TokenKind::Slash, Precedence::Product);
        map
    };
}

/// Binding strength of `kind` when it appears between two operands.
pub fn precedence_of(kind: TokenKind) -> Precedence {
    PRECEDENCE_LOOKUP
        .get(&kind)
        .copied()
        .unwrap_or(Precedence::Lowest)
}

// Handlers return `None` after recording their own error
pub type StmtHandler = fn(&mut Parser) -> Option<Statement>;
pub type PrefixHandler = fn(&mut Parser) -> Option<Expression>;
pub type InfixHandler = fn(&mut Parser, Expression) -> Option<Expression>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Equality and relational
    parser.infix(TokenKind::Equals, parse_infix_expr);
    parser.infix(TokenKind::NotEquals, parse_infix_expr);
    parser.infix(TokenKind::Less, parse_infix_expr);
    parser.infix(TokenKind::Greater, parse_infix_expr);

    // Additive and multiplicative
    parser.infix(TokenKind::Plus, parse_infix_expr);
    parser.infix(TokenKind::Minus, parse_infix_expr);
    parser.infix(TokenKind::Asterisk, parse_infix_expr);
    parser.infix(TokenKind::Slash, parse_infix_expr);

    // Literals, symbols and unary operators
    parser.prefix(TokenKind::Identifier, parse_identifier);
    parser.prefix(TokenKind::Int, parse_integer_literal);
    parser.prefix(TokenKind::Bang, parse_prefix_expr);
    parser.prefix(TokenKind::Minus, parse_prefix_expr);

    // Statements
    parser.stmt(TokenKind::Let, parse_let_stmt);
    parser.stmt(TokenKind::Return, parse_return_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type PrefixLookup = HashMap<TokenKind, PrefixHandler>;
pub type InfixLookup = HashMap<TokenKind, InfixHandler>;
