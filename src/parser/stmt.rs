use crate::{
    ast::{
        ast::Statement,
        expressions::Identifier,
        statements::{ExpressionStmt, LetStmt, ReturnStmt},
    },
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, lookups::Precedence, parser::Parser};

pub fn parse_stmt(parser: &mut Parser) -> Option<Statement> {
    let handler = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied();

    match handler {
        Some(stmt_fn) => stmt_fn(parser),
        None => parse_expression_stmt(parser),
    }
}

pub fn parse_let_stmt(parser: &mut Parser) -> Option<Statement> {
    let token = parser.current_token().clone();

    if !parser.expect_peek(TokenKind::Identifier) {
        parser.synchronize();
        return None;
    }

    let name = Identifier {
        token: parser.current_token().clone(),
        value: parser.current_token().literal.clone(),
    };

    if !parser.expect_peek(TokenKind::Assign) {
        parser.synchronize();
        return None;
    }

    // The bound expression is not captured yet
    skip_to_terminator(parser);

    Some(Statement::Let(LetStmt { token, name }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Option<Statement> {
    let token = parser.current_token().clone();

    skip_to_terminator(parser);

    Some(Statement::Return(ReturnStmt { token }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Option<Statement> {
    let token = parser.current_token().clone();
    let expression = parse_expr(parser, Precedence::Lowest);

    // Semicolon is optional, and consumed even when the expression failed
    if parser.peek_token_kind() == TokenKind::Semicolon {
        parser.advance();
    }

    let expression = expression?;
    Some(Statement::Expression(ExpressionStmt { token, expression }))
}

fn skip_to_terminator(parser: &mut Parser) {
    while !matches!(
        parser.current_token_kind(),
        TokenKind::Semicolon | TokenKind::EOF
    ) {
        parser.advance();
    }
}
