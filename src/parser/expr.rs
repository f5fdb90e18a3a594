use crate::{
    ast::{
        ast::Expression,
        expressions::{Identifier, InfixExpr, IntegerLiteral, PrefixExpr},
    },
    errors::errors::ErrorImpl,
    lexer::tokens::TokenKind,
};

use super::{lookups::Precedence, parser::Parser};

pub fn parse_expr(parser: &mut Parser, precedence: Precedence) -> Option<Expression> {
    if !parser.enter_expr() {
        return None;
    }

    let expr = parse_pratt(parser, precedence);
    parser.exit_expr();
    expr
}

fn parse_pratt(parser: &mut Parser, precedence: Precedence) -> Option<Expression> {
    // First parse prefix
    let token_kind = parser.current_token_kind();
    let Some(prefix_fn) = parser.get_prefix_lookup().get(&token_kind).copied() else {
        let token = parser.current_token().clone();
        parser.push_error(
            ErrorImpl::NoPrefixParseFn {
                kind: token.kind,
                literal: token.literal,
            },
            token.span.start,
        );
        return None;
    };

    let mut left = prefix_fn(parser)?;

    // Strictly greater keeps equal-precedence operators left-associative
    while parser.peek_token_kind() != TokenKind::Semicolon && precedence < parser.peek_precedence()
    {
        let Some(infix_fn) = parser
            .get_infix_lookup()
            .get(&parser.peek_token_kind())
            .copied()
        else {
            return Some(left);
        };

        parser.advance();
        left = infix_fn(parser, left)?;
    }

    Some(left)
}

pub fn parse_identifier(parser: &mut Parser) -> Option<Expression> {
    let token = parser.current_token().clone();

    Some(Expression::Identifier(Identifier {
        value: token.literal.clone(),
        token,
    }))
}

pub fn parse_integer_literal(parser: &mut Parser) -> Option<Expression> {
    let token = parser.current_token().clone();

    match parse_integer(&token.literal) {
        Some(value) => Some(Expression::Integer(IntegerLiteral { token, value })),
        None => {
            parser.push_error(
                ErrorImpl::IntegerParse {
                    literal: token.literal,
                },
                token.span.start,
            );
            None
        }
    }
}

/// Parses an integer literal, detecting the base from its prefix.
///
/// `0x` is hexadecimal, `0o` or a bare leading `0` is octal, `0b` is binary and
/// anything else is decimal. Returns `None` on invalid digits or overflow.
pub fn parse_integer(text: &str) -> Option<i64> {
    let (digits, radix) = if let Some(rest) = strip_radix_prefix(text, 'x') {
        (rest, 16)
    } else if let Some(rest) = strip_radix_prefix(text, 'o') {
        (rest, 8)
    } else if let Some(rest) = strip_radix_prefix(text, 'b') {
        (rest, 2)
    } else if text.len() > 1 && text.starts_with('0') {
        (&text[1..], 8)
    } else {
        (text, 10)
    };

    // from_str_radix would also accept a leading sign
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }

    i64::from_str_radix(digits, radix).ok()
}

fn strip_radix_prefix(text: &str, marker: char) -> Option<&str> {
    let rest = text.strip_prefix('0')?;
    rest.strip_prefix(marker)
        .or_else(|| rest.strip_prefix(marker.to_ascii_uppercase()))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Option<Expression> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    let right = parse_expr(parser, Precedence::Prefix)?;

    Some(Expression::Prefix(PrefixExpr {
        operator: operator_token.literal.clone(),
        token: operator_token,
        right: Box::new(right),
    }))
}

pub fn parse_infix_expr(parser: &mut Parser, left: Expression) -> Option<Expression> {
    let operator_token = parser.current_token().clone();
    let precedence = parser.current_precedence();
    parser.advance();

    let right = parse_expr(parser, precedence)?;

    Some(Expression::Infix(InfixExpr {
        operator: operator_token.literal.clone(),
        token: operator_token,
        left: Box::new(left),
        right: Box::new(right),
    }))
}
