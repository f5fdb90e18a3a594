//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer literals
//! - Operators and delimiters
//! - Illegal characters
//! - End-of-input behaviour

use super::{
    lexer::{tokenize, Lexer},
    tokens::{lookup_ident, TokenKind},
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source, Some("test.monkey".to_string()))
        .iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_delimiters() {
    assert_eq!(
        kinds("=+(){},;"),
        vec![
            TokenKind::Assign,
            TokenKind::Plus,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_keywords() {
    assert_eq!(
        kinds("let fn true false if else return"),
        vec![
            TokenKind::Let,
            TokenKind::Function,
            TokenKind::True,
            TokenKind::False,
            TokenKind::If,
            TokenKind::Else,
            TokenKind::Return,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_lookup_ident() {
    assert_eq!(lookup_ident("let"), TokenKind::Let);
    assert_eq!(lookup_ident("fn"), TokenKind::Function);
    assert_eq!(lookup_ident("letter"), TokenKind::Identifier);
    assert_eq!(lookup_ident("Let"), TokenKind::Identifier);
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar_baz _underscore CamelCase", None);

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].literal, "foo");
    assert_eq!(tokens[1].literal, "bar_baz");
    assert_eq!(tokens[2].literal, "_underscore");
    assert_eq!(tokens[3].literal, "CamelCase");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_identifier_stops_at_digit() {
    let tokens = tokenize("x1", None);

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].literal, "x");
    assert_eq!(tokens[1].kind, TokenKind::Int);
    assert_eq!(tokens[1].literal, "1");
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_integers() {
    let tokens = tokenize("5 10 007 123456789012345678901234567890", None);

    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[0].literal, "5");
    assert_eq!(tokens[1].literal, "10");
    assert_eq!(tokens[2].literal, "007");
    // Range checking happens in the parser
    assert_eq!(tokens[3].kind, TokenKind::Int);
    assert_eq!(tokens[3].literal, "123456789012345678901234567890");
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds("= + - ! * / < > == !="),
        vec![
            TokenKind::Assign,
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Bang,
            TokenKind::Asterisk,
            TokenKind::Slash,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_two_character_operators_without_spaces() {
    assert_eq!(
        kinds("a==b!=!c=d"),
        vec![
            TokenKind::Identifier,
            TokenKind::Equals,
            TokenKind::Identifier,
            TokenKind::NotEquals,
            TokenKind::Bang,
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_program() {
    let source = "let five = 5;
let add = fn(x, y) {
  x + y;
};
if (5 < 10) {
  return true;
} else {
  return false;
}
10 != 9;
";
    let tokens = tokenize(source, None);
    let expected = [
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "five"),
        (TokenKind::Assign, "="),
        (TokenKind::Int, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "add"),
        (TokenKind::Assign, "="),
        (TokenKind::Function, "fn"),
        (TokenKind::OpenParen, "("),
        (TokenKind::Identifier, "x"),
        (TokenKind::Comma, ","),
        (TokenKind::Identifier, "y"),
        (TokenKind::CloseParen, ")"),
        (TokenKind::OpenCurly, "{"),
        (TokenKind::Identifier, "x"),
        (TokenKind::Plus, "+"),
        (TokenKind::Identifier, "y"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::CloseCurly, "}"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::If, "if"),
        (TokenKind::OpenParen, "("),
        (TokenKind::Int, "5"),
        (TokenKind::Less, "<"),
        (TokenKind::Int, "10"),
        (TokenKind::CloseParen, ")"),
        (TokenKind::OpenCurly, "{"),
        (TokenKind::Return, "return"),
        (TokenKind::True, "true"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::CloseCurly, "}"),
        (TokenKind::Else, "else"),
        (TokenKind::OpenCurly, "{"),
        (TokenKind::Return, "return"),
        (TokenKind::False, "false"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::CloseCurly, "}"),
        (TokenKind::Int, "10"),
        (TokenKind::NotEquals, "!="),
        (TokenKind::Int, "9"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::EOF, ""),
    ];

    assert_eq!(tokens.len(), expected.len());
    for (token, (kind, literal)) in tokens.iter().zip(expected.iter()) {
        assert_eq!(token.kind, *kind);
        assert_eq!(token.literal, *literal);
    }
}

#[test]
fn test_tokenize_illegal_characters() {
    let tokens = tokenize("a @ é", None);

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].kind, TokenKind::Illegal);
    assert_eq!(tokens[1].literal, "@");
    assert_eq!(tokens[2].kind, TokenKind::Illegal);
    assert_eq!(tokens[2].literal, "é");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_token_spans() {
    let tokens = tokenize("let  xy", Some("spans.monkey".to_string()));

    assert_eq!(tokens[0].span.start.0, 0);
    assert_eq!(tokens[0].span.end.0, 3);
    assert_eq!(tokens[1].span.start.0, 5);
    assert_eq!(tokens[1].span.end.0, 7);
    assert_eq!(*tokens[1].span.start.1, "spans.monkey");
    assert_eq!(tokens[2].span.start.0, 7);
}

#[test]
fn test_next_token_spans_and_eof_offset() {
    let mut lexer = Lexer::new("x == 10", Some("cursor.monkey".to_string()));

    let expected = [(0, 1), (2, 4), (5, 7), (7, 7)];
    for (start, end) in expected {
        let token = lexer.next_token();
        assert_eq!(token.span.start.0, start);
        assert_eq!(token.span.end.0, end);
        assert_eq!(*token.span.end.1, "cursor.monkey");
    }
}

#[test]
fn test_kind_names() {
    let cases = [
        (TokenKind::Assign, "ASSIGN"),
        (TokenKind::Plus, "PLUS"),
        (TokenKind::Minus, "MINUS"),
        (TokenKind::Bang, "BANG"),
        (TokenKind::Asterisk, "ASTERISK"),
        (TokenKind::Slash, "SLASH"),
        (TokenKind::Less, "LT"),
        (TokenKind::Greater, "GT"),
        (TokenKind::Equals, "EQ"),
        (TokenKind::NotEquals, "NOT_EQ"),
        (TokenKind::Comma, "COMMA"),
        (TokenKind::Semicolon, "SEMICOLON"),
        (TokenKind::OpenParen, "LPAREN"),
        (TokenKind::CloseParen, "RPAREN"),
        (TokenKind::OpenCurly, "LBRACE"),
        (TokenKind::CloseCurly, "RBRACE"),
        (TokenKind::Identifier, "IDENT"),
        (TokenKind::Function, "FUNCTION"),
    ];

    for (kind, name) in cases {
        assert_eq!(kind.to_string(), name);
    }
}

#[test]
fn test_eof_repeats_after_end_of_input() {
    let mut lexer = Lexer::new("x", None);

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    for _ in 0..3 {
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::EOF);
        assert_eq!(token.literal, "");
    }
}

#[test]
fn test_iterator_yields_single_eof() {
    let tokens: Vec<_> = Lexer::new("a;", None).collect();

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens.iter().filter(|t| t.kind == TokenKind::EOF).count(), 1);
    assert_eq!(tokens.last().unwrap().kind, TokenKind::EOF);
}

#[test]
fn test_empty_and_whitespace_sources() {
    assert_eq!(kinds(""), vec![TokenKind::EOF]);
    assert_eq!(kinds(" \t\r\n  "), vec![TokenKind::EOF]);
}

#[test]
fn test_independent_lexers_do_not_interfere() {
    let mut first = Lexer::new("a + b", None);
    let mut second = Lexer::new("1 * 2", None);

    assert_eq!(first.next_token().literal, "a");
    assert_eq!(second.next_token().literal, "1");
    assert_eq!(first.next_token().kind, TokenKind::Plus);
    assert_eq!(second.next_token().kind, TokenKind::Asterisk);
    assert_eq!(first.next_token().literal, "b");
    assert_eq!(second.next_token().literal, "2");
}

#[test]
fn test_default_file_name() {
    let tokens = tokenize("x", None);
    assert_eq!(*tokens[0].span.start.1, "shell");
}
