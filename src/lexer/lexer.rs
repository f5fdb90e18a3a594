use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::{Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{lookup_ident, Token, TokenKind};

/// Handles a pattern match of `len` bytes at the lexer's position.
///
/// Returns `None` when the matched text produces no token (whitespace).
pub type PatternHandler = fn(&mut Lexer, usize) -> Option<Token>;

pub struct RegexPattern {
    regex: Regex,
    handler: PatternHandler,
}

fn pattern(regex: &str, handler: PatternHandler) -> RegexPattern {
    RegexPattern {
        regex: Regex::new(regex).expect("lexer patterns are valid regexes"),
        handler,
    }
}

lazy_static! {
    // Tried in order; two-character operators come before their one-character prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        pattern("^[ \t\n\r]+", skip_handler),
        pattern("^[a-zA-Z_]+", symbol_handler),
        pattern("^[0-9]+", number_handler),
        pattern("^==", MK_DEFAULT_HANDLER!(TokenKind::Equals)),
        pattern("^!=", MK_DEFAULT_HANDLER!(TokenKind::NotEquals)),
        pattern("^=", MK_DEFAULT_HANDLER!(TokenKind::Assign)),
        pattern("^!", MK_DEFAULT_HANDLER!(TokenKind::Bang)),
        pattern("^\\+", MK_DEFAULT_HANDLER!(TokenKind::Plus)),
        pattern("^-", MK_DEFAULT_HANDLER!(TokenKind::Minus)),
        pattern("^\\*", MK_DEFAULT_HANDLER!(TokenKind::Asterisk)),
        pattern("^/", MK_DEFAULT_HANDLER!(TokenKind::Slash)),
        pattern("^<", MK_DEFAULT_HANDLER!(TokenKind::Less)),
        pattern("^>", MK_DEFAULT_HANDLER!(TokenKind::Greater)),
        pattern("^,", MK_DEFAULT_HANDLER!(TokenKind::Comma)),
        pattern("^;", MK_DEFAULT_HANDLER!(TokenKind::Semicolon)),
        pattern("^\\(", MK_DEFAULT_HANDLER!(TokenKind::OpenParen)),
        pattern("^\\)", MK_DEFAULT_HANDLER!(TokenKind::CloseParen)),
        pattern("^\\{", MK_DEFAULT_HANDLER!(TokenKind::OpenCurly)),
        pattern("^\\}", MK_DEFAULT_HANDLER!(TokenKind::CloseCurly)),
    ];
}

/// Pull-based tokenizer over an owned source string.
///
/// Each call to [`Lexer::next_token`] scans one token starting at the current
/// byte offset. Once the input is exhausted every further call returns `EOF`.
#[derive(Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
    file: Rc<String>,
    finished: bool,
}

impl Lexer {
    pub fn new(source: impl Into<String>, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source: source.into(),
            pos: 0,
            file: file_name,
            finished: false,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn position_at(&self, offset: usize) -> Position {
        Position(offset as u32, Rc::clone(&self.file))
    }

    /// Emits a token of `kind` covering the next `len` bytes and moves past them.
    pub fn emit(&mut self, kind: TokenKind, len: usize) -> Token {
        let literal = String::from(&self.source[self.pos..self.pos + len]);
        let span = Span {
            start: self.position_at(self.pos),
            end: self.position_at(self.pos + len),
        };

        self.advance_n(len);
        MK_TOKEN!(kind, literal, span)
    }

    pub fn next_token(&mut self) -> Token {
        loop {
            if self.at_eof() {
                return MK_TOKEN!(
                    TokenKind::EOF,
                    String::new(),
                    Span {
                        start: self.position_at(self.source.len()),
                        end: self.position_at(self.source.len()),
                    }
                );
            }

            let remainder = self.remainder();
            let matched = PATTERNS.iter().find_map(|pattern| {
                pattern
                    .regex
                    .find(remainder)
                    .map(|found| (pattern.handler, found.end()))
            });

            match matched {
                Some((handler, len)) => {
                    if let Some(token) = handler(self, len) {
                        return token;
                    }
                }
                None => return illegal_handler(self),
            }
        }
    }
}

impl Iterator for Lexer {
    type Item = Token;

    /// Yields every token up to and including a single `EOF`.
    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        if token.kind == TokenKind::EOF {
            self.finished = true;
        }
        Some(token)
    }
}

fn skip_handler(lexer: &mut Lexer, len: usize) -> Option<Token> {
    lexer.advance_n(len);
    None
}

fn symbol_handler(lexer: &mut Lexer, len: usize) -> Option<Token> {
    let kind = lookup_ident(&lexer.remainder()[..len]);
    Some(lexer.emit(kind, len))
}

fn number_handler(lexer: &mut Lexer, len: usize) -> Option<Token> {
    Some(lexer.emit(TokenKind::Int, len))
}

fn illegal_handler(lexer: &mut Lexer) -> Token {
    let len = lexer.remainder().chars().next().map_or(1, char::len_utf8);
    let token = lexer.emit(TokenKind::Illegal, len);
    trace!(literal = %token.literal, offset = token.span.start.0, "illegal character");
    token
}

/// Scans the whole source eagerly, returning every token up to and including `EOF`.
pub fn tokenize(source: impl Into<String>, file: Option<String>) -> Vec<Token> {
    Lexer::new(source, file).collect()
}
