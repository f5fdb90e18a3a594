//! Line-oriented read-eval-print loop.
//!
//! Every input line is scanned by a fresh lexer. In [`ReplMode::Tokens`] each
//! token is echoed on its own line; in [`ReplMode::Parse`] the line is parsed
//! and either the rendered program or its syntax errors are printed.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::lexer::{lexer::Lexer, tokens::TokenKind};
use crate::parser::parser::Parser;

pub const PROMPT: &str = ">> ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplMode {
    #[default]
    Tokens,
    Parse,
}

/// Runs the loop until `input` is exhausted.
pub fn start<R: BufRead, W: Write>(input: R, mut output: W, mode: ReplMode) -> io::Result<()> {
    let mut lines = input.lines();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;
        debug!(?mode, len = line.len(), "repl line");

        let lexer = Lexer::new(line, Some(String::from("repl")));
        match mode {
            ReplMode::Tokens => print_tokens(lexer, &mut output)?,
            ReplMode::Parse => print_program(lexer, &mut output)?,
        }
    }
}

fn print_tokens<W: Write>(lexer: Lexer, output: &mut W) -> io::Result<()> {
    for token in lexer.take_while(|token| token.kind != TokenKind::EOF) {
        writeln!(output, "{}", token)?;
    }
    Ok(())
}

fn print_program<W: Write>(lexer: Lexer, output: &mut W) -> io::Result<()> {
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();

    if !parser.errors().is_empty() {
        writeln!(output, "parser errors:")?;
        for error in parser.errors() {
            writeln!(output, "\t{}", error)?;
        }
        return Ok(());
    }

    writeln!(output, "{}", program)
}
