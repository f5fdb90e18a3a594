#![allow(clippy::module_inception)]

use std::{fmt::Write, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod repl;

extern crate regex;

pub use parser::parser::parse;

/// Byte offset into a named source.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line containing byte `position`.
///
/// Returns the 1-based line number, the line text (including its newline, if any)
/// and the column of `position` within that line. An offset equal to the source
/// length resolves to the end of the last line, which is where EOF tokens sit.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((line_number, line.to_string(), pos - start));
        }

        start = end;
        line_number += 1;
    }

    // EOF sits one past the last byte
    let last = source.split_inclusive('\n').last().unwrap_or("");
    if last.ends_with('\n') || source.is_empty() {
        Some((line_number, String::new(), 0))
    } else {
        Some((line_number - 1, last.to_string(), last.len()))
    }
}

/// Renders `error` against `source`, naming the file recorded in its position.
pub fn render_error(error: &Error, source: &str) -> String {
    /*
        Error: message
        -> main.monkey
           |
        20 | let a = #;
           | --------^
    */

    let mut out = String::new();

    match error.get_tip() {
        ErrorTip::None => {
            let _ = writeln!(out, "Error: {}", error.get_error_name());
        }
        tip => {
            let _ = writeln!(out, "Error: {} ({})", error.get_error_name(), tip);
        }
    }
    let position = error.get_position();
    let _ = writeln!(out, "-> {}", position.1);

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        let _ = writeln!(out, "   {}", error);
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let _ = writeln!(out, "{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    let _ = writeln!(out, "{} | {}", line_string, line_text_removed.trim_end());

    // Caret column counts characters, not bytes
    let column = line_text.get(..line_pos).map_or(line_pos, |text| text.chars().count());
    let arrows = column.saturating_sub(removed_whitespace) + 1;

    let _ = writeln!(out, "{:>padding$} {:->arrows$}", "|", "^");
    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.len() - string.trim_start_matches([' ', '\t']).len();

    (String::from(&string[start..]), start)
}
