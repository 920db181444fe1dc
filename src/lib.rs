#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};
use crate::token::tokens::Token;

pub mod ast;
pub mod errors;
pub mod macros;
pub mod parser;
pub mod token;

/// Index of a token within the input stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position(pub usize);

/// Returns the window of tokens surrounding `position`, rendered for
/// display, together with the window's start index and the column of the
/// caret marking the offending token.
///
/// Positions at or past the end of the stream put the caret one past the
/// last rendered token.
pub fn get_window_at_position(tokens: &[Token], position: usize) -> (usize, String, usize) {
    let start = position.saturating_sub(2);
    let end = usize::min(position + 3, tokens.len());

    let mut window = String::new();
    let mut caret = 0;

    for (offset, token) in tokens[start..end].iter().enumerate() {
        if !window.is_empty() {
            window.push(' ');
        }
        if start + offset == position {
            caret = window.len();
        }
        window.push_str(&token.to_string());
    }

    if position >= end {
        if !window.is_empty() {
            window.push(' ');
        }
        caret = window.len();
    }

    (start, window, caret)
}

pub fn display_error(error: &Error, tokens: &[Token]) {
    /*
        Error: name (tip)
        -> token 7
           |
         7 | Identifier(version) ScopeClose EndOfProgram
           | --------------------^
    */

    let position = error.get_position();
    let (_, window, caret) = get_window_at_position(tokens, position.0);

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }

    let position_string = position.0.to_string();
    let padding = position_string.len() + 2;

    println!("-> token {}", position_string);
    println!("{:>padding$}", "|");
    println!("{} | {}", position_string, window);

    let arrows = caret + 1;

    println!("{:>padding$} {:->arrows$}", "|", "^");
}
