//! Parser state and the program entry point.
//!
//! The `Parser` struct owns the token stream and the cursor threaded
//! through every parsing function. All lookahead goes through
//! `try_consume`, which either consumes a full fixed sequence of token
//! kinds or leaves the cursor untouched.

use crate::{
    ast::ast::AstNode,
    errors::errors::{Error, ErrorImpl},
    token::tokens::{Token, TokenKind},
    Position,
};

use super::stmt::parse_till_token;

/// The parser over an immutable token stream.
///
/// Holds the token list and the current cursor position. The cursor is the
/// only mutable state in the system; it advances on successful matches and
/// is restored on failed ones.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser { tokens, pos: 0 }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Returns the kind of the current token.
    ///
    /// Positions at or past the end of the stream read as `EndOfProgram`,
    /// so a stream missing its sentinel can never be iterated past.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token()
            .map_or(TokenKind::EndOfProgram, Token::kind)
    }

    /// Advances past the current token and returns it.
    pub fn advance(&mut self) -> &Token {
        self.pos += 1;
        &self.tokens[self.pos - 1]
    }

    /// Returns the token `n` positions behind the cursor.
    ///
    /// Node builders use this to read the payloads of tokens a preceding
    /// `try_consume` already matched.
    pub fn behind(&self, n: usize) -> &Token {
        &self.tokens[self.pos - n]
    }

    /// Attempts to match a fixed sequence of token kinds at the cursor.
    ///
    /// Kinds are checked one by one against consecutive tokens. On the
    /// first mismatch the cursor is restored to its pre-call position and
    /// `false` is returned; no partial consumption escapes. On a full match
    /// the cursor ends one past the last matched token. Payloads are never
    /// inspected.
    pub fn try_consume(&mut self, kinds: &[TokenKind]) -> bool {
        let original_position = self.pos;

        for kind in kinds {
            if self.current_token_kind() != *kind {
                self.pos = original_position;
                return false;
            }
            self.pos += 1;
        }

        true
    }

    /// Returns the current cursor position.
    pub fn position(&self) -> Position {
        Position(self.pos)
    }
}

/// Parses a stream of tokens into the list of top-level AST nodes.
///
/// The stream must be terminated by an `EndOfProgram` sentinel; its absence
/// is a precondition violation reported as `MissingEndOfProgram`. A stream
/// that parses to nothing at all is reported as `EmptyProgram`. Any
/// statement failure before the sentinel propagates with the position of
/// the offending token.
pub fn parse(tokens: Vec<Token>) -> Result<Vec<AstNode>, Error> {
    if tokens.last().map(Token::kind) != Some(TokenKind::EndOfProgram) {
        return Err(Error::new(
            ErrorImpl::MissingEndOfProgram,
            Position(tokens.len()),
        ));
    }

    let mut parser = Parser::new(tokens);
    let program = parse_till_token(&mut parser, TokenKind::EndOfProgram)?;

    if program.is_empty() {
        return Err(Error::new(ErrorImpl::EmptyProgram, parser.position()));
    }

    Ok(program)
}
