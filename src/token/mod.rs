//! Token definitions for the schema language.
//!
//! This module defines the typed token vocabulary consumed by the parser.
//! Tokens are produced by an external lexer and are immutable; the parser
//! only reads them. It includes:
//!
//! - Token kinds and their kind-specific payloads
//! - Keyword, operator and builtin type enumerations
//! - Name lookup tables mapping source spellings to tags

pub mod tokens;
