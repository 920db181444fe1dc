//! Utility macros for the crate.
//!
//! This module defines helper macros used when assembling token streams:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//!
//! These macros reduce boilerplate for external lexers and in tests.

/// Creates a Token instance.
///
/// Payload-carrying kinds take the payload as a second argument; the
/// remaining kinds take none.
///
/// # Example
///
/// ```ignore
/// let open = MK_TOKEN!(ScopeOpen);
/// let name = MK_TOKEN!(Identifier, "magic");
/// let ty = MK_TOKEN!(Type, BuiltinType::U32);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:ident) => {
        $crate::token::tokens::Token::$kind
    };
    ($kind:ident, $value:expr) => {
        $crate::token::tokens::Token::$kind($value.into())
    };
}
