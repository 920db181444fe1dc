use std::fmt::Display;

use crate::token::tokens::BuiltinType;

/// A type as referenced by a declaration: either a builtin primitive tag or
/// a custom type named by identifier.
///
/// Custom type names are not resolved here; a later stage looks them up
/// against the declared structs and aliases.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeRef {
    Builtin(BuiltinType),
    Custom(String),
}

impl Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeRef::Builtin(ty) => write!(f, "{}", ty),
            TypeRef::Custom(name) => write!(f, "{}", name),
        }
    }
}
