use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref KEYWORD_LOOKUP: HashMap<&'static str, Keyword> = {
        let mut map = HashMap::new();
        map.insert("struct", Keyword::Struct);
        map.insert("using", Keyword::Using);
        map
    };
    pub static ref TYPE_LOOKUP: HashMap<&'static str, BuiltinType> = {
        let mut map = HashMap::new();
        map.insert("u8", BuiltinType::U8);
        map.insert("u16", BuiltinType::U16);
        map.insert("u32", BuiltinType::U32);
        map.insert("u64", BuiltinType::U64);
        map.insert("u128", BuiltinType::U128);
        map.insert("s8", BuiltinType::S8);
        map.insert("s16", BuiltinType::S16);
        map.insert("s32", BuiltinType::S32);
        map.insert("s64", BuiltinType::S64);
        map.insert("s128", BuiltinType::S128);
        map.insert("float", BuiltinType::Float);
        map.insert("double", BuiltinType::Double);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Operator,
    Type,
    Integer,

    ScopeOpen,
    ScopeClose,

    EndOfExpression,
    EndOfProgram,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Keyword {
    Struct,
    Using,
}

impl Keyword {
    /// Maps a source spelling to its keyword, for external lexers.
    pub fn from_name(name: &str) -> Option<Keyword> {
        KEYWORD_LOOKUP.get(name).copied()
    }
}

impl Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Keyword::Struct => write!(f, "struct"),
            Keyword::Using => write!(f, "using"),
        }
    }
}

/// The only operator this grammar consumes.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    Assignment,
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operator::Assignment => write!(f, "="),
        }
    }
}

/// The fixed enumeration of primitive types.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BuiltinType {
    U8,
    U16,
    U32,
    U64,
    U128,
    S8,
    S16,
    S32,
    S64,
    S128,
    Float,
    Double,
}

impl BuiltinType {
    /// Maps a source spelling to its type tag, for external lexers.
    pub fn from_name(name: &str) -> Option<BuiltinType> {
        TYPE_LOOKUP.get(name).copied()
    }
}

impl Display for BuiltinType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BuiltinType::U8 => "u8",
            BuiltinType::U16 => "u16",
            BuiltinType::U32 => "u32",
            BuiltinType::U64 => "u64",
            BuiltinType::U128 => "u128",
            BuiltinType::S8 => "s8",
            BuiltinType::S16 => "s16",
            BuiltinType::S32 => "s32",
            BuiltinType::S64 => "s64",
            BuiltinType::S128 => "s128",
            BuiltinType::Float => "float",
            BuiltinType::Double => "double",
        };
        write!(f, "{}", name)
    }
}

/// A single lexical unit: a kind together with its kind-specific payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Keyword(Keyword),
    Identifier(String),
    Operator(Operator),
    Type(BuiltinType),
    /// An unsigned literal, used only as a placement offset.
    Integer(u64),
    ScopeOpen,
    ScopeClose,
    EndOfExpression,
    EndOfProgram,
}

impl Token {
    /// Returns the kind of the token, ignoring any payload.
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Keyword(_) => TokenKind::Keyword,
            Token::Identifier(_) => TokenKind::Identifier,
            Token::Operator(_) => TokenKind::Operator,
            Token::Type(_) => TokenKind::Type,
            Token::Integer(_) => TokenKind::Integer,
            Token::ScopeOpen => TokenKind::ScopeOpen,
            Token::ScopeClose => TokenKind::ScopeClose,
            Token::EndOfExpression => TokenKind::EndOfExpression,
            Token::EndOfProgram => TokenKind::EndOfProgram,
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Keyword(keyword) => write!(f, "{}({})", self.kind(), keyword),
            Token::Identifier(name) => write!(f, "{}({})", self.kind(), name),
            Token::Operator(op) => write!(f, "{}({})", self.kind(), op),
            Token::Type(ty) => write!(f, "{}({})", self.kind(), ty),
            Token::Integer(value) => write!(f, "{}({})", self.kind(), value),
            _ => write!(f, "{}", self.kind()),
        }
    }
}
