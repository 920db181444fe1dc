use super::types::TypeRef;

/// A single parsed construct.
///
/// The grammar is closed: every node the parser can produce is one of these
/// variants, and consumers match them exhaustively. Nodes are immutable
/// after construction and owned by their parent list; no node is shared
/// between trees.
#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    VariableDecl(VariableDecl),
    Struct(Struct),
    Scope(Scope),
    TypeDecl(TypeDecl),
}

/// A variable declaration, optionally pinned to a fixed placement offset.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDecl {
    pub ty: TypeRef,
    pub name: String,
    /// Fixed position for this variable, independent of sequential layout.
    pub placement_offset: Option<u64>,
}

/// A struct-like record.
///
/// Members come from the restricted in-struct grammar: plain declarations
/// only, no placement offsets, no nested structs.
#[derive(Debug, Clone, PartialEq)]
pub struct Struct {
    pub name: String,
    pub members: Vec<VariableDecl>,
}

/// A nested, unnamed block of statements.
#[derive(Debug, Clone, PartialEq)]
pub struct Scope {
    pub body: Vec<AstNode>,
}

/// A `using` declaration introducing `alias_name` as a synonym for a type.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDecl {
    pub aliased_ty: TypeRef,
    pub alias_name: String,
}
