/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Core AST node definitions
/// - types: Type references used by declarations
pub mod ast;
pub mod types;
