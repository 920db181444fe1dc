//! Integration tests for end-to-end parsing.
//!
//! These tests drive the public API over complete token streams the way an
//! external lexer would produce them: full schemas with aliases, structs,
//! placed variables and scopes, plus failure reporting.

use layoutlang::ast::ast::{AstNode, Scope, Struct, TypeDecl, VariableDecl};
use layoutlang::ast::types::TypeRef;
use layoutlang::parser::parser::parse;
use layoutlang::token::tokens::{BuiltinType, Keyword, Operator};
use layoutlang::{display_error, Position, MK_TOKEN};

#[test]
fn test_parse_complete_schema() {
    // using Byte = u8;
    // struct Header { u32 magic; Byte version; };
    // Header hdr = 64;
    // { u16 crc = 128; }
    let tokens = vec![
        MK_TOKEN!(Keyword, Keyword::Using),
        MK_TOKEN!(Identifier, "Byte"),
        MK_TOKEN!(Operator, Operator::Assignment),
        MK_TOKEN!(Type, BuiltinType::U8),
        MK_TOKEN!(EndOfExpression),
        MK_TOKEN!(Keyword, Keyword::Struct),
        MK_TOKEN!(Identifier, "Header"),
        MK_TOKEN!(ScopeOpen),
        MK_TOKEN!(Type, BuiltinType::U32),
        MK_TOKEN!(Identifier, "magic"),
        MK_TOKEN!(EndOfExpression),
        MK_TOKEN!(Identifier, "Byte"),
        MK_TOKEN!(Identifier, "version"),
        MK_TOKEN!(EndOfExpression),
        MK_TOKEN!(ScopeClose),
        MK_TOKEN!(EndOfExpression),
        MK_TOKEN!(Identifier, "Header"),
        MK_TOKEN!(Identifier, "hdr"),
        MK_TOKEN!(Operator, Operator::Assignment),
        MK_TOKEN!(Integer, 64u64),
        MK_TOKEN!(EndOfExpression),
        MK_TOKEN!(ScopeOpen),
        MK_TOKEN!(Type, BuiltinType::U16),
        MK_TOKEN!(Identifier, "crc"),
        MK_TOKEN!(Operator, Operator::Assignment),
        MK_TOKEN!(Integer, 128u64),
        MK_TOKEN!(EndOfExpression),
        MK_TOKEN!(ScopeClose),
        MK_TOKEN!(EndOfProgram),
    ];

    let program = parse(tokens).unwrap();

    assert_eq!(program.len(), 4);
    assert_eq!(
        program[0],
        AstNode::TypeDecl(TypeDecl {
            aliased_ty: TypeRef::Builtin(BuiltinType::U8),
            alias_name: String::from("Byte"),
        })
    );
    assert_eq!(
        program[1],
        AstNode::Struct(Struct {
            name: String::from("Header"),
            members: vec![
                VariableDecl {
                    ty: TypeRef::Builtin(BuiltinType::U32),
                    name: String::from("magic"),
                    placement_offset: None,
                },
                VariableDecl {
                    ty: TypeRef::Custom(String::from("Byte")),
                    name: String::from("version"),
                    placement_offset: None,
                },
            ],
        })
    );
    assert_eq!(
        program[2],
        AstNode::VariableDecl(VariableDecl {
            ty: TypeRef::Custom(String::from("Header")),
            name: String::from("hdr"),
            placement_offset: Some(64),
        })
    );
    assert_eq!(
        program[3],
        AstNode::Scope(Scope {
            body: vec![AstNode::VariableDecl(VariableDecl {
                ty: TypeRef::Builtin(BuiltinType::U16),
                name: String::from("crc"),
                placement_offset: Some(128),
            })],
        })
    );
}

#[test]
fn test_parse_failure_reports_position() {
    // struct Header { u32 magic; }   <- missing the declaration terminator
    let tokens = vec![
        MK_TOKEN!(Keyword, Keyword::Struct),
        MK_TOKEN!(Identifier, "Header"),
        MK_TOKEN!(ScopeOpen),
        MK_TOKEN!(Type, BuiltinType::U32),
        MK_TOKEN!(Identifier, "magic"),
        MK_TOKEN!(EndOfExpression),
        MK_TOKEN!(ScopeClose),
        MK_TOKEN!(EndOfProgram),
    ];

    let error = parse(tokens.clone()).unwrap_err();

    assert_eq!(error.get_error_name(), "MalformedStruct");
    assert_eq!(error.get_position(), Position(7));

    // Rendering the failure must not panic.
    display_error(&error, &tokens);
}

#[test]
fn test_parse_rejects_stream_without_sentinel() {
    let tokens = vec![
        MK_TOKEN!(Keyword, Keyword::Using),
        MK_TOKEN!(Identifier, "Byte"),
        MK_TOKEN!(Operator, Operator::Assignment),
        MK_TOKEN!(Type, BuiltinType::U8),
        MK_TOKEN!(EndOfExpression),
    ];

    let error = parse(tokens).unwrap_err();

    assert_eq!(error.get_error_name(), "MissingEndOfProgram");
}
