//! Statement parsing and the per-construct node builders.
//!
//! Builders read the payloads of already-matched tokens at negative
//! offsets behind the cursor. The four variable-declaration builders
//! cannot fail: the preceding kind match guarantees every payload they
//! read.

use crate::{
    ast::{
        ast::{AstNode, Scope, Struct, TypeDecl, VariableDecl},
        types::TypeRef,
    },
    errors::errors::{Error, ErrorImpl},
    token::tokens::{BuiltinType, Keyword, Operator, Token, TokenKind},
};

use super::parser::Parser;

fn identifier_behind(parser: &Parser, n: usize) -> String {
    match parser.behind(n) {
        Token::Identifier(name) => name.clone(),
        token => unreachable!("matched an identifier, found {}", token),
    }
}

fn builtin_type_behind(parser: &Parser, n: usize) -> BuiltinType {
    match parser.behind(n) {
        Token::Type(ty) => *ty,
        token => unreachable!("matched a type, found {}", token),
    }
}

fn integer_behind(parser: &Parser, n: usize) -> u64 {
    match parser.behind(n) {
        Token::Integer(value) => *value,
        token => unreachable!("matched an integer, found {}", token),
    }
}

/// Builds a builtin-typed struct member.
///
/// Cursor is one past `[Type, Identifier, EndOfExpression]`.
pub fn parse_builtin_variable_decl(parser: &Parser) -> VariableDecl {
    VariableDecl {
        ty: TypeRef::Builtin(builtin_type_behind(parser, 3)),
        name: identifier_behind(parser, 2),
        placement_offset: None,
    }
}

/// Builds a custom-typed struct member.
///
/// Cursor is one past `[Identifier, Identifier, EndOfExpression]`; the
/// first identifier names the type, the second the member.
pub fn parse_custom_type_variable_decl(parser: &Parser) -> VariableDecl {
    VariableDecl {
        ty: TypeRef::Custom(identifier_behind(parser, 3)),
        name: identifier_behind(parser, 2),
        placement_offset: None,
    }
}

/// Builds a builtin-typed variable pinned to a placement offset.
///
/// Cursor is one past `[Type, Identifier, Operator, Integer,
/// EndOfExpression]`.
pub fn parse_free_builtin_variable_decl(parser: &Parser) -> VariableDecl {
    VariableDecl {
        ty: TypeRef::Builtin(builtin_type_behind(parser, 5)),
        name: identifier_behind(parser, 4),
        placement_offset: Some(integer_behind(parser, 2)),
    }
}

/// Builds a custom-typed variable pinned to a placement offset.
///
/// Cursor is one past `[Identifier, Identifier, Operator, Integer,
/// EndOfExpression]`.
pub fn parse_free_custom_type_variable_decl(parser: &Parser) -> VariableDecl {
    VariableDecl {
        ty: TypeRef::Custom(identifier_behind(parser, 5)),
        name: identifier_behind(parser, 4),
        placement_offset: Some(integer_behind(parser, 2)),
    }
}

/// Parses a struct body. Cursor is one past
/// `Keyword(struct) Identifier ScopeOpen`.
///
/// Members are gathered until the closing scope token is consumed or
/// neither member pattern matches. The declaration itself must then be
/// terminated; otherwise the partially built members are discarded and the
/// struct fails as a whole.
pub fn parse_struct_decl(parser: &mut Parser) -> Result<Struct, Error> {
    let name = identifier_behind(parser, 2);
    let mut members = Vec::new();

    while !parser.try_consume(&[TokenKind::ScopeClose]) {
        if parser.try_consume(&[
            TokenKind::Type,
            TokenKind::Identifier,
            TokenKind::EndOfExpression,
        ]) {
            members.push(parse_builtin_variable_decl(parser));
        } else if parser.try_consume(&[
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::EndOfExpression,
        ]) {
            members.push(parse_custom_type_variable_decl(parser));
        } else {
            break;
        }
    }

    if !parser.try_consume(&[TokenKind::EndOfExpression]) {
        return Err(Error::new(
            ErrorImpl::MalformedStruct { name },
            parser.position(),
        ));
    }

    Ok(Struct { name, members })
}

/// Parses a nested scope. Cursor is one past `ScopeOpen`.
///
/// Inner statement failures propagate to the enclosing statement.
pub fn parse_scope(parser: &mut Parser) -> Result<Scope, Error> {
    Ok(Scope {
        body: parse_till_token(parser, TokenKind::ScopeClose)?,
    })
}

/// Parses a `using` alias declaration. Cursor is one past
/// `Keyword Identifier Operator (Type|Identifier) EndOfExpression`.
///
/// The keyword and operator are re-validated here: the dispatcher matches
/// kinds only, so any keyword can head a using-shaped statement.
pub fn parse_using_decl(parser: &Parser) -> Result<TypeDecl, Error> {
    if !matches!(parser.behind(5), Token::Keyword(Keyword::Using)) {
        return Err(Error::new(
            ErrorImpl::InvalidUsingDeclaration,
            parser.position(),
        ));
    }

    if !matches!(parser.behind(3), Token::Operator(Operator::Assignment)) {
        return Err(Error::new(
            ErrorImpl::InvalidUsingDeclaration,
            parser.position(),
        ));
    }

    let alias_name = identifier_behind(parser, 4);

    match parser.behind(2) {
        Token::Type(ty) => Ok(TypeDecl {
            aliased_ty: TypeRef::Builtin(*ty),
            alias_name,
        }),
        Token::Identifier(custom) => Ok(TypeDecl {
            aliased_ty: TypeRef::Custom(custom.clone()),
            alias_name,
        }),
        _ => Err(Error::new(
            ErrorImpl::InvalidUsingDeclaration,
            parser.position(),
        )),
    }
}

/// Parses one statement at the cursor, producing zero or more nodes.
///
/// The statement patterns are tried in priority order. A struct-shaped
/// opener headed by a keyword other than `struct` consumes its tokens and
/// produces nothing. When no pattern matches, the cursor is left exactly
/// where it was.
pub fn parse_stmt(parser: &mut Parser) -> Result<Vec<AstNode>, Error> {
    // Struct declaration
    if parser.try_consume(&[
        TokenKind::Keyword,
        TokenKind::Identifier,
        TokenKind::ScopeOpen,
    ]) {
        if matches!(parser.behind(3), Token::Keyword(Keyword::Struct)) {
            return Ok(vec![AstNode::Struct(parse_struct_decl(parser)?)]);
        }

        Ok(vec![])

    // Scope
    } else if parser.try_consume(&[TokenKind::ScopeOpen]) {
        Ok(vec![AstNode::Scope(parse_scope(parser)?)])

    // Using declaration, with a builtin or custom aliased type
    } else if parser.try_consume(&[
        TokenKind::Keyword,
        TokenKind::Identifier,
        TokenKind::Operator,
        TokenKind::Type,
        TokenKind::EndOfExpression,
    ]) || parser.try_consume(&[
        TokenKind::Keyword,
        TokenKind::Identifier,
        TokenKind::Operator,
        TokenKind::Identifier,
        TokenKind::EndOfExpression,
    ]) {
        Ok(vec![AstNode::TypeDecl(parse_using_decl(parser)?)])

    // Variable declaration with a builtin type
    } else if parser.try_consume(&[
        TokenKind::Type,
        TokenKind::Identifier,
        TokenKind::Operator,
        TokenKind::Integer,
        TokenKind::EndOfExpression,
    ]) {
        Ok(vec![AstNode::VariableDecl(parse_free_builtin_variable_decl(
            parser,
        ))])

    // Variable declaration with a custom type
    } else if parser.try_consume(&[
        TokenKind::Identifier,
        TokenKind::Identifier,
        TokenKind::Operator,
        TokenKind::Integer,
        TokenKind::EndOfExpression,
    ]) {
        Ok(vec![AstNode::VariableDecl(
            parse_free_custom_type_variable_decl(parser),
        )])
    } else {
        Err(Error::new(
            ErrorImpl::UnexpectedToken {
                kind: parser.current_token_kind(),
            },
            parser.position(),
        ))
    }
}

/// Parses statements until the terminator token kind, then consumes it.
///
/// Nodes accumulate in encounter order. A statement failure propagates
/// immediately with the position of the offending token; no partial
/// program escapes as a success.
pub fn parse_till_token(parser: &mut Parser, end: TokenKind) -> Result<Vec<AstNode>, Error> {
    let mut program = Vec::new();

    while parser.current_token_kind() != end {
        program.extend(parse_stmt(parser)?);
    }

    parser.advance();

    Ok(program)
}
