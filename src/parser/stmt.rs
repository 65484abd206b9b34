use crate::{
    ast::{
        statements::{
            BlockStmt, BreakStmt, ContinueStmt, ExpressionStmt, FnDeclStmt, ForStmt, IfStmt,
            ImportStmt, Param, ReturnStmt, Stmt, VarDeclStmt, WhileStmt,
        },
        types::VarType,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, parser::Parser};

/// Declarations are looked up first; anything else is a statement.
pub fn parse_decl(parser: &mut Parser) -> Result<Stmt, Error> {
    let kind = parser.current_token_kind();
    let handler = parser.get_decl_lookup().get(&kind).copied();
    if let Some(handler) = handler {
        return handler(parser);
    }

    parse_stmt(parser)
}

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let kind = parser.current_token_kind();
    let handler = parser.get_stmt_lookup().get(&kind).copied();
    if let Some(handler) = handler {
        return handler(parser);
    }

    parse_expression_stmt(parser, "Expected ';' after expression")
}

/// Nested statements (`if` bodies, inner blocks) go through here.
fn parse_nested_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.nested(parse_stmt)
}

fn parse_expression_stmt(parser: &mut Parser, message: &str) -> Result<Stmt, Error> {
    let expression = parse_expr(parser)?;
    parser.expect(TokenKind::Semicolon, message)?;

    Ok(Stmt::Expression(ExpressionStmt {
        position: expression.get_position().clone(),
        expression,
    }))
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let type_token = parser.advance().clone();
    let identifier = parser
        .expect(TokenKind::Identifier, "Expected variable name")?
        .lexeme;

    let assigned_value = if parser.match_kind(TokenKind::Assignment) {
        Some(parse_expr(parser)?)
    } else {
        None
    };

    parser.expect(
        TokenKind::Semicolon,
        "Expected ';' after variable declaration",
    )?;

    Ok(Stmt::VarDecl(VarDeclStmt {
        identifier,
        var_type: VarType::from_token_kind(type_token.kind),
        assigned_value,
        position: type_token.position,
    }))
}

/// The path is every raw lexeme up to the `;`, glued together.
pub fn parse_import_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let position = parser.advance().position.clone();

    let mut path = String::new();
    while parser.has_tokens() && !parser.check(TokenKind::Semicolon) {
        path.push_str(&parser.advance().lexeme);
    }

    parser.expect(TokenKind::Semicolon, "Expected ';' after import")?;

    Ok(Stmt::Import(ImportStmt { path, position }))
}

/// Handles both `if` and `elif`; an `elif` becomes the else branch.
pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let position = parser.advance().position.clone();

    parser.expect(TokenKind::OpenParen, "Expected '(' after 'if'")?;
    let condition = parse_expr(parser)?;
    parser.expect(TokenKind::CloseParen, "Expected ')' after condition")?;

    let then_body = Box::new(parse_nested_stmt(parser)?);

    let else_body = if parser.check(TokenKind::Elif) {
        Some(Box::new(parser.nested(parse_if_stmt)?))
    } else if parser.match_kind(TokenKind::Else) {
        Some(Box::new(parse_nested_stmt(parser)?))
    } else {
        None
    };

    Ok(Stmt::If(IfStmt {
        condition,
        then_body,
        else_body,
        position,
    }))
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let position = parser.advance().position.clone();

    parser.expect(TokenKind::OpenParen, "Expected '(' after 'while'")?;
    let condition = parse_expr(parser)?;
    parser.expect(TokenKind::CloseParen, "Expected ')' after condition")?;

    let body = parse_block(parser)?;
    parser.expect(TokenKind::Semicolon, "Expected ';' after while body")?;

    Ok(Stmt::While(WhileStmt {
        condition,
        body,
        position,
    }))
}

pub fn parse_for_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let position = parser.advance().position.clone();

    parser.expect(TokenKind::OpenParen, "Expected '(' after 'for'")?;

    let init = if parser.match_kind(TokenKind::Semicolon) {
        None
    } else if parser.current_token_kind().is_value_type_keyword() {
        Some(Box::new(parse_var_decl_stmt(parser)?))
    } else {
        Some(Box::new(parse_expression_stmt(
            parser,
            "Expected ';' after for initializer",
        )?))
    };

    let condition = if parser.check(TokenKind::Semicolon) {
        None
    } else {
        Some(parse_expr(parser)?)
    };
    parser.expect(TokenKind::Semicolon, "Expected ';' after for condition")?;

    let increment = if parser.check(TokenKind::CloseParen) {
        None
    } else {
        Some(parse_expr(parser)?)
    };
    parser.expect(TokenKind::CloseParen, "Expected ')' after for clauses")?;

    let body = parse_block(parser)?;
    parser.expect(TokenKind::Semicolon, "Expected ';' after for body")?;

    Ok(Stmt::For(ForStmt {
        init,
        condition,
        increment,
        body,
        position,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let position = parser.advance().position.clone();

    let value = if parser.check(TokenKind::Semicolon) {
        None
    } else {
        Some(parse_expr(parser)?)
    };

    parser.expect(TokenKind::Semicolon, "Expected ';' after return statement")?;

    Ok(Stmt::Return(ReturnStmt { value, position }))
}

pub fn parse_break_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let position = parser.advance().position.clone();
    parser.expect(TokenKind::Semicolon, "Expected ';' after 'break'")?;

    Ok(Stmt::Break(BreakStmt { position }))
}

pub fn parse_continue_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let position = parser.advance().position.clone();
    parser.expect(TokenKind::Semicolon, "Expected ';' after 'continue'")?;

    Ok(Stmt::Continue(ContinueStmt { position }))
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    Ok(Stmt::Block(parse_block(parser)?))
}

/// `{ declaration* }`. Errors inside are reported and recovered from here,
/// so only a missing brace escapes to the caller.
fn parse_block(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let position = parser.expect(TokenKind::OpenCurly, "Expected '{'")?.position;

    let body = parser.nested(|parser| {
        Ok(parser.parse_declarations(Some(TokenKind::CloseCurly)))
    })?;
    parser.expect(TokenKind::CloseCurly, "Expected '}'")?;

    Ok(BlockStmt { body, position })
}

pub fn parse_fn_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let position = parser.advance().position.clone();

    let return_type = if parser.current_token_kind().is_type_keyword() {
        VarType::from_token_kind(parser.advance().kind)
    } else {
        VarType::Void
    };

    let identifier = parser
        .expect(TokenKind::Identifier, "Expected function name")?
        .lexeme;
    parser.expect(TokenKind::OpenParen, "Expected '(' after function name")?;

    let mut parameters = vec![];
    if !parser.check(TokenKind::CloseParen) {
        loop {
            parameters.push(parse_param(parser)?);
            if !parser.match_kind(TokenKind::Comma) {
                break;
            }
        }
    }
    parser.expect(TokenKind::CloseParen, "Expected ')' after parameters")?;

    let body = parse_block(parser)?;

    Ok(Stmt::FnDecl(FnDeclStmt {
        identifier,
        return_type,
        parameters,
        body,
        position,
    }))
}

fn parse_param(parser: &mut Parser) -> Result<Param, Error> {
    let type_token = parser.current_token().clone();
    if !type_token.kind.is_value_type_keyword() {
        return Err(Error::new(
            ErrorImpl::UnexpectedToken {
                message: String::from("Expected parameter type"),
                found: type_token.lexeme,
            },
            type_token.position,
        ));
    }
    parser.advance();

    let name = parser
        .expect(TokenKind::Identifier, "Expected parameter name")?
        .lexeme;

    Ok(Param {
        name,
        var_type: VarType::from_token_kind(type_token.kind),
        position: type_token.position,
    })
}
