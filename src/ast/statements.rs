use std::slice::Iter;

use crate::Position;

use super::{ast::NodeKind, expressions::Expr, types::VarType};

#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    pub body: Vec<Stmt>,
    pub position: Position,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub expression: Expr,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_body: Box<Stmt>,
    /// `else` body, or the next link of an `elif` chain.
    pub else_body: Option<Box<Stmt>>,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: BlockStmt,
    pub position: Position,
}

/// C-style loop. Every clause may be empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    /// A variable declaration or an expression statement.
    pub init: Option<Box<Stmt>>,
    pub condition: Option<Expr>,
    pub increment: Option<Expr>,
    pub body: BlockStmt,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub value: Option<Expr>,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BreakStmt {
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContinueStmt {
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportStmt {
    pub path: String,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    pub var_type: VarType,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FnDeclStmt {
    pub identifier: String,
    pub return_type: VarType,
    pub parameters: Vec<Param>,
    pub body: BlockStmt,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclStmt {
    pub identifier: String,
    pub var_type: VarType,
    pub assigned_value: Option<Expr>,
    pub position: Position,
}

/// Anything that can sit in a block or at the top of a program.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Expression(ExpressionStmt),
    If(IfStmt),
    While(WhileStmt),
    For(ForStmt),
    Return(ReturnStmt),
    Break(BreakStmt),
    Continue(ContinueStmt),
    Import(ImportStmt),
    Block(BlockStmt),
    FnDecl(FnDeclStmt),
    VarDecl(VarDeclStmt),
}

impl Stmt {
    pub fn kind(&self) -> NodeKind {
        match self {
            Stmt::Expression(_) => NodeKind::ExpressionStmt,
            Stmt::If(_) => NodeKind::If,
            Stmt::While(_) => NodeKind::While,
            Stmt::For(_) => NodeKind::For,
            Stmt::Return(_) => NodeKind::Return,
            Stmt::Break(_) => NodeKind::Break,
            Stmt::Continue(_) => NodeKind::Continue,
            Stmt::Import(_) => NodeKind::Import,
            Stmt::Block(_) => NodeKind::Block,
            Stmt::FnDecl(_) => NodeKind::Function,
            Stmt::VarDecl(_) => NodeKind::VarDecl,
        }
    }

    pub fn get_position(&self) -> &Position {
        match self {
            Stmt::Expression(stmt) => &stmt.position,
            Stmt::If(stmt) => &stmt.position,
            Stmt::While(stmt) => &stmt.position,
            Stmt::For(stmt) => &stmt.position,
            Stmt::Return(stmt) => &stmt.position,
            Stmt::Break(stmt) => &stmt.position,
            Stmt::Continue(stmt) => &stmt.position,
            Stmt::Import(stmt) => &stmt.position,
            Stmt::Block(stmt) => &stmt.position,
            Stmt::FnDecl(stmt) => &stmt.position,
            Stmt::VarDecl(stmt) => &stmt.position,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Stmt::Expression(stmt) => format!("Expression statement: {}", stmt.expression.describe()),
            Stmt::If(stmt) if stmt.else_body.is_some() => String::from("If statement with else branch"),
            Stmt::If(_) => String::from("If statement"),
            Stmt::While(_) => String::from("While loop"),
            Stmt::For(_) => String::from("For loop"),
            Stmt::Return(stmt) if stmt.value.is_some() => String::from("Return statement with value"),
            Stmt::Return(_) => String::from("Return statement"),
            Stmt::Break(_) => String::from("Break statement"),
            Stmt::Continue(_) => String::from("Continue statement"),
            Stmt::Import(stmt) => format!("Import: {}", stmt.path),
            Stmt::Block(stmt) => format!("Body block with {} statement(s)", stmt.body.len()),
            Stmt::FnDecl(stmt) => format!(
                "Function declaration: {} returning {}",
                stmt.identifier, stmt.return_type
            ),
            Stmt::VarDecl(stmt) => format!(
                "Variable declaration: {} of type {}",
                stmt.identifier, stmt.var_type
            ),
        }
    }
}
