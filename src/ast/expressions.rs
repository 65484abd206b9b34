use crate::{
    lexer::tokens::{kind_to_text, TokenKind},
    Position,
};

use super::ast::NodeKind;

// LITERALS

/// Integer Expression
#[derive(Debug, Clone, PartialEq)]
pub struct IntExpr {
    pub value: i64,
    pub position: Position,
}

/// Double Expression
#[derive(Debug, Clone, PartialEq)]
pub struct DoubleExpr {
    pub value: f64,
    pub position: Position,
}

/// Char Expression
/// Holds the decoded character, escapes already resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct CharExpr {
    pub value: char,
    pub position: Position,
}

/// Bool Expression
#[derive(Debug, Clone, PartialEq)]
pub struct BoolExpr {
    pub value: bool,
    pub position: Position,
}

/// String Expression
/// Holds the decoded text, escapes already resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct StringExpr {
    pub value: String,
    pub position: Position,
}

/// Variable Expression
/// A bare reference to a name.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableExpr {
    pub name: String,
    pub position: Position,
}

// COMPLEX

/// Unary Expression
/// Prefix `! - ~ ++ --`, or postfix `++ --` when `postfix` is set.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub operator: TokenKind,
    pub operand: Box<Expr>,
    pub postfix: bool,
    pub position: Position,
}

/// Binary Expression
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: TokenKind,
    pub right: Box<Expr>,
    pub position: Position,
}

/// Assignment Expression
/// `=` or a compound assignment. The target is always a variable.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignExpr {
    pub target: VariableExpr,
    pub operator: TokenKind,
    pub value: Box<Expr>,
    pub position: Position,
}

/// Call Expression
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: String,
    pub arguments: Vec<Expr>,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Int(IntExpr),
    Double(DoubleExpr),
    Char(CharExpr),
    Bool(BoolExpr),
    String(StringExpr),
    Variable(VariableExpr),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
    Assign(AssignExpr),
    Call(CallExpr),
}

/// Spelling of an operator kind for rendering.
pub fn operator_text(kind: TokenKind) -> &'static str {
    kind_to_text(kind).unwrap_or("?")
}

impl Expr {
    pub fn kind(&self) -> NodeKind {
        match self {
            Expr::Int(_) => NodeKind::Int,
            Expr::Double(_) => NodeKind::Double,
            Expr::Char(_) => NodeKind::Char,
            Expr::Bool(_) => NodeKind::Bool,
            Expr::String(_) => NodeKind::String,
            Expr::Variable(_) => NodeKind::Variable,
            Expr::Unary(_) => NodeKind::UnaryOp,
            Expr::Binary(_) => NodeKind::BinaryOp,
            Expr::Assign(_) => NodeKind::AssignOp,
            Expr::Call(_) => NodeKind::FnCall,
        }
    }

    pub fn get_position(&self) -> &Position {
        match self {
            Expr::Int(expr) => &expr.position,
            Expr::Double(expr) => &expr.position,
            Expr::Char(expr) => &expr.position,
            Expr::Bool(expr) => &expr.position,
            Expr::String(expr) => &expr.position,
            Expr::Variable(expr) => &expr.position,
            Expr::Unary(expr) => &expr.position,
            Expr::Binary(expr) => &expr.position,
            Expr::Assign(expr) => &expr.position,
            Expr::Call(expr) => &expr.position,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Expr::Int(expr) => format!("INT literal: {}", expr.value),
            Expr::Double(expr) => format!("DOUBLE literal: {}", expr.value),
            Expr::Char(expr) => format!("CHAR literal: {:?}", expr.value),
            Expr::Bool(expr) => format!("BOOL literal: {}", expr.value),
            Expr::String(expr) => format!("STRING literal: {:?}", expr.value),
            Expr::Variable(expr) => format!("Variable reference: {}", expr.name),
            Expr::Unary(expr) if expr.postfix => {
                format!("Postfix unary operation: {}", operator_text(expr.operator))
            }
            Expr::Unary(expr) => format!("Unary operation: {}", operator_text(expr.operator)),
            Expr::Binary(expr) => format!("Binary operation: {}", operator_text(expr.operator)),
            Expr::Assign(expr) => format!(
                "Assignment operation: {} {}",
                expr.target.name,
                operator_text(expr.operator)
            ),
            Expr::Call(expr) => format!(
                "Function call: {} with {} argument(s)",
                expr.callee,
                expr.arguments.len()
            ),
        }
    }
}
