use std::fmt::Display;

use crate::lexer::tokens::TokenKind;

/// Syntactic type tag attached to declarations.
///
/// `Inferred` means "not known yet"; a later pass is expected to resolve it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VarType {
    Int,
    Double,
    String,
    Char,
    Boolean,
    Void,
    Inferred,
}

impl VarType {
    pub fn from_token_kind(kind: TokenKind) -> VarType {
        match kind {
            TokenKind::Int => VarType::Int,
            TokenKind::Double => VarType::Double,
            TokenKind::Char => VarType::Char,
            TokenKind::Boolean => VarType::Boolean,
            TokenKind::String => VarType::String,
            TokenKind::Void => VarType::Void,
            _ => VarType::Inferred,
        }
    }
}

impl Display for VarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            VarType::Int => "int",
            VarType::Double => "double",
            VarType::String => "string",
            VarType::Char => "char",
            VarType::Boolean => "boolean",
            VarType::Void => "void",
            VarType::Inferred => "inferred",
        };
        write!(f, "{}", name)
    }
}
