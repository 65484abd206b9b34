use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::statements::Stmt,
    errors::errors::Error,
    lexer::tokens::{TokenKind, VALUE_TYPE_KEYWORDS},
};

use super::{parser::Parser, stmt::*};

/// Precedence levels, loosest first.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub enum BindingPower {
    Default,
    Assignment,
    LogicalOr,
    LogicalAnd,
    Equality,
    Comparison,
    Additive,
    Multiplicative,
    Unary,
    Call,
    Primary,
}

impl BindingPower {
    /// The next tighter level.
    pub fn next(&self) -> BindingPower {
        match self {
            BindingPower::Default => BindingPower::Assignment,
            BindingPower::Assignment => BindingPower::LogicalOr,
            BindingPower::LogicalOr => BindingPower::LogicalAnd,
            BindingPower::LogicalAnd => BindingPower::Equality,
            BindingPower::Equality => BindingPower::Comparison,
            BindingPower::Comparison => BindingPower::Additive,
            BindingPower::Additive => BindingPower::Multiplicative,
            BindingPower::Multiplicative => BindingPower::Unary,
            BindingPower::Unary => BindingPower::Call,
            BindingPower::Call | BindingPower::Primary => BindingPower::Primary,
        }
    }
}

lazy_static! {
    /// Left-associative binary operators and the level they bind at.
    pub static ref BINARY_BP_LOOKUP: BPLookup = {
        let mut map = HashMap::new();
        // Logical
        map.insert(TokenKind::Or, BindingPower::LogicalOr);
        map.insert(TokenKind::And, BindingPower::LogicalAnd);

        // Equality and comparison
        map.insert(TokenKind::Equal, BindingPower::Equality);
        map.insert(TokenKind::NotEqual, BindingPower::Equality);
        map.insert(TokenKind::LessThan, BindingPower::Comparison);
        map.insert(TokenKind::MoreThan, BindingPower::Comparison);
        map.insert(TokenKind::LessThanEqual, BindingPower::Comparison);
        map.insert(TokenKind::MoreThanEqual, BindingPower::Comparison);

        // Additive and multiplicative
        map.insert(TokenKind::Plus, BindingPower::Additive);
        map.insert(TokenKind::Dash, BindingPower::Additive);
        map.insert(TokenKind::Star, BindingPower::Multiplicative);
        map.insert(TokenKind::Slash, BindingPower::Multiplicative);
        map.insert(TokenKind::Percent, BindingPower::Multiplicative);
        map
    };
}

pub const ASSIGNMENT_OPERATORS: &[TokenKind] = &[
    TokenKind::Assignment,
    TokenKind::PlusEquals,
    TokenKind::MinusEquals,
    TokenKind::StarEquals,
    TokenKind::SlashEquals,
    TokenKind::PercentEquals,
];

pub const PREFIX_OPERATORS: &[TokenKind] = &[
    TokenKind::Not,
    TokenKind::Dash,
    TokenKind::Tilde,
    TokenKind::PlusPlus,
    TokenKind::MinusMinus,
];

pub const POSTFIX_OPERATORS: &[TokenKind] = &[TokenKind::PlusPlus, TokenKind::MinusMinus];

/// Tokens panic-mode recovery stops in front of.
pub const SYNC_TOKENS: &[TokenKind] = &[
    TokenKind::CloseCurly,
    TokenKind::Fn,
    TokenKind::If,
    TokenKind::While,
    TokenKind::For,
    TokenKind::Return,
];

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Declarations
    parser.decl(TokenKind::Fn, parse_fn_decl_stmt);
    parser.decl(TokenKind::Import, parse_import_stmt);
    for kind in VALUE_TYPE_KEYWORDS {
        parser.decl(*kind, parse_var_decl_stmt);
    }

    // Statements
    parser.stmt(TokenKind::If, parse_if_stmt);
    parser.stmt(TokenKind::While, parse_while_stmt);
    parser.stmt(TokenKind::For, parse_for_stmt);
    parser.stmt(TokenKind::Return, parse_return_stmt);
    parser.stmt(TokenKind::Break, parse_break_stmt);
    parser.stmt(TokenKind::Continue, parse_continue_stmt);
    parser.stmt(TokenKind::OpenCurly, parse_block_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
