use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

/// Every token kind with a fixed spelling, paired with that spelling.
///
/// Both lookup directions are derived from this one table.
const TOKEN_TABLE: &[(TokenKind, &str)] = &[
    // Reserved
    (TokenKind::Return, "return"),
    (TokenKind::If, "if"),
    (TokenKind::Elif, "elif"),
    (TokenKind::Else, "else"),
    (TokenKind::For, "for"),
    (TokenKind::While, "while"),
    (TokenKind::Continue, "continue"),
    (TokenKind::Break, "break"),
    (TokenKind::Fn, "fn"),
    (TokenKind::Import, "import"),
    (TokenKind::True, "true"),
    (TokenKind::False, "false"),
    // Types
    (TokenKind::Int, "int"),
    (TokenKind::Double, "double"),
    (TokenKind::Char, "char"),
    (TokenKind::Boolean, "boolean"),
    (TokenKind::String, "string"),
    (TokenKind::Void, "void"),
    (TokenKind::List, "list"),
    (TokenKind::Tuple, "tuple"),
    (TokenKind::Dict, "dict"),
    (TokenKind::Type, "type"),
    // Punctuation
    (TokenKind::OpenCurly, "{"),
    (TokenKind::CloseCurly, "}"),
    (TokenKind::OpenParen, "("),
    (TokenKind::CloseParen, ")"),
    (TokenKind::OpenBracket, "["),
    (TokenKind::CloseBracket, "]"),
    (TokenKind::Semicolon, ";"),
    (TokenKind::Colon, ":"),
    (TokenKind::Comma, ","),
    (TokenKind::Dot, "."),
    // Operators
    (TokenKind::Assignment, "="),
    (TokenKind::Arrow, "->"),
    (TokenKind::Plus, "+"),
    (TokenKind::Dash, "-"),
    (TokenKind::Star, "*"),
    (TokenKind::Slash, "/"),
    (TokenKind::Percent, "%"),
    (TokenKind::LessThan, "<"),
    (TokenKind::MoreThan, ">"),
    (TokenKind::LessThanEqual, "<="),
    (TokenKind::MoreThanEqual, ">="),
    (TokenKind::Equal, "=="),
    (TokenKind::NotEqual, "!="),
    (TokenKind::Not, "!"),
    (TokenKind::And, "&"),
    (TokenKind::Or, "|"),
    (TokenKind::Tilde, "~"),
    (TokenKind::PlusPlus, "++"),
    (TokenKind::MinusMinus, "--"),
    (TokenKind::PlusEquals, "+="),
    (TokenKind::MinusEquals, "-="),
    (TokenKind::StarEquals, "*="),
    (TokenKind::SlashEquals, "/="),
    (TokenKind::PercentEquals, "%="),
];

/// Extra spellings accepted on the text side only.
const TEXT_ALIASES: &[(&str, TokenKind)] = &[("float", TokenKind::Double)];

lazy_static! {
    pub static ref TEXT_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map: HashMap<&'static str, TokenKind> =
            TOKEN_TABLE.iter().map(|(kind, text)| (*text, *kind)).collect();
        for (text, kind) in TEXT_ALIASES {
            map.insert(*text, *kind);
        }
        map
    };
    pub static ref KIND_LOOKUP: HashMap<TokenKind, &'static str> =
        TOKEN_TABLE.iter().map(|(kind, text)| (*kind, *text)).collect();
    /// Spellings made only of punctuation, longest first.
    pub static ref SYMBOL_SPELLINGS: Vec<&'static str> = {
        let mut symbols: Vec<&'static str> = TOKEN_TABLE
            .iter()
            .map(|(_, text)| *text)
            .filter(|text| !text.starts_with(|c: char| c.is_ascii_alphabetic()))
            .collect();
        symbols.sort_by(|a, b| b.len().cmp(&a.len()));
        symbols
    };
}

/// Maps text to its token kind. Text outside the table is an identifier.
pub fn text_to_kind(text: &str) -> TokenKind {
    TEXT_LOOKUP
        .get(text)
        .copied()
        .unwrap_or(TokenKind::Identifier)
}

/// Canonical spelling of a kind, or `None` for literal and catch-all kinds.
pub fn kind_to_text(kind: TokenKind) -> Option<&'static str> {
    KIND_LOOKUP.get(&kind).copied()
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    /// Sentinel the parser hands out once the sequence is exhausted.
    Unknown,
    Identifier,
    /// Numeric literal; the parser decides between int and double.
    Literal,
    StringLiteral,
    CharLiteral,

    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    Semicolon,
    Colon,
    Comma,
    Dot,

    Assignment, // =
    Arrow,      // ->
    Plus,
    Dash,
    Star,
    Slash,
    Percent,
    LessThan,
    MoreThan,
    LessThanEqual,
    MoreThanEqual,
    Equal,    // ==
    NotEqual, // !=
    Not,      // !
    And,      // &
    Or,       // |
    Tilde,    // ~

    PlusPlus,
    MinusMinus,
    PlusEquals,
    MinusEquals,
    StarEquals,
    SlashEquals,
    PercentEquals,

    // Reserved
    Return,
    If,
    Elif,
    Else,
    For,
    While,
    Continue,
    Break,
    Fn,
    Import,
    True,
    False,

    // Types
    Int,
    Double,
    Char,
    Boolean,
    String,
    Void,
    List,
    Tuple,
    Dict,
    Type,
}

/// Type keywords that can open a variable declaration or a parameter.
pub const VALUE_TYPE_KEYWORDS: &[TokenKind] = &[
    TokenKind::Int,
    TokenKind::Double,
    TokenKind::Char,
    TokenKind::Boolean,
    TokenKind::String,
    TokenKind::List,
    TokenKind::Tuple,
    TokenKind::Dict,
    TokenKind::Type,
];

impl TokenKind {
    /// Kinds that may appear where a type tag is expected.
    pub fn is_type_keyword(&self) -> bool {
        *self == TokenKind::Void || self.is_value_type_keyword()
    }

    pub fn is_value_type_keyword(&self) -> bool {
        VALUE_TYPE_KEYWORDS.contains(self)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub position: Position,
}

impl Token {
    fn is_one_of_many(&self, tokens: &[TokenKind]) -> bool {
        tokens.contains(&self.kind)
    }

    /// One-line summary, e.g. `Identifier (foo) @ 3:5`.
    pub fn describe(&self) -> String {
        if self.is_one_of_many(&[
            TokenKind::StringLiteral,
            TokenKind::CharLiteral,
            TokenKind::Identifier,
            TokenKind::Literal,
        ]) {
            format!(
                "{} ({}) @ {}:{}",
                self.kind, self.lexeme, self.position.line, self.position.column
            )
        } else {
            format!(
                "{} () @ {}:{}",
                self.kind, self.position.line, self.position.column
            )
        }
    }
}
