//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Numeric literals (integers and doubles)
//! - String and char literals with raw escapes
//! - Operators and punctuation, longest match first
//! - Comments and line/column tracking
//! - Error cases
//! - The kind <-> text table

use super::{
    lexer::tokenize,
    tokens::{kind_to_text, text_to_kind, TokenKind, KIND_LOOKUP},
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source.to_string(), Some("test.qur".to_string()))
        .unwrap()
        .iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    let source = "return if elif else for while continue break fn import true false";

    assert_eq!(
        kinds(source),
        vec![
            TokenKind::Return,
            TokenKind::If,
            TokenKind::Elif,
            TokenKind::Else,
            TokenKind::For,
            TokenKind::While,
            TokenKind::Continue,
            TokenKind::Break,
            TokenKind::Fn,
            TokenKind::Import,
            TokenKind::True,
            TokenKind::False,
        ]
    );
}

#[test]
fn test_tokenize_type_keywords() {
    let source = "int double float char boolean string void list tuple dict type";

    assert_eq!(
        kinds(source),
        vec![
            TokenKind::Int,
            TokenKind::Double,
            TokenKind::Double,
            TokenKind::Char,
            TokenKind::Boolean,
            TokenKind::String,
            TokenKind::Void,
            TokenKind::List,
            TokenKind::Tuple,
            TokenKind::Dict,
            TokenKind::Type,
        ]
    );
}

#[test]
fn test_keywords_are_case_sensitive() {
    assert_eq!(
        kinds("Return IF While"),
        vec![TokenKind::Identifier, TokenKind::Identifier, TokenKind::Identifier]
    );
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar baz_123 _underscore CamelCase returned".to_string();
    let tokens = tokenize(source, Some("test.qur".to_string())).unwrap();

    let lexemes: Vec<&str> = tokens.iter().map(|token| token.lexeme.as_str()).collect();
    assert_eq!(
        lexemes,
        vec!["foo", "bar", "baz_123", "_underscore", "CamelCase", "returned"]
    );
    assert!(tokens.iter().all(|token| token.kind == TokenKind::Identifier));
}

#[test]
fn test_tokenize_numbers() {
    let source = "42 3.14 0 100.5".to_string();
    let tokens = tokenize(source, Some("test.qur".to_string())).unwrap();

    assert_eq!(tokens.len(), 4);
    assert!(tokens.iter().all(|token| token.kind == TokenKind::Literal));
    assert_eq!(tokens[0].lexeme, "42");
    assert_eq!(tokens[1].lexeme, "3.14");
    assert_eq!(tokens[2].lexeme, "0");
    assert_eq!(tokens[3].lexeme, "100.5");
}

#[test]
fn test_second_dot_ends_number() {
    let source = "1.2.3".to_string();
    let tokens = tokenize(source, Some("test.qur".to_string())).unwrap();

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].kind, TokenKind::Literal);
    assert_eq!(tokens[0].lexeme, "1.2");
    assert_eq!(tokens[1].kind, TokenKind::Dot);
    assert_eq!(tokens[2].kind, TokenKind::Literal);
    assert_eq!(tokens[2].lexeme, "3");
}

#[test]
fn test_tokenize_strings() {
    let source = r#""hello" "multiple words" """#.to_string();
    let tokens = tokenize(source, Some("test.qur".to_string())).unwrap();

    assert_eq!(tokens.len(), 3);
    assert!(tokens.iter().all(|token| token.kind == TokenKind::StringLiteral));
    assert_eq!(tokens[0].lexeme, "hello");
    assert_eq!(tokens[1].lexeme, "multiple words");
    assert_eq!(tokens[2].lexeme, "");
}

#[test]
fn test_string_escapes_stay_raw() {
    let source = r#""line\nbreak" "quote\"inside""#.to_string();
    let tokens = tokenize(source, Some("test.qur".to_string())).unwrap();

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].lexeme, r"line\nbreak");
    assert_eq!(tokens[1].lexeme, r#"quote\"inside"#);
}

#[test]
fn test_tokenize_chars() {
    let source = r"'a' '\n' '\''".to_string();
    let tokens = tokenize(source, Some("test.qur".to_string())).unwrap();

    assert_eq!(tokens.len(), 3);
    assert!(tokens.iter().all(|token| token.kind == TokenKind::CharLiteral));
    assert_eq!(tokens[0].lexeme, "a");
    assert_eq!(tokens[1].lexeme, r"\n");
    assert_eq!(tokens[2].lexeme, r"\'");
}

#[test]
fn test_tokenize_operators() {
    let source = "+ - * / % == != < > <= >= = & | ! ~";

    assert_eq!(
        kinds(source),
        vec![
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Percent,
            TokenKind::Equal,
            TokenKind::NotEqual,
            TokenKind::LessThan,
            TokenKind::MoreThan,
            TokenKind::LessThanEqual,
            TokenKind::MoreThanEqual,
            TokenKind::Assignment,
            TokenKind::And,
            TokenKind::Or,
            TokenKind::Not,
            TokenKind::Tilde,
        ]
    );
}

#[test]
fn test_longest_match_without_spaces() {
    assert_eq!(
        kinds("a<=b==c++"),
        vec![
            TokenKind::Identifier,
            TokenKind::LessThanEqual,
            TokenKind::Identifier,
            TokenKind::Equal,
            TokenKind::Identifier,
            TokenKind::PlusPlus,
        ]
    );
}

#[test]
fn test_tokenize_punctuation() {
    assert_eq!(
        kinds("( ) { } [ ] . , ; : ->"),
        vec![
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::OpenBracket,
            TokenKind::CloseBracket,
            TokenKind::Dot,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::Colon,
            TokenKind::Arrow,
        ]
    );
}

#[test]
fn test_tokenize_compound_operators() {
    assert_eq!(
        kinds("++ -- += -= *= /= %="),
        vec![
            TokenKind::PlusPlus,
            TokenKind::MinusMinus,
            TokenKind::PlusEquals,
            TokenKind::MinusEquals,
            TokenKind::StarEquals,
            TokenKind::SlashEquals,
            TokenKind::PercentEquals,
        ]
    );
}

#[test]
fn test_tokenize_comments() {
    let source = "int x = 5; // this is a comment\nint y = 10; //".to_string();
    let tokens = tokenize(source, Some("test.qur".to_string())).unwrap();

    assert_eq!(tokens.len(), 10);
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);
    assert_eq!(tokens[5].kind, TokenKind::Int);
    assert_eq!(tokens[6].lexeme, "y");
}

#[test]
fn test_token_positions() {
    let source = "int x;\n  x = 42;".to_string();
    let tokens = tokenize(source, Some("test.qur".to_string())).unwrap();

    assert_eq!((tokens[0].position.line, tokens[0].position.column), (1, 1));
    assert_eq!((tokens[1].position.line, tokens[1].position.column), (1, 5));
    assert_eq!((tokens[3].position.line, tokens[3].position.column), (2, 3));
    assert_eq!((tokens[5].position.line, tokens[5].position.column), (2, 7));
    assert_eq!(tokens[5].lexeme, "42");
    assert_eq!(*tokens[0].position.file, "test.qur");
}

#[test]
fn test_carriage_return_newlines() {
    let source = "int x;\r\nint y;\r\n".to_string();
    let tokens = tokenize(source, Some("test.qur".to_string())).unwrap();

    assert_eq!(tokens.len(), 6);
    assert_eq!(tokens[3].position.line, 2);
}

#[test]
fn test_tokenize_unrecognized_character() {
    let source = "int x = 1;\nint y = @;".to_string();
    let error = tokenize(source, Some("test.qur".to_string())).unwrap_err();

    assert!(error.is_lex_error());
    assert_eq!(error.get_position().line, 2);
    assert_eq!(error.get_position().column, 9);
    assert_eq!(error.to_string(), "unexpected character '@' at line 2, column 9");
}

#[test]
fn test_unterminated_string_is_a_lex_error() {
    let source = "string s = \"open".to_string();
    let error = tokenize(source, None).unwrap_err();

    assert_eq!(error.get_error_name(), "UnexpectedCharacter");
    assert_eq!(error.get_position().column, 12);
    assert_eq!(*error.get_position().file, "shell");
}

#[test]
fn test_empty_char_is_a_lex_error() {
    let result = tokenize("char c = '';".to_string(), None);

    assert!(result.is_err());
}

#[test]
fn test_tokenize_empty_source() {
    assert!(kinds("").is_empty());
    assert!(kinds("   \n// only a comment\n").is_empty());
}

#[test]
fn test_kind_text_round_trip() {
    assert!(!KIND_LOOKUP.is_empty());
    for (kind, text) in KIND_LOOKUP.iter() {
        assert_eq!(text_to_kind(text), *kind, "round trip failed for {}", text);
        assert_eq!(kind_to_text(*kind), Some(*text));
    }
}

#[test]
fn test_table_lookups() {
    assert_eq!(kind_to_text(TokenKind::Return), Some("return"));
    assert_eq!(kind_to_text(TokenKind::LessThanEqual), Some("<="));
    assert_eq!(kind_to_text(TokenKind::Double), Some("double"));
    assert_eq!(text_to_kind("float"), TokenKind::Double);
    assert_eq!(text_to_kind("somethingElse"), TokenKind::Identifier);
    assert_eq!(kind_to_text(TokenKind::Identifier), None);
    assert_eq!(kind_to_text(TokenKind::Unknown), None);
    assert_eq!(kind_to_text(TokenKind::Literal), None);
}

#[test]
fn test_token_describe() {
    let tokens = tokenize("count += 1".to_string(), None).unwrap();

    assert_eq!(tokens[0].describe(), "Identifier (count) @ 1:1");
    assert_eq!(tokens[1].describe(), "PlusEquals () @ 1:7");
    assert_eq!(tokens[2].describe(), "Literal (1) @ 1:10");
}
