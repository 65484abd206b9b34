use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_TOKEN,
};

use super::tokens::{text_to_kind, Token, TokenKind, SYMBOL_SPELLINGS};

pub type RegexHandler = fn(&mut Lexer, &str);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    /// Classification rules, tried in order. Every pattern is anchored and
    /// consumes at least one character.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"^\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new(r"^[0-9]+(\.[0-9]*)?").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new(r#"^"(\\.|[^"\\])*""#).unwrap(), handler: string_handler },
        RegexPattern { regex: Regex::new(r"^'(\\.|[^'\\])'").unwrap(), handler: char_handler },
        RegexPattern { regex: Regex::new(r"^//.*").unwrap(), handler: skip_handler },
        RegexPattern { regex: symbol_regex(), handler: operator_handler },
    ];
}

fn symbol_regex() -> Regex {
    let alternatives = SYMBOL_SPELLINGS
        .iter()
        .map(|symbol| regex::escape(symbol))
        .collect::<Vec<String>>()
        .join("|");
    Regex::new(&format!("^(?:{})", alternatives)).unwrap()
}

pub struct Lexer {
    tokens: Vec<Token>,
    line: String,
    line_number: u32,
    /// Byte offset into the current line.
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            tokens: vec![],
            line: String::new(),
            line_number: 0,
            pos: 0,
            file: file_name,
        }
    }

    pub fn start_line(&mut self, line_number: u32, line: &str) {
        self.line_number = line_number;
        self.line = line.to_string();
        self.pos = 0;
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> char {
        self.remainder().chars().next().unwrap_or('\0')
    }

    pub fn remainder(&self) -> &str {
        &self.line[self.pos..]
    }

    pub fn at_eol(&self) -> bool {
        self.pos >= self.line.len()
    }

    /// Position of the cursor, counting columns in characters.
    pub fn position(&self) -> Position {
        let column = self.line[..self.pos].chars().count() as u32 + 1;
        Position::new(self.line_number, column, Rc::clone(&self.file))
    }
}

fn skip_handler(lexer: &mut Lexer, matched: &str) {
    lexer.advance_n(matched.len());
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) {
    // Alphabetic text only ever resolves to a keyword or an identifier.
    let kind = text_to_kind(matched);
    lexer.push(MK_TOKEN!(kind, String::from(matched), lexer.position()));
    lexer.advance_n(matched.len());
}

fn number_handler(lexer: &mut Lexer, matched: &str) {
    lexer.push(MK_TOKEN!(TokenKind::Literal, String::from(matched), lexer.position()));
    lexer.advance_n(matched.len());
}

fn string_handler(lexer: &mut Lexer, matched: &str) {
    let inner = &matched[1..matched.len() - 1];
    lexer.push(MK_TOKEN!(TokenKind::StringLiteral, String::from(inner), lexer.position()));
    lexer.advance_n(matched.len());
}

fn char_handler(lexer: &mut Lexer, matched: &str) {
    let inner = &matched[1..matched.len() - 1];
    lexer.push(MK_TOKEN!(TokenKind::CharLiteral, String::from(inner), lexer.position()));
    lexer.advance_n(matched.len());
}

fn operator_handler(lexer: &mut Lexer, matched: &str) {
    lexer.push(MK_TOKEN!(text_to_kind(matched), String::from(matched), lexer.position()));
    lexer.advance_n(matched.len());
}

/// Splits source text into tokens.
///
/// Tokens never span lines. The first character no rule accepts aborts the
/// whole pass with `UnexpectedCharacter`.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(file);

    for (index, line) in source.lines().enumerate() {
        lex.start_line(index as u32 + 1, line);

        while !lex.at_eol() {
            let mut matched = false;

            for pattern in PATTERNS.iter() {
                if let Some(found) = pattern.regex.find(lex.remainder()) {
                    let text = found.as_str().to_string();
                    (pattern.handler)(&mut lex, &text);
                    matched = true;
                    break;
                }
            }

            if !matched {
                return Err(Error::new(
                    ErrorImpl::UnexpectedCharacter { character: lex.at() },
                    lex.position(),
                ));
            }
        }
    }

    debug!("tokenized {} into {} tokens", lex.file, lex.tokens.len());
    Ok(lex.tokens)
}
