//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a sequence of tokens for parsing. It handles:
//!
//! - Tokenization of source text using anchored regex patterns, line by line
//! - Recognition of keywords, identifiers, literals, and operators
//! - The bidirectional table between token kinds and their spellings
//! - Token position tracking for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
