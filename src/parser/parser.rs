//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the build loop.
//! The parser is predictive: one token of lookahead, no backtracking.
//! Declarations and statements are dispatched through keyword lookup
//! tables; expressions are parsed by precedence climbing (see `expr`).
//!
//! Errors raised inside a declaration are recorded as diagnostics and the
//! cursor is resynchronised, so a single pass reports as many independent
//! errors as possible. Any recorded diagnostic fails the whole build.

use std::{collections::HashMap, rc::Rc};

use tracing::{debug, error};

use crate::{
    ast::{ast::Program, statements::Stmt},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::{
    lookups::{create_token_lookups, StmtHandler, StmtLookup, SYNC_TOKENS},
    stmt::parse_decl,
};

/// The main parser structure that maintains parsing state.
///
/// This struct holds the token sequence, the read cursor, the lookup
/// tables for declaration and statement keywords, and the diagnostics
/// collected so far.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token sequence
    pos: usize,
    /// The name of the source file being parsed
    file: Rc<String>,
    /// Returned by lookups past the end of the sequence
    eof: Token,
    /// Handlers for tokens that open a declaration
    decl_lookup: StmtLookup,
    /// Handlers for tokens that open a statement
    stmt_lookup: StmtLookup,
    /// Errors recorded at recovery points
    diagnostics: Vec<Error>,
    /// Well-formed declarations of a build that failed
    rejected: Option<Program>,
    /// How many nested constructs are currently open
    depth: usize,
}

/// Deepest nesting of statements and expressions accepted before the
/// parser gives up on a construct.
pub const MAX_NESTING_DEPTH: usize = 128;

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// # Arguments
    ///
    /// * `tokens` - Vector of tokens to parse
    /// * `file` - Reference-counted string containing the source file name
    pub fn new(tokens: Vec<Token>, file: Rc<String>) -> Self {
        let eof_position = match tokens.last() {
            Some(last) => Position::new(
                last.position.line,
                last.position.column + last.lexeme.chars().count() as u32,
                Rc::clone(&file),
            ),
            None => Position::new(1, 1, Rc::clone(&file)),
        };

        Parser {
            tokens,
            pos: 0,
            file,
            eof: Token {
                kind: TokenKind::Unknown,
                lexeme: String::from("EOF"),
                position: eof_position,
            },
            decl_lookup: HashMap::new(),
            stmt_lookup: HashMap::new(),
            diagnostics: vec![],
            rejected: None,
            depth: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.eof)
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Returns the most recently consumed token.
    pub fn previous(&self) -> &Token {
        if self.pos == 0 {
            return self.tokens.first().unwrap_or(&self.eof);
        }
        self.tokens.get(self.pos - 1).unwrap_or(&self.eof)
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.pos += 1;
        }
        self.previous()
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        !self.is_at_end()
    }

    /// Whether the current token has the given kind. Always false at the end.
    pub fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.current_token_kind() == kind
    }

    /// Consumes the current token if it has the given kind.
    pub fn match_kind(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes the current token if it is one of `kinds`, returning its kind.
    pub fn match_any(&mut self, kinds: &[TokenKind]) -> Option<TokenKind> {
        let kind = self.current_token_kind();
        if !self.is_at_end() && kinds.contains(&kind) {
            self.advance();
            Some(kind)
        } else {
            None
        }
    }

    /// Expects a token of the specified kind.
    ///
    /// # Arguments
    ///
    /// * `expected_kind` - The expected TokenKind
    /// * `message` - What was expected, used in the error
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise an
    /// `UnexpectedToken` error at the current token.
    pub fn expect(&mut self, expected_kind: TokenKind, message: &str) -> Result<Token, Error> {
        if self.check(expected_kind) {
            return Ok(self.advance().clone());
        }

        let token = self.current_token();
        Err(Error::new(
            ErrorImpl::UnexpectedToken {
                message: String::from(message),
                found: token.lexeme.clone(),
            },
            token.position.clone(),
        ))
    }

    /// Returns a reference to the declaration lookup table.
    pub fn get_decl_lookup(&self) -> &StmtLookup {
        &self.decl_lookup
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Registers a declaration handler for a token.
    pub fn decl(&mut self, kind: TokenKind, decl_fn: StmtHandler) {
        self.decl_lookup.insert(kind, decl_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().position.clone()
    }

    /// Runs `parse_fn` one nesting level deeper.
    ///
    /// Fails with `NestingTooDeep` instead of recursing past
    /// `MAX_NESTING_DEPTH`.
    pub fn nested<T>(
        &mut self,
        parse_fn: impl FnOnce(&mut Parser) -> Result<T, Error>,
    ) -> Result<T, Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.get_position(),
            ));
        }

        self.depth += 1;
        let result = parse_fn(self);
        self.depth -= 1;
        result
    }

    /// Records a diagnostic.
    pub fn report(&mut self, diagnostic: Error) {
        error!("Parse error: {}", diagnostic);
        self.diagnostics.push(diagnostic);
    }

    /// Diagnostics recorded so far, in the order they were found.
    pub fn diagnostics(&self) -> &[Error] {
        &self.diagnostics
    }

    /// Takes the tree of a failed build, if the last build failed.
    pub fn take_rejected(&mut self) -> Option<Program> {
        self.rejected.take()
    }

    /// Skips ahead to a point where parsing can safely resume.
    ///
    /// Stops after a `;`, or in front of a token in `SYNC_TOKENS`. `start`
    /// is where the failed declaration began; if the cursor never moved past
    /// it, that token is dropped first so recovery always makes progress.
    pub fn synchronize(&mut self, start: usize) {
        if self.pos == start {
            self.advance();
        }

        while !self.is_at_end() {
            let kind = self.current_token_kind();
            if kind == TokenKind::Semicolon {
                self.advance();
                return;
            }
            if SYNC_TOKENS.contains(&kind) {
                return;
            }
            self.advance();
        }
    }

    /// Parses declarations until `stop` (or the end of input), recovering
    /// from each failed declaration. Stray `;` are skipped, and so is a
    /// stray `}` at the top level, where recovery may leave one behind.
    pub fn parse_declarations(&mut self, stop: Option<TokenKind>) -> Vec<Stmt> {
        let mut body = vec![];

        while self.has_tokens() && stop.map_or(true, |kind| !self.check(kind)) {
            if self.match_kind(TokenKind::Semicolon) {
                continue;
            }
            if stop.is_none() && self.match_kind(TokenKind::CloseCurly) {
                continue;
            }

            let start = self.pos;
            match parse_decl(self) {
                Ok(decl) => body.push(decl),
                Err(diagnostic) => {
                    self.report(diagnostic);
                    self.synchronize(start);
                }
            }
        }

        body
    }
}

/// Parses a sequence of tokens into a Program.
///
/// This is the main entry point for parsing. It creates a parser instance,
/// initializes the lookup tables, and parses declarations until the end of
/// the sequence.
///
/// # Arguments
///
/// * `tokens` - Vector of tokens to parse
/// * `file` - Reference-counted string containing the source file name
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance (diagnostics and, on failure, the rejected tree)
/// - Result containing either the Program or a `BuildFailed` error
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> (Parser, Result<Program, Error>) {
    let mut parser = Parser::new(tokens, Rc::clone(&file));
    create_token_lookups(&mut parser);

    let body = parser.parse_declarations(None);
    let program = Program {
        body,
        position: Position::new(1, 1, Rc::clone(&parser.file)),
    };

    debug!(
        "parsed {} declaration(s) with {} diagnostic(s)",
        program.body.len(),
        parser.diagnostics.len()
    );

    if let Some(first) = parser.diagnostics.first() {
        let error = Error::new(
            ErrorImpl::BuildFailed {
                count: parser.diagnostics.len(),
            },
            first.get_position().clone(),
        );
        parser.rejected = Some(program);
        return (parser, Err(error));
    }

    (parser, Ok(program))
}
