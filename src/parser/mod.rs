//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. Keywords dispatch through lookup tables
//! and expressions are parsed by precedence climbing. It handles:
//!
//! - Declarations (functions, imports, variables)
//! - Statements (control flow, blocks, expression statements)
//! - Expressions (assignment, binary and unary ops, calls, literals)
//! - Error recovery and reporting

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
