/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Node kinds, the Program root and the tree printer
/// - expressions: Definitions for the expression variants
/// - statements: Definitions for statement and declaration variants
/// - types: The syntactic type tag
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;

#[cfg(test)]
mod tests;
