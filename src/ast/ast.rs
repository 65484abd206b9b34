use std::fmt::Display;

use crate::Position;

use super::{
    expressions::{operator_text, Expr},
    statements::{BlockStmt, Stmt},
};

/// Node Kinds
///
/// The tag of every node, fixed by the variant it was built as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    // Expressions
    Int,
    Double,
    Char,
    Bool,
    String,
    Variable,
    UnaryOp,
    BinaryOp,
    AssignOp,
    FnCall,
    // Statements
    ExpressionStmt,
    If,
    While,
    For,
    Return,
    Break,
    Continue,
    Import,
    Block,
    // Declarations
    Function,
    VarDecl,
    Program,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeCategory {
    Expression,
    Statement,
    Declaration,
    Program,
}

impl NodeKind {
    pub fn category(&self) -> NodeCategory {
        match self {
            NodeKind::Int
            | NodeKind::Double
            | NodeKind::Char
            | NodeKind::Bool
            | NodeKind::String
            | NodeKind::Variable
            | NodeKind::UnaryOp
            | NodeKind::BinaryOp
            | NodeKind::AssignOp
            | NodeKind::FnCall => NodeCategory::Expression,
            NodeKind::ExpressionStmt
            | NodeKind::If
            | NodeKind::While
            | NodeKind::For
            | NodeKind::Return
            | NodeKind::Break
            | NodeKind::Continue
            | NodeKind::Import
            | NodeKind::Block => NodeCategory::Statement,
            NodeKind::Function | NodeKind::VarDecl => NodeCategory::Declaration,
            NodeKind::Program => NodeCategory::Program,
        }
    }
}

/// Root of a parsed source. Owns every node below it.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub body: Vec<Stmt>,
    pub position: Position,
}

impl Program {
    pub fn kind(&self) -> NodeKind {
        NodeKind::Program
    }

    pub fn describe(&self) -> String {
        format!("Program with {} declaration(s)", self.body.len())
    }

    /// Indented rendering, one line per node.
    pub fn print_tree(&self) -> String {
        let mut printer = TreePrinter::new(INDENT_STEP);
        printer.program(self);
        printer.finish()
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.print_tree())
    }
}

pub const INDENT_STEP: usize = 2;

pub struct TreePrinter {
    out: String,
    step: usize,
}

impl TreePrinter {
    pub fn new(step: usize) -> Self {
        TreePrinter {
            out: String::new(),
            step,
        }
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn line(&mut self, indent: usize, text: &str) {
        self.out.push_str(&" ".repeat(indent));
        self.out.push_str(text);
        self.out.push('\n');
    }

    pub fn program(&mut self, program: &Program) {
        self.line(0, "Program");
        for stmt in &program.body {
            self.stmt(stmt, self.step);
        }
    }

    fn block(&mut self, label: &str, block: &BlockStmt, indent: usize) {
        self.line(indent, label);
        for stmt in block.iter() {
            self.stmt(stmt, indent + self.step);
        }
    }

    /// A label line followed by its child one step deeper.
    fn labelled_stmt(&mut self, label: &str, stmt: &Stmt, indent: usize) {
        self.line(indent, label);
        self.stmt(stmt, indent + self.step);
    }

    fn labelled_expr(&mut self, label: &str, expr: &Expr, indent: usize) {
        self.line(indent, label);
        self.expr(expr, indent + self.step);
    }

    pub fn stmt(&mut self, stmt: &Stmt, indent: usize) {
        let inner = indent + self.step;
        match stmt {
            Stmt::Expression(stmt) => {
                self.line(indent, "ExprStatement");
                self.expr(&stmt.expression, inner);
            }
            Stmt::If(stmt) => {
                self.line(indent, "IfStatement");
                self.labelled_expr("Condition:", &stmt.condition, inner);
                self.labelled_stmt("Then:", &stmt.then_body, inner);
                if let Some(else_body) = &stmt.else_body {
                    self.labelled_stmt("Else:", else_body, inner);
                }
            }
            Stmt::While(stmt) => {
                self.line(indent, "WhileLoop");
                self.labelled_expr("Condition:", &stmt.condition, inner);
                self.block("Body:", &stmt.body, inner);
            }
            Stmt::For(stmt) => {
                self.line(indent, "ForLoop");
                if let Some(init) = &stmt.init {
                    self.labelled_stmt("Init:", init, inner);
                }
                if let Some(condition) = &stmt.condition {
                    self.labelled_expr("Condition:", condition, inner);
                }
                if let Some(increment) = &stmt.increment {
                    self.labelled_expr("Increment:", increment, inner);
                }
                self.block("Body:", &stmt.body, inner);
            }
            Stmt::Return(stmt) => {
                self.line(indent, "Return");
                if let Some(value) = &stmt.value {
                    self.expr(value, inner);
                }
            }
            Stmt::Break(_) => self.line(indent, "Break"),
            Stmt::Continue(_) => self.line(indent, "Continue"),
            Stmt::Import(stmt) => self.line(indent, &format!("Import({})", stmt.path)),
            Stmt::Block(block) => self.block("Block", block, indent),
            Stmt::FnDecl(stmt) => {
                self.line(
                    indent,
                    &format!("Function({}) -> {}", stmt.identifier, stmt.return_type),
                );
                self.line(inner, "Params:");
                for param in &stmt.parameters {
                    self.line(
                        inner + self.step,
                        &format!("Param({} {})", param.var_type, param.name),
                    );
                }
                self.block("Body:", &stmt.body, inner);
            }
            Stmt::VarDecl(stmt) => {
                self.line(
                    indent,
                    &format!("VarDecl({} {})", stmt.var_type, stmt.identifier),
                );
                if let Some(value) = &stmt.assigned_value {
                    self.expr(value, inner);
                }
            }
        }
    }

    pub fn expr(&mut self, expr: &Expr, indent: usize) {
        let inner = indent + self.step;
        match expr {
            Expr::Int(expr) => self.line(indent, &format!("int({})", expr.value)),
            Expr::Double(expr) => self.line(indent, &format!("double({:?})", expr.value)),
            Expr::Char(expr) => self.line(indent, &format!("char({:?})", expr.value)),
            Expr::Bool(expr) => self.line(indent, &format!("bool({})", expr.value)),
            Expr::String(expr) => self.line(indent, &format!("string({:?})", expr.value)),
            Expr::Variable(expr) => self.line(indent, &format!("Variable({})", expr.name)),
            Expr::Unary(expr) => {
                let fixity = if expr.postfix { " postfix" } else { "" };
                self.line(
                    indent,
                    &format!("UnaryOp({}{})", operator_text(expr.operator), fixity),
                );
                self.expr(&expr.operand, inner);
            }
            Expr::Binary(expr) => {
                self.line(indent, &format!("BinaryOp({})", operator_text(expr.operator)));
                self.expr(&expr.left, inner);
                self.expr(&expr.right, inner);
            }
            Expr::Assign(expr) => {
                self.line(indent, &format!("AssignOp({})", operator_text(expr.operator)));
                self.line(inner, &format!("Variable({})", expr.target.name));
                self.expr(&expr.value, inner);
            }
            Expr::Call(expr) => {
                self.line(indent, &format!("FnCall({})", expr.callee));
                for argument in &expr.arguments {
                    self.expr(argument, inner);
                }
            }
        }
    }
}
