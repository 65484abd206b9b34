use std::rc::Rc;

use indoc::indoc;

use crate::{
    lexer::{lexer::tokenize, tokens::TokenKind},
    parser::parser::parse,
    Position,
};

use super::{
    ast::{NodeCategory, NodeKind, Program},
    expressions::{BinaryExpr, Expr, IntExpr, UnaryExpr, VariableExpr},
    statements::{ReturnStmt, Stmt},
    types::VarType,
};

fn build(source: &str) -> Program {
    let tokens = tokenize(source.to_string(), Some("test.qur".to_string())).unwrap();
    let (_, result) = parse(tokens, Rc::new("test.qur".to_string()));
    result.unwrap()
}

fn position() -> Position {
    Position::new(1, 1, Rc::new("test.qur".to_string()))
}

#[test]
fn test_print_function() {
    let program = build("fn int add(int a, int b) { return a + b; }");

    assert_eq!(
        program.print_tree(),
        indoc! {"
            Program
              Function(add) -> int
                Params:
                  Param(int a)
                  Param(int b)
                Body:
                  Return
                    BinaryOp(+)
                      Variable(a)
                      Variable(b)
        "}
    );
}

#[test]
fn test_print_declarations_and_assignment() {
    let program = build("double d = 1.5; string s; x += 1;");

    assert_eq!(
        program.print_tree(),
        indoc! {r#"
            Program
              VarDecl(double d)
                double(1.5)
              VarDecl(string s)
              ExprStatement
                AssignOp(+=)
                  Variable(x)
                  int(1)
        "#}
    );
}

#[test]
fn test_print_control_flow() {
    let program = build(indoc! {"
        if (done) { break; } else return;
        for (int i = 0; i < n; i++) { };
    "});

    assert_eq!(
        program.print_tree(),
        indoc! {"
            Program
              IfStatement
                Condition:
                  Variable(done)
                Then:
                  Block
                    Break
                Else:
                  Return
              ForLoop
                Init:
                  VarDecl(int i)
                    int(0)
                Condition:
                  BinaryOp(<)
                    Variable(i)
                    Variable(n)
                Increment:
                  UnaryOp(++ postfix)
                    Variable(i)
                Body:
        "}
    );
}

#[test]
fn test_print_while_call_and_literals() {
    let program = build(r#"while (!ok) { log("hi", 'c', true); continue; }; import a.b;"#);

    assert_eq!(
        program.print_tree(),
        indoc! {r#"
            Program
              WhileLoop
                Condition:
                  UnaryOp(!)
                    Variable(ok)
                Body:
                  ExprStatement
                    FnCall(log)
                      string("hi")
                      char('c')
                      bool(true)
                  Continue
              Import(a.b)
        "#}
    );
}

#[test]
fn test_program_display_matches_print_tree() {
    let program = build("int x = 5;");
    assert_eq!(format!("{}", program), program.print_tree());
}

#[test]
fn test_describe_expressions() {
    let one = Expr::Int(IntExpr {
        value: 5,
        position: position(),
    });
    assert_eq!(one.describe(), "INT literal: 5");

    let variable = Expr::Variable(VariableExpr {
        name: String::from("x"),
        position: position(),
    });
    assert_eq!(variable.describe(), "Variable reference: x");

    let sum = Expr::Binary(BinaryExpr {
        left: Box::new(one.clone()),
        operator: TokenKind::Plus,
        right: Box::new(variable.clone()),
        position: position(),
    });
    assert_eq!(sum.describe(), "Binary operation: +");

    let increment = Expr::Unary(UnaryExpr {
        operator: TokenKind::PlusPlus,
        operand: Box::new(variable),
        postfix: true,
        position: position(),
    });
    assert_eq!(increment.describe(), "Postfix unary operation: ++");
}

#[test]
fn test_describe_parsed_nodes() {
    let program = build("fn f() { } int x = f(1); if (x) { } else { } return x;");

    assert_eq!(program.describe(), "Program with 4 declaration(s)");
    assert_eq!(
        program.body[0].describe(),
        "Function declaration: f returning void"
    );
    assert_eq!(
        program.body[1].describe(),
        "Variable declaration: x of type int"
    );
    assert_eq!(program.body[2].describe(), "If statement with else branch");
    assert_eq!(program.body[3].describe(), "Return statement with value");

    match &program.body[1] {
        Stmt::VarDecl(decl) => assert_eq!(
            decl.assigned_value.as_ref().unwrap().describe(),
            "Function call: f with 1 argument(s)"
        ),
        other => panic!("expected variable declaration, got {:?}", other),
    }
}

#[test]
fn test_node_kinds_and_categories() {
    let program = build("fn f() { } int x; x = 1;");

    assert_eq!(program.kind(), NodeKind::Program);
    assert_eq!(program.kind().category(), NodeCategory::Program);
    assert_eq!(program.body[0].kind(), NodeKind::Function);
    assert_eq!(program.body[0].kind().category(), NodeCategory::Declaration);
    assert_eq!(program.body[1].kind(), NodeKind::VarDecl);
    assert_eq!(program.body[2].kind(), NodeKind::ExpressionStmt);
    assert_eq!(program.body[2].kind().category(), NodeCategory::Statement);

    match &program.body[2] {
        Stmt::Expression(stmt) => {
            assert_eq!(stmt.expression.kind(), NodeKind::AssignOp);
            assert_eq!(stmt.expression.kind().category(), NodeCategory::Expression);
        }
        other => panic!("expected expression statement, got {:?}", other),
    }

    let bare = Stmt::Return(ReturnStmt {
        value: None,
        position: position(),
    });
    assert_eq!(bare.kind(), NodeKind::Return);
    assert_eq!(bare.describe(), "Return statement");
}

#[test]
fn test_node_positions() {
    let program = build("int x;\n  y = 2;");

    assert_eq!(program.body[0].get_position().line, 1);
    assert_eq!(program.body[1].get_position().line, 2);
    assert_eq!(program.body[1].get_position().column, 3);
}

#[test]
fn test_var_type_from_token_kind() {
    assert_eq!(VarType::from_token_kind(TokenKind::Int), VarType::Int);
    assert_eq!(VarType::from_token_kind(TokenKind::Void), VarType::Void);
    assert_eq!(VarType::from_token_kind(TokenKind::Tuple), VarType::Inferred);
    assert_eq!(VarType::from_token_kind(TokenKind::Identifier), VarType::Inferred);
    assert_eq!(VarType::Boolean.to_string(), "boolean");
}
