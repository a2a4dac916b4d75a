//! Unit tests for AST construction and rendering.

use crate::lexer::tokens::{Token, TokenKind};

use super::{
    ast::{Expr, ExprWrapper, Stmt, StmtWrapper},
    expressions::{BinaryExpr, IntegerExpr, PrefixExpr, SymbolExpr},
    statements::{Program, ReturnStmt, VarStmt},
};

fn symbol(name: &str) -> SymbolExpr {
    SymbolExpr {
        token: Token::new(TokenKind::Ident, name),
        value: name.to_string(),
    }
}

fn integer(value: i64) -> ExprWrapper {
    ExprWrapper::new(IntegerExpr {
        token: Token::new(TokenKind::Int, value.to_string()),
        value,
    })
}

#[test]
fn test_var_statement_render() {
    let program = Program {
        statements: vec![StmtWrapper::new(VarStmt {
            token: Token::new(TokenKind::Var, "var"),
            name: symbol("x"),
            value: Some(ExprWrapper::new(symbol("y"))),
        })],
    };

    assert_eq!(program.render(), "var x = y;");
}

#[test]
fn test_return_statement_render() {
    let program = Program {
        statements: vec![StmtWrapper::new(ReturnStmt {
            token: Token::new(TokenKind::Return, "return"),
            value: Some(ExprWrapper::new(symbol("x"))),
        })],
    };

    assert_eq!(program.render(), "return x;");
}

#[test]
fn test_program_token_literal() {
    let empty = Program { statements: vec![] };
    assert_eq!(empty.token_literal(), "");

    let program = Program {
        statements: vec![StmtWrapper::new(ReturnStmt {
            token: Token::new(TokenKind::Return, "return"),
            value: Some(integer(5)),
        })],
    };
    assert_eq!(program.token_literal(), "return");
}

#[test]
fn test_nested_expression_render() {
    // (-a) * b
    let expression = BinaryExpr {
        token: Token::new(TokenKind::Multiplication, "*"),
        left: ExprWrapper::new(PrefixExpr {
            token: Token::new(TokenKind::Minus, "-"),
            operator: "-".to_string(),
            right: ExprWrapper::new(symbol("a")),
        }),
        operator: "*".to_string(),
        right: ExprWrapper::new(symbol("b")),
    };

    assert_eq!(expression.render(), "((-a) * b)");
}

#[test]
fn test_statement_clone_is_deep() {
    let statement = StmtWrapper::new(VarStmt {
        token: Token::new(TokenKind::Var, "var"),
        name: symbol("x"),
        value: Some(integer(5)),
    });

    let cloned = statement.clone();

    assert_eq!(cloned.render(), statement.render());
    assert_eq!(cloned.token_literal(), "var");
}
