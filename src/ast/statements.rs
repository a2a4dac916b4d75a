use std::{
    any::Any,
    slice::{Iter, IterMut},
};

use crate::lexer::tokens::Token;

use super::{
    ast::{Expr, ExprWrapper, Stmt, StmtType, StmtWrapper},
    expressions::SymbolExpr,
};

/// The root of every parse: the ordered list of top-level statements.
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub statements: Vec<StmtWrapper>,
}

impl Program {
    pub fn iter(&self) -> Iter<'_, StmtWrapper> {
        self.statements.iter()
    }
    pub fn iter_mut(&mut self) -> IterMut<'_, StmtWrapper> {
        self.statements.iter_mut()
    }

    /// The literal of the first statement's originating token, or an empty
    /// string for an empty program.
    pub fn token_literal(&self) -> String {
        match self.statements.first() {
            Some(statement) => statement.token_literal(),
            None => String::new(),
        }
    }

    /// Concatenates the rendering of every statement, in parse order.
    pub fn render(&self) -> String {
        self.statements
            .iter()
            .map(|statement| statement.render())
            .collect()
    }
}

/// Var Statement
///
/// example: var x = 10;
/// var -> token
/// x -> name
/// 10 -> value
#[derive(Debug)]
pub struct VarStmt {
    pub token: Token,
    pub name: SymbolExpr,
    // None only when the value failed to parse.
    pub value: Option<ExprWrapper>,
}

impl Stmt for VarStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::VarStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(VarStmt {
            token: self.token.clone(),
            name: self.name.clone(),
            value: self.value.as_ref().map(|value| value.clone_wrapper()),
        })
    }
    fn token_literal(&self) -> String {
        self.token.literal.clone()
    }
    fn render(&self) -> String {
        format!(
            "{} {} = {};",
            self.token_literal(),
            self.name.render(),
            render_optional(&self.value)
        )
    }
}

/// Return Statement
///
/// example: return 10;
/// return -> token
/// 10 -> value
#[derive(Debug)]
pub struct ReturnStmt {
    pub token: Token,
    pub value: Option<ExprWrapper>,
}

impl Stmt for ReturnStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::ReturnStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(ReturnStmt {
            token: self.token.clone(),
            value: self.value.as_ref().map(|value| value.clone_wrapper()),
        })
    }
    fn token_literal(&self) -> String {
        self.token.literal.clone()
    }
    fn render(&self) -> String {
        format!("{} {};", self.token_literal(), render_optional(&self.value))
    }
}

/// Expression Statement
///
/// A bare expression at statement position, REPL style.
///
/// example: 5 + 5;
#[derive(Debug)]
pub struct ExpressionStmt {
    pub token: Token,
    pub expression: Option<ExprWrapper>,
}

impl Stmt for ExpressionStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::ExpressionStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(ExpressionStmt {
            token: self.token.clone(),
            expression: self
                .expression
                .as_ref()
                .map(|expression| expression.clone_wrapper()),
        })
    }
    fn token_literal(&self) -> String {
        self.token.literal.clone()
    }
    fn render(&self) -> String {
        render_optional(&self.expression)
    }
}

fn render_optional(expression: &Option<ExprWrapper>) -> String {
    match expression {
        Some(expression) => expression.render(),
        None => String::new(),
    }
}
