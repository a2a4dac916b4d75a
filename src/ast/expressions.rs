use std::any::Any;

use crate::lexer::tokens::Token;

use super::ast::{Expr, ExprType, ExprWrapper};

// LITERALS

/// Symbol Expression
/// Represents an identifier in the AST.
#[derive(Debug, Clone)]
pub struct SymbolExpr {
    pub token: Token,
    pub value: String,
}

impl Expr for SymbolExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Symbol
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn token_literal(&self) -> String {
        self.token.literal.clone()
    }
    fn render(&self) -> String {
        self.value.clone()
    }
}

/// Integer Expression
/// Represents an integer literal in the AST.
#[derive(Debug, Clone)]
pub struct IntegerExpr {
    pub token: Token,
    pub value: i64,
}

impl Expr for IntegerExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Integer
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn token_literal(&self) -> String {
        self.token.literal.clone()
    }
    fn render(&self) -> String {
        self.value.to_string()
    }
}

// COMPLEX

/// Prefix Expression
/// Represents a prefix operation on an expression in the AST.
#[derive(Debug, Clone)]
pub struct PrefixExpr {
    pub token: Token,
    pub operator: String,
    pub right: ExprWrapper,
}

impl Expr for PrefixExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Prefix
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn token_literal(&self) -> String {
        self.token.literal.clone()
    }
    fn render(&self) -> String {
        format!("({}{})", self.operator, self.right.render())
    }
}

/// Binary Expression
/// Represents an infix operation between two expressions in the AST.
#[derive(Debug, Clone)]
pub struct BinaryExpr {
    pub token: Token,
    pub left: ExprWrapper,
    pub operator: String,
    pub right: ExprWrapper,
}

impl Expr for BinaryExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Binary
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn token_literal(&self) -> String {
        self.token.literal.clone()
    }
    fn render(&self) -> String {
        format!(
            "({} {} {})",
            self.left.render(),
            self.operator,
            self.right.render()
        )
    }
}
