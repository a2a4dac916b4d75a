use std::collections::HashMap;

use crate::{ast::ast::ExprWrapper, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser};

/// Infix operator precedences, lowest binds weakest.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum Precedence {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
}

pub type PrefixHandler = fn(&mut Parser) -> Option<ExprWrapper>;
pub type InfixHandler = fn(&mut Parser, ExprWrapper) -> Option<ExprWrapper>;

// Lookup tables inside parser struct, so it's easier
pub type PrefixLookup = HashMap<TokenKind, PrefixHandler>;
pub type InfixLookup = HashMap<TokenKind, InfixHandler>;
pub type PrecedenceLookup = HashMap<TokenKind, Precedence>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Equality
    parser.infix(TokenKind::Eq, Precedence::Equals, parse_binary_expr);
    parser.infix(TokenKind::NotEq, Precedence::Equals, parse_binary_expr);

    // Relational
    parser.infix(TokenKind::Lt, Precedence::LessGreater, parse_binary_expr);
    parser.infix(TokenKind::Gt, Precedence::LessGreater, parse_binary_expr);

    // Additive and multiplicative
    parser.infix(TokenKind::Plus, Precedence::Sum, parse_binary_expr);
    parser.infix(TokenKind::Minus, Precedence::Sum, parse_binary_expr);
    parser.infix(
        TokenKind::Multiplication,
        Precedence::Product,
        parse_binary_expr,
    );
    parser.infix(TokenKind::Division, Precedence::Product, parse_binary_expr);

    // Literals and symbols
    parser.prefix(TokenKind::Ident, parse_symbol_expr);
    parser.prefix(TokenKind::Int, parse_integer_expr);
    parser.prefix(TokenKind::Minus, parse_prefix_expr);
    parser.prefix(TokenKind::Negation, parse_prefix_expr);
}
