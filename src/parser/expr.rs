use crate::{
    ast::{
        ast::ExprWrapper,
        expressions::{BinaryExpr, IntegerExpr, PrefixExpr, SymbolExpr},
    },
    errors::errors::ParseError,
    lexer::tokens::TokenKind,
};

use super::{lookups::Precedence, parser::Parser};

/// Pratt expression parsing: prefix handler first, then fold in infix
/// operators while the peeked operator binds tighter than `precedence`.
///
/// Returns None when no expression could be built; the reason is already
/// in the parser's error list by then.
pub fn parse_expr(parser: &mut Parser, precedence: Precedence) -> Option<ExprWrapper> {
    let token_kind = parser.current_token_kind();
    if !parser.get_prefix_lookup().contains_key(&token_kind) {
        parser.push_error(ParseError::NoPrefixHandler {
            literal: parser.current_token().literal.clone(),
        });
        return None;
    }

    let prefix_fn = *parser.get_prefix_lookup().get(&token_kind).unwrap();
    let mut left = prefix_fn(parser)?;

    // A semicolon always terminates the expression; otherwise keep folding
    // while the peeked operator binds tighter than the caller's level.
    while parser.peek_token_kind() != TokenKind::Semicolon
        && precedence < parser.peek_precedence()
    {
        let peek_kind = parser.peek_token_kind();
        if !parser.get_infix_lookup().contains_key(&peek_kind) {
            return Some(left);
        }

        let infix_fn = *parser.get_infix_lookup().get(&peek_kind).unwrap();
        parser.advance();
        left = infix_fn(parser, left)?;
    }

    Some(left)
}

pub fn parse_symbol_expr(parser: &mut Parser) -> Option<ExprWrapper> {
    let token = parser.current_token().clone();

    Some(ExprWrapper::new(SymbolExpr {
        value: token.literal.clone(),
        token,
    }))
}

pub fn parse_integer_expr(parser: &mut Parser) -> Option<ExprWrapper> {
    let token = parser.current_token().clone();
    let result = token.literal.parse::<i64>();

    if result.is_err() {
        parser.push_error(ParseError::IntegerConversion {
            literal: token.literal,
        });
        return None;
    }

    Some(ExprWrapper::new(IntegerExpr {
        value: result.unwrap(),
        token,
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Option<ExprWrapper> {
    let operator_token = parser.current_token().clone();

    parser.advance();
    let right = parse_expr(parser, Precedence::Prefix)?;

    Some(ExprWrapper::new(PrefixExpr {
        operator: operator_token.literal.clone(),
        token: operator_token,
        right,
    }))
}

pub fn parse_binary_expr(parser: &mut Parser, left: ExprWrapper) -> Option<ExprWrapper> {
    let operator_token = parser.current_token().clone();
    // The right side parses at this operator's precedence: equal
    // precedence stops the inner loop, so chains fold to the left.
    let precedence = parser.current_precedence();

    parser.advance();
    let right = parse_expr(parser, precedence)?;

    Some(ExprWrapper::new(BinaryExpr {
        operator: operator_token.literal.clone(),
        token: operator_token,
        left,
        right,
    }))
}
