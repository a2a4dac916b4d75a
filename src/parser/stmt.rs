use crate::{
    ast::{
        ast::StmtWrapper,
        expressions::SymbolExpr,
        statements::{ExpressionStmt, ReturnStmt, VarStmt},
    },
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, lookups::Precedence, parser::Parser};

pub fn parse_stmt(parser: &mut Parser) -> Option<StmtWrapper> {
    match parser.current_token_kind() {
        TokenKind::Var => parse_var_stmt(parser),
        TokenKind::Return => parse_return_stmt(parser),
        _ => parse_expression_stmt(parser),
    }
}

pub fn parse_var_stmt(parser: &mut Parser) -> Option<StmtWrapper> {
    let var_token = parser.current_token().clone();

    if !parser.expected(TokenKind::Ident) {
        return None;
    }
    let name_token = parser.current_token().clone();
    let name = SymbolExpr {
        value: name_token.literal.clone(),
        token: name_token,
    };

    if !parser.expected(TokenKind::Assign) {
        return None;
    }
    parser.advance();

    let value = parse_expr(parser, Precedence::Lowest);

    if parser.peek_token_kind() == TokenKind::Semicolon {
        parser.advance();
    }

    Some(StmtWrapper::new(VarStmt {
        token: var_token,
        name,
        value,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Option<StmtWrapper> {
    let return_token = parser.current_token().clone();
    parser.advance();

    let value = parse_expr(parser, Precedence::Lowest);

    if parser.peek_token_kind() == TokenKind::Semicolon {
        parser.advance();
    }

    Some(StmtWrapper::new(ReturnStmt {
        token: return_token,
        value,
    }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Option<StmtWrapper> {
    let token = parser.current_token().clone();

    let expression = parse_expr(parser, Precedence::Lowest);

    // The trailing semicolon is optional, REPL input often omits it.
    if parser.peek_token_kind() == TokenKind::Semicolon {
        parser.advance();
    }

    Some(StmtWrapper::new(ExpressionStmt { token, expression }))
}
