//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer literals
//! - One- and two-character operators
//! - Delimiters
//! - Illegal characters and end-of-input behavior

use super::{
    lexer::Lexer,
    tokens::{Token, TokenKind},
};

fn read_tokens(source: &str, count: usize) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    (0..count).map(|_| lexer.next_token()).collect()
}

#[test]
fn test_illegal_characters() {
    let tokens = read_tokens("¡¿@", 3);

    let expected_tokens = vec![
        Token::new(TokenKind::Illegal, "¡"),
        Token::new(TokenKind::Illegal, "¿"),
        Token::new(TokenKind::Illegal, "@"),
    ];

    assert_eq!(tokens, expected_tokens);
}

#[test]
fn test_one_character_operators() {
    let tokens = read_tokens("=+-/*<>!", 8);

    let expected_tokens = vec![
        Token::new(TokenKind::Assign, "="),
        Token::new(TokenKind::Plus, "+"),
        Token::new(TokenKind::Minus, "-"),
        Token::new(TokenKind::Division, "/"),
        Token::new(TokenKind::Multiplication, "*"),
        Token::new(TokenKind::Lt, "<"),
        Token::new(TokenKind::Gt, ">"),
        Token::new(TokenKind::Negation, "!"),
    ];

    assert_eq!(tokens, expected_tokens);
}

#[test]
fn test_eof() {
    let tokens = read_tokens("+", 2);

    let expected_tokens = vec![Token::new(TokenKind::Plus, "+"), Token::eof()];

    assert_eq!(tokens, expected_tokens);
}

#[test]
fn test_eof_is_idempotent() {
    let mut lexer = Lexer::new("");

    for _ in 0..4 {
        assert_eq!(lexer.next_token(), Token::eof());
    }
}

#[test]
fn test_delimiters() {
    let tokens = read_tokens("(){},;", 6);

    let expected_tokens = vec![
        Token::new(TokenKind::LParen, "("),
        Token::new(TokenKind::RParen, ")"),
        Token::new(TokenKind::LBrace, "{"),
        Token::new(TokenKind::RBrace, "}"),
        Token::new(TokenKind::Comma, ","),
        Token::new(TokenKind::Semicolon, ";"),
    ];

    assert_eq!(tokens, expected_tokens);
}

#[test]
fn test_assignment() {
    let tokens = read_tokens("var num = 5;", 5);

    let expected_tokens = vec![
        Token::new(TokenKind::Var, "var"),
        Token::new(TokenKind::Ident, "num"),
        Token::new(TokenKind::Assign, "="),
        Token::new(TokenKind::Int, "5"),
        Token::new(TokenKind::Semicolon, ";"),
    ];

    assert_eq!(tokens, expected_tokens);
}

#[test]
fn test_function_declaration() {
    let source = "
        var res = func(x, y) {
            x + y;
        };
    ";
    let tokens = read_tokens(source, 16);

    let expected_tokens = vec![
        Token::new(TokenKind::Var, "var"),
        Token::new(TokenKind::Ident, "res"),
        Token::new(TokenKind::Assign, "="),
        Token::new(TokenKind::Function, "func"),
        Token::new(TokenKind::LParen, "("),
        Token::new(TokenKind::Ident, "x"),
        Token::new(TokenKind::Comma, ","),
        Token::new(TokenKind::Ident, "y"),
        Token::new(TokenKind::RParen, ")"),
        Token::new(TokenKind::LBrace, "{"),
        Token::new(TokenKind::Ident, "x"),
        Token::new(TokenKind::Plus, "+"),
        Token::new(TokenKind::Ident, "y"),
        Token::new(TokenKind::Semicolon, ";"),
        Token::new(TokenKind::RBrace, "}"),
        Token::new(TokenKind::Semicolon, ";"),
    ];

    assert_eq!(tokens, expected_tokens);
}

#[test]
fn test_function_call() {
    let tokens = read_tokens("var res = sum(x, y);", 10);

    let expected_tokens = vec![
        Token::new(TokenKind::Var, "var"),
        Token::new(TokenKind::Ident, "res"),
        Token::new(TokenKind::Assign, "="),
        Token::new(TokenKind::Ident, "sum"),
        Token::new(TokenKind::LParen, "("),
        Token::new(TokenKind::Ident, "x"),
        Token::new(TokenKind::Comma, ","),
        Token::new(TokenKind::Ident, "y"),
        Token::new(TokenKind::RParen, ")"),
        Token::new(TokenKind::Semicolon, ";"),
    ];

    assert_eq!(tokens, expected_tokens);
}

#[test]
fn test_control_statement() {
    let source = "
        if (5 < 10) {
            return true;
        } else {
            return false;
        }
    ";
    let tokens = read_tokens(source, 17);

    let expected_tokens = vec![
        Token::new(TokenKind::If, "if"),
        Token::new(TokenKind::LParen, "("),
        Token::new(TokenKind::Int, "5"),
        Token::new(TokenKind::Lt, "<"),
        Token::new(TokenKind::Int, "10"),
        Token::new(TokenKind::RParen, ")"),
        Token::new(TokenKind::LBrace, "{"),
        Token::new(TokenKind::Return, "return"),
        Token::new(TokenKind::True, "true"),
        Token::new(TokenKind::Semicolon, ";"),
        Token::new(TokenKind::RBrace, "}"),
        Token::new(TokenKind::Else, "else"),
        Token::new(TokenKind::LBrace, "{"),
        Token::new(TokenKind::Return, "return"),
        Token::new(TokenKind::False, "false"),
        Token::new(TokenKind::Semicolon, ";"),
        Token::new(TokenKind::RBrace, "}"),
    ];

    assert_eq!(tokens, expected_tokens);
}

#[test]
fn test_two_character_operators() {
    let source = "
        10 == 10;
        10 != 9;
    ";
    let tokens = read_tokens(source, 8);

    let expected_tokens = vec![
        Token::new(TokenKind::Int, "10"),
        Token::new(TokenKind::Eq, "=="),
        Token::new(TokenKind::Int, "10"),
        Token::new(TokenKind::Semicolon, ";"),
        Token::new(TokenKind::Int, "10"),
        Token::new(TokenKind::NotEq, "!="),
        Token::new(TokenKind::Int, "9"),
        Token::new(TokenKind::Semicolon, ";"),
    ];

    assert_eq!(tokens, expected_tokens);
}

#[test]
fn test_identifiers_with_digits_and_underscores() {
    let tokens = read_tokens("var num_1 = 10;", 5);

    let expected_tokens = vec![
        Token::new(TokenKind::Var, "var"),
        Token::new(TokenKind::Ident, "num_1"),
        Token::new(TokenKind::Assign, "="),
        Token::new(TokenKind::Int, "10"),
        Token::new(TokenKind::Semicolon, ";"),
    ];

    assert_eq!(tokens, expected_tokens);
}

#[test]
fn test_whitespace_handling() {
    let tokens = read_tokens("  var \t x \n =  42  ", 5);

    let expected_tokens = vec![
        Token::new(TokenKind::Var, "var"),
        Token::new(TokenKind::Ident, "x"),
        Token::new(TokenKind::Assign, "="),
        Token::new(TokenKind::Int, "42"),
        Token::eof(),
    ];

    assert_eq!(tokens, expected_tokens);
}

#[test]
fn test_token_display() {
    let token = Token::new(TokenKind::Var, "var");

    assert_eq!(token.to_string(), "Type: Var, Literal: var");
}
