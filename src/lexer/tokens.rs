use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("else", TokenKind::Else);
        map.insert("false", TokenKind::False);
        map.insert("func", TokenKind::Function);
        map.insert("if", TokenKind::If);
        map.insert("return", TokenKind::Return);
        map.insert("true", TokenKind::True);
        map.insert("var", TokenKind::Var);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Eof,
    Ident,
    Illegal,
    Int,

    LBrace,
    LParen,
    RBrace,
    RParen,

    Assign, // =
    Eq,     // ==
    Negation, // !
    NotEq,  // !=

    Lt,
    Gt,

    Semicolon,
    Comma,

    Plus,
    Minus,
    Multiplication,
    Division,

    // Reserved
    Else,
    False,
    Function,
    If,
    Return,
    True,
    Var,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Token {
        Token {
            kind,
            literal: literal.into(),
        }
    }

    /// End-of-input marker, literal is always empty.
    pub fn eof() -> Token {
        Token {
            kind: TokenKind::Eof,
            literal: String::new(),
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Type: {}, Literal: {}", self.kind, self.literal)
    }
}
