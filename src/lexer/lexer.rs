use lazy_static::lazy_static;
use regex::Regex;

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"^\s+").unwrap();
    static ref IDENTIFIER: Regex = Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap();
    static ref NUMBER: Regex = Regex::new("^[0-9]+").unwrap();
    // Two-character operators must come before their one-character prefixes.
    static ref OPERATOR_PATTERNS: Vec<(Regex, TokenKind)> = vec![
        (Regex::new("^==").unwrap(), TokenKind::Eq),
        (Regex::new("^!=").unwrap(), TokenKind::NotEq),
        (Regex::new("^=").unwrap(), TokenKind::Assign),
        (Regex::new("^!").unwrap(), TokenKind::Negation),
        (Regex::new(r"^\+").unwrap(), TokenKind::Plus),
        (Regex::new("^-").unwrap(), TokenKind::Minus),
        (Regex::new("^/").unwrap(), TokenKind::Division),
        (Regex::new(r"^\*").unwrap(), TokenKind::Multiplication),
        (Regex::new("^<").unwrap(), TokenKind::Lt),
        (Regex::new("^>").unwrap(), TokenKind::Gt),
        (Regex::new(r"^\(").unwrap(), TokenKind::LParen),
        (Regex::new(r"^\)").unwrap(), TokenKind::RParen),
        (Regex::new(r"^\{").unwrap(), TokenKind::LBrace),
        (Regex::new(r"^\}").unwrap(), TokenKind::RBrace),
        (Regex::new("^,").unwrap(), TokenKind::Comma),
        (Regex::new("^;").unwrap(), TokenKind::Semicolon),
    ];
}

/// Pull-based tokenizer over a single source string.
///
/// Each call to [`Lexer::next_token`] produces one token and advances the
/// cursor. Once the source is exhausted every further call returns an
/// `Eof` token, so the lexer never fails: characters that match no pattern
/// come back as `Illegal` tokens carrying the offending character.
pub struct Lexer {
    source: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            // Char-addressed so multi-byte input degrades to Illegal
            // tokens rather than split bytes.
            source: source.chars().collect(),
            position: 0,
        }
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        if self.at_eof() {
            return Token::eof();
        }

        let remaining = self.remainder();

        if let Some(matched) = IDENTIFIER.find(&remaining) {
            let literal = matched.as_str().to_string();
            self.advance_n(literal.len());

            return match RESERVED_LOOKUP.get(literal.as_str()) {
                Some(kind) => Token::new(*kind, literal),
                None => Token::new(TokenKind::Ident, literal),
            };
        }

        if let Some(matched) = NUMBER.find(&remaining) {
            let literal = matched.as_str().to_string();
            self.advance_n(literal.len());

            return Token::new(TokenKind::Int, literal);
        }

        for (pattern, kind) in OPERATOR_PATTERNS.iter() {
            if let Some(matched) = pattern.find(&remaining) {
                let literal = matched.as_str().to_string();
                self.advance_n(literal.len());

                return Token::new(*kind, literal);
            }
        }

        let character = self.source[self.position];
        self.advance_n(1);

        Token::new(TokenKind::Illegal, character.to_string())
    }

    fn skip_whitespace(&mut self) {
        let remaining = self.remainder();
        if let Some(matched) = WHITESPACE.find(&remaining) {
            // \s matches non-ASCII whitespace, count chars rather than bytes.
            self.advance_n(matched.as_str().chars().count());
        }
    }

    fn remainder(&self) -> String {
        self.source[self.position..].iter().collect()
    }

    fn advance_n(&mut self, n: usize) {
        self.position += n;
    }

    fn at_eof(&self) -> bool {
        self.position >= self.source.len()
    }
}
