//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct. The parser pulls tokens
//! from the lexer on demand, keeping exactly one token of lookahead, and
//! uses a Pratt approach with prefix/infix handlers for expression parsing.
//!
//! It maintains lookup tables for:
//! - Prefix handlers for tokens in expression-start position
//! - Infix handlers for operator continuations
//! - Precedences (binding powers) of the infix operators
//!
//! Syntax errors are collected, never thrown: a failed statement is skipped
//! one token at a time and parsing continues with the rest of the input.

use std::collections::HashMap;

use crate::{
    ast::statements::Program,
    errors::errors::ParseError,
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::{
    lookups::{
        create_token_lookups, InfixHandler, InfixLookup, Precedence, PrecedenceLookup,
        PrefixHandler, PrefixLookup,
    },
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
///
/// This struct owns the lexer and a one-token lookahead buffer
/// (`current_token` + `peek_token`), the accumulated error list, and the
/// handler lookup tables. One parser serves exactly one parse of one
/// source string.
pub struct Parser {
    /// The token source
    lexer: Lexer,
    /// The token being processed
    current_token: Token,
    /// One token of lookahead beyond `current_token`
    peek_token: Token,
    /// Syntax errors collected so far, in source order
    errors: Vec<ParseError>,
    /// Lookup table for prefix (expression-start) handlers
    prefix_lookup: PrefixLookup,
    /// Lookup table for infix (operator continuation) handlers
    infix_lookup: InfixLookup,
    /// Lookup table for infix operator precedences
    precedence_lookup: PrecedenceLookup,
}

impl Parser {
    /// Creates a new Parser over the given lexer.
    ///
    /// Registers the handler lookup tables and loads the lookahead buffer,
    /// leaving the first token of the input in `current_token`.
    pub fn new(lexer: Lexer) -> Self {
        let mut parser = Parser {
            lexer,
            current_token: Token::eof(),
            peek_token: Token::eof(),
            errors: vec![],
            prefix_lookup: HashMap::new(),
            infix_lookup: HashMap::new(),
            precedence_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);

        // Fill current_token and peek_token.
        parser.advance();
        parser.advance();

        parser
    }

    /// Parses the whole input into a Program.
    ///
    /// Statements that fail to parse are dropped; their errors remain
    /// available through [`Parser::errors`]. The loop advances one token
    /// per iteration regardless of the outcome, which guarantees forward
    /// progress on arbitrary input.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program { statements: vec![] };

        while self.current_token_kind() != TokenKind::Eof {
            if let Some(statement) = parse_stmt(self) {
                program.statements.push(statement);
            }
            self.advance();
        }

        program
    }

    /// The syntax errors collected so far, in source order.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current_token
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token.kind
    }

    /// Returns the kind of the lookahead token.
    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek_token.kind
    }

    /// Shifts the lookahead buffer by one token.
    pub fn advance(&mut self) {
        self.current_token = std::mem::replace(&mut self.peek_token, self.lexer.next_token());
    }

    /// Expects the lookahead token to be of the specified kind.
    ///
    /// Advances past it and returns true on a match; otherwise records an
    /// `UnexpectedToken` error and returns false, leaving the buffer
    /// untouched so the caller can abort the statement.
    pub fn expected(&mut self, expected_kind: TokenKind) -> bool {
        if self.peek_token.kind == expected_kind {
            self.advance();
            return true;
        }

        self.errors.push(ParseError::UnexpectedToken {
            expected: expected_kind,
            actual: self.peek_token.kind,
        });
        false
    }

    /// Records a syntax error without interrupting the parse.
    pub fn push_error(&mut self, error: ParseError) {
        self.errors.push(error);
    }

    /// The precedence of the current token, Lowest when unregistered.
    pub fn current_precedence(&self) -> Precedence {
        *self
            .precedence_lookup
            .get(&self.current_token.kind)
            .unwrap_or(&Precedence::Lowest)
    }

    /// The precedence of the lookahead token, Lowest when unregistered.
    pub fn peek_precedence(&self) -> Precedence {
        *self
            .precedence_lookup
            .get(&self.peek_token.kind)
            .unwrap_or(&Precedence::Lowest)
    }

    /// Returns a reference to the prefix handler lookup table.
    pub fn get_prefix_lookup(&self) -> &PrefixLookup {
        &self.prefix_lookup
    }

    /// Returns a reference to the infix handler lookup table.
    pub fn get_infix_lookup(&self) -> &InfixLookup {
        &self.infix_lookup
    }

    /// Registers a prefix handler for a token.
    pub fn prefix(&mut self, kind: TokenKind, prefix_fn: PrefixHandler) {
        self.prefix_lookup.insert(kind, prefix_fn);
    }

    /// Registers an infix handler and its precedence for a token.
    pub fn infix(&mut self, kind: TokenKind, precedence: Precedence, infix_fn: InfixHandler) {
        self.precedence_lookup.insert(kind, precedence);
        self.infix_lookup.insert(kind, infix_fn);
    }
}
