//! Lexical analysis module for the interpreter.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Pull-based tokenization, one token per call
//! - Recognition of keywords, identifiers, literals, and operators
//! - One character of lookahead for `==` and `!=`
//! - Illegal-character tokens instead of lexing failures

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
