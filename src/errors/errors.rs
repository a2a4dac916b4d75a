use thiserror::Error;

use crate::lexer::tokens::TokenKind;

/// Syntactic failures collected by the parser.
///
/// Parsing never aborts on one of these: the parser records the error and
/// resumes at the next statement boundary. Lexical problems never show up
/// here at all, they surface as `Illegal` tokens instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("The expected token was {expected} but got {actual}")]
    UnexpectedToken {
        expected: TokenKind,
        actual: TokenKind,
    },
    #[error("Could not find any function for parsing {literal}")]
    NoPrefixHandler { literal: String },
    #[error("Error parsing {literal} as integer")]
    IntegerConversion { literal: String },
}
