//! FILENAME: src/token.rs
//! PURPOSE: Token definitions for the expression lexer.
//! CONTEXT: Tokens are the atomic units produced by the lexer and consumed
//! by the parser. A token is its lexical category plus the literal text it
//! matched; named functions and constants (sin, pi, ...) are ordinary
//! identifiers here and are only given meaning by a downstream consumer.

use serde::{Deserialize, Serialize};

/// Lexical categories recognized by the lexer.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    // Special
    Illegal,
    EndOfInput,

    // Operators
    Plus,
    Minus,
    Times,
    Slash,
    Power,

    // Delimiters
    LParen,
    RParen,

    // Literals and names
    Identifier,
    Number,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Illegal => write!(f, "ILLEGAL"),
            TokenKind::EndOfInput => write!(f, "EOF"),
            TokenKind::Plus => write!(f, "+"),
            TokenKind::Minus => write!(f, "-"),
            TokenKind::Times => write!(f, "*"),
            TokenKind::Slash => write!(f, "/"),
            TokenKind::Power => write!(f, "^"),
            TokenKind::LParen => write!(f, "("),
            TokenKind::RParen => write!(f, ")"),
            TokenKind::Identifier => write!(f, "IDENT"),
            TokenKind::Number => write!(f, "NUMBER"),
        }
    }
}

/// A single lexical unit: a category plus the literal source text.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            kind,
            text: text.into(),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Identifier | TokenKind::Number => write!(f, "{}", self.text),
            TokenKind::Illegal => write!(f, "ILLEGAL({})", self.text),
            kind => write!(f, "{}", kind),
        }
    }
}
