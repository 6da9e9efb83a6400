//! FILENAME: src/parser.rs
//! PURPOSE: Precedence-climbing (Pratt) parser that converts a stream of
//! Tokens into an AST.
//! CONTEXT: This is the second stage of the parsing pipeline. It pulls
//! tokens from the Lexer through a two-token lookahead buffer and builds an
//! Expression tree. Errors are accumulated, never thrown: parsing always
//! runs to completion and returns a best-effort tree, and the caller
//! inspects `errors()` to decide whether the result is usable.
//!
//! PRECEDENCE (higher binds tighter):
//!   Lowest < Sum (+ -) < Product (* /) < Power (^) < Prefix (unary -) < Call
//!
//! Each TokenKind owns at most one prefix production (the token begins an
//! expression) and one infix production (the token continues one). The
//! climbing loop recurses only while the next operator binds tighter than
//! the threshold passed down, which yields left associativity for chains of
//! equal precedence: a - b - c parses as (a - b) - c.

use crate::ast::{Expression, Function};
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};
use thiserror::Error;

/// Non-fatal errors accumulated across a parse.
#[derive(Debug, PartialEq, Clone, Error)]
pub enum ParseError {
    /// A Number token's text failed to convert to f64. Lexer-produced
    /// number text should always convert; the parser does not assume it.
    #[error("could not parse {literal:?} as a number")]
    NumberFormat { literal: String },

    /// An expected token (a closing parenthesis) was not at the lookahead
    /// position.
    #[error("expected next token to be {expected}, got {found} instead")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },

    /// A token with no prefix production sat where an expression was
    /// expected.
    #[error("no prefix parse rule for {found}")]
    MissingPrefix { found: TokenKind },

    /// Tokens remained after the one top-level expression.
    #[error("expected end of input, got {found} instead")]
    TrailingInput { found: TokenKind },
}

/// Binding strength of each operator, strongest last. The derived `Ord`
/// follows declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    Lowest,
    Sum,     // + -
    Product, // * /
    Power,   // ^
    Prefix,  // unary -
    Call,    // f(x)
}

impl Precedence {
    /// The precedence bound to a token kind in infix position. Kinds that
    /// never continue an expression bind at Lowest, which keeps the
    /// climbing loop from consuming them.
    fn of(kind: TokenKind) -> Precedence {
        match kind {
            TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
            TokenKind::Times | TokenKind::Slash => Precedence::Product,
            TokenKind::Power => Precedence::Power,
            TokenKind::LParen => Precedence::Call,
            _ => Precedence::Lowest,
        }
    }
}

/// The Parser holds the lexer, the two-token lookahead buffer, and the
/// accumulated errors.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    peek: Token,
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    /// Creates a parser over the given lexer and primes the lookahead
    /// buffer with the first two tokens.
    pub fn new(mut lexer: Lexer<'a>) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();
        Parser {
            lexer,
            current,
            peek,
            errors: Vec::new(),
        }
    }

    /// Parses exactly one expression and wraps it in the root node.
    /// Tokens left over after the expression are flagged, not consumed.
    pub fn parse_function(&mut self) -> Function {
        if self.current.kind == TokenKind::EndOfInput {
            return Function { expression: None };
        }

        let expression = self.parse_expression(Precedence::Lowest);

        if self.peek.kind != TokenKind::EndOfInput {
            self.errors.push(ParseError::TrailingInput {
                found: self.peek.kind,
            });
        }

        Function { expression }
    }

    /// The errors accumulated so far, in the order they occurred.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Consumes the parser and returns the accumulated errors.
    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    fn advance(&mut self) {
        self.current = std::mem::replace(&mut self.peek, self.lexer.next_token());
    }

    /// Core climbing loop. Parses a prefix expression for `current`, then
    /// keeps folding infix operators into it while the upcoming operator
    /// binds tighter than `min_precedence`.
    fn parse_expression(&mut self, min_precedence: Precedence) -> Option<Expression> {
        let mut left = self.parse_prefix()?;

        while self.peek.kind != TokenKind::EndOfInput
            && min_precedence < Precedence::of(self.peek.kind)
        {
            match self.peek.kind {
                TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Times
                | TokenKind::Slash
                | TokenKind::Power => {
                    self.advance();
                    left = self.parse_infix_expression(left);
                }
                // An opening parenthesis right after a parsed expression is
                // a function call, not grouping.
                TokenKind::LParen => {
                    self.advance();
                    left = self.parse_call_expression(left);
                }
                _ => return Some(left),
            }
        }

        Some(left)
    }

    /// Dispatches on `current` to the production that can begin an
    /// expression. Records a MissingPrefix error for kinds that cannot.
    fn parse_prefix(&mut self) -> Option<Expression> {
        match self.current.kind {
            TokenKind::Number => self.parse_number_literal(),
            TokenKind::Identifier => Some(Expression::Identifier {
                name: self.current.text.clone(),
            }),
            TokenKind::Minus => Some(self.parse_prefix_expression()),
            TokenKind::LParen => self.parse_grouped_expression(),
            kind => {
                self.errors.push(ParseError::MissingPrefix { found: kind });
                None
            }
        }
    }

    fn parse_number_literal(&mut self) -> Option<Expression> {
        match self.current.text.parse::<f64>() {
            Ok(value) => Some(Expression::NumberLiteral { value }),
            Err(_) => {
                self.errors.push(ParseError::NumberFormat {
                    literal: self.current.text.clone(),
                });
                None
            }
        }
    }

    fn parse_prefix_expression(&mut self) -> Expression {
        let operator = self.current.text.clone();
        self.advance();
        let right = self.parse_expression(Precedence::Prefix);

        Expression::Prefix {
            operator,
            right: right.map(Box::new),
        }
    }

    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.advance();
        let expression = self.parse_expression(Precedence::Lowest);

        if self.expect_peek(TokenKind::RParen) {
            expression
        } else {
            None
        }
    }

    fn parse_infix_expression(&mut self, left: Expression) -> Expression {
        let operator = self.current.text.clone();
        let precedence = Precedence::of(self.current.kind);
        self.advance();
        // Parsing the right operand at the operator's own precedence,
        // combined with the strict `<` in the climbing loop, makes chains
        // of equal precedence left-associative.
        let right = self.parse_expression(precedence);

        Expression::Infix {
            left: Box::new(left),
            operator,
            right: right.map(Box::new),
        }
    }

    /// `current` is the opening parenthesis of a call; `function` is the
    /// already-parsed callee.
    fn parse_call_expression(&mut self, function: Expression) -> Expression {
        let argument = self.parse_call_argument();

        Expression::FunctionCall {
            function: Box::new(function),
            argument: argument.map(Box::new),
        }
    }

    /// Parses the single call argument. Empty parentheses yield no
    /// argument; otherwise one expression is parsed at Lowest and the
    /// closing parenthesis is required.
    fn parse_call_argument(&mut self) -> Option<Expression> {
        if self.peek.kind == TokenKind::RParen {
            self.advance();
            return None;
        }

        self.advance();
        let argument = self.parse_expression(Precedence::Lowest);

        if self.expect_peek(TokenKind::RParen) {
            argument
        } else {
            None
        }
    }

    /// If `peek` has the expected kind, advances and returns true.
    /// Otherwise records an UnexpectedToken error and leaves the cursor
    /// where it is.
    fn expect_peek(&mut self, expected: TokenKind) -> bool {
        if self.peek.kind == expected {
            self.advance();
            true
        } else {
            self.errors.push(ParseError::UnexpectedToken {
                expected,
                found: self.peek.kind,
            });
            false
        }
    }
}

/// Convenience entry point: lexes and parses `input` in one call.
/// Returns the root node if no errors were recorded, the error list
/// otherwise.
pub fn parse(input: &str) -> Result<Function, Vec<ParseError>> {
    let mut parser = Parser::new(Lexer::new(input));
    let function = parser.parse_function();
    let errors = parser.into_errors();

    if errors.is_empty() {
        Ok(function)
    } else {
        Err(errors)
    }
}
