//! FILENAME: src/ast.rs
//! PURPOSE: Defines the Abstract Syntax Tree (AST) for parsed expressions.
//! CONTEXT: After the Lexer tokenizes an expression string, the Parser
//! converts those tokens into this tree structure. A downstream consumer
//! (an evaluator, a differentiator, ...) then traverses the tree; no such
//! consumer lives in this crate.
//!
//! SUPPORTED EXPRESSIONS:
//! - Number literals: 5, 3.14
//! - Identifiers: x, y, sin (function names are plain identifiers)
//! - Named constants with a resolved value (built by consumers, not the parser)
//! - Unary prefix operations: -x
//! - Binary infix operations: +, -, *, /, ^
//! - Single-argument function calls: sin(x), sqrt(a + b)
//!
//! Trees are immutable once built: every node exclusively owns its children
//! and nothing is mutated after parsing. Displaying a node produces the
//! fully parenthesized textual form.

use serde::{Deserialize, Serialize};

/// A parsed expression. The variant set is closed; consumers can match
/// exhaustively.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub enum Expression {
    /// A literal number; `value` holds the parsed decimal value.
    NumberLiteral { value: f64 },

    /// A free variable or function name like x, y, or sqrt.
    Identifier { name: String },

    /// A named mathematical constant with its numeric value (pi, e).
    /// The parser never builds this variant; constants surface as plain
    /// identifiers until a consumer resolves them.
    Constant { name: String, value: f64 },

    /// A unary prefix operation like -5. `right` is absent when the
    /// operand failed to parse.
    Prefix {
        operator: String,
        right: Option<Box<Expression>>,
    },

    /// A binary infix operation like 2 + 3. `right` is absent when the
    /// right-hand operand failed to parse.
    Infix {
        left: Box<Expression>,
        operator: String,
        right: Option<Box<Expression>>,
    },

    /// A single-argument function application like sin(90). `argument` is
    /// absent for empty parentheses.
    FunctionCall {
        function: Box<Expression>,
        argument: Option<Box<Expression>>,
    },
}

/// Root node wrapping one complete parsed expression, or none if parsing
/// produced nothing.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Function {
    pub expression: Option<Expression>,
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::NumberLiteral { value } => write!(f, "{}", value),
            Expression::Identifier { name } => write!(f, "{}", name),
            Expression::Constant { name, .. } => write!(f, "{}", name),
            Expression::Prefix { operator, right } => {
                write!(f, "({}", operator)?;
                if let Some(right) = right {
                    write!(f, "{}", right)?;
                }
                write!(f, ")")
            }
            Expression::Infix {
                left,
                operator,
                right,
            } => {
                write!(f, "({} {} ", left, operator)?;
                if let Some(right) = right {
                    write!(f, "{}", right)?;
                }
                write!(f, ")")
            }
            Expression::FunctionCall { function, argument } => {
                write!(f, "{}(", function)?;
                if let Some(argument) = argument {
                    write!(f, "{}", argument)?;
                }
                write!(f, ")")
            }
        }
    }
}

impl std::fmt::Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.expression {
            Some(expression) => write!(f, "{}", expression),
            None => Ok(()),
        }
    }
}
