//! AST module for the Monkey language
//!
//! This module provides the node model a recursive-descent parser builds,
//! and the canonical rendering every node produces through `Display`.
//!
//! The tree is split into two closed families, [`Statement`] and
//! [`Expression`], rooted at a [`Program`]. Every node owns its children
//! exclusively and is never mutated after construction.

// ============================================================================
// IMPORTS
// ============================================================================

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::token::Token;

// ============================================================================
// MODULE EXPORTS
// ============================================================================

pub mod builder;
pub mod expression;
pub mod statement;

pub use expression::{
    ArrayLiteral, BooleanLiteral, CallExpression, FunctionLiteral, HashLiteral, HashPair,
    Identifier, IfExpression, IndexExpression, InfixExpression, IntegerLiteral, PrefixExpression,
    StringLiteral,
};
pub use statement::{BlockStatement, ExpressionStatement, LetStatement, ReturnStatement};

// ============================================================================
// NODE CAPABILITY
// ============================================================================

/// Capability shared by every tree element.
///
/// The canonical reconstruction is the node's `Display` output, so
/// `node.to_string()` is the rendering.
pub trait Node: fmt::Display {
    /// Literal text of the token that introduced this node.
    fn token_literal(&self) -> &str;
}

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// One parsed compilation unit.
///
/// # Examples
///
/// ```rust
/// use monkey_ast::ast::{Node, Program};
/// use monkey_ast::ast::builder::{ident, int, let_stmt};
/// let empty = Program::default();
/// assert_eq!(empty.token_literal(), "");
///
/// let program = Program::new(vec![let_stmt(ident("x"), Some(int(5)))]);
/// assert_eq!(program.token_literal(), "let");
/// assert_eq!(program.to_string(), "let x = 5;");
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Program {
    pub statements: Vec<Statement>,
}

/// Block-level and top-level constructs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum Statement {
    Let(LetStatement),
    Return(ReturnStatement),
    Expression(ExpressionStatement),
    Block(BlockStatement),
}

/// Value-producing constructs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum Expression {
    Identifier(Identifier),
    Integer(IntegerLiteral),
    Boolean(BooleanLiteral),
    String(StringLiteral),
    Prefix(PrefixExpression),
    Infix(InfixExpression),
    If(IfExpression),
    Function(FunctionLiteral),
    Call(CallExpression),
    Array(ArrayLiteral),
    Index(IndexExpression),
    Hash(HashLiteral),
}

// ============================================================================
// PUBLIC API IMPLEMENTATION
// ============================================================================

impl Program {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }
}

impl Node for Program {
    fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map(|stmt| stmt.token_literal())
            .unwrap_or("")
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.statements
            .iter()
            .try_for_each(|stmt| write!(f, "{}", stmt))
    }
}

impl Statement {
    /// The defining token of the wrapped statement.
    pub fn token(&self) -> &Token {
        match self {
            Statement::Let(stmt) => &stmt.token,
            Statement::Return(stmt) => &stmt.token,
            Statement::Expression(stmt) => &stmt.token,
            Statement::Block(stmt) => &stmt.token,
        }
    }
}

impl Node for Statement {
    fn token_literal(&self) -> &str {
        &self.token().literal
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let(stmt) => fmt::Display::fmt(stmt, f),
            Statement::Return(stmt) => fmt::Display::fmt(stmt, f),
            Statement::Expression(stmt) => fmt::Display::fmt(stmt, f),
            Statement::Block(stmt) => fmt::Display::fmt(stmt, f),
        }
    }
}

impl Expression {
    /// The defining token of the wrapped expression.
    pub fn token(&self) -> &Token {
        match self {
            Expression::Identifier(expr) => &expr.token,
            Expression::Integer(expr) => &expr.token,
            Expression::Boolean(expr) => &expr.token,
            Expression::String(expr) => &expr.token,
            Expression::Prefix(expr) => &expr.token,
            Expression::Infix(expr) => &expr.token,
            Expression::If(expr) => &expr.token,
            Expression::Function(expr) => &expr.token,
            Expression::Call(expr) => &expr.token,
            Expression::Array(expr) => &expr.token,
            Expression::Index(expr) => &expr.token,
            Expression::Hash(expr) => &expr.token,
        }
    }
}

impl Node for Expression {
    fn token_literal(&self) -> &str {
        &self.token().literal
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(expr) => fmt::Display::fmt(expr, f),
            Expression::Integer(expr) => fmt::Display::fmt(expr, f),
            Expression::Boolean(expr) => fmt::Display::fmt(expr, f),
            Expression::String(expr) => fmt::Display::fmt(expr, f),
            Expression::Prefix(expr) => fmt::Display::fmt(expr, f),
            Expression::Infix(expr) => fmt::Display::fmt(expr, f),
            Expression::If(expr) => fmt::Display::fmt(expr, f),
            Expression::Function(expr) => fmt::Display::fmt(expr, f),
            Expression::Call(expr) => fmt::Display::fmt(expr, f),
            Expression::Array(expr) => fmt::Display::fmt(expr, f),
            Expression::Index(expr) => fmt::Display::fmt(expr, f),
            Expression::Hash(expr) => fmt::Display::fmt(expr, f),
        }
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

macro_rules! impl_into_expression {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Expression {
                fn from(expr: $ty) -> Self {
                    Expression::$variant(expr)
                }
            }
        )*
    };
}

impl_into_expression! {
    Identifier => Identifier,
    IntegerLiteral => Integer,
    BooleanLiteral => Boolean,
    StringLiteral => String,
    PrefixExpression => Prefix,
    InfixExpression => Infix,
    IfExpression => If,
    FunctionLiteral => Function,
    CallExpression => Call,
    ArrayLiteral => Array,
    IndexExpression => Index,
    HashLiteral => Hash,
}

impl From<LetStatement> for Statement {
    fn from(stmt: LetStatement) -> Self {
        Statement::Let(stmt)
    }
}

impl From<ReturnStatement> for Statement {
    fn from(stmt: ReturnStatement) -> Self {
        Statement::Return(stmt)
    }
}

impl From<ExpressionStatement> for Statement {
    fn from(stmt: ExpressionStatement) -> Self {
        Statement::Expression(stmt)
    }
}

impl From<BlockStatement> for Statement {
    fn from(stmt: BlockStatement) -> Self {
        Statement::Block(stmt)
    }
}

// ============================================================================
// RENDERING HELPERS
// ============================================================================

/// Writes `items` separated by `", "`; an empty sequence writes nothing.
pub fn fmt_joined<I>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Joined<'a>(&'a [&'a str]);

    impl fmt::Display for Joined<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            fmt_joined(f, self.0.iter())
        }
    }

    #[test]
    fn test_fmt_joined_empty() {
        assert_eq!(Joined(&[]).to_string(), "");
    }

    #[test]
    fn test_fmt_joined_separator() {
        assert_eq!(Joined(&["a"]).to_string(), "a");
        assert_eq!(Joined(&["a", "b", "c"]).to_string(), "a, b, c");
    }
}
