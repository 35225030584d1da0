//! Expression nodes.
//!
//! Operator nodes always render fully parenthesized, so the flat text keeps
//! the grouping the tree encodes: `1 + 2 * 3` renders as `(1 + (2 * 3))`.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{fmt_joined, BlockStatement, Expression, Node};
use crate::token::Token;

// ============================================================================
// LEAF NODES
// ============================================================================

/// A name reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identifier {
    pub token: Token,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegerLiteral {
    pub token: Token,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BooleanLiteral {
    pub token: Token,
    pub value: bool,
}

/// A string constant. The value is stored without its quotes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringLiteral {
    pub token: Token,
    pub value: String,
}

// ============================================================================
// COMPOSITE NODES
// ============================================================================

/// `<operator><right>`, e.g. `-a` or `!ok`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrefixExpression {
    pub token: Token,
    pub operator: String,
    pub right: Box<Expression>,
}

/// `<left> <operator> <right>`.
///
/// # Examples
///
/// ```rust
/// use monkey_ast::ast::builder::{infix, int};
/// let expr = infix(int(1), "+", infix(int(2), "*", int(3)));
/// assert_eq!(expr.to_string(), "(1 + (2 * 3))");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfixExpression {
    pub token: Token,
    pub left: Box<Expression>,
    pub operator: String,
    pub right: Box<Expression>,
}

/// `if (<condition>) { <consequence> } else { <alternative> }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfExpression {
    pub token: Token,
    pub condition: Box<Expression>,
    pub consequence: BlockStatement,
    #[serde(default)]
    pub alternative: Option<BlockStatement>,
}

/// `fn(<parameters>) { <body> }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionLiteral {
    pub token: Token,
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
}

/// `<function>(<arguments>)`. The callee is an identifier or a function literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallExpression {
    pub token: Token,
    pub function: Box<Expression>,
    pub arguments: Vec<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayLiteral {
    pub token: Token,
    pub elements: Vec<Expression>,
}

/// `<left>[<index>]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexExpression {
    pub token: Token,
    pub left: Box<Expression>,
    pub index: Box<Expression>,
}

/// One `key: value` entry of a hash literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HashPair {
    pub key: Expression,
    pub value: Expression,
}

/// `{<key>: <value>, ...}`.
///
/// Pairs are kept in source order, which is also the rendering order.
///
/// # Examples
///
/// ```rust
/// use monkey_ast::ast::builder::{hash, int, string};
/// let expr = hash(vec![(string("one"), int(1)), (string("two"), int(2))]);
/// assert_eq!(expr.to_string(), "{one: 1, two: 2}");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HashLiteral {
    pub token: Token,
    pub pairs: Vec<HashPair>,
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl Identifier {
    pub fn new(token: Token, value: impl Into<String>) -> Self {
        Self {
            token,
            value: value.into(),
        }
    }
}

impl IntegerLiteral {
    pub fn new(token: Token, value: i64) -> Self {
        Self { token, value }
    }
}

impl BooleanLiteral {
    pub fn new(token: Token, value: bool) -> Self {
        Self { token, value }
    }
}

impl StringLiteral {
    pub fn new(token: Token, value: impl Into<String>) -> Self {
        Self {
            token,
            value: value.into(),
        }
    }
}

impl PrefixExpression {
    pub fn new(token: Token, operator: impl Into<String>, right: Expression) -> Self {
        Self {
            token,
            operator: operator.into(),
            right: Box::new(right),
        }
    }
}

impl InfixExpression {
    pub fn new(
        token: Token,
        left: Expression,
        operator: impl Into<String>,
        right: Expression,
    ) -> Self {
        Self {
            token,
            left: Box::new(left),
            operator: operator.into(),
            right: Box::new(right),
        }
    }
}

impl IfExpression {
    pub fn new(
        token: Token,
        condition: Expression,
        consequence: BlockStatement,
        alternative: Option<BlockStatement>,
    ) -> Self {
        Self {
            token,
            condition: Box::new(condition),
            consequence,
            alternative,
        }
    }
}

impl FunctionLiteral {
    pub fn new(token: Token, parameters: Vec<Identifier>, body: BlockStatement) -> Self {
        Self {
            token,
            parameters,
            body,
        }
    }
}

impl CallExpression {
    pub fn new(token: Token, function: Expression, arguments: Vec<Expression>) -> Self {
        Self {
            token,
            function: Box::new(function),
            arguments,
        }
    }
}

impl ArrayLiteral {
    pub fn new(token: Token, elements: Vec<Expression>) -> Self {
        Self { token, elements }
    }
}

impl IndexExpression {
    pub fn new(token: Token, left: Expression, index: Expression) -> Self {
        Self {
            token,
            left: Box::new(left),
            index: Box::new(index),
        }
    }
}

impl HashPair {
    pub fn new(key: Expression, value: Expression) -> Self {
        Self { key, value }
    }
}

impl HashLiteral {
    pub fn new(token: Token, pairs: Vec<HashPair>) -> Self {
        Self { token, pairs }
    }
}

// ============================================================================
// NODE CAPABILITY
// ============================================================================

macro_rules! impl_node {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Node for $ty {
                fn token_literal(&self) -> &str {
                    &self.token.literal
                }
            }
        )*
    };
}

impl_node!(
    Identifier,
    IntegerLiteral,
    BooleanLiteral,
    StringLiteral,
    PrefixExpression,
    InfixExpression,
    IfExpression,
    FunctionLiteral,
    CallExpression,
    ArrayLiteral,
    IndexExpression,
    HashLiteral,
);

// ============================================================================
// RENDERING
// ============================================================================

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl fmt::Display for IntegerLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl fmt::Display for BooleanLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl fmt::Display for StringLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl fmt::Display for PrefixExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}{})", self.operator, self.right)
    }
}

impl fmt::Display for InfixExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}

impl fmt::Display for IfExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "if{} {}", self.condition, self.consequence)?;
        if let Some(alternative) = &self.alternative {
            write!(f, "else {}", alternative)?;
        }
        Ok(())
    }
}

impl fmt::Display for FunctionLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.token_literal())?;
        fmt_joined(f, &self.parameters)?;
        write!(f, "){}", self.body)
    }
}

impl fmt::Display for CallExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.function)?;
        fmt_joined(f, &self.arguments)?;
        f.write_str(")")
    }
}

impl fmt::Display for ArrayLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        fmt_joined(f, &self.elements)?;
        f.write_str("]")
    }
}

impl fmt::Display for IndexExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}[{}])", self.left, self.index)
    }
}

impl fmt::Display for HashPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.value)
    }
}

impl fmt::Display for HashLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        fmt_joined(f, &self.pairs)?;
        f.write_str("}")
    }
}
