//! # AST Builder Module
//!
//! Terse constructors that synthesize the defining token the parser would
//! have attached to each node. Used by tests and tools that assemble trees
//! by hand.
//!
//! Token conventions follow the parser: the operator token for prefix and
//! infix expressions, `(` for calls, `[` for arrays and indexing, `{` for
//! hashes and blocks, and the first token of the expression for expression
//! statements.

use super::{
    ArrayLiteral, BlockStatement, BooleanLiteral, CallExpression, Expression,
    ExpressionStatement, FunctionLiteral, HashLiteral, HashPair, Identifier, IfExpression,
    IndexExpression, InfixExpression, IntegerLiteral, LetStatement, PrefixExpression, Program,
    ReturnStatement, Statement, StringLiteral,
};
use crate::token::{Token, TokenKind};

// ----------------------------------------------------------------------------
// Leaves
// ----------------------------------------------------------------------------

pub fn ident(name: &str) -> Identifier {
    Identifier::new(Token::new(TokenKind::Ident, name), name)
}

pub fn int(value: i64) -> Expression {
    IntegerLiteral::new(Token::new(TokenKind::Int, value.to_string()), value).into()
}

pub fn boolean(value: bool) -> Expression {
    let kind = if value {
        TokenKind::True
    } else {
        TokenKind::False
    };
    BooleanLiteral::new(Token::keyword(kind), value).into()
}

pub fn string(value: &str) -> Expression {
    StringLiteral::new(Token::new(TokenKind::String, value), value).into()
}

// ----------------------------------------------------------------------------
// Composite expressions
// ----------------------------------------------------------------------------

pub fn prefix(operator: &str, right: impl Into<Expression>) -> Expression {
    PrefixExpression::new(operator_token(operator), operator, right.into()).into()
}

pub fn infix(
    left: impl Into<Expression>,
    operator: &str,
    right: impl Into<Expression>,
) -> Expression {
    InfixExpression::new(operator_token(operator), left.into(), operator, right.into()).into()
}

pub fn if_expr(
    condition: impl Into<Expression>,
    consequence: BlockStatement,
    alternative: Option<BlockStatement>,
) -> Expression {
    IfExpression::new(
        Token::keyword(TokenKind::If),
        condition.into(),
        consequence,
        alternative,
    )
    .into()
}

pub fn function(parameters: Vec<Identifier>, body: BlockStatement) -> Expression {
    FunctionLiteral::new(Token::keyword(TokenKind::Function), parameters, body).into()
}

pub fn call(function: impl Into<Expression>, arguments: Vec<Expression>) -> Expression {
    CallExpression::new(Token::symbol(TokenKind::LParen), function.into(), arguments).into()
}

pub fn array(elements: Vec<Expression>) -> Expression {
    ArrayLiteral::new(Token::symbol(TokenKind::LBracket), elements).into()
}

pub fn index(left: impl Into<Expression>, index: impl Into<Expression>) -> Expression {
    IndexExpression::new(Token::symbol(TokenKind::LBracket), left.into(), index.into()).into()
}

/// Pairs are kept in the order given.
pub fn hash(pairs: Vec<(Expression, Expression)>) -> Expression {
    let pairs = pairs
        .into_iter()
        .map(|(key, value)| HashPair::new(key, value))
        .collect();
    HashLiteral::new(Token::symbol(TokenKind::LBrace), pairs).into()
}

// ----------------------------------------------------------------------------
// Statements
// ----------------------------------------------------------------------------

pub fn let_stmt(name: Identifier, value: Option<Expression>) -> Statement {
    LetStatement::new(Token::keyword(TokenKind::Let), name, value).into()
}

pub fn return_stmt(value: Option<Expression>) -> Statement {
    ReturnStatement::new(Token::keyword(TokenKind::Return), value).into()
}

pub fn expr_stmt(expression: impl Into<Expression>) -> Statement {
    let expression = expression.into();
    let token = first_token(&expression);
    ExpressionStatement::new(token, Some(expression)).into()
}

pub fn block(statements: Vec<Statement>) -> BlockStatement {
    BlockStatement::new(Token::symbol(TokenKind::LBrace), statements)
}

pub fn program(statements: Vec<Statement>) -> Program {
    Program::new(statements)
}

// ----------------------------------------------------------------------------
// Helpers
// ----------------------------------------------------------------------------

fn operator_token(operator: &str) -> Token {
    let kind = TokenKind::for_symbol(operator).unwrap_or(TokenKind::Illegal);
    Token::new(kind, operator)
}

/// Leftmost token of an expression as it appears in source.
fn first_token(expression: &Expression) -> Token {
    match expression {
        Expression::Infix(expr) => first_token(&expr.left),
        Expression::Call(expr) => first_token(&expr.function),
        Expression::Index(expr) => first_token(&expr.left),
        other => other.token().clone(),
    }
}
