//! Token model shared between the lexer, the parser and the AST.
//!
//! The AST layer only ever reads a token's `literal`; the `kind` is carried so
//! that the parser (and tooling that rebuilds trees) can inspect categories.

// ============================================================================
// IMPORTS
// ============================================================================

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// Coarse category of a lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Illegal,
    Eof,

    // Identifiers and literals
    Ident,
    Int,
    String,

    // Operators
    Assign,
    Plus,
    Minus,
    Bang,
    Asterisk,
    Slash,
    Lt,
    Gt,
    Eq,
    NotEq,

    // Delimiters
    Comma,
    Semicolon,
    Colon,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,

    // Keywords
    Function,
    Let,
    True,
    False,
    If,
    Else,
    Return,
}

/// A lexeme: its category plus the exact source text it was scanned from.
///
/// # Examples
///
/// ```rust
/// use monkey_ast::token::{Token, TokenKind};
/// let tok = Token::new(TokenKind::Ident, "foobar");
/// assert_eq!(tok.literal, "foobar");
/// assert_eq!(Token::keyword(TokenKind::Let).literal, "let");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

lazy_static! {
    static ref KEYWORDS: HashMap<&'static str, TokenKind> = {
        let mut m = HashMap::new();
        m.insert("fn", TokenKind::Function);
        m.insert("let", TokenKind::Let);
        m.insert("true", TokenKind::True);
        m.insert("false", TokenKind::False);
        m.insert("if", TokenKind::If);
        m.insert("else", TokenKind::Else);
        m.insert("return", TokenKind::Return);
        m
    };
}

// ============================================================================
// PUBLIC API IMPLEMENTATION
// ============================================================================

impl TokenKind {
    /// Canonical name of the category, as a lexer would print it.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::String => "STRING",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Bang => "!",
            TokenKind::Asterisk => "*",
            TokenKind::Slash => "/",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::Eq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Function => "FUNCTION",
            TokenKind::Let => "LET",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Return => "RETURN",
        }
    }

    /// Source text of a keyword category, `None` for every other category.
    pub fn keyword_text(&self) -> Option<&'static str> {
        match self {
            TokenKind::Function => Some("fn"),
            TokenKind::Let => Some("let"),
            TokenKind::True => Some("true"),
            TokenKind::False => Some("false"),
            TokenKind::If => Some("if"),
            TokenKind::Else => Some("else"),
            TokenKind::Return => Some("return"),
            _ => None,
        }
    }

    /// Maps operator or delimiter text to its category.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monkey_ast::token::TokenKind;
    /// assert_eq!(TokenKind::for_symbol("!="), Some(TokenKind::NotEq));
    /// assert_eq!(TokenKind::for_symbol("%"), None);
    /// ```
    pub fn for_symbol(symbol: &str) -> Option<TokenKind> {
        let kind = match symbol {
            "=" => TokenKind::Assign,
            "+" => TokenKind::Plus,
            "-" => TokenKind::Minus,
            "!" => TokenKind::Bang,
            "*" => TokenKind::Asterisk,
            "/" => TokenKind::Slash,
            "<" => TokenKind::Lt,
            ">" => TokenKind::Gt,
            "==" => TokenKind::Eq,
            "!=" => TokenKind::NotEq,
            "," => TokenKind::Comma,
            ";" => TokenKind::Semicolon,
            ":" => TokenKind::Colon,
            "(" => TokenKind::LParen,
            ")" => TokenKind::RParen,
            "{" => TokenKind::LBrace,
            "}" => TokenKind::RBrace,
            "[" => TokenKind::LBracket,
            "]" => TokenKind::RBracket,
            _ => return None,
        };
        Some(kind)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a scanned word as a keyword or a plain identifier.
///
/// # Examples
///
/// ```rust
/// use monkey_ast::token::{lookup_ident, TokenKind};
/// assert_eq!(lookup_ident("fn"), TokenKind::Function);
/// assert_eq!(lookup_ident("fnord"), TokenKind::Ident);
/// ```
pub fn lookup_ident(ident: &str) -> TokenKind {
    KEYWORDS.get(ident).copied().unwrap_or(TokenKind::Ident)
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
        }
    }

    /// Builds a keyword token with its canonical spelling.
    ///
    /// Non-keyword kinds fall back to the category name as literal.
    pub fn keyword(kind: TokenKind) -> Self {
        let literal = kind.keyword_text().unwrap_or_else(|| kind.as_str());
        Self::new(kind, literal)
    }

    /// Builds an operator or delimiter token; the literal is the symbol itself.
    pub fn symbol(kind: TokenKind) -> Self {
        Self::new(kind, kind.as_str())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind, self.literal)
    }
}
