// tests/token_tests.rs

use monkey_ast::token::{lookup_ident, Token, TokenKind};

#[test]
fn test_lookup_ident_keywords() {
    let cases = [
        ("fn", TokenKind::Function),
        ("let", TokenKind::Let),
        ("true", TokenKind::True),
        ("false", TokenKind::False),
        ("if", TokenKind::If),
        ("else", TokenKind::Else),
        ("return", TokenKind::Return),
    ];
    for (word, kind) in cases {
        assert_eq!(lookup_ident(word), kind, "keyword {}", word);
    }
}

#[test]
fn test_lookup_ident_plain_identifiers() {
    for word in ["x", "foobar", "letter", "Let", "iffy", "_fn"] {
        assert_eq!(lookup_ident(word), TokenKind::Ident, "identifier {}", word);
    }
}

#[test]
fn test_for_symbol_round_trips_through_as_str() {
    let symbols = [
        "=", "+", "-", "!", "*", "/", "<", ">", "==", "!=", ",", ";", ":", "(", ")", "{", "}",
        "[", "]",
    ];
    for symbol in symbols {
        let kind = TokenKind::for_symbol(symbol).expect("known symbol");
        assert_eq!(kind.as_str(), symbol);
    }
    assert_eq!(TokenKind::for_symbol("=>"), None);
    assert_eq!(TokenKind::for_symbol(""), None);
}

#[test]
fn test_keyword_and_symbol_constructors() {
    assert_eq!(Token::keyword(TokenKind::Function), Token::new(TokenKind::Function, "fn"));
    assert_eq!(Token::keyword(TokenKind::Return).literal, "return");
    assert_eq!(Token::symbol(TokenKind::LBracket).literal, "[");
    assert_eq!(Token::symbol(TokenKind::NotEq).literal, "!=");
}

#[test]
fn test_token_display() {
    assert_eq!(Token::new(TokenKind::Ident, "x").to_string(), "IDENT(x)");
    assert_eq!(Token::keyword(TokenKind::Let).to_string(), "LET(let)");
}

#[test]
fn test_token_serde_shape() {
    let json = serde_json::to_value(Token::symbol(TokenKind::LParen)).expect("serialize");
    assert_eq!(json, serde_json::json!({ "kind": "l_paren", "literal": "(" }));
    let tok: Token =
        serde_json::from_value(serde_json::json!({ "kind": "not_eq", "literal": "!=" }))
            .expect("deserialize");
    assert_eq!(tok.kind, TokenKind::NotEq);
}
