//! Unit tests for the lexer module.
//!
//! Covers keyword lookup, operators and delimiters, literals, illegal
//! characters, spans and the repeating `EOF` contract.

use proptest::prelude::*;

use super::{
    lexer::{tokenize, Lexer, TokenSource, TokenStream},
    tokens::{lookup_ident, Token, TokenKind},
};

#[test]
fn test_lookup_ident_keywords() {
    assert_eq!(lookup_ident("let"), TokenKind::Let);
    assert_eq!(lookup_ident("fn"), TokenKind::Fn);
    assert_eq!(lookup_ident("true"), TokenKind::True);
    assert_eq!(lookup_ident("false"), TokenKind::False);
    assert_eq!(lookup_ident("if"), TokenKind::If);
    assert_eq!(lookup_ident("else"), TokenKind::Else);
    assert_eq!(lookup_ident("return"), TokenKind::Return);
}

#[test]
fn test_lookup_ident_identifiers() {
    assert_eq!(lookup_ident("anythingElse"), TokenKind::Identifier);
    assert_eq!(lookup_ident("Let"), TokenKind::Identifier);
    assert_eq!(lookup_ident("lets"), TokenKind::Identifier);
    assert_eq!(lookup_ident(""), TokenKind::Identifier);
}

#[test]
fn test_tokenize_program() {
    let source = "let five = 5;
let ten = 10;

let add = fn(x, y) {
  x + y;
};

let result = add(five, ten);
!-/*5;
5 < 10 > 5;

if (5 < 10) {
    return true;
} else {
    return false;
}

10 == 10;
10 != 9;
"
    .to_string();

    let expected = vec![
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "five"),
        (TokenKind::Assignment, "="),
        (TokenKind::Int, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "ten"),
        (TokenKind::Assignment, "="),
        (TokenKind::Int, "10"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "add"),
        (TokenKind::Assignment, "="),
        (TokenKind::Fn, "fn"),
        (TokenKind::OpenParen, "("),
        (TokenKind::Identifier, "x"),
        (TokenKind::Comma, ","),
        (TokenKind::Identifier, "y"),
        (TokenKind::CloseParen, ")"),
        (TokenKind::OpenCurly, "{"),
        (TokenKind::Identifier, "x"),
        (TokenKind::Plus, "+"),
        (TokenKind::Identifier, "y"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::CloseCurly, "}"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "result"),
        (TokenKind::Assignment, "="),
        (TokenKind::Identifier, "add"),
        (TokenKind::OpenParen, "("),
        (TokenKind::Identifier, "five"),
        (TokenKind::Comma, ","),
        (TokenKind::Identifier, "ten"),
        (TokenKind::CloseParen, ")"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Not, "!"),
        (TokenKind::Dash, "-"),
        (TokenKind::Slash, "/"),
        (TokenKind::Star, "*"),
        (TokenKind::Int, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Int, "5"),
        (TokenKind::Less, "<"),
        (TokenKind::Int, "10"),
        (TokenKind::Greater, ">"),
        (TokenKind::Int, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::If, "if"),
        (TokenKind::OpenParen, "("),
        (TokenKind::Int, "5"),
        (TokenKind::Less, "<"),
        (TokenKind::Int, "10"),
        (TokenKind::CloseParen, ")"),
        (TokenKind::OpenCurly, "{"),
        (TokenKind::Return, "return"),
        (TokenKind::True, "true"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::CloseCurly, "}"),
        (TokenKind::Else, "else"),
        (TokenKind::OpenCurly, "{"),
        (TokenKind::Return, "return"),
        (TokenKind::False, "false"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::CloseCurly, "}"),
        (TokenKind::Int, "10"),
        (TokenKind::Equals, "=="),
        (TokenKind::Int, "10"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Int, "10"),
        (TokenKind::NotEquals, "!="),
        (TokenKind::Int, "9"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::EOF, ""),
    ];

    let tokens = tokenize(source, Some("test.monkey".to_string()));
    assert_eq!(tokens.len(), expected.len());

    for (i, (kind, literal)) in expected.iter().enumerate() {
        assert_eq!(tokens[i].kind, *kind, "token {} kind", i);
        assert_eq!(tokens[i].literal, *literal, "token {} literal", i);
    }
}

#[test]
fn test_tokenize_illegal_characters() {
    let tokens = tokenize("let a = @ # é;".to_string(), None);

    assert_eq!(tokens[3].kind, TokenKind::Illegal);
    assert_eq!(tokens[3].literal, "@");
    assert_eq!(tokens[4].kind, TokenKind::Illegal);
    assert_eq!(tokens[4].literal, "#");
    assert_eq!(tokens[5].kind, TokenKind::Illegal);
    assert_eq!(tokens[5].literal, "é");
    assert_eq!(tokens[6].kind, TokenKind::Semicolon);
    assert_eq!(tokens[7].kind, TokenKind::EOF);
}

#[test]
fn test_token_spans() {
    let tokens = tokenize("let  answer".to_string(), Some("spans.monkey".to_string()));

    assert_eq!(tokens[0].span.start.0, 0);
    assert_eq!(tokens[0].span.end.0, 3);
    assert_eq!(tokens[1].span.start.0, 5);
    assert_eq!(tokens[1].span.end.0, 11);
    assert_eq!(tokens[1].span.start.1.as_str(), "spans.monkey");
    assert_eq!(tokens[2].span.start.0, 11);
}

#[test]
fn test_default_file_name() {
    let tokens = tokenize("x".to_string(), None);
    assert_eq!(tokens[0].span.start.1.as_str(), "shell");
}

#[test]
fn test_lexer_repeats_eof() {
    let mut lexer = Lexer::new("x".to_string(), None);

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    for _ in 0..3 {
        assert_eq!(lexer.next_token().kind, TokenKind::EOF);
    }
}

#[test]
fn test_empty_source() {
    let tokens = tokenize("   \n\t ".to_string(), None);

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
}

#[test]
fn test_token_stream_repeats_eof() {
    let tokens = tokenize("5;".to_string(), None);
    let mut stream = TokenStream::new(tokens);

    assert_eq!(stream.next_token().kind, TokenKind::Int);
    assert_eq!(stream.next_token().kind, TokenKind::Semicolon);
    assert_eq!(stream.next_token().kind, TokenKind::EOF);
    assert_eq!(stream.next_token().kind, TokenKind::EOF);
}

#[test]
fn test_token_stream_without_eof() {
    let mut stream = TokenStream::new(vec![Token::synthetic(TokenKind::Identifier, "x")]);

    assert_eq!(stream.next_token().literal, "x");
    assert_eq!(stream.next_token().kind, TokenKind::EOF);
    assert_eq!(stream.next_token().kind, TokenKind::EOF);
}

#[test]
fn test_token_kind_display() {
    assert_eq!(TokenKind::Identifier.to_string(), "IDENT");
    assert_eq!(TokenKind::Int.to_string(), "INT");
    assert_eq!(TokenKind::Assignment.to_string(), "=");
    assert_eq!(TokenKind::Fn.to_string(), "FUNCTION");
    assert_eq!(TokenKind::EOF.to_string(), "EOF");
}

proptest! {
    #[test]
    fn prop_lookup_ident_is_identifier_outside_keywords(ident in "[a-zA-Z_][a-zA-Z0-9_]{0,12}") {
        let keywords = ["fn", "let", "true", "false", "if", "else", "return"];
        prop_assume!(!keywords.contains(&ident.as_str()));
        prop_assert_eq!(lookup_ident(&ident), TokenKind::Identifier);
    }

    #[test]
    fn prop_tokenize_always_ends_in_eof(source in "\\PC{0,64}") {
        let tokens = tokenize(source, None);
        prop_assert_eq!(tokens.last().map(|token| token.kind), Some(TokenKind::EOF));
    }
}
