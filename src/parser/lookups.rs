use std::collections::HashMap;

use crate::{
    ast::ast::{Expr, Stmt},
    errors::errors::Error,
    lexer::{lexer::TokenSource, tokens::TokenKind},
};

use super::{expr::*, parser::Parser, stmt::*};

/// Operator precedence, lowest to highest.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Lowest,
    Equals,      // == !=
    LessGreater, // < >
    Sum,         // + -
    Product,     // * /
    Prefix,      // !x -x
    Call,        // f(x)
}

pub type StmtHandler<S> = fn(&mut Parser<S>) -> Result<Stmt, Error>;
pub type NUDHandler<S> = fn(&mut Parser<S>) -> Result<Expr, Error>;
pub type LEDHandler<S> = fn(&mut Parser<S>, Expr) -> Result<Expr, Error>;

pub fn create_token_lookups<S: TokenSource>(parser: &mut Parser<S>) {
    // Equality
    parser.led(TokenKind::Equals, BindingPower::Equals, parse_infix_expr);
    parser.led(TokenKind::NotEquals, BindingPower::Equals, parse_infix_expr);

    // Relational
    parser.led(TokenKind::Less, BindingPower::LessGreater, parse_infix_expr);
    parser.led(TokenKind::Greater, BindingPower::LessGreater, parse_infix_expr);

    // Additive and multiplicative
    parser.led(TokenKind::Plus, BindingPower::Sum, parse_infix_expr);
    parser.led(TokenKind::Dash, BindingPower::Sum, parse_infix_expr);
    parser.led(TokenKind::Star, BindingPower::Product, parse_infix_expr);
    parser.led(TokenKind::Slash, BindingPower::Product, parse_infix_expr);

    parser.led(TokenKind::OpenParen, BindingPower::Call, parse_call_expr);

    // Literals and symbols
    parser.nud(TokenKind::Identifier, parse_identifier);
    parser.nud(TokenKind::Int, parse_integer_literal);
    parser.nud(TokenKind::True, parse_boolean);
    parser.nud(TokenKind::False, parse_boolean);
    parser.nud(TokenKind::Not, parse_prefix_expr);
    parser.nud(TokenKind::Dash, parse_prefix_expr);
    parser.nud(TokenKind::OpenParen, parse_grouping_expr);
    parser.nud(TokenKind::If, parse_if_expr);
    parser.nud(TokenKind::Fn, parse_function_literal);

    // Statements
    parser.stmt(TokenKind::Let, parse_let_stmt);
    parser.stmt(TokenKind::Return, parse_return_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup<S> = HashMap<TokenKind, StmtHandler<S>>;
pub type NUDLookup<S> = HashMap<TokenKind, NUDHandler<S>>;
pub type LEDLookup<S> = HashMap<TokenKind, LEDHandler<S>>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
