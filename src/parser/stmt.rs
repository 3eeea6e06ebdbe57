use crate::{
    ast::{
        ast::Stmt,
        expressions::Identifier,
        statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::{lexer::TokenSource, tokens::TokenKind},
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

pub fn parse_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Result<Stmt, Error> {
    let handler = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied();

    match handler {
        Some(handler) => handler(parser),
        None => parse_expression_stmt(parser),
    }
}

/// Consumes an optional trailing `;`.
fn skip_semicolon<S: TokenSource>(parser: &mut Parser<S>) {
    if parser.peek_token().is(TokenKind::Semicolon) {
        parser.advance();
    }
}

pub fn parse_let_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();

    let name_token = parser.expect_peek(TokenKind::Identifier)?;
    let name = Identifier {
        value: name_token.literal.clone(),
        token: name_token,
    };

    parser.expect_peek(TokenKind::Assignment)?;
    parser.advance();

    let value = parse_expr(parser, BindingPower::Lowest)?;
    skip_semicolon(parser);

    Ok(Stmt::Let(LetStmt { token, name, value }))
}

pub fn parse_return_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();
    parser.advance();

    let return_value = parse_expr(parser, BindingPower::Lowest)?;
    skip_semicolon(parser);

    Ok(Stmt::Return(ReturnStmt {
        token,
        return_value,
    }))
}

pub fn parse_expression_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();

    let expression = parse_expr(parser, BindingPower::Lowest)?;
    skip_semicolon(parser);

    Ok(Stmt::Expression(ExpressionStmt { token, expression }))
}

/// Parses `{ <statements> }` with `current` on the `{`, leaving it on the `}`.
pub fn parse_block_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Result<BlockStmt, Error> {
    let token = parser.current_token().clone();
    parser.enter_block();
    parser.advance();

    let mut statements = Vec::new();
    while !parser.current_token().is(TokenKind::CloseCurly) {
        if parser.current_token().is(TokenKind::EOF) {
            return Err(parser.error_at_current(ErrorImpl::UnexpectedToken {
                expected: TokenKind::CloseCurly,
                found: TokenKind::EOF,
            }));
        }

        statements.push(parse_stmt(parser)?);
        parser.advance();
    }

    parser.exit_block();

    Ok(BlockStmt { token, statements })
}
