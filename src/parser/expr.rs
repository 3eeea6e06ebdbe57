use crate::{
    ast::{
        ast::Expr,
        expressions::{
            BooleanLiteral, CallExpr, FunctionLiteral, Identifier, IfExpr, InfixExpr,
            IntegerLiteral, PrefixExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::{lexer::TokenSource, tokens::TokenKind},
};

use super::{lookups::BindingPower, parser::Parser, stmt::parse_block_stmt};

pub fn parse_expr<S: TokenSource>(parser: &mut Parser<S>, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let nud = match parser.get_nud_lookup().get(&token_kind).copied() {
        Some(nud) => nud,
        None => {
            return Err(parser.error_at_current(ErrorImpl::NoPrefixParseFn { kind: token_kind }));
        }
    };

    let mut left = nud(parser)?;

    // While the next token binds tighter than bp, fold left into it
    while !parser.peek_token().is(TokenKind::Semicolon) && bp < parser.peek_binding_power() {
        let token_kind = parser.peek_token_kind();
        let led = match parser.get_led_lookup().get(&token_kind).copied() {
            Some(led) => led,
            None => {
                return Err(parser.error_at_peek(ErrorImpl::NoInfixParseFn { kind: token_kind }));
            }
        };

        parser.advance();
        left = led(parser, left)?;
    }

    Ok(left)
}

pub fn parse_identifier<S: TokenSource>(parser: &mut Parser<S>) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    Ok(Expr::Identifier(Identifier {
        value: token.literal.clone(),
        token,
    }))
}

pub fn parse_integer_literal<S: TokenSource>(parser: &mut Parser<S>) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    match token.literal.parse::<i64>() {
        Ok(value) => Ok(Expr::Integer(IntegerLiteral { token, value })),
        Err(_) => Err(parser.error_at_current(ErrorImpl::IntegerParseError {
            literal: token.literal,
        })),
    }
}

pub fn parse_boolean<S: TokenSource>(parser: &mut Parser<S>) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    Ok(Expr::Boolean(BooleanLiteral {
        value: token.is(TokenKind::True),
        token,
    }))
}

pub fn parse_prefix_expr<S: TokenSource>(parser: &mut Parser<S>) -> Result<Expr, Error> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    let right = parse_expr(parser, BindingPower::Prefix)?;

    Ok(Expr::Prefix(PrefixExpr {
        operator: operator_token.literal.clone(),
        token: operator_token,
        right: Box::new(right),
    }))
}

pub fn parse_infix_expr<S: TokenSource>(parser: &mut Parser<S>, left: Expr) -> Result<Expr, Error> {
    let operator_token = parser.current_token().clone();
    let bp = parser.current_binding_power();
    parser.advance();

    let right = parse_expr(parser, bp)?;

    Ok(Expr::Infix(InfixExpr {
        operator: operator_token.literal.clone(),
        token: operator_token,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

pub fn parse_grouping_expr<S: TokenSource>(parser: &mut Parser<S>) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_if_expr<S: TokenSource>(parser: &mut Parser<S>) -> Result<Expr, Error> {
    // if (<condition>) { <consequence> } else { <alternative> }
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::OpenParen)?;
    parser.advance();
    let condition = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    parser.expect_peek(TokenKind::OpenCurly)?;
    let consequence = parse_block_stmt(parser)?;

    let alternative = if parser.peek_token().is(TokenKind::Else) {
        parser.advance();
        parser.expect_peek(TokenKind::OpenCurly)?;
        Some(parse_block_stmt(parser)?)
    } else {
        None
    };

    Ok(Expr::If(IfExpr {
        token,
        condition: Box::new(condition),
        consequence,
        alternative,
    }))
}

pub fn parse_function_literal<S: TokenSource>(parser: &mut Parser<S>) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::OpenParen)?;
    let parameters = parse_function_parameters(parser)?;

    parser.expect_peek(TokenKind::OpenCurly)?;
    let body = parse_block_stmt(parser)?;

    Ok(Expr::Function(FunctionLiteral {
        token,
        parameters,
        body,
    }))
}

/// Parses `(a, b, c)` with `current` on the `(`, leaving it on the `)`.
fn parse_function_parameters<S: TokenSource>(
    parser: &mut Parser<S>,
) -> Result<Vec<Identifier>, Error> {
    let mut parameters = Vec::new();

    if parser.peek_token().is(TokenKind::CloseParen) {
        parser.advance();
        return Ok(parameters);
    }

    loop {
        let token = parser.expect_peek(TokenKind::Identifier)?;
        parameters.push(Identifier {
            value: token.literal.clone(),
            token,
        });

        if !parser.peek_token().is(TokenKind::Comma) {
            break;
        }
        parser.advance();
    }

    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(parameters)
}

pub fn parse_call_expr<S: TokenSource>(parser: &mut Parser<S>, left: Expr) -> Result<Expr, Error> {
    let token = parser.current_token().clone();
    let arguments = parse_expr_list(parser, TokenKind::CloseParen)?;

    Ok(Expr::Call(CallExpr {
        token,
        function: Box::new(left),
        arguments,
    }))
}

/// Parses comma-separated expressions up to `end`, leaving `current` on `end`.
fn parse_expr_list<S: TokenSource>(
    parser: &mut Parser<S>,
    end: TokenKind,
) -> Result<Vec<Expr>, Error> {
    let mut list = Vec::new();

    if parser.peek_token().is(end) {
        parser.advance();
        return Ok(list);
    }

    parser.advance();
    list.push(parse_expr(parser, BindingPower::Lowest)?);

    while parser.peek_token().is(TokenKind::Comma) {
        parser.advance();
        parser.advance();
        list.push(parse_expr(parser, BindingPower::Lowest)?);
    }

    parser.expect_peek(end)?;

    Ok(list)
}
