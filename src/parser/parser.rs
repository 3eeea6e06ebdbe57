//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the program-level driver.
//! The parser reads one token at a time from a `TokenSource`, keeping the
//! current token and one token of lookahead. Expressions are parsed with
//! NUD/LED handlers looked up by token kind.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix positions
//! - LED (left denotation) handlers for infix positions
//! - Binding powers for operator precedence

use std::{collections::HashMap, mem};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::{TokenSource, TokenStream},
        tokens::{Token, TokenKind},
    },
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
///
/// Every parse function starts with `current` on the first token of its
/// construct and leaves `current` on the last one.
pub struct Parser<S: TokenSource> {
    /// Where tokens come from
    source: S,
    /// The token under examination
    current: Token,
    /// One token of lookahead
    peek: Token,
    /// Diagnostics recorded so far, in source order
    errors: Vec<Error>,
    /// Number of blocks entered and not yet closed
    block_depth: usize,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup<S>,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup<S>,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup<S>,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl<S: TokenSource> Parser<S> {
    /// Creates a new Parser reading from `source`.
    ///
    /// Reads the first two tokens so `current` and `peek` are both set, and
    /// registers every statement, prefix and infix handler.
    pub fn new(mut source: S) -> Self {
        let current = source.next_token();
        let peek = source.next_token();

        let mut parser = Parser {
            source,
            current,
            peek,
            errors: vec![],
            block_depth: 0,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);

        parser
    }

    /// Parses statements until `EOF`.
    ///
    /// A statement that fails to parse is recorded in the error list and
    /// skipped; parsing resumes at the next statement. Always returns a
    /// program, possibly empty.
    pub fn parse_program(&mut self) -> Program {
        let mut statements = vec![];

        while !self.current.is(TokenKind::EOF) {
            match parse_stmt(self) {
                Ok(stmt) => {
                    tracing::trace!(statement = %stmt, "parsed statement");
                    statements.push(stmt);
                }
                Err(error) => {
                    tracing::debug!(
                        error = %error,
                        offset = error.get_position().0,
                        "recording parse error"
                    );
                    self.errors.push(error);
                    self.synchronize();
                }
            }

            self.advance();
        }

        Program { statements }
    }

    /// Rendered diagnostics, in the order they were recorded.
    pub fn errors(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }

    /// The diagnostics with their source positions.
    pub fn diagnostics(&self) -> &[Error] {
        &self.errors
    }

    /// Skips to the end of the failed statement.
    ///
    /// Stops on a `;` outside any block, after the `}` that closes the block
    /// the error happened in (taking a trailing `;` with it), or at `EOF`.
    fn synchronize(&mut self) {
        loop {
            match self.current.kind {
                TokenKind::EOF => break,
                TokenKind::Semicolon if self.block_depth == 0 => break,
                TokenKind::OpenCurly => self.block_depth += 1,
                TokenKind::CloseCurly => {
                    self.block_depth = self.block_depth.saturating_sub(1);
                    if self.block_depth == 0 {
                        if self.peek.is(TokenKind::Semicolon) {
                            self.advance();
                        }
                        break;
                    }
                }
                _ => {}
            }

            self.advance();
        }

        self.block_depth = 0;
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Returns the lookahead token.
    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    /// Returns the kind of the lookahead token.
    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    /// Moves forward one token: `peek` becomes `current` and a fresh token is read.
    pub fn advance(&mut self) {
        self.current = mem::replace(&mut self.peek, self.source.next_token());
    }

    /// Advances if the lookahead token has the expected kind.
    ///
    /// # Returns
    ///
    /// The new current token, or an `UnexpectedToken` error positioned at the
    /// lookahead token. On error nothing is consumed.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.peek.is(expected_kind) {
            self.advance();
            Ok(self.current.clone())
        } else {
            Err(self.error_at_peek(ErrorImpl::UnexpectedToken {
                expected: expected_kind,
                found: self.peek.kind,
            }))
        }
    }

    /// Builds an error positioned at the current token.
    pub fn error_at_current(&self, error: ErrorImpl) -> Error {
        Error::new(error, self.current.span.start.clone())
    }

    /// Builds an error positioned at the lookahead token.
    pub fn error_at_peek(&self, error: ErrorImpl) -> Error {
        Error::new(error, self.peek.span.start.clone())
    }

    /// Binding power of the current token, `Lowest` if it is not an operator.
    pub fn current_binding_power(&self) -> BindingPower {
        self.binding_power_of(self.current.kind)
    }

    /// Binding power of the lookahead token, `Lowest` if it is not an operator.
    pub fn peek_binding_power(&self) -> BindingPower {
        self.binding_power_of(self.peek.kind)
    }

    fn binding_power_of(&self, kind: TokenKind) -> BindingPower {
        self.binding_power_lookup
            .get(&kind)
            .copied()
            .unwrap_or(BindingPower::Lowest)
    }

    pub(crate) fn enter_block(&mut self) {
        self.block_depth += 1;
    }

    pub(crate) fn exit_block(&mut self) {
        self.block_depth = self.block_depth.saturating_sub(1);
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup<S> {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup<S> {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup<S> {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler<S>) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler<S>) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler<S>) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }
}

/// Parses an already-lexed token vector into a Program.
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance, holding the diagnostics
/// - The Program, which is partial when diagnostics were recorded
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: Vec<Token>) -> (Parser<TokenStream>, Program) {
    let mut parser = Parser::new(TokenStream::new(tokens));
    let program = parser.parse_program();

    if !parser.errors.is_empty() {
        tracing::debug!(error_count = parser.errors.len(), "parse finished with errors");
    }

    (parser, program)
}
