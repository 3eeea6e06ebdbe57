use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{lookup_ident, Token, TokenKind};

/// Anything the parser can pull tokens from, one at a time.
///
/// Implementations must be total: once `EOF` has been returned, every
/// further call returns `EOF` again.
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

/// Turns the matched text into a token, or `None` for text that is skipped.
pub type RegexHandler = fn(&mut Lexer, &str) -> Option<Token>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

// Tried in order, so two-character operators come before their prefixes.
lazy_static! {
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^\\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("^[0-9]+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Int) },
        RegexPattern { regex: Regex::new("^==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals) },
        RegexPattern { regex: Regex::new("^!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals) },
        RegexPattern { regex: Regex::new("^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment) },
        RegexPattern { regex: Regex::new("^!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Not) },
        RegexPattern { regex: Regex::new("^\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus) },
        RegexPattern { regex: Regex::new("^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash) },
        RegexPattern { regex: Regex::new("^\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star) },
        RegexPattern { regex: Regex::new("^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash) },
        RegexPattern { regex: Regex::new("^<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less) },
        RegexPattern { regex: Regex::new("^>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater) },
        RegexPattern { regex: Regex::new("^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma) },
        RegexPattern { regex: Regex::new("^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon) },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen) },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen) },
        RegexPattern { regex: Regex::new("^\\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly) },
        RegexPattern { regex: Regex::new("^\\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly) },
    ];
}

/// On-demand scanner over a single source string.
#[derive(Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source,
            pos: 0,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Builds a token for `literal` starting at the current position.
    pub fn make_token(&self, kind: TokenKind, literal: &str) -> Token {
        MK_TOKEN!(
            kind,
            String::from(literal),
            Span {
                start: Position(self.pos as u32, Rc::clone(&self.file)),
                end: Position((self.pos + literal.len()) as u32, Rc::clone(&self.file)),
            }
        )
    }
}

impl TokenSource for Lexer {
    fn next_token(&mut self) -> Token {
        loop {
            if self.at_eof() {
                return self.make_token(TokenKind::EOF, "");
            }

            let remainder = self.remainder();
            let found = PATTERNS.iter().find_map(|pattern| {
                pattern
                    .regex
                    .find(remainder)
                    .map(|matched| (pattern.handler, matched.end()))
            });

            match found {
                Some((handler, len)) => {
                    let matched = String::from(&self.source[self.pos..self.pos + len]);
                    let token = handler(self, &matched);
                    self.advance_n(len);

                    if let Some(token) = token {
                        return token;
                    }
                }
                None => {
                    // Not at eof, so there is at least one char left.
                    let illegal = remainder.chars().next().map(String::from).unwrap_or_default();
                    let token = self.make_token(TokenKind::Illegal, &illegal);
                    self.advance_n(illegal.len().max(1));
                    return token;
                }
            }
        }
    }
}

fn skip_handler(_lexer: &mut Lexer, _matched: &str) -> Option<Token> {
    None
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) -> Option<Token> {
    Some(lexer.make_token(lookup_ident(matched), matched))
}

/// Replays an already-lexed token vector, then repeats `EOF`.
pub struct TokenStream {
    tokens: std::vec::IntoIter<Token>,
    eof: Token,
    finished: bool,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        let eof = tokens
            .iter()
            .find(|token| token.is(TokenKind::EOF))
            .cloned()
            .unwrap_or_else(|| Token::synthetic(TokenKind::EOF, ""));

        TokenStream {
            tokens: tokens.into_iter(),
            eof,
            finished: false,
        }
    }
}

impl TokenSource for TokenStream {
    fn next_token(&mut self) -> Token {
        if self.finished {
            return self.eof.clone();
        }

        match self.tokens.next() {
            Some(token) => {
                if token.is(TokenKind::EOF) {
                    self.finished = true;
                }
                token
            }
            None => {
                self.finished = true;
                self.eof.clone()
            }
        }
    }
}

/// Lexes a whole source up to and including the first `EOF` token.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.is(TokenKind::EOF);
        tokens.push(token);

        if done {
            break;
        }
    }

    tracing::trace!(token_count = tokens.len(), "tokenized source");
    tokens
}
