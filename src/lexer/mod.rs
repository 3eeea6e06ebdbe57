//! Lexical analysis module.
//!
//! Converts Monkey source text into tokens on demand. It handles:
//!
//! - The token model and reserved keyword lookup
//! - The `TokenSource` contract the parser reads from
//! - Regex-driven scanning with byte spans for diagnostics

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
