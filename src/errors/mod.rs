//! Error types for the front end.
//!
//! Parse failures are values, not panics. Each error carries:
//!
//! - A specific variant per failure class (syntax, literal, grammar gap)
//! - The source position of the offending token
//! - A rendered message and an optional suggestion for display layers

pub mod errors;

#[cfg(test)]
mod tests;
