use std::fmt;

use thiserror::Error;

use crate::interpreter::lexer::TokenKind;

/// Represents all errors that can occur during parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A specific token was required next but another one was found.
    #[error("expected next token to be {expected}, got {found} instead")]
    UnexpectedToken {
        /// The token kind the grammar required.
        expected: TokenKind,
        /// The token kind actually found.
        found:    TokenKind,
    },
    /// A token cannot begin an expression.
    #[error("no prefix parse function for {kind} found")]
    NoPrefixRule {
        /// The offending token kind.
        kind: TokenKind,
    },
    /// An integer literal does not fit in 64 bits.
    #[error("could not parse {literal} as integer")]
    InvalidInteger {
        /// The literal text.
        literal: String,
    },
}

/// Every syntax error found in one source text.
///
/// Returned instead of a result when a program cannot be evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxErrors(pub Vec<ParseError>);

impl SyntaxErrors {
    /// The individual errors, in the order they were found.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.0
    }
}

impl fmt::Display for SyntaxErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.0.len();
        let noun = if count == 1 { "error" } else { "errors" };
        write!(f, "found {count} syntax {noun}:")?;
        for error in &self.0 {
            write!(f, "\n\t{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for SyntaxErrors {}
