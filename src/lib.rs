//! # quill
//!
//! quill is a tree-walking interpreter for a small, dynamically typed
//! expression language written in Rust. It scans, parses and evaluates
//! programs built from integers, booleans, strings, arrays, maps, first-class
//! functions and closures.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::sync::Once;

pub use crate::interpreter::evaluator::core::evaluate;
use crate::{
    ast::Program,
    error::{ParseError, SyntaxErrors},
    interpreter::{
        lexer::Scanner,
        parser::core::Parser,
        value::{core::Object, environment::Environment},
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement` and `Expr` types that
/// represent source code as a tree, together with their canonical,
/// fully parenthesized rendering. The AST is built by the parser and
/// traversed by the evaluator.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// Syntax errors are collected by the parser and reported together; runtime
/// errors stop evaluation and surface as error values.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together scanning, parsing, evaluation and the runtime
/// value representation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and values.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
pub mod util;

static TRACING_INIT: Once = Once::new();

/// Initializes tracing output on standard error.
///
/// Does nothing unless `RUST_LOG` is set, for example `RUST_LOG=quill=debug`
/// to see syntax and runtime errors as they are raised, or
/// `RUST_LOG=quill=trace` to follow every scanned token and function call.
/// Safe to call multiple times.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
                    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

                    if std::env::var("RUST_LOG").is_ok() {
                        tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)
                                                                        .with_target(true)
                                                                        .with_level(true))
                                                      .with(EnvFilter::from_default_env())
                                                      .init();
                    }
                });
}

/// Parses source text into a program.
///
/// Parsing never stops at the first syntax error: statements that fail to
/// parse are left out of the program and their errors are returned alongside
/// it, in the order they were found.
///
/// # Example
/// ```
/// use quill::parse;
///
/// let (program, errors) = parse("-a * b");
/// assert!(errors.is_empty());
/// assert_eq!(program.to_string(), "((-a) * b)");
///
/// let (_, errors) = parse("const = 5;");
/// assert_eq!(errors[0].to_string(), "expected next token to be IDENT, got = instead");
/// ```
#[must_use]
pub fn parse(source: &str) -> (Program, Vec<ParseError>) {
    let mut parser = Parser::new(Scanner::new(source));
    let program = parser.parse_program();

    (program, parser.into_errors())
}

/// Parses and evaluates source text against an environment.
///
/// Bindings made by the program stay in `env`, so calling this repeatedly
/// with the same environment behaves like a REPL session. Runtime errors are
/// part of the result as [`Object::Error`].
///
/// # Errors
/// Returns every syntax error if the source does not parse; nothing is
/// evaluated in that case.
///
/// # Examples
/// ```
/// use quill::{get_result, interpreter::value::environment::Environment};
///
/// let env = Environment::new();
///
/// let result = get_result("const add = fn(a, b) { a + b }; add(2, 3)", &env).unwrap();
/// assert_eq!(result.inspect(), "5");
///
/// // `add` is still bound.
/// let result = get_result("add(1, true)", &env).unwrap();
/// assert_eq!(result.inspect(), "ERROR: type mismatch: INTEGER + BOOLEAN");
///
/// // Syntax errors prevent evaluation.
/// assert!(get_result("const 1 = 2;", &env).is_err());
/// ```
pub fn get_result(source: &str, env: &Environment) -> Result<Object, SyntaxErrors> {
    let (program, errors) = parse(source);

    if !errors.is_empty() {
        return Err(SyntaxErrors(errors));
    }

    Ok(evaluate(&program, env))
}
