/// Syntax errors.
///
/// Defines the errors the parser records while building the AST. Syntax
/// errors never abort parsing: they are collected so that a single pass can
/// report several of them.
pub mod parse_error;
/// Runtime errors.
///
/// Contains every error that evaluation can produce. A runtime error is a
/// first-class value: it travels through the evaluator and surfaces to the
/// caller as an `Object::Error`.
pub mod runtime_error;

pub use parse_error::{ParseError, SyntaxErrors};
pub use runtime_error::RuntimeError;
