/// Core evaluation logic.
///
/// Contains the expression and statement dispatch, block and program
/// evaluation, and the unwinding channel that carries runtime errors and
/// `return` signals.
pub mod core;

/// Prefix operator evaluation.
///
/// Handles logical not and integer negation.
pub mod unary;

/// Infix operator evaluation.
///
/// Implements integer arithmetic, string concatenation, relational and
/// equality operators, with the type-mismatch and unknown-operator rules.
pub mod binary;

/// Array and map evaluation.
///
/// Array and map literals, map key validation and index expressions.
pub mod collection;

/// Function evaluation.
///
/// Handles calls to closures and builtins, argument binding and the builtin
/// registry.
pub mod function;

/// Utility functions for evaluation.
///
/// Provides helpers shared by builtins and evaluation logic.
pub mod utils;
