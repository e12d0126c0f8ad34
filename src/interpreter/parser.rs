/// Parser state and the top-level program loop.
///
/// Defines the `Parser` struct (current token, one token of lookahead and the
/// collected syntax errors) and the error-tolerant `parse_program` loop.
pub mod core;

/// Binary and postfix operators.
///
/// Operator precedence and the infix parse rules: arithmetic, relational and
/// equality operators, calls and index expressions.
pub mod binary;

/// Block parsing.
///
/// Parses brace-delimited statement sequences used by function bodies and
/// conditional branches.
pub mod block;

/// Statement parsing.
///
/// Dispatches on the leading token to `const`, `return` and expression
/// statements.
pub mod statement;

/// Prefix parse rules.
///
/// Literals, identifiers, prefix operators, grouping, `if` expressions,
/// function literals, arrays and maps.
pub mod unary;

/// Shared helpers for delimited lists.
pub mod utils;
