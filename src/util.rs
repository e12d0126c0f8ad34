/// Numeric conversion helpers.
///
/// Converts between `usize` lengths and the interpreter's `i64` integers
/// without silent truncation.
pub mod num;
