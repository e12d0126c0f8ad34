/// Calls of user-defined functions and builtins.
pub mod core;

/// The builtin registry and the collection builtins (`length`, `lastIndex`,
/// `tail`, `push`).
pub mod builtin;

/// The `print` builtin.
///
/// Writes the rendering of each argument to standard output.
pub mod print;
