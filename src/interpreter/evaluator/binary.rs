/// Dispatch of infix operations by operand types.
pub mod core;

/// Integer arithmetic and comparison.
pub mod scalar;

/// String operations and equality of non-numeric values.
pub mod comparison;
