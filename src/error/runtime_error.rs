use thiserror::Error;

use crate::{
    ast::{BinaryOperator, UnaryOperator},
    interpreter::value::core::ObjectType,
};

/// Represents all errors that can occur during evaluation.
///
/// The `Display` rendering is the message shown to the user after the
/// `ERROR: ` prefix of [`crate::interpreter::value::core::Object::inspect`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Tried to use an unbound identifier.
    #[error("identifier not found: {0}")]
    IdentifierNotFound(String),
    /// Tried to bind a name twice in the same scope.
    #[error("identifier already declared: {0}")]
    AlreadyDeclared(String),
    /// A prefix operator was applied to an unsupported operand.
    #[error("unknown operator: {op}{operand}")]
    UnknownPrefixOperator {
        /// The operator.
        op:      UnaryOperator,
        /// The type of the operand.
        operand: ObjectType,
    },
    /// An infix operator is not defined for the operand types.
    #[error("unknown operator: {left} {op} {right}")]
    UnknownInfixOperator {
        /// The type of the left operand.
        left:  ObjectType,
        /// The operator.
        op:    BinaryOperator,
        /// The type of the right operand.
        right: ObjectType,
    },
    /// An arithmetic or relational operator got operands of different types.
    #[error("type mismatch: {left} {op} {right}")]
    TypeMismatch {
        /// The type of the left operand.
        left:  ObjectType,
        /// The operator.
        op:    BinaryOperator,
        /// The type of the right operand.
        right: ObjectType,
    },
    /// Integer division by zero.
    #[error("division by zero")]
    DivisionByZero,
    /// Called something that is neither a function nor a builtin.
    #[error("not a function: {0}")]
    NotAFunction(ObjectType),
    /// Used a value that cannot be hashed as a map key.
    #[error("unusable as map key: {0}")]
    UnusableMapKey(ObjectType),
    /// Indexed a value that does not support the given subscript.
    #[error("index operator not supported: {left}[{index}]")]
    IndexNotSupported {
        /// The type of the indexed value.
        left:  ObjectType,
        /// The type of the subscript.
        index: ObjectType,
    },
    /// The wrong number of arguments was supplied to a function.
    #[error("wrong number of arguments. got={got}, want={want}")]
    ArgumentCountMismatch {
        /// Number of arguments supplied.
        got:  usize,
        /// Number of arguments expected.
        want: usize,
    },
    /// A builtin does not accept an argument of this type.
    #[error("argument to '{builtin}' is not supported, got {got}")]
    UnsupportedArgument {
        /// The builtin name.
        builtin: &'static str,
        /// The type of the argument.
        got:     ObjectType,
    },
    /// A builtin's only argument has the wrong type.
    #[error("argument to '{builtin}' must be of type {expected}, got {got}")]
    ArgumentType {
        /// The builtin name.
        builtin:  &'static str,
        /// The required type.
        expected: ObjectType,
        /// The type of the argument.
        got:      ObjectType,
    },
    /// A builtin's first argument has the wrong type.
    #[error("first argument to '{builtin}' must be of type {expected}, got {got}")]
    FirstArgumentType {
        /// The builtin name.
        builtin:  &'static str,
        /// The required type.
        expected: ObjectType,
        /// The type of the argument.
        got:      ObjectType,
    },
    /// A size does not fit in an integer value.
    #[error("integer overflow while converting a length")]
    Overflow,
}
