use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::value::core::Object,
};

/// Evaluates a prefix operation on a value.
///
/// Supported operators:
/// - `Not`: negates the truthiness of any value; only `null` and `false` are
///   falsy, so `!0` is `false`.
/// - `Negate`: integer negation, wrapping on overflow.
///
/// # Errors
/// Negating anything but an integer yields
/// [`RuntimeError::UnknownPrefixOperator`].
///
/// # Example
/// ```
/// use quill::{
///     ast::UnaryOperator,
///     interpreter::{evaluator::unary::eval_prefix, value::core::Object},
/// };
///
/// assert_eq!(eval_prefix(UnaryOperator::Negate, &Object::Integer(5)), Ok(Object::Integer(-5)));
/// assert_eq!(eval_prefix(UnaryOperator::Not, &Object::Integer(0)), Ok(Object::Boolean(false)));
///
/// let err = eval_prefix(UnaryOperator::Negate, &Object::Boolean(true)).unwrap_err();
/// assert_eq!(err.to_string(), "unknown operator: -BOOLEAN");
/// ```
pub fn eval_prefix(op: UnaryOperator, operand: &Object) -> Result<Object, RuntimeError> {
    match op {
        UnaryOperator::Not => Ok(Object::Boolean(!operand.is_truthy())),
        UnaryOperator::Negate => match operand {
            Object::Integer(n) => Ok(Object::Integer(n.wrapping_neg())),
            _ => Err(RuntimeError::UnknownPrefixOperator { op,
                                                           operand: operand.kind() }),
        },
    }
}
