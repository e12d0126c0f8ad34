use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::binary::{
            comparison::{eval_identity_equality, eval_string_op},
            scalar::eval_integer_op,
        },
        value::core::Object,
    },
};

/// Evaluates a binary operation between two values.
///
/// The operation is routed by operand types:
/// - two integers use integer arithmetic and comparison;
/// - two strings support `+` (concatenation), `==` and `!=`;
/// - any other pair of the same type supports only `==` and `!=`.
///
/// Operands of different types are rejected: `==` and `!=` report an unknown
/// operator, every other operator reports a type mismatch.
///
/// # Example
/// ```
/// use quill::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::core::eval_infix, value::core::Object},
/// };
///
/// let sum = eval_infix(BinaryOperator::Add, &Object::Integer(3), &Object::Integer(4));
/// assert_eq!(sum, Ok(Object::Integer(7)));
///
/// let err = eval_infix(BinaryOperator::Add, &Object::Integer(5), &Object::Boolean(true));
/// assert_eq!(err.unwrap_err().to_string(), "type mismatch: INTEGER + BOOLEAN");
/// ```
pub fn eval_infix(op: BinaryOperator,
                  left: &Object,
                  right: &Object)
                  -> Result<Object, RuntimeError> {
    match (left, right) {
        (Object::Integer(a), Object::Integer(b)) => eval_integer_op(op, *a, *b),
        (Object::Str(a), Object::Str(b)) => eval_string_op(op, a, b),
        _ if left.kind() != right.kind() => {
            if op.is_equality() {
                Err(RuntimeError::UnknownInfixOperator { left: left.kind(),
                                                         op,
                                                         right: right.kind() })
            } else {
                Err(RuntimeError::TypeMismatch { left: left.kind(),
                                                 op,
                                                 right: right.kind() })
            }
        },
        _ => eval_identity_equality(op, left, right),
    }
}
