use crate::{ast::BinaryOperator, error::RuntimeError, interpreter::value::core::Object};

/// Applies a binary operator to two integers.
///
/// Arithmetic wraps on overflow. Relational and equality operators produce
/// booleans.
///
/// # Errors
/// Division by zero yields [`RuntimeError::DivisionByZero`].
pub fn eval_integer_op(op: BinaryOperator, a: i64, b: i64) -> Result<Object, RuntimeError> {
    use BinaryOperator::{Add, Div, Equal, Greater, Less, Mul, NotEqual, Sub};

    let result = match op {
        Add => Object::Integer(a.wrapping_add(b)),
        Sub => Object::Integer(a.wrapping_sub(b)),
        Mul => Object::Integer(a.wrapping_mul(b)),
        Div => {
            if b == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            Object::Integer(a.wrapping_div(b))
        },
        Less => Object::Boolean(a < b),
        Greater => Object::Boolean(a > b),
        Equal => Object::Boolean(a == b),
        NotEqual => Object::Boolean(a != b),
    };

    Ok(result)
}
