use std::rc::Rc;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::value::core::{Object, ObjectType},
};

/// Applies a binary operator to two strings.
///
/// `+` concatenates; `==` and `!=` compare contents.
///
/// # Errors
/// Any other operator yields [`RuntimeError::UnknownInfixOperator`].
pub fn eval_string_op(op: BinaryOperator, a: &str, b: &str) -> Result<Object, RuntimeError> {
    match op {
        BinaryOperator::Add => Ok(Object::from(format!("{a}{b}"))),
        BinaryOperator::Equal => Ok(Object::Boolean(a == b)),
        BinaryOperator::NotEqual => Ok(Object::Boolean(a != b)),
        _ => Err(RuntimeError::UnknownInfixOperator { left: ObjectType::Str,
                                                      op,
                                                      right: ObjectType::Str }),
    }
}

/// Compares two values of the same non-numeric, non-string type.
///
/// Booleans and `null` compare by value; arrays, maps and functions compare
/// by identity, so two separately built `[1]` are not equal; builtins compare
/// by name.
///
/// # Errors
/// Operators other than `==` and `!=` yield
/// [`RuntimeError::UnknownInfixOperator`].
pub fn eval_identity_equality(op: BinaryOperator,
                              left: &Object,
                              right: &Object)
                              -> Result<Object, RuntimeError> {
    let same = match (left, right) {
        (Object::Boolean(a), Object::Boolean(b)) => a == b,
        (Object::Null, Object::Null) => true,
        (Object::Array(a), Object::Array(b)) => Rc::ptr_eq(a, b),
        (Object::Map(a), Object::Map(b)) => Rc::ptr_eq(a, b),
        (Object::Function(a), Object::Function(b)) => Rc::ptr_eq(a, b),
        (Object::Builtin(a), Object::Builtin(b)) => a.name == b.name,
        _ => false,
    };

    match op {
        BinaryOperator::Equal => Ok(Object::Boolean(same)),
        BinaryOperator::NotEqual => Ok(Object::Boolean(!same)),
        _ => Err(RuntimeError::UnknownInfixOperator { left: left.kind(),
                                                      op,
                                                      right: right.kind() }),
    }
}
