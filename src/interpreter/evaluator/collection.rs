use std::rc::Rc;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, eval_expression},
        value::{
            core::{MapPair, MapPairs, Object},
            environment::Environment,
        },
    },
    util::num::i64_to_index,
};

/// Evaluates the elements of an array literal left to right.
///
/// The first failing element aborts the literal.
pub fn eval_array_literal(elements: &[Expr], env: &Environment) -> EvalResult<Object> {
    let values = eval_expressions(elements, env)?;

    Ok(Object::from(values))
}

/// Evaluates a list of expressions left to right, stopping at the first
/// failure.
pub fn eval_expressions(exprs: &[Expr], env: &Environment) -> EvalResult<Vec<Object>> {
    exprs.iter().map(|expr| eval_expression(expr, env)).collect()
}

/// Evaluates a map literal.
///
/// Each key is evaluated before its value, pairs in source order. A key that
/// appears twice keeps the last value written.
///
/// # Errors
/// A key that is not an integer, boolean or string yields
/// [`RuntimeError::UnusableMapKey`].
pub fn eval_map_literal(pairs: &[(Expr, Expr)], env: &Environment) -> EvalResult<Object> {
    let mut map = MapPairs::default();

    for (key_expr, value_expr) in pairs {
        let key = eval_expression(key_expr, env)?;
        let hashed = key.map_key().ok_or(RuntimeError::UnusableMapKey(key.kind()))?;
        let value = eval_expression(value_expr, env)?;

        map.insert(hashed, MapPair { key, value });
    }

    Ok(Object::Map(Rc::new(map)))
}

/// Evaluates `left[index]`.
///
/// - Arrays take an integer index; out-of-range and negative indices yield
///   `null`.
/// - Maps take any hashable key; a missing key yields `null`.
///
/// # Errors
/// - Indexing a map with an unhashable key yields
///   [`RuntimeError::UnusableMapKey`].
/// - Any other combination yields [`RuntimeError::IndexNotSupported`].
///
/// # Example
/// ```
/// use quill::interpreter::{evaluator::collection::eval_index, value::core::Object};
///
/// let array = Object::from(vec![Object::from(1), Object::from(2), Object::from(3)]);
///
/// assert_eq!(eval_index(&array, &Object::Integer(1)), Ok(Object::Integer(2)));
/// assert_eq!(eval_index(&array, &Object::Integer(3)), Ok(Object::Null));
/// assert_eq!(eval_index(&array, &Object::Integer(-1)), Ok(Object::Null));
/// ```
pub fn eval_index(left: &Object, index: &Object) -> Result<Object, RuntimeError> {
    match (left, index) {
        (Object::Array(elements), Object::Integer(i)) => {
            let element = i64_to_index(*i).and_then(|i| elements.get(i));
            Ok(element.cloned().unwrap_or(Object::Null))
        },
        (Object::Map(pairs), _) => {
            let key = index.map_key().ok_or(RuntimeError::UnusableMapKey(index.kind()))?;
            Ok(pairs.get(&key).map_or(Object::Null, |pair| pair.value.clone()))
        },
        _ => Err(RuntimeError::IndexNotSupported { left:  left.kind(),
                                                   index: index.kind(), }),
    }
}
