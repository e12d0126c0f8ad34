use tracing::trace;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            collection::eval_expressions,
            core::{EvalResult, Unwind, eval_block, eval_expression},
            utils::check_arity,
        },
        value::{
            core::{Function, Object},
            environment::Environment,
        },
    },
};

/// Evaluates a call expression.
///
/// The callee is evaluated first, then the arguments left to right. The
/// first failure aborts the call before anything is applied.
pub fn eval_call(function: &Expr, arguments: &[Expr], env: &Environment) -> EvalResult<Object> {
    let callee = eval_expression(function, env)?;
    let args = eval_expressions(arguments, env)?;

    apply_function(&callee, args)
}

/// Applies a callable value to already-evaluated arguments.
///
/// Builtins receive the arguments directly. User-defined functions run their
/// body in a fresh scope enclosing the captured environment, with each
/// parameter bound to its argument. A `return` inside the body stops at this
/// call and becomes its value.
///
/// # Errors
/// - Calling something that is not callable yields
///   [`RuntimeError::NotAFunction`].
/// - A user-defined function called with the wrong number of arguments
///   yields [`RuntimeError::ArgumentCountMismatch`].
/// - Errors raised by the body or by a builtin propagate unchanged.
///
/// # Example
/// ```
/// use quill::{
///     interpreter::{
///         evaluator::function::{builtin::lookup_builtin, core::apply_function},
///         value::core::Object,
///     },
/// };
///
/// let length = Object::Builtin(lookup_builtin("length").unwrap());
/// let result = apply_function(&length, vec![Object::from("four")]).unwrap();
///
/// assert_eq!(result, Object::Integer(4));
/// ```
pub fn apply_function(callee: &Object, args: Vec<Object>) -> EvalResult<Object> {
    match callee {
        Object::Function(function) => call_user_defined_function(function, args),
        Object::Builtin(builtin) => {
            trace!(name = builtin.name, args = args.len(), "builtin call");
            Ok((builtin.func)(&args)?)
        },
        other => Err(RuntimeError::NotAFunction(other.kind()).into()),
    }
}

fn call_user_defined_function(function: &Function, args: Vec<Object>) -> EvalResult<Object> {
    let parameters = &function.literal.parameters;
    check_arity(&args, parameters.len())?;
    trace!(function = %function.literal, "call");

    let scope = function.env.enclosed();
    for (parameter, arg) in parameters.iter().zip(args) {
        scope.define(&parameter.name, arg)?;
    }

    match eval_block(&function.literal.body, &scope) {
        Ok(value) | Err(Unwind::Return(value)) => Ok(value),
        Err(error) => Err(error),
    }
}
