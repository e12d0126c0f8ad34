use std::rc::Rc;

use tracing::debug;

use crate::{
    ast::{BlockStatement, Expr, Identifier, Program, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::core::eval_infix,
            collection::{eval_array_literal, eval_index, eval_map_literal},
            function::{builtin::lookup_builtin, core::eval_call},
            unary::eval_prefix,
        },
        value::{
            core::{Function, Object},
            environment::Environment,
        },
    },
};

/// Why evaluation stopped before producing a value.
///
/// Both cases travel through the `Err` side of [`EvalResult`], so `?` aborts
/// every enclosing evaluation until the case is handled: a runtime error
/// reaches the program boundary, a return value reaches the nearest function
/// call (or the program boundary for a top-level `return`).
#[derive(Debug, Clone, PartialEq)]
pub enum Unwind {
    /// A runtime error.
    Error(RuntimeError),
    /// A `return` statement's value.
    Return(Object),
}

impl From<RuntimeError> for Unwind {
    fn from(e: RuntimeError) -> Self {
        Self::Error(e)
    }
}

/// Result type used by the evaluator.
pub type EvalResult<T> = Result<T, Unwind>;

/// Evaluates a program against an environment.
///
/// Statements are executed in order and the value of the last one is the
/// result. A top-level `return` stops the program and yields its value. A
/// runtime error stops the program and is returned as [`Object::Error`]. An
/// empty program evaluates to [`Object::Null`].
///
/// # Example
/// ```
/// use quill::{
///     interpreter::{evaluator::core::evaluate, value::{core::Object, environment::Environment}},
///     parse,
/// };
///
/// let (program, errors) = parse("const double = fn(x) { x * 2 }; double(21)");
/// assert!(errors.is_empty());
///
/// assert_eq!(evaluate(&program, &Environment::new()), Object::Integer(42));
/// ```
pub fn evaluate(program: &Program, env: &Environment) -> Object {
    match eval_statements(&program.statements, env) {
        Ok(value) | Err(Unwind::Return(value)) => value,
        Err(Unwind::Error(error)) => {
            debug!(%error, "runtime error");
            Object::Error(error)
        },
    }
}

/// Executes statements in order, returning the value of the last one.
fn eval_statements(statements: &[Statement], env: &Environment) -> EvalResult<Object> {
    let mut last = Object::Null;

    for statement in statements {
        last = eval_statement(statement, env)?;
    }

    Ok(last)
}

/// Evaluates a block in the given environment.
///
/// Blocks do not open a scope of their own; only function calls do.
pub fn eval_block(block: &BlockStatement, env: &Environment) -> EvalResult<Object> {
    eval_statements(&block.statements, env)
}

/// Evaluates a single statement.
///
/// Const declarations bind their value and evaluate to [`Object::Null`];
/// return statements unwind with their value.
pub fn eval_statement(statement: &Statement, env: &Environment) -> EvalResult<Object> {
    match statement {
        Statement::Const { name, value } => {
            let value = eval_expression(value, env)?;
            env.define(&name.name, value)?;
            Ok(Object::Null)
        },
        Statement::Return { value } => Err(Unwind::Return(eval_expression(value, env)?)),
        Statement::Expression(expr) => eval_expression(expr, env),
    }
}

/// Evaluates an expression and returns the resulting value.
///
/// This is the main entry point for expression evaluation; it dispatches on
/// every expression variant. Sub-expressions are evaluated left to right and
/// the first failure aborts the whole expression.
pub fn eval_expression(expr: &Expr, env: &Environment) -> EvalResult<Object> {
    match expr {
        Expr::Identifier(ident) => Ok(eval_identifier(ident, env)?),
        Expr::Integer(value) => Ok(Object::Integer(*value)),
        Expr::Str(value) => Ok(Object::from(value.as_str())),
        Expr::Boolean(value) => Ok(Object::Boolean(*value)),
        Expr::Prefix { op, operand } => {
            let operand = eval_expression(operand, env)?;
            Ok(eval_prefix(*op, &operand)?)
        },
        Expr::Infix { left, op, right } => {
            let left = eval_expression(left, env)?;
            let right = eval_expression(right, env)?;
            Ok(eval_infix(*op, &left, &right)?)
        },
        Expr::If { condition,
                   consequence,
                   alternative, } => {
            if eval_expression(condition, env)?.is_truthy() {
                eval_block(consequence, env)
            } else if let Some(alternative) = alternative {
                eval_block(alternative, env)
            } else {
                Ok(Object::Null)
            }
        },
        Expr::Function(literal) => {
            let function = Function { literal: Rc::clone(literal),
                                      env:     env.clone(), };
            Ok(Object::Function(Rc::new(function)))
        },
        Expr::Call { function, arguments } => eval_call(function, arguments, env),
        Expr::Array(elements) => eval_array_literal(elements, env),
        Expr::Map(pairs) => eval_map_literal(pairs, env),
        Expr::Index { left, index } => {
            let left = eval_expression(left, env)?;
            let index = eval_expression(index, env)?;
            Ok(eval_index(&left, &index)?)
        },
    }
}

/// Resolves an identifier: the environment chain first, then the builtin
/// registry.
///
/// # Errors
/// Returns [`RuntimeError::IdentifierNotFound`] if neither has the name.
fn eval_identifier(ident: &Identifier, env: &Environment) -> Result<Object, RuntimeError> {
    env.get(&ident.name)
       .or_else(|| lookup_builtin(&ident.name).map(Object::Builtin))
       .ok_or_else(|| RuntimeError::IdentifierNotFound(ident.name.clone()))
}
