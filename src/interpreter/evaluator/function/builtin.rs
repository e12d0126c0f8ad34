use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{function::print, utils::check_arity},
        value::core::{Builtin, BuiltinFn, Object, ObjectType},
    },
    util::num::usize_to_i64_checked,
};

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry maps a name to the function pointer implementing it. The macro
/// produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => $func:expr
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name: &'static str,
            func: BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, func: $func },
            )*
        ];
        /// Names of every builtin, in registration order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "length"    => length,
    "lastIndex" => last_index,
    "tail"      => tail,
    "push"      => push,
    "print"     => print::print,
}

/// Finds a builtin by name.
///
/// Builtins are consulted only after the environment chain, so a program can
/// shadow them with its own bindings.
///
/// # Example
/// ```
/// use quill::interpreter::evaluator::function::builtin::lookup_builtin;
///
/// assert_eq!(lookup_builtin("push").map(|b| b.name), Some("push"));
/// assert!(lookup_builtin("pop").is_none());
/// ```
#[must_use]
pub fn lookup_builtin(name: &str) -> Option<Builtin> {
    BUILTIN_TABLE.iter()
                 .find(|def| def.name == name)
                 .map(|def| Builtin { name: def.name,
                                      func: def.func, })
}

/// Returns the length of a string in bytes or the number of elements of an
/// array.
///
/// # Example
/// ```
/// use quill::interpreter::{evaluator::function::builtin::length, value::core::Object};
///
/// assert_eq!(length(&[Object::from("hello")]), Ok(Object::Integer(5)));
/// assert_eq!(length(&[Object::Integer(1)]).unwrap_err().to_string(),
///            "argument to 'length' is not supported, got INTEGER");
/// ```
pub fn length(args: &[Object]) -> Result<Object, RuntimeError> {
    check_arity(args, 1)?;

    let len = match &args[0] {
        Object::Str(s) => s.len(),
        Object::Array(elements) => elements.len(),
        other => {
            return Err(RuntimeError::UnsupportedArgument { builtin: "length",
                                                           got:     other.kind(), });
        },
    };

    Ok(Object::Integer(usize_to_i64_checked(len)?))
}

/// Returns the index of the last element of an array, or `null` for an empty
/// array.
pub fn last_index(args: &[Object]) -> Result<Object, RuntimeError> {
    check_arity(args, 1)?;
    let elements = expect_array("lastIndex", &args[0])?;

    match elements.len() {
        0 => Ok(Object::Null),
        len => Ok(Object::Integer(usize_to_i64_checked(len - 1)?)),
    }
}

/// Returns a new array holding every element but the first. The tail of an
/// empty array is empty.
///
/// # Example
/// ```
/// use quill::interpreter::{evaluator::function::builtin::tail, value::core::Object};
///
/// let array = Object::from(vec![Object::from(1), Object::from(2), Object::from(3)]);
/// assert_eq!(tail(&[array]).unwrap().inspect(), "[2, 3]");
/// ```
pub fn tail(args: &[Object]) -> Result<Object, RuntimeError> {
    check_arity(args, 1)?;
    let elements = expect_array("tail", &args[0])?;

    let rest = elements.get(1..).unwrap_or_default();

    Ok(Object::from(rest.to_vec()))
}

/// Returns a new array with the second argument appended. The original array
/// is left untouched.
pub fn push(args: &[Object]) -> Result<Object, RuntimeError> {
    check_arity(args, 2)?;

    let Object::Array(elements) = &args[0] else {
        return Err(RuntimeError::FirstArgumentType { builtin:  "push",
                                                     expected: ObjectType::Array,
                                                     got:      args[0].kind(), });
    };

    let mut pushed = Vec::with_capacity(elements.len() + 1);
    pushed.extend(elements.iter().cloned());
    pushed.push(args[1].clone());

    Ok(Object::from(pushed))
}

/// Extracts the elements of an array argument.
fn expect_array<'a>(builtin: &'static str,
                    arg: &'a Object)
                    -> Result<&'a Rc<Vec<Object>>, RuntimeError> {
    match arg {
        Object::Array(elements) => Ok(elements),
        other => Err(RuntimeError::ArgumentType { builtin,
                                                  expected: ObjectType::Array,
                                                  got: other.kind() }),
    }
}
