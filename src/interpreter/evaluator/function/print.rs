use crate::{error::RuntimeError, interpreter::value::core::Object};

/// Prints the rendering of each argument on its own line and returns `null`.
///
/// Accepts any number of arguments, including none.
///
/// # Example
/// ```
/// use quill::interpreter::{evaluator::function::print::print, value::core::Object};
///
/// // Output goes to stdout; only the returned value is checked here.
/// let result = print(&[Object::Integer(42), Object::from("hi")]).unwrap();
///
/// assert_eq!(result, Object::Null);
/// ```
pub fn print(args: &[Object]) -> Result<Object, RuntimeError> {
    for arg in args {
        println!("{}", arg.inspect());
    }
    Ok(Object::Null)
}
