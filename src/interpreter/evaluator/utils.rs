use crate::error::RuntimeError;

/// Verifies that exactly `want` arguments were supplied.
///
/// # Errors
/// Returns [`RuntimeError::ArgumentCountMismatch`] carrying both counts.
///
/// # Example
/// ```
/// use quill::{error::RuntimeError, interpreter::evaluator::utils::check_arity};
///
/// assert!(check_arity(&[1, 2], 2).is_ok());
/// assert_eq!(check_arity(&[1], 2),
///            Err(RuntimeError::ArgumentCountMismatch { got: 1, want: 2 }));
/// ```
pub const fn check_arity<T>(args: &[T], want: usize) -> Result<(), RuntimeError> {
    if args.len() == want {
        Ok(())
    } else {
        Err(RuntimeError::ArgumentCountMismatch { got: args.len(),
                                                  want })
    }
}
