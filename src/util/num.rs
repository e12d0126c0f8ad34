use crate::error::RuntimeError;

/// Converts a length or count to an integer value.
///
/// ## Errors
/// Returns [`RuntimeError::Overflow`] if `value` exceeds `i64::MAX`.
///
/// ## Example
/// ```
/// use quill::util::num::usize_to_i64_checked;
///
/// assert_eq!(usize_to_i64_checked(42), Ok(42));
/// ```
pub fn usize_to_i64_checked(value: usize) -> Result<i64, RuntimeError> {
    i64::try_from(value).map_err(|_| RuntimeError::Overflow)
}

/// Converts an integer value to a sequence index.
///
/// Returns `None` for negative values, which never address an element.
///
/// ## Example
/// ```
/// use quill::util::num::i64_to_index;
///
/// assert_eq!(i64_to_index(3), Some(3));
/// assert_eq!(i64_to_index(-1), None);
/// ```
#[must_use]
pub fn i64_to_index(value: i64) -> Option<usize> {
    usize::try_from(value).ok()
}
