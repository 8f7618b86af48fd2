//! Collapsing nested optionality.

/// Removes one level of nesting from an `Option<Option<T>>`.
///
/// Free-function form of `Option::flatten`, equivalent to
/// `nested.and_then(|inner| inner)`:
///
/// ```text
/// flatten(Some(Some(v))) == Some(v)
/// flatten(Some(None)) == None
/// flatten(None) == None
/// ```
///
/// # Examples
///
/// ```rust
/// use optionals::structure::flatten;
///
/// let lookups = vec![Some(Some(1)), Some(None), None];
/// let flat: Vec<Option<i32>> = lookups.into_iter().map(flatten).collect();
/// assert_eq!(flat, vec![Some(1), None, None]);
/// ```
#[inline]
pub fn flatten<T>(nested: Option<Option<T>>) -> Option<T> {
    nested.and_then(|inner| inner)
}
