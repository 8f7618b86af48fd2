//! Folding an `Option` into a plain value.

/// Reduces an optional value to a non-optional result with two arms.
///
/// ```text
/// None.fold(absent_case, f) == absent_case
/// Some(a).fold(absent_case, f) == f(a)
/// ```
///
/// # Examples
///
/// ```rust
/// use optionals::combinator::Fold;
///
/// let greeting = |name: Option<&str>| name.fold("hello, stranger".to_string(), |name| {
///     format!("hello, {name}")
/// });
///
/// assert_eq!(greeting(Some("ada")), "hello, ada");
/// assert_eq!(greeting(None), "hello, stranger");
/// ```
pub trait Fold<T> {
    /// Returns `absent_case` when absent, otherwise `present(value)`.
    ///
    /// `present` is only invoked when the option holds a value.
    fn fold<R, F>(self, absent_case: R, present: F) -> R
    where
        F: FnOnce(T) -> R;
}

impl<T> Fold<T> for Option<T> {
    #[inline]
    fn fold<R, F>(self, absent_case: R, present: F) -> R
    where
        F: FnOnce(T) -> R,
    {
        self.map_or(absent_case, present)
    }
}
