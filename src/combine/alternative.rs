//! Choosing the first present value.

/// Returns the first present value, scanning left to right.
///
/// Stops pulling from the iterator at the first `Some`. Returns `None` if
/// every option is absent or the iterator is empty.
///
/// # Examples
///
/// ```rust
/// use optionals::combine::coalesce;
///
/// let from_flag: Option<&str> = None;
/// let from_env = Some("env");
/// let from_file = Some("file");
///
/// assert_eq!(coalesce([from_flag, from_env, from_file]), Some("env"));
/// assert_eq!(coalesce(Vec::<Option<i32>>::new()), None);
/// ```
#[inline]
pub fn coalesce<T, I>(options: I) -> Option<T>
where
    I: IntoIterator<Item = Option<T>>,
{
    options.into_iter().flatten().next()
}

/// Returns the first present value among the given expressions.
///
/// Unlike [`coalesce`](crate::combine::coalesce), later expressions are not
/// evaluated once a present value is found: `coalesce!(a, b, c)` expands to
/// `a.or_else(|| b).or_else(|| c)`.
///
/// # Examples
///
/// ```rust
/// use optionals::coalesce;
///
/// let mut lookups = 0;
/// let mut lookup = |found: bool| {
///     lookups += 1;
///     found.then_some(lookups)
/// };
///
/// let value = coalesce!(lookup(false), lookup(true), lookup(true));
/// assert_eq!(value, Some(2));
/// assert_eq!(lookups, 2);
/// ```
#[macro_export]
macro_rules! coalesce {
    () => {
        ::core::option::Option::None
    };
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $first $(.or_else(|| $rest))*
    };
}
