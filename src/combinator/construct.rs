//! Conditional construction of optional values.
//!
//! [`some_when`] and [`none_when`] lift a value into an `Option` depending on
//! a predicate. The `_with` forms return a reusable function, handy as an
//! argument to `Option::and_then` or `Iterator::filter_map`:
//!
//! ```rust
//! use optionals::combinator::some_when_with;
//!
//! let evens: Vec<i32> = (1..=6).filter_map(some_when_with(|n: &i32| n % 2 == 0)).collect();
//! assert_eq!(evens, vec![2, 4, 6]);
//! ```

/// Returns `Some(value)` if `predicate(&value)` holds, otherwise `None`.
///
/// # Examples
///
/// ```rust
/// use optionals::combinator::some_when;
///
/// assert_eq!(some_when(|n: &i32| *n > 0, 5), Some(5));
/// assert_eq!(some_when(|n: &i32| *n > 0, -5), None);
/// ```
#[inline]
pub fn some_when<T, P>(predicate: P, value: T) -> Option<T>
where
    P: FnOnce(&T) -> bool,
{
    if predicate(&value) { Some(value) } else { None }
}

/// Returns `None` if `predicate(&value)` holds, otherwise `Some(value)`.
///
/// # Examples
///
/// ```rust
/// use optionals::combinator::none_when;
///
/// assert_eq!(none_when(|text: &&str| text.is_empty(), ""), None);
/// assert_eq!(none_when(|text: &&str| text.is_empty(), "x"), Some("x"));
/// ```
#[inline]
pub fn none_when<T, P>(predicate: P, value: T) -> Option<T>
where
    P: FnOnce(&T) -> bool,
{
    if predicate(&value) { None } else { Some(value) }
}

/// Curried form of [`some_when`].
pub fn some_when_with<T, P>(predicate: P) -> impl Fn(T) -> Option<T>
where
    P: Fn(&T) -> bool,
{
    move |value| some_when(&predicate, value)
}

/// Curried form of [`none_when`].
pub fn none_when_with<T, P>(predicate: P) -> impl Fn(T) -> Option<T>
where
    P: Fn(&T) -> bool,
{
    move |value| none_when(&predicate, value)
}
