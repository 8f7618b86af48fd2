//! Fallible chaining for `Option`.
//!
//! `Option::and_then` and `Option::map` already cover transforms that cannot
//! fail. [`Chain`] adds the two fallible forms, which differ only in what
//! happens to the transform's error:
//!
//! | operation | failure becomes |
//! |-----------|-----------------|
//! | [`and_then_try`](Chain::and_then_try) | `None` |
//! | [`and_then_try_or_throw`](Chain::and_then_try_or_throw) | `Err(error)` |
//!
//! # Laws
//!
//! For infallible transforms the crate relies on the monad laws of
//! `Option::and_then`, which the integration tests check:
//!
//! ```text
//! Some(a).and_then(f) == f(a)
//! m.and_then(Some) == m
//! m.and_then(f).and_then(g) == m.and_then(|x| f(x).and_then(g))
//! ```

use super::policy::{ErrorPolicy, Propagate, Swallow};

/// Fallible transforms over an optional value.
///
/// # Examples
///
/// ```rust
/// use optionals::combinator::Chain;
///
/// let input = Some("42");
/// assert_eq!(input.and_then_try(|text| text.parse::<i32>()), Some(42));
///
/// let input = Some("forty-two");
/// assert_eq!(input.and_then_try(|text| text.parse::<i32>()), None);
/// ```
pub trait Chain<T> {
    /// Applies a fallible transform, turning its failure into `None`.
    ///
    /// The transform is not called when the option is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::combinator::Chain;
    ///
    /// let none: Option<&str> = None;
    /// let result = none.and_then_try(|_| -> Result<i32, String> {
    ///     panic!("never called")
    /// });
    /// assert_eq!(result, None);
    /// ```
    fn and_then_try<U, E, F>(self, transform: F) -> Option<U>
    where
        F: FnOnce(T) -> Result<U, E>;

    /// Applies a fallible transform, returning its failure to the caller.
    ///
    /// An absent option yields `Ok(None)` without calling the transform.
    ///
    /// # Errors
    ///
    /// Returns the transform's error unmodified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::combinator::Chain;
    ///
    /// let parsed = Some("7").and_then_try_or_throw(|text| text.parse::<u8>());
    /// assert_eq!(parsed, Ok(Some(7)));
    ///
    /// let failed = Some("700").and_then_try_or_throw(|text| text.parse::<u8>());
    /// assert!(failed.is_err());
    /// ```
    fn and_then_try_or_throw<U, E, F>(self, transform: F) -> Result<Option<U>, E>
    where
        F: FnOnce(T) -> Result<U, E>;
}

impl<T> Chain<T> for Option<T> {
    #[inline]
    fn and_then_try<U, E, F>(self, transform: F) -> Option<U>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        Swallow::attempt(self, |value| transform(value).map(Some))
    }

    #[inline]
    fn and_then_try_or_throw<U, E, F>(self, transform: F) -> Result<Option<U>, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        Propagate::attempt(self, |value| transform(value).map(Some))
    }
}
