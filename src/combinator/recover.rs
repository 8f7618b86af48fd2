//! Fallback and defaulting for `Option`.
//!
//! All fallbacks are lazy: the producer runs only when the option is absent.
//!
//! | operation | result | absent case |
//! |-----------|--------|-------------|
//! | [`or_produce`](Recover::or_produce) | `T` | `producer()` |
//! | [`map_none`](Recover::map_none) | `Option<T>` (always `Some`) | `Some(producer())` |
//! | [`or_optional`](Recover::or_optional) | `Option<T>` | `other()` |
//! | [`or_throw`](Recover::or_throw) | `Result<T, E>` | `Err(error())` |
//! | [`required`](Recover::required) | `Result<T, AbsentError>` | `Err(AbsentError)` |

use super::error::AbsentError;

/// Lazy fallbacks for an optional value.
///
/// # Examples
///
/// ```rust
/// use optionals::combinator::Recover;
///
/// let configured: Option<u16> = None;
/// assert_eq!(configured.or_produce(|| 8080), 8080);
/// assert_eq!(configured.map_none(|| 8080), Some(8080));
/// assert_eq!(configured.or_optional(|| Some(9090)), Some(9090));
/// ```
pub trait Recover<T>: Sized {
    /// Unwraps the value, or evaluates `producer` when absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::combinator::Recover;
    ///
    /// let present = Some(42);
    /// assert_eq!(present.or_produce(|| unreachable!()), 42);
    /// ```
    fn or_produce<F>(self, producer: F) -> T
    where
        F: FnOnce() -> T;

    /// Like [`or_produce`](Recover::or_produce) but stays wrapped.
    ///
    /// The result is always present: either the original value or the
    /// produced fallback.
    #[inline]
    fn map_none<F>(self, producer: F) -> Option<T>
    where
        F: FnOnce() -> T,
    {
        Some(self.or_produce(producer))
    }

    /// Returns `self` when present, otherwise the lazily evaluated `other`.
    ///
    /// Unlike [`or_produce`](Recover::or_produce), the result is never unwrapped.
    fn or_optional<F>(self, other: F) -> Option<T>
    where
        F: FnOnce() -> Option<T>;

    /// Unwraps the value or builds an error from `error`.
    ///
    /// # Errors
    ///
    /// Returns `error()` when the option is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::combinator::Recover;
    ///
    /// let user: Option<&str> = None;
    /// assert_eq!(user.or_throw(|| "no user"), Err("no user"));
    /// ```
    fn or_throw<E, F>(self, error: F) -> Result<T, E>
    where
        F: FnOnce() -> E;

    /// Unwraps the value or reports an [`AbsentError`] naming `T`.
    ///
    /// # Errors
    ///
    /// Returns [`AbsentError`] when the option is absent.
    #[inline]
    fn required(self) -> Result<T, AbsentError> {
        self.or_throw(AbsentError::of::<T>)
    }
}

impl<T> Recover<T> for Option<T> {
    #[inline]
    fn or_produce<F>(self, producer: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.unwrap_or_else(producer)
    }

    #[inline]
    fn or_optional<F>(self, other: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        self.or_else(other)
    }

    #[inline]
    fn or_throw<E, F>(self, error: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        self.ok_or_else(error)
    }
}
