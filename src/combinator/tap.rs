//! Side-effect hooks that leave the option untouched.
//!
//! Each hook runs its block on the matching branch only and hands back the
//! original option, so hooks can sit in the middle of a chain:
//!
//! ```rust
//! use optionals::combinator::Tap;
//!
//! let mut seen = Vec::new();
//! let doubled = Some(21)
//!     .when_present(|value| seen.push(*value))
//!     .map(|value| value * 2);
//!
//! assert_eq!(doubled, Some(42));
//! assert_eq!(seen, vec![21]);
//! ```
//!
//! [`try_when_present`](Tap::try_when_present) propagates the block's error,
//! unlike the `_try` chaining family which swallows it.

use super::policy::{ErrorPolicy, Propagate};

/// Hooks invoked on one branch of an optional value.
pub trait Tap<T>: Sized {
    /// Runs `block` with a reference to the value when present.
    #[must_use = "the hook returns the original option"]
    fn when_present<F>(self, block: F) -> Self
    where
        F: FnOnce(&T);

    /// Runs `block` when absent.
    #[must_use = "the hook returns the original option"]
    fn when_absent<F>(self, block: F) -> Self
    where
        F: FnOnce();

    /// Runs a fallible `block` when present and returns the original option.
    ///
    /// # Errors
    ///
    /// Returns the block's error unmodified. An absent option never fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::combinator::Tap;
    ///
    /// let checked = Some(-1).try_when_present(|value| {
    ///     if *value < 0 { Err("negative") } else { Ok(()) }
    /// });
    /// assert_eq!(checked, Err("negative"));
    ///
    /// let none: Option<i32> = None;
    /// assert_eq!(none.try_when_present(|_| Err("never")), Ok(None));
    /// ```
    fn try_when_present<E, F>(self, block: F) -> Result<Self, E>
    where
        F: FnOnce(&T) -> Result<(), E>;
}

impl<T> Tap<T> for Option<T> {
    #[inline]
    fn when_present<F>(self, block: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Some(value) = &self {
            block(value);
        }
        self
    }

    #[inline]
    fn when_absent<F>(self, block: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_none() {
            block();
        }
        self
    }

    #[inline]
    fn try_when_present<E, F>(self, block: F) -> Result<Self, E>
    where
        F: FnOnce(&T) -> Result<(), E>,
    {
        Propagate::attempt(self.as_ref(), |value| block(value).map(Some))?;
        Ok(self)
    }
}
