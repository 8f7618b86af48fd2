//! Presence predicates for `Option`.
//!
//! `Option` already answers `is_some` / `is_none`. The [`Presence`] trait adds
//! the present/absent vocabulary used across this crate together with the
//! negated forms, which read better in filters and guards:
//!
//! ```rust
//! use optionals::combinator::Presence;
//!
//! let names = vec![Some("ada"), None, Some("grace")];
//! let missing = names.iter().filter(|name| name.is_absent()).count();
//! assert_eq!(missing, 1);
//! ```

/// Boolean queries on the state of an optional value.
///
/// Each pair is an exact negation:
///
/// ```text
/// option.is_not_absent() == option.is_present()
/// option.is_not_present() == option.is_absent()
/// option.is_present() == !option.is_absent()
/// ```
///
/// # Examples
///
/// ```rust
/// use optionals::combinator::Presence;
///
/// let some = Some(0);
/// assert!(some.is_present());
/// assert!(some.is_not_absent());
///
/// let none: Option<i32> = None;
/// assert!(none.is_absent());
/// assert!(none.is_not_present());
/// ```
pub trait Presence {
    /// Returns `true` if the option holds no value.
    fn is_absent(&self) -> bool;

    /// Returns `true` if the option holds a value.
    ///
    /// A falsy or empty value still counts as present:
    ///
    /// ```rust
    /// use optionals::combinator::Presence;
    ///
    /// assert!(Some(false).is_present());
    /// assert!(Some(String::new()).is_present());
    /// ```
    #[inline]
    fn is_present(&self) -> bool {
        !self.is_absent()
    }

    /// Negation of [`is_absent`](Presence::is_absent).
    #[inline]
    fn is_not_absent(&self) -> bool {
        !self.is_absent()
    }

    /// Negation of [`is_present`](Presence::is_present).
    #[inline]
    fn is_not_present(&self) -> bool {
        !self.is_present()
    }
}

impl<T> Presence for Option<T> {
    #[inline]
    fn is_absent(&self) -> bool {
        self.is_none()
    }
}
