//! Checked narrowing from `dyn Any` to a concrete type.
//!
//! A cast succeeds only when the dynamic type is exactly the requested type;
//! anything else, including an absent input, yields `None`.
//!
//! The method forms are defined through the free functions:
//!
//! ```text
//! option.cast::<U>() == option.and_then(cast_to::<U>())
//! ```
//!
//! and the property tests check this equivalence for arbitrary inputs.
//!
//! # Examples
//!
//! ```rust
//! use std::any::Any;
//! use optionals::structure::Cast;
//!
//! let boxed: Option<Box<dyn Any>> = Some(Box::new("text".to_string()));
//! assert_eq!(boxed.cast::<String>(), Some("text".to_string()));
//!
//! let boxed: Option<Box<dyn Any>> = Some(Box::new("text".to_string()));
//! assert_eq!(boxed.cast::<i32>(), None);
//! ```

use std::any::Any;

/// Moves the value out of `value` if it is a `U`.
#[inline]
pub fn cast<U: Any>(value: Box<dyn Any>) -> Option<U> {
    value
        .downcast::<U>()
        .inspect_err(|_| log_failed_cast::<U>())
        .ok()
        .map(|narrowed| *narrowed)
}

/// [`cast`] for values that are also `Send`.
#[inline]
pub fn cast_send<U: Any>(value: Box<dyn Any + Send>) -> Option<U> {
    value
        .downcast::<U>()
        .inspect_err(|_| log_failed_cast::<U>())
        .ok()
        .map(|narrowed| *narrowed)
}

fn log_failed_cast<U>() {
    tracing::trace!(target_type = std::any::type_name::<U>(), "cast failed");
}

/// Curried form of [`cast`], usable directly with `Option::and_then`.
///
/// # Examples
///
/// ```rust
/// use std::any::Any;
/// use optionals::structure::cast_to;
///
/// let values: Vec<Box<dyn Any>> = vec![Box::new(1_u8) as Box<dyn Any>, Box::new("two"), Box::new(3_u8)];
/// let bytes: Vec<u8> = values.into_iter().filter_map(cast_to::<u8>()).collect();
/// assert_eq!(bytes, vec![1, 3]);
/// ```
pub const fn cast_to<U: Any>() -> impl Fn(Box<dyn Any>) -> Option<U> {
    cast::<U>
}

/// Borrows `value` as a `U` if that is its dynamic type.
#[inline]
pub fn cast_ref<U: Any>(value: &dyn Any) -> Option<&U> {
    value.downcast_ref::<U>()
}

/// Downcasting for owned, type-erased optional values.
pub trait Cast {
    /// Attempts to narrow the held value to `U`.
    fn cast<U: Any>(self) -> Option<U>;
}

impl Cast for Option<Box<dyn Any>> {
    #[inline]
    fn cast<U: Any>(self) -> Option<U> {
        self.and_then(cast_to::<U>())
    }
}

impl Cast for Option<Box<dyn Any + Send>> {
    #[inline]
    fn cast<U: Any>(self) -> Option<U> {
        self.and_then(cast_send::<U>)
    }
}

/// Downcasting for borrowed, type-erased optional values.
///
/// # Examples
///
/// ```rust
/// use std::any::Any;
/// use optionals::structure::CastRef;
///
/// let number = 7_i64;
/// let erased: Option<&dyn Any> = Some(&number);
/// assert_eq!(erased.cast_ref::<i64>(), Some(&7));
/// assert_eq!(erased.cast_ref::<i32>(), None);
/// ```
pub trait CastRef<'a> {
    /// Attempts to view the held value as a `&U`.
    fn cast_ref<U: Any>(self) -> Option<&'a U>;
}

impl<'a> CastRef<'a> for Option<&'a dyn Any> {
    #[inline]
    fn cast_ref<U: Any>(self) -> Option<&'a U> {
        self.and_then(cast_ref::<U>)
    }
}
