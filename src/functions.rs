//! Free-function and curried forms of the `Option` combinators.
//!
//! Every function here delegates to the corresponding trait method. The
//! `_with` forms capture their callback and return a reusable function from
//! option to result, which composes well with iterator adapters:
//!
//! ```rust
//! use optionals::functions::{is_absent, or_produce_with};
//!
//! let settings = vec![Some(3), None, Some(5)];
//! assert_eq!(settings.iter().filter(|setting| is_absent(setting)).count(), 1);
//!
//! let resolved: Vec<i32> = settings.into_iter().map(or_produce_with(|| 1)).collect();
//! assert_eq!(resolved, vec![3, 1, 5]);
//! ```

use crate::combinator::{Collection, OptionCollection, Presence, Recover};

// =============================================================================
// Presence
// =============================================================================

/// Free-function form of [`Presence::is_absent`].
#[inline]
pub fn is_absent<T>(option: &Option<T>) -> bool {
    option.is_absent()
}

/// Free-function form of [`Presence::is_present`].
#[inline]
pub fn is_present<T>(option: &Option<T>) -> bool {
    option.is_present()
}

/// Free-function form of [`Presence::is_not_absent`].
#[inline]
pub fn is_not_absent<T>(option: &Option<T>) -> bool {
    option.is_not_absent()
}

/// Free-function form of [`Presence::is_not_present`].
#[inline]
pub fn is_not_present<T>(option: &Option<T>) -> bool {
    option.is_not_present()
}

// =============================================================================
// Chaining and filtering
// =============================================================================

/// Free-function form of `Option::and_then`.
#[inline]
pub fn and_then<T, U, F>(option: Option<T>, transform: F) -> Option<U>
where
    F: FnOnce(T) -> Option<U>,
{
    option.and_then(transform)
}

/// Curried form of [`and_then`].
///
/// # Examples
///
/// ```rust
/// use optionals::functions::and_then_with;
///
/// let half = and_then_with(|n: i32| (n % 2 == 0).then_some(n / 2));
/// assert_eq!(half(Some(8)), Some(4));
/// assert_eq!(half(Some(7)), None);
/// assert_eq!(half(None), None);
/// ```
pub fn and_then_with<T, U, F>(transform: F) -> impl Fn(Option<T>) -> Option<U>
where
    F: Fn(T) -> Option<U>,
{
    move |option| option.and_then(&transform)
}

/// Curried form of `Option::filter`.
pub fn filter_with<T, P>(predicate: P) -> impl Fn(Option<T>) -> Option<T>
where
    P: Fn(&T) -> bool,
{
    move |option| option.filter(&predicate)
}

// =============================================================================
// Fallbacks
// =============================================================================

/// Free-function form of [`Recover::or_produce`].
#[inline]
pub fn or_produce<T, F>(option: Option<T>, producer: F) -> T
where
    F: FnOnce() -> T,
{
    option.or_produce(producer)
}

/// Curried form of [`or_produce`].
pub fn or_produce_with<T, F>(producer: F) -> impl Fn(Option<T>) -> T
where
    F: Fn() -> T,
{
    move |option| option.or_produce(&producer)
}

/// Free-function form of [`Recover::map_none`].
#[inline]
pub fn map_none<T, F>(option: Option<T>, producer: F) -> Option<T>
where
    F: FnOnce() -> T,
{
    option.map_none(producer)
}

/// Curried form of [`map_none`].
pub fn map_none_with<T, F>(producer: F) -> impl Fn(Option<T>) -> Option<T>
where
    F: Fn() -> T,
{
    move |option| option.map_none(&producer)
}

// =============================================================================
// Collections
// =============================================================================

/// Free-function form of [`OptionCollection::has_elements`].
#[inline]
pub fn has_elements<C: Collection>(option: &Option<C>) -> bool {
    option.has_elements()
}

/// Free-function form of [`OptionCollection::is_absent_or_empty`].
#[inline]
pub fn is_absent_or_empty<C: Collection>(option: &Option<C>) -> bool {
    option.is_absent_or_empty()
}

/// Free-function form of [`OptionCollection::recover_from_empty`].
#[inline]
pub fn recover_from_empty<C, F>(option: Option<C>, producer: F) -> Option<C>
where
    C: Collection,
    F: FnOnce() -> C,
{
    option.recover_from_empty(producer)
}

/// Curried form of [`recover_from_empty`].
///
/// # Examples
///
/// ```rust
/// use optionals::functions::recover_from_empty_with;
///
/// let placeholder = recover_from_empty_with(|| "-".to_string());
/// assert_eq!(placeholder(Some(String::new())), Some("-".to_string()));
/// assert_eq!(placeholder(Some("x".to_string())), Some("x".to_string()));
/// assert_eq!(placeholder(None), None);
/// ```
pub fn recover_from_empty_with<C, F>(producer: F) -> impl Fn(Option<C>) -> Option<C>
where
    C: Collection,
    F: Fn() -> C,
{
    move |option| option.recover_from_empty(&producer)
}
