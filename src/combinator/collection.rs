//! Operations on options that hold a collection.
//!
//! For an `Option<Vec<T>>`, `None` and `Some(vec![])` are distinct states, but
//! code very often wants to treat them alike. [`OptionCollection`] answers the
//! common questions without unwrapping:
//!
//! | value | `is_absent_or_empty` | `has_elements` |
//! |-------|----------------------|----------------|
//! | `None` | `true` | `false` |
//! | `Some([])` | `true` | `false` |
//! | `Some([1, 2])` | `false` | `true` |
//!
//! Recovery differs in which states trigger the producer:
//!
//! | value | `recover_from_empty(p)` | `default_some(p)` |
//! |-------|-------------------------|-------------------|
//! | `None` | `None` | `p()` |
//! | `Some([])` | `Some(p())` | `p()` |
//! | `Some([1])` | `Some([1])` | `[1]` |

use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};

/// A container that can report whether it has any elements.
///
/// Implemented for the standard collections, strings, slices, arrays and
/// references to any of them.
pub trait Collection {
    /// Returns `true` if the container has no elements.
    fn is_empty(&self) -> bool;
}

impl<C: Collection + ?Sized> Collection for &C {
    #[inline]
    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }
}

impl<C: Collection + ?Sized> Collection for Box<C> {
    #[inline]
    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }
}

impl Collection for str {
    #[inline]
    fn is_empty(&self) -> bool {
        str::is_empty(self)
    }
}

impl Collection for String {
    #[inline]
    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }
}

impl<T> Collection for [T] {
    #[inline]
    fn is_empty(&self) -> bool {
        <[T]>::is_empty(self)
    }
}

impl<T, const N: usize> Collection for [T; N] {
    #[inline]
    fn is_empty(&self) -> bool {
        N == 0
    }
}

macro_rules! impl_collection {
    ($($collection:ident < $($parameter:ident),+ >),+ $(,)?) => {
        $(
            impl<$($parameter),+> Collection for $collection<$($parameter),+> {
                #[inline]
                fn is_empty(&self) -> bool {
                    Self::is_empty(self)
                }
            }
        )+
    };
}

impl_collection!(
    Vec<T>,
    VecDeque<T>,
    LinkedList<T>,
    BinaryHeap<T>,
    BTreeSet<T>,
    BTreeMap<K, V>,
    HashSet<T, S>,
    HashMap<K, V, S>,
);

/// Presence and recovery operations for an optional collection.
///
/// # Examples
///
/// ```rust
/// use optionals::combinator::OptionCollection;
///
/// let tags: Option<Vec<&str>> = Some(vec![]);
/// assert!(tags.is_absent_or_empty());
/// assert_eq!(tags.recover_from_empty(|| vec!["untagged"]), Some(vec!["untagged"]));
/// ```
pub trait OptionCollection<C: Collection>: Sized {
    /// Returns `true` if absent or if the held collection is empty.
    fn is_absent_or_empty(&self) -> bool;

    /// Returns `true` if present and the held collection is non-empty.
    ///
    /// Always the exact negation of [`is_absent_or_empty`](OptionCollection::is_absent_or_empty).
    #[inline]
    fn has_elements(&self) -> bool {
        !self.is_absent_or_empty()
    }

    /// Replaces a present but empty collection with `producer()`.
    ///
    /// An absent option stays absent and a non-empty collection is returned
    /// unchanged; in both cases `producer` is not called.
    fn recover_from_empty<F>(self, producer: F) -> Option<C>
    where
        F: FnOnce() -> C;

    /// Unwraps the collection, falling back to `producer()` when absent or empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::combinator::OptionCollection;
    ///
    /// let none: Option<String> = None;
    /// assert_eq!(none.default_some(|| "n/a".to_string()), "n/a");
    ///
    /// let empty = Some(String::new());
    /// assert_eq!(empty.default_some(|| "n/a".to_string()), "n/a");
    ///
    /// let name = Some("ada".to_string());
    /// assert_eq!(name.default_some(|| "n/a".to_string()), "ada");
    /// ```
    fn default_some<F>(self, producer: F) -> C
    where
        F: FnOnce() -> C;
}

impl<C: Collection> OptionCollection<C> for Option<C> {
    #[inline]
    fn is_absent_or_empty(&self) -> bool {
        self.as_ref().is_none_or(Collection::is_empty)
    }

    #[inline]
    fn recover_from_empty<F>(self, producer: F) -> Self
    where
        F: FnOnce() -> C,
    {
        self.map(|collection| {
            if collection.is_empty() {
                producer()
            } else {
                collection
            }
        })
    }

    #[inline]
    fn default_some<F>(self, producer: F) -> C
    where
        F: FnOnce() -> C,
    {
        self.filter(|collection| !collection.is_empty())
            .unwrap_or_else(producer)
    }
}
