//! Converting between "many options" and "an optional many".
//!
//! [`sequence`] turns an iterator of options into an option of a `Vec`, and
//! [`traverse`] maps each element to an option first. Both stop pulling from
//! the iterator as soon as an element is absent, so later elements are never
//! produced or transformed.
//!
//! ```text
//! sequence([Some(1), Some(2)]) == Some(vec![1, 2])
//! sequence([Some(1), None, Some(3)]) == None
//! sequence([]) == Some(vec![])
//! traverse(values, f) == sequence(values.map(f))
//! ```

/// Maps every element to an option and collects the results if all are present.
///
/// # Examples
///
/// ```rust
/// use optionals::combine::traverse;
///
/// let parsed = traverse(["1", "2", "3"], |text| text.parse::<i32>().ok());
/// assert_eq!(parsed, Some(vec![1, 2, 3]));
///
/// let parsed = traverse(["1", "two", "3"], |text| text.parse::<i32>().ok());
/// assert_eq!(parsed, None);
/// ```
pub fn traverse<A, B, I, F>(values: I, mut transform: F) -> Option<Vec<B>>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> Option<B>,
{
    let iterator = values.into_iter();
    let mut result = Vec::with_capacity(iterator.size_hint().0);
    for element in iterator {
        result.push(transform(element)?);
    }
    Some(result)
}

/// Collects the values of an iterator of options if every one is present.
///
/// # Examples
///
/// ```rust
/// use optionals::combine::sequence;
///
/// assert_eq!(sequence(vec![Some(1), Some(2)]), Some(vec![1, 2]));
/// assert_eq!(sequence(vec![Some(1), None]), None);
/// assert_eq!(sequence(Vec::<Option<i32>>::new()), Some(vec![]));
/// ```
#[inline]
pub fn sequence<T, I>(options: I) -> Option<Vec<T>>
where
    I: IntoIterator<Item = Option<T>>,
{
    traverse(options, |option| option)
}

/// Curried form of [`traverse`].
pub fn traverse_with<A, B, I, F>(transform: F) -> impl Fn(I) -> Option<Vec<B>>
where
    I: IntoIterator<Item = A>,
    F: Fn(A) -> Option<B>,
{
    move |values| traverse(values, &transform)
}

/// Method form of [`sequence`] for any iterable of options.
///
/// # Examples
///
/// ```rust
/// use optionals::combine::Sequence;
///
/// let fields = vec![Some("host"), Some("port")];
/// assert_eq!(fields.sequence(), Some(vec!["host", "port"]));
/// ```
pub trait Sequence<T>: IntoIterator<Item = Option<T>> + Sized {
    /// Collects all values if every element is present.
    #[inline]
    fn sequence(self) -> Option<Vec<T>> {
        sequence(self)
    }
}

impl<T, I> Sequence<T> for I where I: IntoIterator<Item = Option<T>> {}

/// Method form of [`traverse`] for any iterable.
///
/// # Examples
///
/// ```rust
/// use optionals::combine::Traverse;
///
/// let lengths = vec!["a", "bb"].traverse(|text| (!text.is_empty()).then(|| text.len()));
/// assert_eq!(lengths, Some(vec![1, 2]));
/// ```
pub trait Traverse: IntoIterator + Sized {
    /// Maps every element to an option and collects the results if all are present.
    #[inline]
    fn traverse<B, F>(self, transform: F) -> Option<Vec<B>>
    where
        F: FnMut(Self::Item) -> Option<B>,
    {
        traverse(self, transform)
    }
}

impl<I: IntoIterator> Traverse for I {}
