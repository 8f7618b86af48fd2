//! Applying an optional function to an optional value.
//!
//! ```text
//! Some(f).ap(Some(a)) == Some(f(a))
//! None.ap(x) == None
//! f.ap(None) == None
//! ```

/// Application of an optional function.
///
/// # Examples
///
/// ```rust
/// use optionals::combine::Apply;
///
/// let increment = Some(|n: i32| n + 1);
/// assert_eq!(increment.ap(Some(41)), Some(42));
///
/// let missing: Option<fn(i32) -> i32> = None;
/// assert_eq!(missing.ap(Some(41)), None);
/// ```
pub trait Apply<A, B> {
    /// Applies the held function to the held value if both are present.
    fn ap(self, wrapped_value: Option<A>) -> Option<B>;
}

impl<A, B, F> Apply<A, B> for Option<F>
where
    F: FnOnce(A) -> B,
{
    #[inline]
    fn ap(self, wrapped_value: Option<A>) -> Option<B> {
        self.zip(wrapped_value).map(|(function, value)| function(value))
    }
}

/// Free-function form of [`Apply::ap`].
#[inline]
pub fn ap<A, B, F>(wrapped_function: Option<F>, wrapped_value: Option<A>) -> Option<B>
where
    F: FnOnce(A) -> B,
{
    wrapped_function.ap(wrapped_value)
}

/// Curried form of [`ap`]: returns a reusable function over optional values.
///
/// # Examples
///
/// ```rust
/// use optionals::combine::ap_with;
///
/// let double = ap_with(Some(|n: i32| n * 2));
/// assert_eq!(double(Some(4)), Some(8));
/// assert_eq!(double(None), None);
///
/// let nothing = ap_with(None::<fn(i32) -> i32>);
/// assert_eq!(nothing(Some(4)), None);
/// ```
pub fn ap_with<A, B, F>(wrapped_function: Option<F>) -> impl Fn(Option<A>) -> Option<B>
where
    F: Fn(A) -> B,
{
    move |wrapped_value| ap(wrapped_function.as_ref(), wrapped_value)
}
