//! Zipping several options into one option of a tuple.
//!
//! `zipN` returns `Some((a, b, ...))` only if every argument is present.
//! Each arity is built from the previous one: `zip3(a, b, c)` is
//! `zip2(a, b).zip(c)` repacked into a flat tuple, so the output keeps the
//! argument order at every arity up to ten.
//!
//! The [`zip!`](crate::zip!) macro picks the arity from the number of
//! arguments through [`ZipAll`].
//!
//! # Examples
//!
//! ```rust
//! use optionals::combine::{zip2, zip4};
//!
//! assert_eq!(zip2(Some(1), Some("a")), Some((1, "a")));
//! assert_eq!(zip4(Some(1), Some(2), None::<i32>, Some(4)), None);
//! ```

/// Zips two options.
///
/// Free-function form of `Option::zip`.
#[inline]
pub fn zip2<A, B>(a: Option<A>, b: Option<B>) -> Option<(A, B)> {
    a.zip(b)
}

macro_rules! define_zip {
    ($arity:literal, $name:ident, $previous:ident; $($value:ident: $type:ident),+; $last:ident: $last_type:ident) => {
        #[doc = concat!("Zips ", stringify!($arity), " options, present only if all are present.")]
        #[inline]
        #[allow(clippy::too_many_arguments, clippy::many_single_char_names)]
        pub fn $name<$($type,)+ $last_type>(
            $($value: Option<$type>,)+
            $last: Option<$last_type>,
        ) -> Option<($($type,)+ $last_type)> {
            $previous($($value),+)
                .zip($last)
                .map(|(($($value),+), $last)| ($($value,)+ $last))
        }
    };
}

define_zip!(3, zip3, zip2; a: A, b: B; c: C);
define_zip!(4, zip4, zip3; a: A, b: B, c: C; d: D);
define_zip!(5, zip5, zip4; a: A, b: B, c: C, d: D; e: E);
define_zip!(6, zip6, zip5; a: A, b: B, c: C, d: D, e: E; f: F);
define_zip!(7, zip7, zip6; a: A, b: B, c: C, d: D, e: E, f: F; g: G);
define_zip!(8, zip8, zip7; a: A, b: B, c: C, d: D, e: E, f: F, g: G; h: H);
define_zip!(9, zip9, zip8; a: A, b: B, c: C, d: D, e: E, f: F, g: G, h: H; i: I);
define_zip!(10, zip10, zip9; a: A, b: B, c: C, d: D, e: E, f: F, g: G, h: H, i: I; j: J);

/// A tuple of options that can be zipped into an option of a tuple.
///
/// Implemented for tuples of two to ten options.
///
/// # Examples
///
/// ```rust
/// use optionals::combine::ZipAll;
///
/// let zipped = (Some(1), Some('x'), Some(2.5)).zip_all();
/// assert_eq!(zipped, Some((1, 'x', 2.5)));
/// ```
pub trait ZipAll {
    /// The tuple of unwrapped values.
    type Output;

    /// Returns all values if every option is present.
    fn zip_all(self) -> Option<Self::Output>;
}

macro_rules! impl_zip_all {
    ($arity:literal; $($value:ident: $type:ident),+) => {
        impl<$($type),+> ZipAll for ($(Option<$type>,)+) {
            type Output = ($($type,)+);

            #[inline]
            #[allow(clippy::many_single_char_names)]
            fn zip_all(self) -> Option<Self::Output> {
                let ($($value,)+) = self;
                paste::paste! { [<zip $arity>]($($value),+) }
            }
        }
    };
}

impl_zip_all!(2; a: A, b: B);
impl_zip_all!(3; a: A, b: B, c: C);
impl_zip_all!(4; a: A, b: B, c: C, d: D);
impl_zip_all!(5; a: A, b: B, c: C, d: D, e: E);
impl_zip_all!(6; a: A, b: B, c: C, d: D, e: E, f: F);
impl_zip_all!(7; a: A, b: B, c: C, d: D, e: E, f: F, g: G);
impl_zip_all!(8; a: A, b: B, c: C, d: D, e: E, f: F, g: G, h: H);
impl_zip_all!(9; a: A, b: B, c: C, d: D, e: E, f: F, g: G, h: H, i: I);
impl_zip_all!(10; a: A, b: B, c: C, d: D, e: E, f: F, g: G, h: H, i: I, j: J);

/// Zips two to ten options into an option of a tuple.
///
/// `zip!(a, b, c)` is `(a, b, c).zip_all()`, which is `zip3(a, b, c)`.
///
/// # Examples
///
/// ```rust
/// use optionals::zip;
///
/// let user = zip!(Some("ada"), Some(36), Some(true));
/// assert_eq!(user, Some(("ada", 36, true)));
///
/// let incomplete = zip!(Some("ada"), None::<u32>);
/// assert_eq!(incomplete, None);
/// ```
#[macro_export]
macro_rules! zip {
    ($($option:expr),+ $(,)?) => {
        $crate::combine::ZipAll::zip_all(($($option,)+))
    };
}
