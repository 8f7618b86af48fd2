//! Combining several optional values.
//!
//! - [`zip2`] through [`zip10`], [`ZipAll`] and the [`zip!`](crate::zip!) macro
//! - [`Apply`], [`ap`] and [`ap_with`]: applying an optional function
//! - [`sequence`], [`traverse`] and their method forms [`Sequence`], [`Traverse`]
//! - [`coalesce`] and the lazy [`coalesce!`](crate::coalesce!) macro
//!
//! All of these are "absent if any required input is absent", except
//! `coalesce`, which is "present if any input is present".
//!
//! # Examples
//!
//! ```rust
//! use optionals::combine::{Sequence, ap, coalesce, zip2};
//!
//! let area = ap(Some(|(w, h): (u32, u32)| w * h), zip2(Some(3), Some(4)));
//! assert_eq!(area, Some(12));
//!
//! assert_eq!(vec![Some(1), Some(2)].sequence(), Some(vec![1, 2]));
//! assert_eq!(coalesce([None, Some(7)]), Some(7));
//! ```

mod alternative;
mod applicative;
mod traversable;
mod zip;

pub use alternative::coalesce;
pub use applicative::{Apply, ap, ap_with};
pub use traversable::{Sequence, Traverse, sequence, traverse, traverse_with};
pub use zip::{ZipAll, zip2, zip3, zip4, zip5, zip6, zip7, zip8, zip9, zip10};
