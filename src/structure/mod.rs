//! Structural conversions of optional values.
//!
//! - [`flatten`]: collapse `Option<Option<T>>`
//! - [`Cast`] / [`CastRef`]: checked narrowing of type-erased values
//! - [`Decode`] / [`Encode`]: JSON round trips (requires the `codec` feature)
//!
//! # Examples
//!
//! ```rust
//! use std::any::Any;
//! use optionals::structure::{Cast, flatten};
//!
//! let erased: Option<Box<dyn Any>> = Some(Box::new(Some(3_u32)));
//! let nested: Option<Option<u32>> = erased.cast::<Option<u32>>();
//! assert_eq!(flatten(nested), Some(3));
//! ```

mod cast;
#[cfg(feature = "codec")]
mod codec;
mod flatten;

pub use cast::{Cast, CastRef, cast, cast_ref, cast_send, cast_to};
pub use flatten::flatten;

#[cfg(feature = "codec")]
pub use codec::{CodecError, Decode, Encode, decode, decode_with, encode};
