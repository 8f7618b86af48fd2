//! Synchronous combinators for `Option`.
//!
//! This module provides extension traits implemented for every `Option<T>`:
//!
//! - [`Presence`]: `is_absent`, `is_present` and their negations
//! - [`Chain`]: fallible chaining with swallow or propagate semantics
//! - [`Recover`]: lazy fallbacks (`or_produce`, `map_none`, `or_optional`, `required`)
//! - [`Fold`]: two-armed reduction to a plain value
//! - [`Tap`]: side-effect hooks that return the option unchanged
//! - [`OptionCollection`]: emptiness-aware operations for optional collections
//!
//! along with the [`ErrorPolicy`] primitive shared by every fallible
//! operation, conditional constructors, and the [`AbsentError`] type.
//!
//! # Examples
//!
//! ```rust
//! use optionals::combinator::{Chain, Fold, Presence, Recover};
//!
//! let raw: Option<&str> = Some("0x2a");
//! let value = raw
//!     .and_then_try(|text| i64::from_str_radix(text.trim_start_matches("0x"), 16))
//!     .filter(|n| *n > 0);
//!
//! assert!(value.is_present());
//! assert_eq!(value.fold(0, |n| n * 2), 84);
//! assert_eq!(None::<i64>.or_produce(|| -1), -1);
//! ```

mod chain;
mod collection;
mod construct;
mod error;
mod fold;
mod policy;
mod presence;
mod recover;
mod tap;

pub use chain::Chain;
pub use collection::{Collection, OptionCollection};
pub use construct::{none_when, none_when_with, some_when, some_when_with};
pub use error::AbsentError;
pub use fold::Fold;
pub use policy::{ErrorPolicy, Propagate, Swallow};
pub use presence::Presence;
pub use recover::Recover;
pub use tap::Tap;
