//! # optionals
//!
//! Combinator-style extensions for [`Option`], in the spirit of a small
//! functional toolkit for the one container every Rust program already uses.
//!
//! ## Overview
//!
//! The standard library already provides `map`, `and_then`, `filter`, `or_else`,
//! `flatten` and `zip`. This crate fills in the rest:
//!
//! - **Presence**: `is_absent`, `is_present` and their negations
//! - **Chaining**: `and_then_try` (swallows errors), `and_then_try_or_throw` (propagates them)
//! - **Recovery**: `or_produce`, `map_none`, `or_optional`, `required`
//! - **Collections**: `is_absent_or_empty`, `has_elements`, `recover_from_empty`, `default_some`
//! - **Folding**: `fold`
//! - **Hooks**: `when_present`, `when_absent`, `try_when_present`
//! - **Structure**: `flatten`, `cast`, `decode`, `encode`
//! - **Combination**: `zip2`..`zip10`, `ap`, `sequence`, `traverse`, `coalesce`
//! - **Async**: an `async_` counterpart for every family
//!
//! ## Error Policies
//!
//! The name of an operation tells how it treats a failing callback:
//!
//! - plain and `_try` operations swallow the failure and yield `None`
//! - `_or_throw` and `try_` operations return `Err` to the caller
//!
//! ## Feature Flags
//!
//! - `async`: Asynchronous combinators (`AsyncChain`, `AsyncRecover`, ...)
//! - `codec`: JSON encode/decode through `serde`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use optionals::prelude::*;
//!
//! let port: Option<&str> = Some("8080");
//! let parsed = port.and_then_try(|text| text.parse::<u16>());
//! assert_eq!(parsed, Some(8080));
//!
//! let missing: Option<u16> = None;
//! assert_eq!(missing.or_produce(|| 80), 80);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports every extension trait and the free functions.
///
/// # Usage
///
/// ```rust
/// use optionals::prelude::*;
/// ```
pub mod prelude {
    pub use crate::combinator::*;

    pub use crate::structure::*;

    pub use crate::combine::*;

    pub use crate::functions::*;

    #[cfg(feature = "async")]
    pub use crate::asynchronous::*;
}

pub mod combinator;

pub mod structure;

pub mod combine;

pub mod functions;

#[cfg(feature = "async")]
pub mod asynchronous;
