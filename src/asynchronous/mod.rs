//! Asynchronous combinators for `Option`.
//!
//! Each synchronous family has an async counterpart whose callback is an
//! async closure (any `AsyncFnOnce`, including closures returning futures):
//!
//! - [`AsyncChain`]: `async_map`, `async_and_then`, `async_and_then_try`,
//!   `async_and_then_try_or_throw`, `try_async_and_then`, `async_filter`
//! - [`AsyncRecover`]: `async_or_produce`, `async_map_none`, `async_or_optional`
//! - [`AsyncFold`]: `async_fold`
//! - [`AsyncTap`]: `async_when_present`, `async_when_absent`, `try_async_when_present`
//! - [`AsyncOptionCollection`]: `async_recover_from_empty`, `async_default_some`
//! - [`async_zip`], [`async_zip3`], [`async_ap`]
//!
//! Async decoding and encoding live on [`Decode`](crate::structure::Decode)
//! and [`Encode`](crate::structure::Encode) when the `codec` feature is on.
//!
//! # Execution Model
//!
//! These futures are pass-through state machines. They spawn nothing, hold no
//! locks and share no state. A future suspends only where the callback
//! suspends, and only when the callback runs at all; on the branch that skips
//! the callback it completes on its first poll. Cancelling is dropping the
//! future.
//!
//! # Examples
//!
//! ```rust
//! use optionals::asynchronous::{AsyncChain, AsyncRecover};
//!
//! async fn load(id: u32) -> Result<String, std::io::Error> {
//!     Ok(format!("record {id}"))
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let record = Some(3)
//!         .async_and_then_try(load)
//!         .await
//!         .async_or_produce(async || "default".to_string())
//!         .await;
//!     assert_eq!(record, "record 3");
//! }
//! ```

mod chain;
mod collection;
mod combine;
mod recover;
mod tap;

pub use chain::AsyncChain;
pub use collection::AsyncOptionCollection;
pub use combine::{async_ap, async_zip, async_zip3};
pub use recover::{AsyncFold, AsyncRecover};
pub use tap::AsyncTap;
