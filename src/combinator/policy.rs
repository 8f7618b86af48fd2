//! Error policies shared by every fallible combinator.
//!
//! A fallible transform over an `Option<T>` can end in three ways: the option
//! was absent, the transform produced a value (or produced absence), or the
//! transform failed. The policy decides what the caller sees in the last case:
//!
//! - [`Swallow`]: the failure becomes `None`. The outcome type is `Option<U>`.
//! - [`Propagate`]: the failure is handed back unmodified. The outcome type is
//!   `Result<Option<U>, E>`.
//!
//! Every `_try`, `_or_throw` and `try_` operation in this crate is a thin
//! wrapper over [`ErrorPolicy::attempt`] (or its async twin), so the two
//! behaviours cannot drift apart.
//!
//! # Examples
//!
//! ```rust
//! use optionals::combinator::{ErrorPolicy, Propagate, Swallow};
//!
//! let parse = |text: &str| text.parse::<i32>().map(Some);
//!
//! assert_eq!(Swallow::attempt(Some("12"), parse), Some(12));
//! assert_eq!(Swallow::attempt(Some("x"), parse), None);
//!
//! assert_eq!(Propagate::attempt(Some("12"), parse), Ok(Some(12)));
//! assert!(Propagate::attempt(Some("x"), parse).is_err());
//! assert_eq!(Propagate::attempt(None, parse), Ok(None));
//! ```

#[cfg(feature = "async")]
use std::future::Future;

/// Strategy for turning the result of a fallible transform into an outcome.
///
/// The outcome type is a generic associated type so that each policy can
/// expose a different signature from the same primitive.
pub trait ErrorPolicy {
    /// What the caller receives for a transform yielding `U` or failing with `E`.
    type Outcome<U, E>;

    /// Settles the raw result of a transform into this policy's outcome.
    fn settle<U, E>(result: Result<Option<U>, E>) -> Self::Outcome<U, E>;

    /// Runs `transform` on the value if present and settles the result.
    ///
    /// `transform` is never invoked on `None`; an absent input settles as
    /// `Ok(None)`, which no policy treats as a failure.
    #[inline]
    fn attempt<T, U, E, F>(option: Option<T>, transform: F) -> Self::Outcome<U, E>
    where
        F: FnOnce(T) -> Result<Option<U>, E>,
    {
        Self::settle(option.map_or(Ok(None), transform))
    }

    /// Async counterpart of [`attempt`](ErrorPolicy::attempt).
    ///
    /// The transform is only called and awaited when the option is present;
    /// otherwise the returned future completes on its first poll.
    #[cfg(feature = "async")]
    #[allow(clippy::manual_async_fn, clippy::future_not_send)]
    fn attempt_async<T, U, E, F>(
        option: Option<T>,
        transform: F,
    ) -> impl Future<Output = Self::Outcome<U, E>>
    where
        F: AsyncFnOnce(T) -> Result<Option<U>, E>,
    {
        async move {
            let result = match option {
                Some(value) => transform(value).await,
                None => Ok(None),
            };
            Self::settle(result)
        }
    }
}

/// Converts failures into absence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Swallow;

/// Hands failures back to the caller unmodified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Propagate;

impl ErrorPolicy for Swallow {
    type Outcome<U, E> = Option<U>;

    #[inline]
    fn settle<U, E>(result: Result<Option<U>, E>) -> Option<U> {
        result.unwrap_or_else(|_| {
            tracing::trace!(
                error_type = std::any::type_name::<E>(),
                "transform failed, yielding absent"
            );
            None
        })
    }
}

impl ErrorPolicy for Propagate {
    type Outcome<U, E> = Result<Option<U>, E>;

    #[inline]
    fn settle<U, E>(result: Result<Option<U>, E>) -> Result<Option<U>, E> {
        result
    }
}
