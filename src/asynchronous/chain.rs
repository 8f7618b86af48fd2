//! Async chaining and filtering.

use std::future::Future;

use crate::combinator::{ErrorPolicy, Propagate, Swallow};

/// Async transforms over an optional value.
///
/// The transform is only called and awaited when the option is present; for
/// `None` every returned future completes on its first poll.
///
/// | operation | transform yields | failure becomes |
/// |-----------|------------------|-----------------|
/// | [`async_map`](AsyncChain::async_map) | `U` | - |
/// | [`async_and_then`](AsyncChain::async_and_then) | `Option<U>` | - |
/// | [`async_and_then_try`](AsyncChain::async_and_then_try) | `Result<U, E>` | `None` |
/// | [`async_and_then_try_or_throw`](AsyncChain::async_and_then_try_or_throw) | `Result<U, E>` | `Err(error)` |
/// | [`try_async_and_then`](AsyncChain::try_async_and_then) | `Result<Option<U>, E>` | `Err(error)` |
///
/// # Examples
///
/// ```rust
/// use optionals::asynchronous::AsyncChain;
///
/// #[tokio::main]
/// async fn main() {
///     let user_id = Some(7);
///     let name = user_id.async_map(async |id| format!("user-{id}")).await;
///     assert_eq!(name, Some("user-7".to_string()));
/// }
/// ```
pub trait AsyncChain<T>: Sized {
    /// Applies an async transform to the value if present.
    fn async_map<U, F>(self, transform: F) -> impl Future<Output = Option<U>>
    where
        F: AsyncFnOnce(T) -> U;

    /// Applies an async transform that may itself yield absence.
    fn async_and_then<U, F>(self, transform: F) -> impl Future<Output = Option<U>>
    where
        F: AsyncFnOnce(T) -> Option<U>;

    /// Applies a fallible async transform, turning its failure into `None`.
    fn async_and_then_try<U, E, F>(self, transform: F) -> impl Future<Output = Option<U>>
    where
        F: AsyncFnOnce(T) -> Result<U, E>;

    /// Applies a fallible async transform, returning its failure to the caller.
    ///
    /// # Errors
    ///
    /// Resolves to the transform's error unmodified. An absent option resolves
    /// to `Ok(None)` without calling the transform.
    fn async_and_then_try_or_throw<U, E, F>(
        self,
        transform: F,
    ) -> impl Future<Output = Result<Option<U>, E>>
    where
        F: AsyncFnOnce(T) -> Result<U, E>;

    /// Applies a fallible async transform that may also yield absence.
    ///
    /// # Errors
    ///
    /// Resolves to the transform's error unmodified.
    fn try_async_and_then<U, E, F>(self, transform: F) -> impl Future<Output = Result<Option<U>, E>>
    where
        F: AsyncFnOnce(T) -> Result<Option<U>, E>;

    /// Keeps the value only if the async predicate holds.
    ///
    /// The predicate receives a reference and is awaited only when present.
    fn async_filter<P>(self, predicate: P) -> impl Future<Output = Option<T>>
    where
        P: AsyncFnOnce(&T) -> bool;

    /// Alias of [`async_and_then`](AsyncChain::async_and_then).
    #[deprecated(since = "0.1.0", note = "use `async_and_then`")]
    fn async_flat_map<U, F>(self, transform: F) -> impl Future<Output = Option<U>>
    where
        F: AsyncFnOnce(T) -> Option<U>,
    {
        self.async_and_then(transform)
    }

    /// Alias of [`async_and_then_try_or_throw`](AsyncChain::async_and_then_try_or_throw).
    ///
    /// # Errors
    ///
    /// Resolves to the transform's error unmodified.
    #[deprecated(since = "0.1.0", note = "use `async_and_then_try_or_throw`")]
    fn try_async_map<U, E, F>(self, transform: F) -> impl Future<Output = Result<Option<U>, E>>
    where
        F: AsyncFnOnce(T) -> Result<U, E>,
    {
        self.async_and_then_try_or_throw(transform)
    }
}

#[allow(clippy::future_not_send)]
impl<T> AsyncChain<T> for Option<T> {
    async fn async_map<U, F>(self, transform: F) -> Option<U>
    where
        F: AsyncFnOnce(T) -> U,
    {
        Some(transform(self?).await)
    }

    async fn async_and_then<U, F>(self, transform: F) -> Option<U>
    where
        F: AsyncFnOnce(T) -> Option<U>,
    {
        transform(self?).await
    }

    fn async_and_then_try<U, E, F>(self, transform: F) -> impl Future<Output = Option<U>>
    where
        F: AsyncFnOnce(T) -> Result<U, E>,
    {
        Swallow::attempt_async(self, async move |value| transform(value).await.map(Some))
    }

    fn async_and_then_try_or_throw<U, E, F>(
        self,
        transform: F,
    ) -> impl Future<Output = Result<Option<U>, E>>
    where
        F: AsyncFnOnce(T) -> Result<U, E>,
    {
        Propagate::attempt_async(self, async move |value| transform(value).await.map(Some))
    }

    fn try_async_and_then<U, E, F>(self, transform: F) -> impl Future<Output = Result<Option<U>, E>>
    where
        F: AsyncFnOnce(T) -> Result<Option<U>, E>,
    {
        Propagate::attempt_async(self, transform)
    }

    async fn async_filter<P>(self, predicate: P) -> Self
    where
        P: AsyncFnOnce(&T) -> bool,
    {
        let value = self?;
        if predicate(&value).await { Some(value) } else { None }
    }
}
