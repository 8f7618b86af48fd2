//! Async recovery for optional collections.

use std::future::Future;

use crate::combinator::Collection;

/// Async counterparts of the recovery half of
/// [`OptionCollection`](crate::combinator::OptionCollection).
///
/// # Examples
///
/// ```rust
/// use optionals::asynchronous::AsyncOptionCollection;
///
/// #[tokio::main]
/// async fn main() {
///     let recent: Option<Vec<u32>> = Some(vec![]);
///     let shown = recent.async_recover_from_empty(async || vec![1, 2, 3]).await;
///     assert_eq!(shown, Some(vec![1, 2, 3]));
/// }
/// ```
pub trait AsyncOptionCollection<C: Collection>: Sized {
    /// Replaces a present but empty collection with the awaited `producer()`.
    ///
    /// `producer` is not awaited for an absent option or a non-empty collection.
    fn async_recover_from_empty<F>(self, producer: F) -> impl Future<Output = Option<C>>
    where
        F: AsyncFnOnce() -> C;

    /// Unwraps the collection, awaiting `producer()` when absent or empty.
    fn async_default_some<F>(self, producer: F) -> impl Future<Output = C>
    where
        F: AsyncFnOnce() -> C;
}

#[allow(clippy::future_not_send)]
impl<C: Collection> AsyncOptionCollection<C> for Option<C> {
    async fn async_recover_from_empty<F>(self, producer: F) -> Self
    where
        F: AsyncFnOnce() -> C,
    {
        match self {
            Some(collection) if collection.is_empty() => Some(producer().await),
            other => other,
        }
    }

    async fn async_default_some<F>(self, producer: F) -> C
    where
        F: AsyncFnOnce() -> C,
    {
        match self.filter(|collection| !collection.is_empty()) {
            Some(collection) => collection,
            None => producer().await,
        }
    }
}
