//! Async side-effect hooks.

use std::future::Future;

use crate::combinator::{ErrorPolicy, Propagate};

/// Async counterparts of [`Tap`](crate::combinator::Tap).
///
/// Every hook resolves to the original option. The block is awaited only on
/// its matching branch.
///
/// # Examples
///
/// ```rust
/// use optionals::asynchronous::AsyncTap;
/// use tokio::sync::Mutex;
///
/// #[tokio::main]
/// async fn main() {
///     let audit = Mutex::new(Vec::new());
///     let order = Some(12)
///         .async_when_present(async |id| audit.lock().await.push(*id))
///         .await;
///
///     assert_eq!(order, Some(12));
///     assert_eq!(*audit.lock().await, vec![12]);
/// }
/// ```
pub trait AsyncTap<T>: Sized {
    /// Awaits `block` with a reference to the value when present.
    fn async_when_present<F>(self, block: F) -> impl Future<Output = Self>
    where
        F: AsyncFnOnce(&T);

    /// Awaits `block` when absent.
    fn async_when_absent<F>(self, block: F) -> impl Future<Output = Self>
    where
        F: AsyncFnOnce();

    /// Awaits a fallible `block` when present and resolves to the original option.
    ///
    /// # Errors
    ///
    /// Resolves to the block's error unmodified. An absent option never fails.
    fn try_async_when_present<E, F>(self, block: F) -> impl Future<Output = Result<Self, E>>
    where
        F: AsyncFnOnce(&T) -> Result<(), E>;
}

#[allow(clippy::future_not_send)]
impl<T> AsyncTap<T> for Option<T> {
    async fn async_when_present<F>(self, block: F) -> Self
    where
        F: AsyncFnOnce(&T),
    {
        if let Some(value) = &self {
            block(value).await;
        }
        self
    }

    async fn async_when_absent<F>(self, block: F) -> Self
    where
        F: AsyncFnOnce(),
    {
        if self.is_none() {
            block().await;
        }
        self
    }

    async fn try_async_when_present<E, F>(self, block: F) -> Result<Self, E>
    where
        F: AsyncFnOnce(&T) -> Result<(), E>,
    {
        Propagate::attempt_async(self.as_ref(), async move |value| {
            block(value).await.map(Some)
        })
        .await?;
        Ok(self)
    }
}
