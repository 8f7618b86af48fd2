//! Async fallbacks and folding.

use std::future::Future;

/// Async counterparts of [`Recover`](crate::combinator::Recover).
///
/// Producers are awaited only on the absent branch; a present option
/// resolves without calling them.
///
/// # Examples
///
/// ```rust
/// use optionals::asynchronous::AsyncRecover;
///
/// #[tokio::main]
/// async fn main() {
///     let cached: Option<String> = None;
///     let value = cached.async_or_produce(async || "fetched".to_string()).await;
///     assert_eq!(value, "fetched");
/// }
/// ```
pub trait AsyncRecover<T>: Sized {
    /// Unwraps the value, or awaits `producer` when absent.
    fn async_or_produce<F>(self, producer: F) -> impl Future<Output = T>
    where
        F: AsyncFnOnce() -> T;

    /// Like [`async_or_produce`](AsyncRecover::async_or_produce) but stays wrapped.
    fn async_map_none<F>(self, producer: F) -> impl Future<Output = Option<T>>
    where
        F: AsyncFnOnce() -> T;

    /// Returns `self` when present, otherwise awaits `other`.
    fn async_or_optional<F>(self, other: F) -> impl Future<Output = Option<T>>
    where
        F: AsyncFnOnce() -> Option<T>;
}

#[allow(clippy::future_not_send)]
impl<T> AsyncRecover<T> for Option<T> {
    async fn async_or_produce<F>(self, producer: F) -> T
    where
        F: AsyncFnOnce() -> T,
    {
        match self {
            Some(value) => value,
            None => producer().await,
        }
    }

    async fn async_map_none<F>(self, producer: F) -> Self
    where
        F: AsyncFnOnce() -> T,
    {
        Some(self.async_or_produce(producer).await)
    }

    async fn async_or_optional<F>(self, other: F) -> Self
    where
        F: AsyncFnOnce() -> Self,
    {
        if self.is_some() { self } else { other().await }
    }
}

/// Async counterpart of [`Fold`](crate::combinator::Fold).
///
/// The absent case is a plain value returned immediately; only the present
/// arm may suspend.
///
/// # Examples
///
/// ```rust
/// use optionals::asynchronous::AsyncFold;
///
/// #[tokio::main]
/// async fn main() {
///     let status = Some(404).async_fold("ok", async |code| if code >= 400 { "error" } else { "ok" }).await;
///     assert_eq!(status, "error");
/// }
/// ```
pub trait AsyncFold<T> {
    /// Returns `absent_case` when absent, otherwise awaits `present(value)`.
    fn async_fold<R, F>(self, absent_case: R, present: F) -> impl Future<Output = R>
    where
        F: AsyncFnOnce(T) -> R;
}

#[allow(clippy::future_not_send)]
impl<T> AsyncFold<T> for Option<T> {
    async fn async_fold<R, F>(self, absent_case: R, present: F) -> R
    where
        F: AsyncFnOnce(T) -> R,
    {
        match self {
            Some(value) => present(value).await,
            None => absent_case,
        }
    }
}
