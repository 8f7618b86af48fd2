//! Async zipping and application.
//!
//! [`async_zip`] and [`async_zip3`] drive their futures concurrently on the
//! current task through `tokio::join!`, then zip the results. All inputs are
//! awaited to completion even when one resolves to `None`.

use std::future::Future;

/// Awaits two option-producing futures concurrently and zips the results.
///
/// # Examples
///
/// ```rust
/// use optionals::asynchronous::async_zip;
///
/// #[tokio::main]
/// async fn main() {
///     let profile = async { Some("ada") };
///     let settings = async { Some(3) };
///     assert_eq!(async_zip(profile, settings).await, Some(("ada", 3)));
/// }
/// ```
#[allow(clippy::future_not_send)]
pub async fn async_zip<A, B, FutureA, FutureB>(first: FutureA, second: FutureB) -> Option<(A, B)>
where
    FutureA: Future<Output = Option<A>>,
    FutureB: Future<Output = Option<B>>,
{
    let (first, second) = tokio::join!(first, second);
    first.zip(second)
}

/// Awaits three option-producing futures concurrently and zips the results.
#[allow(clippy::future_not_send)]
pub async fn async_zip3<A, B, C, FutureA, FutureB, FutureC>(
    first: FutureA,
    second: FutureB,
    third: FutureC,
) -> Option<(A, B, C)>
where
    FutureA: Future<Output = Option<A>>,
    FutureB: Future<Output = Option<B>>,
    FutureC: Future<Output = Option<C>>,
{
    let (first, second, third) = tokio::join!(first, second, third);
    crate::combine::zip3(first, second, third)
}

/// Applies an optional async function to an optional value.
///
/// The function is awaited only if both the function and the value are present.
///
/// # Examples
///
/// ```rust
/// use optionals::asynchronous::async_ap;
///
/// #[tokio::main]
/// async fn main() {
///     let lookup = Some(async |id: u32| format!("#{id}"));
///     assert_eq!(async_ap(lookup, Some(5)).await, Some("#5".to_string()));
/// }
/// ```
#[allow(clippy::future_not_send)]
pub async fn async_ap<A, B, F>(wrapped_function: Option<F>, wrapped_value: Option<A>) -> Option<B>
where
    F: AsyncFnOnce(A) -> B,
{
    let (function, value) = wrapped_function.zip(wrapped_value)?;
    Some(function(value).await)
}
