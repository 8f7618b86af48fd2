//! JSON encoding and decoding of optional values.
//!
//! The plain forms are best-effort: any `serde_json` failure yields `None`
//! and is only visible as a `debug` event. The `_or_throw` forms return a
//! [`CodecError`] instead.
//!
//! # Round Trip
//!
//! For every `T: Serialize + DeserializeOwned + PartialEq`:
//!
//! ```text
//! Some(value).encode().decode::<T>() == Some(value)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use optionals::structure::{Decode, Encode};
//!
//! let bytes = Some(vec![1, 2, 3]).encode();
//! assert_eq!(bytes.as_deref(), Some(&b"[1,2,3]"[..]));
//! assert_eq!(bytes.decode::<Vec<i32>>(), Some(vec![1, 2, 3]));
//!
//! let garbage = Some(b"not json".to_vec());
//! assert_eq!(garbage.decode::<Vec<i32>>(), None);
//! ```

#[cfg(feature = "async")]
use std::future::Future;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::combinator::{ErrorPolicy, Propagate};

/// Represents a JSON encoding or decoding failure.
#[derive(Debug)]
pub enum CodecError {
    /// The bytes could not be parsed as the target type.
    Decode {
        /// The name of the target type.
        type_name: &'static str,
        /// The underlying parse error.
        error: serde_json::Error,
    },
    /// The value could not be serialized.
    Encode {
        /// The name of the serialized type.
        type_name: &'static str,
        /// The underlying serialization error.
        error: serde_json::Error,
    },
}

impl std::fmt::Display for CodecError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decode { type_name, error } => {
                write!(formatter, "failed to decode `{type_name}`: {error}")
            }
            Self::Encode { type_name, error } => {
                write!(formatter, "failed to encode `{type_name}`: {error}")
            }
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode { error, .. } | Self::Encode { error, .. } => Some(error),
        }
    }
}

static_assertions::assert_impl_all!(CodecError: std::error::Error, Send, Sync);

fn decode_bytes<T: DeserializeOwned>(bytes: &[u8]) -> Result<Option<T>, CodecError> {
    serde_json::from_slice(bytes)
        .map(Some)
        .map_err(|error| CodecError::Decode {
            type_name: std::any::type_name::<T>(),
            error,
        })
}

fn encode_value<T: Serialize + ?Sized>(value: &T) -> Result<Option<Vec<u8>>, CodecError> {
    serde_json::to_vec(value)
        .map(Some)
        .map_err(|error| CodecError::Encode {
            type_name: std::any::type_name::<T>(),
            error,
        })
}

fn swallow<U>(result: Result<Option<U>, CodecError>) -> Option<U> {
    result.unwrap_or_else(|error| {
        tracing::debug!(%error, "codec failure, yielding absent");
        None
    })
}

/// Decoding of optional byte buffers.
pub trait Decode {
    /// Parses the held bytes as JSON into a `T`, yielding `None` on failure.
    fn decode<T: DeserializeOwned>(self) -> Option<T>;

    /// Parses the held bytes as JSON into a `T`.
    ///
    /// An absent buffer yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Decode`] if the bytes are not valid JSON for `T`.
    fn decode_or_throw<T: DeserializeOwned>(self) -> Result<Option<T>, CodecError>;

    /// Async form of [`decode`](Decode::decode).
    ///
    /// Parsing is CPU-bound; when present, the future yields to the scheduler
    /// once before parsing. An absent buffer completes without yielding.
    #[cfg(feature = "async")]
    fn async_decode<T: DeserializeOwned>(self) -> impl Future<Output = Option<T>>;
}

impl<B: AsRef<[u8]>> Decode for Option<B> {
    fn decode<T: DeserializeOwned>(self) -> Option<T> {
        swallow(self.decode_or_throw::<T>())
    }

    fn decode_or_throw<T: DeserializeOwned>(self) -> Result<Option<T>, CodecError> {
        Propagate::attempt(self, |bytes| decode_bytes::<T>(bytes.as_ref()))
    }

    #[cfg(feature = "async")]
    #[allow(clippy::future_not_send)]
    async fn async_decode<T: DeserializeOwned>(self) -> Option<T> {
        if self.is_some() {
            tokio::task::yield_now().await;
        }
        self.decode()
    }
}

/// Encoding of optional serializable values.
pub trait Encode {
    /// Serializes the held value to JSON bytes, yielding `None` on failure.
    fn encode(&self) -> Option<Vec<u8>>;

    /// Serializes the held value to JSON bytes.
    ///
    /// An absent value yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Encode`] if serialization fails, for example for
    /// a map whose keys are not strings.
    fn encode_or_throw(&self) -> Result<Option<Vec<u8>>, CodecError>;

    /// Async form of [`encode`](Encode::encode).
    ///
    /// Yields to the scheduler once before serializing a present value.
    #[cfg(feature = "async")]
    fn async_encode(&self) -> impl Future<Output = Option<Vec<u8>>>;
}

impl<T: Serialize> Encode for Option<T> {
    fn encode(&self) -> Option<Vec<u8>> {
        swallow(self.encode_or_throw())
    }

    fn encode_or_throw(&self) -> Result<Option<Vec<u8>>, CodecError> {
        Propagate::attempt(self.as_ref(), encode_value::<T>)
    }

    #[cfg(feature = "async")]
    #[allow(clippy::future_not_send)]
    async fn async_encode(&self) -> Option<Vec<u8>> {
        if self.is_some() {
            tokio::task::yield_now().await;
        }
        self.encode()
    }
}

/// Free-function form of [`Decode::decode`].
#[inline]
pub fn decode<T: DeserializeOwned, B: AsRef<[u8]>>(option: Option<B>) -> Option<T> {
    option.decode()
}

/// Curried form of [`decode`], fixing the target type.
///
/// # Examples
///
/// ```rust
/// use optionals::structure::decode_with;
///
/// let payloads = vec![Some(b"1".to_vec()), None, Some(b"oops".to_vec())];
/// let numbers: Vec<Option<u32>> = payloads.into_iter().map(decode_with::<u32, _>()).collect();
/// assert_eq!(numbers, vec![Some(1), None, None]);
/// ```
pub const fn decode_with<T: DeserializeOwned, B: AsRef<[u8]>>() -> impl Fn(Option<B>) -> Option<T> {
    decode::<T, B>
}

/// Free-function form of [`Encode::encode`].
#[inline]
pub fn encode<T: Serialize>(option: &Option<T>) -> Option<Vec<u8>> {
    option.encode()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn decode_error_display_names_target() {
        let error = Some(b"{".to_vec()).decode_or_throw::<Vec<u8>>().unwrap_err();
        assert!(error.to_string().starts_with("failed to decode `"));
        assert!(error.to_string().contains("Vec<u8>`"));
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn non_string_map_keys_fail_to_encode() {
        let mut map = HashMap::new();
        map.insert(vec![1_u8], "value");
        let option = Some(map);

        assert_eq!(option.encode(), None);
        assert!(matches!(option.encode_or_throw(), Err(CodecError::Encode { .. })));
    }
}
