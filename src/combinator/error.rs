//! Error types for turning absence into a failure.
//!
//! Most operations in this crate treat absence as ordinary data. When a caller
//! needs a value and absence is genuinely an error, [`Recover::required`]
//! reports it as an [`AbsentError`].
//!
//! [`Recover::required`]: crate::combinator::Recover::required

/// Represents a missing value where one was required.
///
/// # Examples
///
/// ```rust
/// use optionals::combinator::AbsentError;
///
/// let error = AbsentError::of::<u16>();
/// assert_eq!(
///     format!("{}", error),
///     "expected a present value of type `u16`, found none"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AbsentError {
    /// The name of the type that was expected.
    pub type_name: &'static str,
}

impl AbsentError {
    /// Creates the error for a missing value of type `T`.
    #[must_use]
    pub fn of<T: ?Sized>() -> Self {
        Self {
            type_name: std::any::type_name::<T>(),
        }
    }
}

impl std::fmt::Display for AbsentError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "expected a present value of type `{}`, found none",
            self.type_name
        )
    }
}

impl std::error::Error for AbsentError {}

static_assertions::assert_impl_all!(AbsentError: std::error::Error, Send, Sync, Copy);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_error_names_the_type() {
        let error = AbsentError::of::<String>();
        assert!(error.type_name.ends_with("String"));
        assert!(error.to_string().contains(error.type_name));
    }

    #[test]
    fn absent_error_boxes_as_std_error() {
        let boxed: Box<dyn std::error::Error> = Box::new(AbsentError::of::<i32>());
        assert!(boxed.to_string().contains("`i32`"));
        assert!(boxed.source().is_none());
    }
}
