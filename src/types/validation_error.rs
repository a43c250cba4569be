//! Owned, human-readable validation failure message.
//!
//! [`ValidationError`] is the error type produced by the stock rule catalog
//! and the usual `E` parameter of a [`Specification`](crate::Specification).
//! It is a plain message value: joining two of them prefixes the left side's
//! text in front of the right side's, which is how nested specification
//! context accumulates into messages like
//! `Products: ID (999) is not a valid product id.`

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::traits::Join;
use crate::types::alloc_type::String;

/// A validation failure message.
///
/// Constructed by named error-constructor functions at rule sites (for
/// example [`rules::text::non_empty_string`](crate::rules::text::non_empty_string)
/// fails with `"must be a non-zero length string."`), and by the
/// [`fail!`](crate::fail) macro. The engine never inspects the text; it only
/// joins context in front of it as failures unwind through nested
/// specifications.
///
/// # Examples
///
/// ```
/// use spec_rail::ValidationError;
///
/// let error = ValidationError::new("must be greater than zero.");
/// assert_eq!(error.message(), "must be greater than zero.");
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    /// Creates an error carrying the given message.
    #[inline]
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self { message: message.into() }
    }

    /// Creates an error with an empty message.
    ///
    /// Joining an empty error in front of another yields the other error's
    /// message unchanged, so an empty context is a neutral prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use spec_rail::{Join, ValidationError};
    ///
    /// let joined = ValidationError::empty().join(ValidationError::new("must be positive"));
    /// assert_eq!(joined.message(), "must be positive");
    /// ```
    #[inline]
    pub fn empty() -> Self {
        Self { message: String::new() }
    }

    /// Returns the message text.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consumes the error, returning the owned message.
    #[inline]
    pub fn into_message(self) -> String {
        self.message
    }
}

impl Join for ValidationError {
    #[inline]
    fn join(self, other: Self) -> Self {
        Self { message: self.message.join(other.message) }
    }
}

impl From<String> for ValidationError {
    #[inline]
    fn from(message: String) -> Self {
        Self { message }
    }
}

impl From<&str> for ValidationError {
    #[inline]
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ValidationError {}
