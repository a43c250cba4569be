//! Stock rule catalog: text, numeric, and store-lookup rules.
//!
//! Each rule here is a named constructor returning a plain value composable
//! via [`Specification::rule`](crate::Specification::rule) or
//! [`Specification::with_rule`](crate::Specification::with_rule). The engine
//! is agnostic to these; they are the call-site layer, each owning a fixed
//! human-readable failure message, optionally parameterized by the offending
//! value.
//!
//! # Examples
//!
//! ```
//! use spec_rail::rules::text::non_empty_string;
//! use spec_rail::Either;
//!
//! let rule = non_empty_string::<String>();
//! assert!(rule(&"Beer".to_string()).is_pass());
//! assert_eq!(
//!     rule(&String::new()).into_fail().unwrap().message(),
//!     "must be a non-zero length string.",
//! );
//! ```
pub mod lookup;
pub mod number;
pub mod text;

use crate::outcome::Either;
use crate::types::ValidationError;

/// Rule over an optional field that fails when the value is absent.
///
/// # Examples
///
/// ```
/// use spec_rail::rules::required;
///
/// let rule = required::<u32>();
/// assert!(rule(&Some(3)).is_pass());
/// assert!(rule(&None).is_fail());
/// ```
pub fn required<T>() -> impl Fn(&Option<T>) -> Either<ValidationError, ()> {
    |value: &Option<T>| {
        if value.is_some() {
            Either::pass(())
        } else {
            Either::fail(ValidationError::new("must be provided."))
        }
    }
}
