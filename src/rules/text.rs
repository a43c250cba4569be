//! Rules over string-like values.

use alloc::format;

use crate::outcome::Either;
use crate::types::ValidationError;

/// Fails on the empty string with `"must be a non-zero length string."`.
///
/// # Examples
///
/// ```
/// use spec_rail::rules::text::non_empty_string;
///
/// let rule = non_empty_string::<&str>();
/// assert!(rule(&"Beer").is_pass());
/// assert!(rule(&"").is_fail());
/// ```
pub fn non_empty_string<T>() -> impl Fn(&T) -> Either<ValidationError, ()>
where
    T: AsRef<str>,
{
    |value: &T| {
        if value.as_ref().is_empty() {
            Either::fail(ValidationError::new("must be a non-zero length string."))
        } else {
            Either::pass(())
        }
    }
}

/// Fails when the value is longer than `limit` characters.
///
/// # Examples
///
/// ```
/// use spec_rail::rules::text::max_length;
///
/// let rule = max_length::<&str>(4);
/// assert!(rule(&"Beer").is_pass());
/// assert_eq!(
///     rule(&"Barleywine").into_fail().unwrap().message(),
///     "may not be longer than 4 characters.",
/// );
/// ```
pub fn max_length<T>(limit: usize) -> impl Fn(&T) -> Either<ValidationError, ()>
where
    T: AsRef<str>,
{
    move |value: &T| {
        if value.as_ref().chars().count() > limit {
            Either::fail(ValidationError::new(format!(
                "may not be longer than {limit} characters."
            )))
        } else {
            Either::pass(())
        }
    }
}
