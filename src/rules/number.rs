//! Rules over ordered numeric values.

use core::fmt::Display;

use alloc::format;

use crate::outcome::Either;
use crate::types::ValidationError;

/// Fails unless the value is strictly greater than zero.
///
/// # Examples
///
/// ```
/// use spec_rail::rules::number::positive;
///
/// let rule = positive::<i64>();
/// assert!(rule(&120).is_pass());
/// assert!(rule(&0).is_fail());
/// assert!(rule(&-5).is_fail());
/// ```
pub fn positive<T>() -> impl Fn(&T) -> Either<ValidationError, ()>
where
    T: PartialOrd + Default,
{
    |value: &T| {
        if *value > T::default() {
            Either::pass(())
        } else {
            Either::fail(ValidationError::new("must be greater than zero."))
        }
    }
}

/// Fails when the value is below zero.
///
/// # Examples
///
/// ```
/// use spec_rail::rules::number::non_negative;
///
/// let rule = non_negative::<i64>();
/// assert!(rule(&0).is_pass());
/// assert!(rule(&-1).is_fail());
/// ```
pub fn non_negative<T>() -> impl Fn(&T) -> Either<ValidationError, ()>
where
    T: PartialOrd + Default,
{
    |value: &T| {
        if *value < T::default() {
            Either::fail(ValidationError::new("may not be negative."))
        } else {
            Either::pass(())
        }
    }
}

/// Fails when the value lies outside `min..=max`.
///
/// # Examples
///
/// ```
/// use spec_rail::rules::number::in_range;
///
/// let rule = in_range(1u32, 100);
/// assert!(rule(&42).is_pass());
/// assert_eq!(
///     rule(&0).into_fail().unwrap().message(),
///     "must be between 1 and 100.",
/// );
/// ```
pub fn in_range<T>(min: T, max: T) -> impl Fn(&T) -> Either<ValidationError, ()>
where
    T: PartialOrd + Display,
{
    move |value: &T| {
        if *value < min || *value > max {
            Either::fail(ValidationError::new(format!("must be between {min} and {max}.")))
        } else {
            Either::pass(())
        }
    }
}
