//! Conversions between [`Either`] and `Result`.
//!
//! These adapters make it straightforward to hand a validation outcome to
//! `?`-based code, or to wrap a fallible computation's result back into the
//! engine's outcome type.
//!
//! # Examples
//!
//! ```
//! use spec_rail::convert::{either_to_result, result_to_either};
//! use spec_rail::Either;
//!
//! let outcome: Either<&str, i32> = Either::pass(42);
//! assert_eq!(either_to_result(outcome), Ok(42));
//!
//! let result: Result<i32, &str> = Err("failed");
//! assert!(result_to_either(result).is_fail());
//! ```

use crate::outcome::Either;

/// Converts an `Either` to a `Result`, mapping `Pass` to `Ok`.
///
/// # Examples
///
/// ```
/// use spec_rail::convert::either_to_result;
/// use spec_rail::Either;
///
/// assert_eq!(either_to_result(Either::<&str, i32>::pass(42)), Ok(42));
/// assert_eq!(either_to_result(Either::<&str, i32>::fail("error")), Err("error"));
/// ```
#[inline]
pub fn either_to_result<F, P>(outcome: Either<F, P>) -> Result<P, F> {
    outcome.to_result()
}

/// Converts a `Result` to an `Either`, mapping `Ok` to `Pass`.
///
/// # Examples
///
/// ```
/// use spec_rail::convert::result_to_either;
/// use spec_rail::Either;
///
/// let ok: Result<i32, &str> = Ok(42);
/// assert!(result_to_either(ok).is_pass());
/// ```
#[inline]
pub fn result_to_either<F, P>(result: Result<P, F>) -> Either<F, P> {
    Either::from_result(result)
}

impl<F, P> From<Result<P, F>> for Either<F, P> {
    #[inline]
    fn from(result: Result<P, F>) -> Self {
        Either::from_result(result)
    }
}
