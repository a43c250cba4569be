//! Rule-author macros for failing with formatted messages.
//!
//! # Examples
//!
//! ```
//! use spec_rail::{fail, Either, Specification, ValidationError};
//!
//! let spec: Specification<i64, ValidationError> = Specification::new()
//!     .rule(|price: &i64| {
//!         if *price <= 0 {
//!             return fail!("price ({price}) must be greater than zero.");
//!         }
//!         Either::pass(())
//!     });
//! ```

/// Formats a [`ValidationError`](crate::ValidationError) and wraps it in
/// [`Either::Fail`](crate::Either).
///
/// Accepts the same arguments as `format!`.
///
/// # Examples
///
/// ```
/// use spec_rail::{fail, Either, ValidationError};
///
/// let outcome: Either<ValidationError, ()> = fail!("ID ({}) is not a valid product id.", 999);
/// assert_eq!(
///     outcome.into_fail().unwrap().message(),
///     "ID (999) is not a valid product id.",
/// );
/// ```
#[macro_export]
macro_rules! fail {
    ($($arg:tt)*) => {
        $crate::Either::Fail($crate::ValidationError::new($crate::__private::format!($($arg)*)))
    };
}
