//! Pass/fail outcome type produced by rules and specifications.
//!
//! This module provides the [`Either`] type: the result of evaluating one
//! rule, or one full specification, against a target value. Exactly one of
//! two variants holds: a joinable failure, or the validated value.
//!
//! # Key Components
//!
//! - [`Either`] - Core type holding either a failure or a passing value
//! - Iterator adapters over the passing value
//! - `Result` conversions (see also [`convert`](crate::convert))
//!
//! # Examples
//!
//! ```
//! use spec_rail::Either;
//!
//! let pass: Either<&str, i32> = Either::pass(42);
//! assert!(pass.is_pass());
//!
//! let fail: Either<&str, i32> = Either::fail("must be positive");
//! assert_eq!(fail.into_fail(), Some("must be positive"));
//! ```
pub mod core;
pub mod iter;

pub use self::core::*;
pub use self::iter::*;
