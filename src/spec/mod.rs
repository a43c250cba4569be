//! Specification entries, builder, and the fail-fast engine.
//!
//! A [`Specification`] is built once (usually by a factory function per
//! request shape) and reused across validation calls. Its entries are a
//! tagged union: plain [`Rule`]s, whose failures surface unwrapped, and
//! sub-specifications, whose failures are prefixed with a stored error
//! context on the way out.
//!
//! Evaluation is strictly sequential and fail-fast: entry `N + 1` never
//! starts before entry `N` has resolved, including any store lookups an
//! asynchronous rule performs. Later rules may therefore assume earlier
//! structural rules have already rejected invalid shapes.
//!
//! # Examples
//!
//! ```
//! use spec_rail::{Either, Specification, ValidationError};
//!
//! let spec: Specification<i64, ValidationError> = Specification::new()
//!     .rule(|amount: &i64| {
//!         if *amount > 0 {
//!             Either::pass(())
//!         } else {
//!             Either::fail(ValidationError::new("must be greater than zero."))
//!         }
//!     });
//!
//! # let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! # rt.block_on(async {
//! assert!(spec.validate(120).await.is_pass());
//! assert!(spec.validate(-5).await.is_fail());
//! # });
//! ```
pub mod array;
pub mod core;
pub mod rule;

pub use self::array::*;
pub use self::core::*;
pub use self::rule::*;
