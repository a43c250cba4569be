//! Fail-fast specification validation with chained error context.
//!
//! A [`Specification`] is an ordered list of entries: plain rules, and
//! sub-specifications scoped to one field of the target. Validation walks the
//! entries in declared order, awaiting each rule one at a time, and stops at
//! the first failure. A failing sub-specification has its error context
//! joined in front of the inner failure on the way out, producing messages
//! like `Products: ID (999) is not a valid product id.`
//!
//! # Examples
//!
//! ## Rule outcomes
//!
//! ```
//! use spec_rail::{Either, ValidationError};
//!
//! let pass: Either<ValidationError, i32> = Either::pass(42);
//! assert!(pass.is_pass());
//!
//! let fail: Either<ValidationError, i32> =
//!     Either::fail(ValidationError::new("must be greater than zero."));
//! assert_eq!(fail.into_fail().unwrap().message(), "must be greater than zero.");
//! ```
//!
//! ## Validating a request payload
//!
//! ```
//! use spec_rail::rules::text::non_empty_string;
//! use spec_rail::{Either, Specification, ValidationError};
//!
//! struct CreateProduct {
//!     name: String,
//!     price: i64,
//! }
//!
//! let name_spec: Specification<String, ValidationError> =
//!     Specification::new().rule(non_empty_string());
//!
//! let spec = Specification::new()
//!     .sub(|p: &CreateProduct| &p.name, ValidationError::new("Name:"), name_spec)
//!     .rule(|p: &CreateProduct| {
//!         if p.price > 0 {
//!             Either::pass(())
//!         } else {
//!             Either::fail(ValidationError::new("Price: must be greater than zero."))
//!         }
//!     });
//!
//! # let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! # rt.block_on(async {
//! let outcome = spec
//!     .validate(CreateProduct { name: "Beer".into(), price: 120 })
//!     .await;
//! assert!(outcome.is_pass());
//!
//! let outcome = spec
//!     .validate(CreateProduct { name: String::new(), price: 120 })
//!     .await;
//! assert_eq!(
//!     outcome.into_fail().unwrap().message(),
//!     "Name: must be a non-zero length string.",
//! );
//! # });
//! ```
//!
//! ## Asynchronous rules
//!
//! Rules that look things up in a store are ordinary entries; the engine
//! awaits them one at a time, in declared order:
//!
//! ```ignore
//! use spec_rail::rules::lookup::known_id;
//!
//! let spec = Specification::new()
//!     .each(|r: &CreateContainer| r.products.as_deref(), product_id_spec())
//!     .with_rule(known_id(store, "container"));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between `Either` and `Result`
pub mod convert;
/// Rule-author macros for failing with formatted messages
pub mod macros;
/// Pass/fail outcome type produced by rules and specifications
pub mod outcome;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Stock rule catalog: text, numeric, and store-lookup rules
pub mod rules;
/// Specification entries, builder, and the fail-fast engine
pub mod spec;
/// Core traits for joining error context
pub mod traits;
/// Error value and shared type aliases
pub mod types;

#[doc(hidden)]
pub mod __private {
    pub use alloc::format;
}

// Re-export common types that might be needed at root,
// but encourage using the prelude for the full working set.
pub use convert::{either_to_result, result_to_either};
pub use outcome::{Either, IntoIter, Iter, IterMut};
pub use spec::{
    each_rule, AsyncRule, DiscardPass, EachRule, FnRule, Rule, SpecEntry, Specification, SubSpec,
};
pub use traits::Join;
pub use types::{BoxFuture, BoxRule, RuleFuture, ValidationError};
