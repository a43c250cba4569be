//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use spec_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`fail!`]
//! - **Types**: [`Specification`], [`Either`], [`ValidationError`]
//! - **Traits**: [`Rule`], [`Join`], [`IdLookup`]
//! - The stock rule catalog constructors
//!
//! # Examples
//!
//! ```
//! use spec_rail::prelude::*;
//!
//! let name_spec: Specification<String, ValidationError> =
//!     Specification::new().rule(non_empty_string());
//! assert_eq!(name_spec.len(), 1);
//! ```

// Macros
pub use crate::fail;

// Core types
pub use crate::outcome::Either;
pub use crate::spec::{each_rule, EachRule, Specification, SpecEntry, SubSpec};
pub use crate::types::{BoxFuture, BoxRule, RuleFuture, ValidationError};

// Traits
pub use crate::spec::Rule;
pub use crate::traits::Join;

// Conversions
pub use crate::convert::{either_to_result, result_to_either};

// Stock rules
pub use crate::rules::lookup::{known_id, IdLookup, KnownId};
pub use crate::rules::number::{in_range, non_negative, positive};
pub use crate::rules::required;
pub use crate::rules::text::{max_length, non_empty_string};
