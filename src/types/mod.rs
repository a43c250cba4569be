//! Error value and shared type aliases.
//!
//! This module holds the owned, joinable [`ValidationError`] returned by the
//! stock rule catalog, plus the boxed-future aliases the specification engine
//! is written against.
//!
//! # Examples
//!
//! ```
//! use spec_rail::{Join, ValidationError};
//!
//! let context = ValidationError::new("Products:");
//! let inner = ValidationError::new("ID (999) is not a valid product id.");
//!
//! assert_eq!(
//!     context.join(inner).message(),
//!     "Products: ID (999) is not a valid product id.",
//! );
//! ```
use crate::outcome::Either;
use crate::spec::Rule;

pub mod alloc_type;
pub mod validation_error;

pub use validation_error::*;

pub use futures_core::future::BoxFuture;

/// Boxed future returned by [`Rule::check`]: the outcome of one rule against
/// one target, with the pass payload already discarded.
pub type RuleFuture<'a, E> = BoxFuture<'a, Either<E, ()>>;

/// Boxed rule trait object as stored in a specification entry.
pub type BoxRule<T, E> = alloc::boxed::Box<dyn Rule<T, E> + Send + Sync>;
