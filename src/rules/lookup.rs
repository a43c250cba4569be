//! Existence checks against a backing store.
//!
//! These are the asynchronous rules of the catalog: each check performs a
//! lookup through the [`IdLookup`] seam, behind which the persistence layer
//! lives. The engine treats them as ordinary entries and awaits them in
//! declared order, so an existence check may assume earlier structural rules
//! have already passed.

use core::fmt::Display;

use alloc::format;

use crate::outcome::Either;
use crate::spec::Rule;
use crate::types::alloc_type::{Arc, Box};
use crate::types::{BoxFuture, RuleFuture, ValidationError};

/// Membership lookup for identifiers of type `K`.
///
/// The store decides how `contains` resolves: an in-memory set in tests, a
/// database query in production. Implementations box their future:
///
/// ```
/// use std::collections::BTreeSet;
///
/// use spec_rail::rules::lookup::IdLookup;
/// use spec_rail::BoxFuture;
///
/// struct FixedIds(BTreeSet<u64>);
///
/// impl IdLookup<u64> for FixedIds {
///     fn contains<'a>(&'a self, id: &'a u64) -> BoxFuture<'a, bool> {
///         Box::pin(async move { self.0.contains(id) })
///     }
/// }
/// ```
pub trait IdLookup<K> {
    /// Resolves to `true` if the store knows `id`.
    fn contains<'a>(&'a self, id: &'a K) -> BoxFuture<'a, bool>;
}

/// Rule that fails when the target identifier is unknown to the store.
///
/// The failure message names the offending value and the entity noun:
/// `ID (999) is not a valid product id.`
///
/// Created by [`known_id`].
pub struct KnownId<S> {
    store: Arc<S>,
    noun: &'static str,
}

impl<K, S> Rule<K, ValidationError> for KnownId<S>
where
    K: Display + Sync,
    S: IdLookup<K> + Send + Sync,
{
    fn check<'a>(&'a self, target: &'a K) -> RuleFuture<'a, ValidationError> {
        Box::pin(async move {
            if self.store.contains(target).await {
                Either::Pass(())
            } else {
                Either::Fail(ValidationError::new(format!(
                    "ID ({}) is not a valid {} id.",
                    target, self.noun
                )))
            }
        })
    }
}

/// Builds a [`KnownId`] rule checking identifiers against `store`.
///
/// `noun` names the entity in the failure message: `known_id(store,
/// "product")` fails with `ID (999) is not a valid product id.`
pub fn known_id<S>(store: Arc<S>, noun: &'static str) -> KnownId<S> {
    KnownId { store, noun }
}
