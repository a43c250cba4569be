use core::fmt;

use smallvec::SmallVec;

use crate::outcome::Either;
use crate::spec::array::EachRule;
use crate::spec::rule::{AsyncRule, FnRule, Rule};
use crate::traits::Join;
use crate::types::alloc_type::Box;
use crate::types::{BoxFuture, BoxRule, RuleFuture};

type EntryList<T, E> = SmallVec<[SpecEntry<T, E>; 4]>;

/// One entry of a [`Specification`].
///
/// The two variants differ in how their failures surface: a `Rule` failure
/// is returned unwrapped, a `Sub` failure is prefixed with the stored
/// context via [`Join::join`].
pub enum SpecEntry<T, E> {
    /// A plain rule checked against the whole target.
    Rule(BoxRule<T, E>),
    /// A nested specification scoped to one field of the target.
    Sub(SubSpec<T, E>),
}

/// A sub-specification entry: an error context plus an erased check that
/// recurses into one field of the target.
pub struct SubSpec<T, E> {
    context: E,
    inner: BoxRule<T, E>,
}

impl<T, E> SubSpec<T, E> {
    /// The context joined in front of this sub-specification's failures.
    pub fn context(&self) -> &E {
        &self.context
    }
}

struct SubCheck<T, U, E> {
    accessor: fn(&T) -> &U,
    nested: Specification<U, E>,
}

impl<T, U, E> Rule<T, E> for SubCheck<T, U, E>
where
    U: Sync,
    E: Join + Clone + Send + Sync + 'static,
{
    fn check<'a>(&'a self, target: &'a T) -> RuleFuture<'a, E> {
        let field = (self.accessor)(target);
        Box::pin(self.nested.check(field))
    }
}

/// An ordered, reusable list of validation entries for targets of type `T`.
///
/// Built once per request shape and reused across validation calls;
/// [`validate`](Specification::validate) borrows the specification, so a
/// single instance serves any number of concurrent runs. Entries are
/// evaluated in declared order, one at a time, and the first failure wins.
///
/// # Examples
///
/// ```
/// use spec_rail::{Either, Specification, ValidationError};
///
/// fn name_spec() -> Specification<String, ValidationError> {
///     Specification::new().rule(|name: &String| {
///         if name.is_empty() {
///             Either::fail(ValidationError::new("must be a non-zero length string."))
///         } else {
///             Either::pass(())
///         }
///     })
/// }
///
/// # let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
/// # rt.block_on(async {
/// let outcome = name_spec().validate("Beer".to_string()).await;
/// assert_eq!(outcome.into_pass().as_deref(), Some("Beer"));
/// # });
/// ```
#[must_use]
pub struct Specification<T, E> {
    entries: EntryList<T, E>,
}

impl<T, E> Specification<T, E> {
    /// Creates an empty specification, which passes any target.
    #[inline]
    pub fn new() -> Self {
        Self { entries: SmallVec::new() }
    }

    /// Number of entries in declared order.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the specification has no entries.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends a pre-built entry.
    #[inline]
    pub fn entry(mut self, entry: SpecEntry<T, E>) -> Self {
        self.entries.push(entry);
        self
    }
}

impl<T, E> Specification<T, E>
where
    E: Join + Clone + Send + Sync + 'static,
{
    /// Appends a synchronous rule.
    ///
    /// The rule's `Pass` payload is discarded; see [`Rule`].
    pub fn rule<F, P>(self, rule: F) -> Self
    where
        F: Fn(&T) -> Either<E, P> + Send + Sync + 'static,
        P: Send + 'static,
    {
        self.entry(SpecEntry::Rule(Box::new(FnRule::new(rule))))
    }

    /// Appends an asynchronous rule.
    ///
    /// The function returns a boxed future borrowing the target; the engine
    /// awaits it before moving to the next entry. Named functions returning
    /// [`BoxFuture`] coerce directly:
    ///
    /// ```ignore
    /// fn balance_covers(r: &Order) -> BoxFuture<'_, Either<ValidationError, ()>> {
    ///     Box::pin(async move { /* store lookup */ })
    /// }
    ///
    /// let spec = Specification::new().async_rule(balance_covers);
    /// ```
    pub fn async_rule<F, P>(self, rule: F) -> Self
    where
        F: for<'a> Fn(&'a T) -> BoxFuture<'a, Either<E, P>> + Send + Sync + 'static,
        P: Send + 'static,
    {
        self.entry(SpecEntry::Rule(Box::new(AsyncRule::new(rule))))
    }

    /// Appends a pre-built [`Rule`] value, such as a stock catalog rule.
    pub fn with_rule<R>(self, rule: R) -> Self
    where
        R: Rule<T, E> + Send + Sync + 'static,
    {
        self.entry(SpecEntry::Rule(Box::new(rule)))
    }

    /// Appends a sub-specification scoped to one field of the target.
    ///
    /// On failure, `context` is cloned and joined in front of the nested
    /// failure; evaluation of the parent stops there.
    pub fn sub<U>(self, accessor: fn(&T) -> &U, context: E, nested: Specification<U, E>) -> Self
    where
        T: 'static,
        U: Sync + 'static,
    {
        self.entry(SpecEntry::Sub(SubSpec {
            context,
            inner: Box::new(SubCheck { accessor, nested }),
        }))
    }

    /// Appends an array rule validating every element of an optional
    /// collection field against `element`.
    ///
    /// An accessor returning `None` passes vacuously; the element
    /// specification is never consulted. See [`EachRule`] for the element
    /// evaluation policy.
    pub fn each<U>(self, accessor: fn(&T) -> Option<&[U]>, element: Specification<U, E>) -> Self
    where
        T: 'static,
        U: Sync + 'static,
    {
        self.entry(SpecEntry::Rule(Box::new(EachRule::new(accessor, element))))
    }

    /// Checks a borrowed target against every entry, in declared order.
    ///
    /// Stops at the first failure. A `Rule` failure is returned unwrapped; a
    /// `Sub` failure comes back as `context.join(inner)`. Entries are awaited
    /// one at a time, so a later rule never starts before an earlier rule's
    /// store lookups have resolved.
    pub async fn check(&self, target: &T) -> Either<E, ()> {
        for (index, entry) in self.entries.iter().enumerate() {
            match entry {
                SpecEntry::Rule(rule) => {
                    if let Either::Fail(failure) = rule.check(target).await {
                        note_failure(index, "rule");
                        return Either::Fail(failure);
                    }
                }
                SpecEntry::Sub(sub) => {
                    if let Either::Fail(failure) = sub.inner.check(target).await {
                        note_failure(index, "sub");
                        return Either::Fail(sub.context.clone().join(failure));
                    }
                }
            }
        }
        Either::Pass(())
    }

    /// Validates an owned target, returning it unchanged on a full pass.
    ///
    /// The returned `Pass` always carries the original target; rule pass
    /// payloads are never threaded through.
    pub async fn validate(&self, target: T) -> Either<E, T> {
        match self.check(&target).await {
            Either::Fail(failure) => Either::Fail(failure),
            Either::Pass(()) => Either::Pass(target),
        }
    }
}

impl<T, E> Default for Specification<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> fmt::Debug for Specification<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Specification").field("entries", &self.entries.len()).finish()
    }
}

fn note_failure(_index: usize, _kind: &'static str) {
    #[cfg(feature = "tracing")]
    tracing::debug!(entry = _index, kind = _kind, "specification entry failed");
}
