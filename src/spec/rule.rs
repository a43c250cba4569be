//! The [`Rule`] trait and adapters from plain functions onto it.
//!
//! A rule inspects a borrowed target and resolves to an
//! [`Either`](crate::Either). Whatever a rule carries in its `Pass` payload
//! is discarded at this boundary: the engine threads the original target
//! through unchanged, so rules cannot substitute a transformed value.

use core::future::{ready, Future};
use core::pin::Pin;
use core::task::{Context, Poll};

use pin_project_lite::pin_project;

use crate::outcome::Either;
use crate::types::alloc_type::Box;
use crate::types::{BoxFuture, RuleFuture};

/// A single validation check against a borrowed target.
///
/// Implemented by the adapters in this module ([`FnRule`], [`AsyncRule`]) and
/// by stock catalog rules such as
/// [`KnownId`](crate::rules::lookup::KnownId). Custom implementations return
/// a boxed future so the engine can hold entries of one uniform type.
pub trait Rule<T, E> {
    /// Checks `target`, resolving to `Pass(())` or the rule's failure.
    fn check<'a>(&'a self, target: &'a T) -> RuleFuture<'a, E>;
}

pin_project! {
    /// Future adapter that drops a rule's `Pass` payload.
    ///
    /// Wraps a future resolving to `Either<E, P>` and resolves to
    /// `Either<E, ()>`, preserving failures untouched.
    #[must_use = "futures do nothing unless polled"]
    pub struct DiscardPass<Fut> {
        #[pin]
        inner: Fut,
    }
}

impl<Fut> DiscardPass<Fut> {
    pub(crate) fn new(inner: Fut) -> Self {
        Self { inner }
    }
}

impl<Fut, E, P> Future for DiscardPass<Fut>
where
    Fut: Future<Output = Either<E, P>>,
{
    type Output = Either<E, ()>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        match this.inner.poll(cx) {
            Poll::Ready(Either::Pass(_)) => Poll::Ready(Either::Pass(())),
            Poll::Ready(Either::Fail(failure)) => Poll::Ready(Either::Fail(failure)),
            Poll::Pending => Poll::Pending,
        }
    }
}

/// Adapter for synchronous rule functions.
///
/// Created by [`Specification::rule`](crate::Specification::rule); the
/// wrapped function runs eagerly and its outcome is wrapped in an
/// already-resolved future.
pub struct FnRule<F> {
    rule: F,
}

impl<F> FnRule<F> {
    pub(crate) fn new(rule: F) -> Self {
        Self { rule }
    }
}

impl<T, E, P, F> Rule<T, E> for FnRule<F>
where
    F: Fn(&T) -> Either<E, P> + Send + Sync,
    E: Send + 'static,
    P: Send + 'static,
{
    fn check<'a>(&'a self, target: &'a T) -> RuleFuture<'a, E> {
        Box::pin(DiscardPass::new(ready((self.rule)(target))))
    }
}

/// Adapter for asynchronous rule functions.
///
/// Created by [`Specification::async_rule`](crate::Specification::async_rule).
/// The wrapped function returns a boxed future borrowing the target; the
/// adapter discards the pass payload on resolution.
pub struct AsyncRule<F> {
    rule: F,
}

impl<F> AsyncRule<F> {
    pub(crate) fn new(rule: F) -> Self {
        Self { rule }
    }
}

impl<T, E, P, F> Rule<T, E> for AsyncRule<F>
where
    F: for<'c> Fn(&'c T) -> BoxFuture<'c, Either<E, P>> + Send + Sync,
    E: Send + 'static,
    P: Send + 'static,
{
    fn check<'a>(&'a self, target: &'a T) -> RuleFuture<'a, E> {
        Box::pin(DiscardPass::new((self.rule)(target)))
    }
}
