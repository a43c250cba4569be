//! Lifting an element specification over an optional collection field.

use crate::outcome::Either;
use crate::spec::core::Specification;
use crate::spec::rule::Rule;
use crate::traits::Join;
use crate::types::alloc_type::Box;
use crate::types::RuleFuture;

/// Rule that validates every element of an optional slice field.
///
/// Absence of the collection (`None` from the accessor) passes vacuously;
/// an optional collection that was not supplied is not itself a failure.
/// An empty slice passes as well. Present elements are validated sequentially
/// in order, and the rule short-circuits at the first failing element,
/// surfacing that element's failure unwrapped.
///
/// Created by [`Specification::each`] or [`each_rule`].
pub struct EachRule<T, U, E> {
    accessor: fn(&T) -> Option<&[U]>,
    element: Specification<U, E>,
}

impl<T, U, E> EachRule<T, U, E> {
    pub(crate) fn new(accessor: fn(&T) -> Option<&[U]>, element: Specification<U, E>) -> Self {
        Self { accessor, element }
    }
}

impl<T, U, E> Rule<T, E> for EachRule<T, U, E>
where
    U: Sync,
    E: Join + Clone + Send + Sync + 'static,
{
    fn check<'a>(&'a self, target: &'a T) -> RuleFuture<'a, E> {
        let items = (self.accessor)(target);
        Box::pin(async move {
            let Some(items) = items else {
                return Either::Pass(());
            };
            for item in items {
                if let Either::Fail(failure) = self.element.check(item).await {
                    return Either::Fail(failure);
                }
            }
            Either::Pass(())
        })
    }
}

/// Builds an [`EachRule`] for use with
/// [`Specification::with_rule`](crate::Specification::with_rule), for
/// example inside a nested specification that prefixes context:
///
/// ```ignore
/// let products = Specification::new()
///     .with_rule(each_rule(|c: &Container| c.products.as_deref(), product_id_spec()));
/// let spec = Specification::new()
///     .sub(|r: &Request| &r.container, ValidationError::new("Container:"), products);
/// ```
pub fn each_rule<T, U, E>(
    accessor: fn(&T) -> Option<&[U]>,
    element: Specification<U, E>,
) -> EachRule<T, U, E> {
    EachRule::new(accessor, element)
}
