use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use spec_rail::{Either, Specification, ValidationError};

struct CreateProduct {
    name: String,
    price: i64,
}

fn name_spec() -> Specification<String, ValidationError> {
    Specification::new().rule(|name: &String| {
        if name.is_empty() {
            Either::fail(ValidationError::new("must be a non-zero length string."))
        } else {
            Either::pass(())
        }
    })
}

#[tokio::test]
async fn empty_specification_passes_any_target() {
    let spec: Specification<i32, ValidationError> = Specification::new();
    assert!(spec.is_empty());

    let outcome = spec.validate(7).await;
    assert_eq!(outcome.into_pass(), Some(7));
}

#[tokio::test]
async fn first_failure_wins_and_later_rules_never_run() {
    let calls = Arc::new(AtomicU32::new(0));
    let spy = calls.clone();

    let spec: Specification<i32, ValidationError> = Specification::new()
        .rule(|_: &i32| Either::<ValidationError, ()>::fail(ValidationError::new("first broke")))
        .rule(move |_: &i32| {
            spy.fetch_add(1, Ordering::SeqCst);
            Either::<ValidationError, ()>::pass(())
        });

    let outcome = spec.validate(7).await;
    assert_eq!(outcome.into_fail().unwrap().message(), "first broke");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn rule_failure_surfaces_unwrapped() {
    let spec: Specification<CreateProduct, ValidationError> =
        Specification::new().rule(|p: &CreateProduct| {
            if p.price > 0 {
                Either::pass(())
            } else {
                Either::fail(ValidationError::new("Price: must be greater than zero."))
            }
        });

    let outcome = spec.validate(CreateProduct { name: "Beer".into(), price: 0 }).await;
    assert_eq!(
        outcome.into_fail().unwrap().message(),
        "Price: must be greater than zero.",
    );
}

#[tokio::test]
async fn sub_specification_joins_context_in_front() {
    let spec: Specification<CreateProduct, ValidationError> = Specification::new().sub(
        |p: &CreateProduct| &p.name,
        ValidationError::new("Name:"),
        name_spec(),
    );

    let outcome = spec.validate(CreateProduct { name: String::new(), price: 120 }).await;
    assert_eq!(
        outcome.into_fail().unwrap().message(),
        "Name: must be a non-zero length string.",
    );
}

#[tokio::test]
async fn sub_specification_with_empty_context_is_neutral() {
    let spec: Specification<CreateProduct, ValidationError> =
        Specification::new().sub(|p: &CreateProduct| &p.name, ValidationError::empty(), name_spec());

    let outcome = spec.validate(CreateProduct { name: String::new(), price: 120 }).await;
    assert_eq!(
        outcome.into_fail().unwrap().message(),
        "must be a non-zero length string.",
    );
}

#[tokio::test]
async fn sub_specification_failure_stops_later_entries() {
    let calls = Arc::new(AtomicU32::new(0));
    let spy = calls.clone();

    let spec: Specification<CreateProduct, ValidationError> = Specification::new()
        .sub(|p: &CreateProduct| &p.name, ValidationError::new("Name:"), name_spec())
        .rule(move |_: &CreateProduct| {
            spy.fetch_add(1, Ordering::SeqCst);
            Either::<ValidationError, ()>::pass(())
        });

    let outcome = spec.validate(CreateProduct { name: String::new(), price: 120 }).await;
    assert!(outcome.is_fail());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn nested_sub_specifications_chain_context_outer_to_inner() {
    struct Request {
        product: CreateProduct,
    }

    let product_spec: Specification<CreateProduct, ValidationError> = Specification::new().sub(
        |p: &CreateProduct| &p.name,
        ValidationError::new("Name:"),
        name_spec(),
    );

    let spec: Specification<Request, ValidationError> = Specification::new().sub(
        |r: &Request| &r.product,
        ValidationError::new("Product:"),
        product_spec,
    );

    let outcome = spec
        .validate(Request { product: CreateProduct { name: String::new(), price: 120 } })
        .await;
    assert_eq!(
        outcome.into_fail().unwrap().message(),
        "Product: Name: must be a non-zero length string.",
    );
}

#[tokio::test]
async fn pass_payload_of_rules_is_discarded() {
    let spec: Specification<i32, ValidationError> =
        Specification::new().rule(|v: &i32| Either::<ValidationError, i32>::pass(v * 2));

    let outcome = spec.validate(21).await;
    assert_eq!(outcome.into_pass(), Some(21));
}

#[tokio::test]
async fn specification_is_reusable_across_calls() {
    let spec: Specification<CreateProduct, ValidationError> = Specification::new().sub(
        |p: &CreateProduct| &p.name,
        ValidationError::new("Name:"),
        name_spec(),
    );

    for _ in 0..3 {
        let outcome = spec.validate(CreateProduct { name: String::new(), price: 1 }).await;
        // A fresh failure chain every run; earlier joins must not leak in.
        assert_eq!(
            outcome.into_fail().unwrap().message(),
            "Name: must be a non-zero length string.",
        );
    }

    let outcome = spec.validate(CreateProduct { name: "Beer".into(), price: 1 }).await;
    assert!(outcome.is_pass());
}

#[tokio::test]
async fn check_borrows_the_target() {
    let spec: Specification<String, ValidationError> = name_spec();
    let target = String::from("Beer");

    assert!(spec.check(&target).await.is_pass());
    assert_eq!(target, "Beer");
}
