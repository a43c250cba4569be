use spec_rail::convert::{either_to_result, result_to_either};
use spec_rail::Either;

#[test]
fn either_to_result_maps_both_branches() {
    assert_eq!(either_to_result(Either::<&str, i32>::pass(42)), Ok(42));
    assert_eq!(either_to_result(Either::<&str, i32>::fail("error")), Err("error"));
}

#[test]
fn result_to_either_maps_both_branches() {
    let ok: Result<i32, &str> = Ok(42);
    assert!(result_to_either(ok).is_pass());

    let err: Result<i32, &str> = Err("failed");
    assert_eq!(result_to_either(err).into_fail(), Some("failed"));
}

#[test]
fn either_from_result_impl() {
    let outcome: Either<&str, i32> = Ok::<i32, &str>(42).into();
    assert_eq!(outcome.into_pass(), Some(42));

    let outcome: Either<&str, i32> = Err::<i32, &str>("failed").into();
    assert!(outcome.is_fail());
}
