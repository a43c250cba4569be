use spec_rail::Either;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[test]
fn test_either_pass_roundtrip() {
    let outcome: Either<&str, i32> = Either::pass(42);
    assert!(outcome.is_pass());
    assert_eq!(outcome.into_pass(), Some(42));
}

#[test]
fn test_either_fail_roundtrip() {
    let outcome: Either<&str, i32> = Either::fail("error");
    assert!(outcome.is_fail());
    assert_eq!(outcome.into_fail(), Some("error"));
}

#[test]
fn test_either_map_fail_branch() {
    let outcome: Either<&str, i32> = Either::fail("error");
    let mapped = outcome.map(|x| x * 2);
    assert!(mapped.is_fail());
}

#[test]
fn test_either_map_pass_branch() {
    let outcome: Either<&str, i32> = Either::pass(21);
    assert_eq!(outcome.map(|x| x * 2).into_pass(), Some(42));
}

#[test]
fn test_either_map_fail() {
    let outcome: Either<&str, i32> = Either::fail("error");
    let mapped = outcome.map_fail(|e| format!("rule {}", e));
    assert_eq!(mapped.into_fail(), Some("rule error".to_string()));
}

#[test]
fn test_either_and_then_fail_short_circuits() {
    let outcome: Either<&str, i32> = Either::fail("error");
    let chained = outcome.and_then(|x| Either::pass(x * 2));
    assert!(chained.is_fail());
}

#[test]
fn test_either_or_else_pass() {
    let outcome: Either<&str, i32> = Either::pass(42);
    let recovered = outcome.or_else(|_| Either::pass(0));
    assert_eq!(recovered.into_pass(), Some(42));
}

#[test]
fn test_either_or_else_fail() {
    let outcome: Either<&str, i32> = Either::fail("error");
    let recovered = outcome.or_else(|_| Either::pass(0));
    assert_eq!(recovered.into_pass(), Some(0));
}

#[test]
fn test_either_as_ref() {
    let outcome: Either<String, i32> = Either::pass(42);
    assert_eq!(outcome.as_ref().into_pass(), Some(&42));
    assert!(outcome.is_pass());
}

#[test]
fn test_either_to_result() {
    let outcome: Either<&str, i32> = Either::pass(42);
    assert_eq!(outcome.to_result(), Ok(42));

    let outcome: Either<&str, i32> = Either::fail("error");
    assert_eq!(outcome.to_result(), Err("error"));
}

#[test]
fn test_either_from_result() {
    let result: Result<i32, &str> = Ok(42);
    assert!(Either::from_result(result).is_pass());

    let result: Result<i32, &str> = Err("failed");
    assert!(Either::from_result(result).is_fail());
}

#[test]
fn iterators_over_pass_value_work() {
    let mut outcome = Either::<&str, i32>::pass(3);
    if let Some(value) = outcome.iter_mut().next() {
        *value = 4;
    }
    assert_eq!(outcome.into_pass(), Some(4));

    let outcome: Either<&str, i32> = Either::fail("x");
    assert_eq!(outcome.iter().next(), None);
    assert_eq!(outcome.into_iter().next(), None);
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize, PartialEq, Debug)]
struct TestData {
    id: i32,
}

#[test]
#[cfg(feature = "serde")]
fn test_either_serde() {
    let pass = Either::<String, TestData>::pass(TestData { id: 1 });
    let serialized = serde_json::to_string(&pass).unwrap();
    let deserialized: Either<String, TestData> = serde_json::from_str(&serialized).unwrap();
    assert_eq!(pass, deserialized);

    let fail = Either::<String, TestData>::fail("error".to_string());
    let serialized = serde_json::to_string(&fail).unwrap();
    let deserialized: Either<String, TestData> = serde_json::from_str(&serialized).unwrap();
    assert_eq!(fail, deserialized);
}
