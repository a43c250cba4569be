use spec_rail::{Join, ValidationError};

#[test]
fn join_concatenates_with_single_space() {
    let joined = String::from("field:").join(String::from("must be positive"));
    assert_eq!(joined, "field: must be positive");
}

#[test]
fn join_replaces_empty_left_side_outright() {
    let joined = String::new().join(String::from("must be positive"));
    assert_eq!(joined, "must be positive");
}

#[test]
fn join_keeps_trailing_right_side_empty() {
    let joined = String::from("field:").join(String::new());
    assert_eq!(joined, "field: ");
}

#[test]
fn join_chains_left_to_right() {
    let joined = String::from("Container:")
        .join(String::from("Products:"))
        .join(String::from("must be positive"));
    assert_eq!(joined, "Container: Products: must be positive");
}

#[test]
fn validation_error_join_delegates_to_message() {
    let context = ValidationError::new("Products:");
    let inner = ValidationError::new("ID (999) is not a valid product id.");
    assert_eq!(
        context.join(inner).message(),
        "Products: ID (999) is not a valid product id.",
    );
}

#[test]
fn validation_error_empty_context_is_neutral() {
    let joined = ValidationError::empty().join(ValidationError::new("must be positive"));
    assert_eq!(joined.message(), "must be positive");
}

#[test]
fn validation_error_display_matches_message() {
    let error = ValidationError::new("must be greater than zero.");
    assert_eq!(error.to_string(), "must be greater than zero.");
}
