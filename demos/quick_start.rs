//! Build a specification for a create-product request and validate two
//! payloads against it.

use spec_rail::prelude::*;

#[derive(Debug)]
struct CreateProduct {
    name: String,
    price: i64,
}

fn product_spec() -> Specification<CreateProduct, ValidationError> {
    let name_spec: Specification<String, ValidationError> =
        Specification::new().rule(non_empty_string()).rule(max_length(64));

    Specification::new()
        .sub(|p: &CreateProduct| &p.name, ValidationError::new("Name:"), name_spec)
        .rule(|p: &CreateProduct| {
            if p.price > 0 {
                Either::pass(())
            } else {
                fail!("Price: must be greater than zero.")
            }
        })
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let spec = product_spec();

    match spec.validate(CreateProduct { name: "Beer".into(), price: 120 }).await {
        Either::Pass(product) => println!("accepted: {product:?}"),
        Either::Fail(error) => println!("rejected: {error}"),
    }

    match spec.validate(CreateProduct { name: String::new(), price: 120 }).await {
        Either::Pass(product) => println!("accepted: {product:?}"),
        Either::Fail(error) => println!("rejected: {error}"),
    }
}
