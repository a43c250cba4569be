//! Validate a nested create-container request, including existence checks
//! for its product ids against an in-memory catalog.

use std::collections::BTreeSet;
use std::sync::Arc;

use spec_rail::prelude::*;

struct ProductCatalog(BTreeSet<u64>);

impl IdLookup<u64> for ProductCatalog {
    fn contains<'a>(&'a self, id: &'a u64) -> BoxFuture<'a, bool> {
        Box::pin(async move { self.0.contains(id) })
    }
}

#[derive(Debug)]
struct CreateContainer {
    name: String,
    products: Option<Vec<u64>>,
}

fn container_spec(catalog: Arc<ProductCatalog>) -> Specification<CreateContainer, ValidationError> {
    let name_spec: Specification<String, ValidationError> =
        Specification::new().rule(non_empty_string());

    let product_ids: Specification<u64, ValidationError> =
        Specification::new().with_rule(known_id(catalog, "product"));

    Specification::new()
        .sub(|c: &CreateContainer| &c.name, ValidationError::new("Name:"), name_spec)
        .sub(
            |c: &CreateContainer| &c.products,
            ValidationError::new("Products:"),
            Specification::new().each(|p: &Option<Vec<u64>>| p.as_deref(), product_ids),
        )
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let catalog = Arc::new(ProductCatalog([1, 2, 3].into_iter().collect()));
    let spec = container_spec(catalog);

    let requests = [
        CreateContainer { name: "Tap shelf".into(), products: Some(vec![1, 3]) },
        CreateContainer { name: "Back room".into(), products: Some(vec![1, 999]) },
        CreateContainer { name: "Empty crate".into(), products: None },
    ];

    for request in requests {
        match spec.validate(request).await {
            Either::Pass(container) => println!("accepted: {container:?}"),
            Either::Fail(error) => println!("rejected: {error}"),
        }
    }
}
