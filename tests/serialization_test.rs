mod common;

use common::ProductFactory;
use products_api::{Category, ProductRecord, ServiceError};
use rust_decimal_macros::dec;
use serde_json::json;

#[test]
fn test_serialize_a_product() {
    let product = ProductRecord::new(
        "Fedora",
        "A red hat",
        dec!(12.50),
        true,
        Category::Cloths,
    );

    let value = product.to_value();
    assert_eq!(value["id"], json!(null));
    assert_eq!(value["name"], json!("Fedora"));
    assert_eq!(value["description"], json!("A red hat"));
    // Price is a precision-preserving decimal string on the wire.
    assert_eq!(value["price"], json!("12.50"));
    assert_eq!(value["available"], json!(true));
    assert_eq!(value["category"], json!("CLOTHS"));
}

#[test]
fn test_serialize_round_trip() {
    let mut factory = ProductFactory::with_seed(30);
    for _ in 0..10 {
        let product = factory.build();
        let restored = ProductRecord::from_value(product.to_value()).unwrap();

        assert_eq!(restored.name, product.name);
        assert_eq!(restored.description, product.description);
        assert_eq!(restored.price, product.price);
        assert_eq!(restored.available, product.available);
        assert_eq!(restored.category, product.category);
    }
}

#[test]
fn test_price_precision_is_stable() {
    let product = ProductRecord::new("Hat", "Wide brim", dec!(0.50), false, Category::Cloths);

    let once = product.to_value();
    let twice = ProductRecord::from_value(once.clone()).unwrap().to_value();
    assert_eq!(once["price"], twice["price"]);
}

#[test]
fn test_deserialize_a_product() {
    let value = json!({
        "id": 7,
        "name": "Wrench",
        "description": "Adjustable",
        "price": "19.99",
        "available": false,
        "category": "TOOLS",
    });

    let product = ProductRecord::from_value(value).unwrap();
    assert_eq!(product.id, Some(7));
    assert_eq!(product.name, "Wrench");
    assert_eq!(product.price, dec!(19.99));
    assert!(!product.available);
    assert_eq!(product.category, Category::Tools);
    assert_eq!(product.to_string(), "<Product Wrench id=[7]>");
}

#[test]
fn test_deserialize_with_non_boolean_available() {
    // "yes" must be rejected, never coerced to true.
    let value = json!({
        "name": "Shirt",
        "description": "Blue",
        "price": "10.00",
        "available": "yes",
        "category": "CLOTHS",
    });

    let err = ProductRecord::from_value(value).unwrap_err();
    assert!(matches!(err, ServiceError::ValidationError(_)));
}

#[test]
fn test_deserialize_missing_key() {
    let value = json!({
        "name": "Shirt",
        "description": "Blue",
        "available": true,
        "category": "CLOTHS",
    });

    let err = ProductRecord::from_value(value).unwrap_err();
    assert!(matches!(err, ServiceError::ValidationError(_)));
}

#[test]
fn test_deserialize_non_object_payload() {
    let err = ProductRecord::from_value(json!("this is not a product")).unwrap_err();
    assert!(matches!(err, ServiceError::ValidationError(_)));
}

#[test]
fn test_deserialize_unknown_category_falls_back() {
    let value = json!({
        "name": "Gadget",
        "description": "Mystery item",
        "price": "5.00",
        "available": true,
        "category": "GADGETS",
    });

    let product = ProductRecord::from_value(value).unwrap();
    assert_eq!(product.category, Category::Unknown);
}

#[test]
fn test_deserialize_missing_category_defaults() {
    let value = json!({
        "name": "Gadget",
        "description": "Mystery item",
        "price": "5.00",
        "available": true,
    });

    let product = ProductRecord::from_value(value).unwrap();
    assert_eq!(product.category, Category::Unknown);
}

#[test]
fn test_deserialize_accepts_numeric_price() {
    let value = json!({
        "name": "Apple",
        "description": "Crisp",
        "price": 1.25,
        "available": true,
        "category": "FOOD",
    });

    let product = ProductRecord::from_value(value).unwrap();
    assert_eq!(product.price, dec!(1.25));
}
