//! Persistence Tests
//!
//! - deserialize(serialize(S)) keeps every (id, name, quantity, price) tuple
//! - load of a missing file yields an empty inventory, not an error
//! - save then load restores field-identical products
//! - unreadable files degrade to an empty inventory
//! - the on-disk format keeps its fixed field names
//! - a non-finite price is refused at save time and the old file survives
//! - whole-number float quantities load; fractional ones fail the load

use std::fs;

use inventario::inventory::{Inventory, Product};
use inventario::persistence::{
    self, deserialize, serialize, InventoryDocument, LoadStatus, PersistenceErrorCode,
};
use serde_json::{json, Value};
use tempfile::TempDir;

// =============================================================================
// Test Utilities
// =============================================================================

fn tuples(inventory: &Inventory) -> Vec<(u64, String, i64, f64)> {
    let mut out: Vec<_> = inventory
        .list_all()
        .map(|p| (p.id(), p.name().to_string(), p.quantity(), p.price()))
        .collect();
    out.sort_by_key(|t| t.0);
    out
}

fn create_temp_data_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

// =============================================================================
// Document Round Trip
// =============================================================================

#[test]
fn test_round_trip_preserves_tuples() {
    let stores = [
        Inventory::new(),
        [Product::new(1, "Widget", 10, 2.5)].into_iter().collect(),
        [
            Product::new(10, "Arroz 1kg", 25, 1.35),
            Product::new(3, "Aceite \"extra\"", 0, 4.0),
            Product::new(8, "Ñandú de peluche", 2, 15.75),
            // Accepted at construction time, so it must survive too
            Product::new(4, "Devuelto", -2, 0.0),
        ]
        .into_iter()
        .collect(),
    ];

    for store in stores {
        let restored = deserialize(serialize(&store));
        assert_eq!(tuples(&restored), tuples(&store));
    }
}

#[test]
fn test_document_without_productos_key() {
    let document: InventoryDocument = serde_json::from_value(json!({})).unwrap();
    assert!(deserialize(document).is_empty());
}

// =============================================================================
// File Save / Load
// =============================================================================

#[test]
fn test_load_nonexistent_returns_empty() {
    let temp_dir = create_temp_data_dir();
    let outcome = persistence::load(&temp_dir.path().join("nonexistent.json"));

    assert!(matches!(outcome.status, LoadStatus::Missing));
    assert!(outcome.inventory.is_empty());
}

#[test]
fn test_save_two_then_load() {
    let temp_dir = create_temp_data_dir();
    let path = temp_dir.path().join("inventario.json");

    let mut inventory = Inventory::new();
    inventory.insert(Product::new(1, "Widget", 10, 2.50)).unwrap();
    inventory.insert(Product::new(2, "Gadget", 0, 9.99)).unwrap();

    persistence::save(&inventory, &path).unwrap();
    let outcome = persistence::load(&path);

    assert!(matches!(outcome.status, LoadStatus::Loaded(2)));
    assert_eq!(outcome.inventory.len(), 2);
    assert_eq!(tuples(&outcome.inventory), tuples(&inventory));
}

#[test]
fn test_save_overwrites_previous_file() {
    let temp_dir = create_temp_data_dir();
    let path = temp_dir.path().join("inventario.json");

    let big: Inventory = (1..=5).map(|id| Product::new(id, "p", 1, 1.0)).collect();
    persistence::save(&big, &path).unwrap();

    let small: Inventory = [Product::new(9, "solo", 1, 1.0)].into_iter().collect();
    persistence::save(&small, &path).unwrap();

    let outcome = persistence::load(&path);
    assert_eq!(tuples(&outcome.inventory), tuples(&small));
}

#[test]
fn test_on_disk_format() {
    let temp_dir = create_temp_data_dir();
    let path = temp_dir.path().join("inventario.json");

    let inventory: Inventory = [Product::new(1, "Widget", 10, 2.5)].into_iter().collect();
    persistence::save(&inventory, &path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let value: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(
        value,
        json!({
            "productos": [
                {"id_producto": 1, "nombre": "Widget", "cantidad": 10, "precio": 2.5}
            ]
        })
    );
    assert!(text.contains("\n    \"productos\""));
}

#[test]
fn test_reads_file_written_by_hand() {
    let temp_dir = create_temp_data_dir();
    let path = temp_dir.path().join("inventario.json");
    fs::write(
        &path,
        r#"{
    "productos": [
        {"id_producto": 3, "nombre": "Leche", "cantidad": 12, "precio": 0.99},
        {"id_producto": 1, "nombre": "Pan", "cantidad": 4, "precio": 2}
    ]
}"#,
    )
    .unwrap();

    let outcome = persistence::load(&path);
    assert!(outcome.is_loaded());
    assert_eq!(outcome.inventory.find_by_id(1).unwrap().price(), 2.0);
    assert_eq!(outcome.inventory.next_available_id(), 4);
}

#[test]
fn test_wrong_field_type_degrades_to_empty() {
    let temp_dir = create_temp_data_dir();
    let path = temp_dir.path().join("inventario.json");
    fs::write(
        &path,
        r#"{"productos": [{"id_producto": "uno", "nombre": "x", "cantidad": 1, "precio": 1}]}"#,
    )
    .unwrap();

    let outcome = persistence::load(&path);
    assert!(outcome.inventory.is_empty());
    match outcome.status {
        LoadStatus::Failed(e) => assert_eq!(e.code(), PersistenceErrorCode::ParseError),
        other => panic!("expected parse failure, got {:?}", other),
    }
}

#[test]
fn test_load_directory_path_fails_softly() {
    let temp_dir = create_temp_data_dir();

    let outcome = persistence::load(temp_dir.path());
    assert!(outcome.inventory.is_empty());
    assert!(matches!(outcome.status, LoadStatus::Failed(_)));
}

// =============================================================================
// Numeric Edge Cases
// =============================================================================

#[test]
fn test_non_finite_price_is_not_written() {
    let temp_dir = create_temp_data_dir();
    let path = temp_dir.path().join("inventario.json");

    let good: Inventory = [
        Product::new(1, "Widget", 10, 2.5),
        Product::new(2, "Gadget", 0, 9.99),
    ]
    .into_iter()
    .collect();
    persistence::save(&good, &path).unwrap();

    for price in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
        let mut bad = good.clone();
        bad.insert(Product::new(3, "Roto", 1, price)).unwrap();

        let err = persistence::save(&bad, &path).unwrap_err();
        assert_eq!(err.code(), PersistenceErrorCode::EncodeError);
    }

    // Previous contents are intact and still load
    let text = fs::read_to_string(&path).unwrap();
    assert!(!text.contains("null"));
    let outcome = persistence::load(&path);
    assert!(matches!(outcome.status, LoadStatus::Loaded(2)));
    assert_eq!(tuples(&outcome.inventory), tuples(&good));
}

#[test]
fn test_float_cantidad_in_file() {
    let temp_dir = create_temp_data_dir();
    let path = temp_dir.path().join("inventario.json");

    fs::write(
        &path,
        r#"{"productos": [{"id_producto": 1, "nombre": "Pan", "cantidad": 10.0, "precio": 2.5}]}"#,
    )
    .unwrap();
    let outcome = persistence::load(&path);
    assert!(outcome.is_loaded());
    assert_eq!(outcome.inventory.find_by_id(1).unwrap().quantity(), 10);

    fs::write(
        &path,
        r#"{"productos": [{"id_producto": 1, "nombre": "Pan", "cantidad": 10.5, "precio": 2.5}]}"#,
    )
    .unwrap();
    let outcome = persistence::load(&path);
    assert!(outcome.inventory.is_empty());
    match outcome.status {
        LoadStatus::Failed(e) => assert_eq!(e.code(), PersistenceErrorCode::ParseError),
        other => panic!("expected parse failure, got {:?}", other),
    }
}

#[test]
fn test_negative_id_fails_the_load() {
    let temp_dir = create_temp_data_dir();
    let path = temp_dir.path().join("inventario.json");
    fs::write(
        &path,
        r#"{"productos": [{"id_producto": -1, "nombre": "x", "cantidad": 1, "precio": 1}]}"#,
    )
    .unwrap();

    let outcome = persistence::load(&path);
    assert!(outcome.inventory.is_empty());
    assert!(matches!(outcome.status, LoadStatus::Failed(_)));
}
