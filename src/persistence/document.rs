//! On-disk document model.
//!
//! ```text
//! {
//!     "productos": [
//!         {"id_producto": 1, "nombre": "Widget", "cantidad": 10, "precio": 2.5}
//!     ]
//! }
//! ```
//!
//! Field names are fixed for compatibility with existing files. Hand-edited
//! files sometimes carry `"cantidad": 10.0`; whole floats are accepted and
//! anything with a fractional part rejects the document.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::inventory::{Inventory, Product};

/// Top-level persisted document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryDocument {
    /// Absent in the file means an empty inventory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub productos: Option<Vec<ProductEntry>>,
}

/// One persisted product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductEntry {
    pub id_producto: u64,
    pub nombre: String,
    #[serde(deserialize_with = "whole_quantity")]
    pub cantidad: i64,
    pub precio: f64,
}

fn whole_quantity<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Quantity {
        Integer(i64),
        Float(f64),
    }

    match Quantity::deserialize(deserializer)? {
        Quantity::Integer(n) => Ok(n),
        // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound
        Quantity::Float(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
            Ok(f as i64)
        }
        Quantity::Float(f) => Err(de::Error::custom(format_args!(
            "cantidad must be a whole number, got {}",
            f
        ))),
    }
}

impl From<&Product> for ProductEntry {
    fn from(product: &Product) -> Self {
        Self {
            id_producto: product.id(),
            nombre: product.name().to_string(),
            cantidad: product.quantity(),
            precio: product.price(),
        }
    }
}

impl From<ProductEntry> for Product {
    fn from(entry: ProductEntry) -> Self {
        Product::new(entry.id_producto, entry.nombre, entry.cantidad, entry.precio)
    }
}

impl InventoryDocument {
    /// Number of product entries in the document
    pub fn len(&self) -> usize {
        self.productos.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Builds the document for `inventory`, entries in its iteration order.
pub fn serialize(inventory: &Inventory) -> InventoryDocument {
    InventoryDocument {
        productos: Some(inventory.list_all().map(ProductEntry::from).collect()),
    }
}

/// Rebuilds an inventory from a document. Always starts from empty; a
/// document without `productos` yields an empty inventory.
pub fn deserialize(document: InventoryDocument) -> Inventory {
    let mut inventory = Inventory::new();
    inventory.replace_all(
        document
            .productos
            .unwrap_or_default()
            .into_iter()
            .map(Product::from),
    );
    inventory
}
