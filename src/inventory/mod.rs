//! Inventory domain for inventario
//!
//! Holds the product records and the keyed store that owns them.
//!
//! # Invariants
//!
//! - Every product is keyed by its own ID; IDs are unique within a store
//! - Setters never leave a negative quantity or a negative or non-finite price behind
//! - Failed operations leave the store unchanged
//!
//! Nothing in this module performs I/O. Rendering and persistence live in
//! `cli` and `persistence`.

mod errors;
mod product;
mod store;

pub use errors::{InventoryError, InventoryResult};
pub use product::Product;
pub use store::Inventory;
