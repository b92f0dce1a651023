//! inventario - a single-user inventory ledger
//!
//! Products live in an in-memory `Inventory` keyed by ID. The whole inventory
//! is persisted as one JSON document; the interactive menu is a thin layer
//! over the store operations.

pub mod cli;
pub mod inventory;
pub mod observability;
pub mod persistence;
