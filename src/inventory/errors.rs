//! # Inventory Errors
//!
//! Every domain failure is recoverable: the store is left unchanged and the
//! caller decides how to surface the message.

use thiserror::Error;

/// Result type for inventory operations
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Inventory domain errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InventoryError {
    /// Attempted to set a negative quantity, or a negative or non-finite price
    #[error("{field} must be a non-negative number: {value}")]
    Validation { field: &'static str, value: String },

    #[error("A product with ID {0} already exists")]
    DuplicateId(u64),

    #[error("No product with ID {0}")]
    NotFound(u64),
}

impl InventoryError {
    pub(crate) fn negative_quantity(value: i64) -> Self {
        Self::Validation {
            field: "quantity",
            value: value.to_string(),
        }
    }

    pub(crate) fn invalid_price(value: f64) -> Self {
        Self::Validation {
            field: "price",
            value: value.to_string(),
        }
    }

    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            InventoryError::Validation { .. } => "INV_VALIDATION_ERROR",
            InventoryError::DuplicateId(_) => "INV_DUPLICATE_ID",
            InventoryError::NotFound(_) => "INV_NOT_FOUND",
        }
    }
}
