//! A single product entry.

use std::fmt;

use super::errors::{InventoryError, InventoryResult};

/// One product held by an [`Inventory`](super::Inventory).
///
/// `id` is fixed at creation. Quantity and price can only be changed through
/// the validated setters, which refuse negative values (and non-finite prices)
/// and keep the prior one.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: u64,
    name: String,
    quantity: i64,
    price: f64,
}

impl Product {
    /// Creates a product. Fields are taken as given; negative quantity or
    /// price is only rejected by the setters.
    pub fn new(id: u64, name: impl Into<String>, quantity: i64, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            price,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Sets the quantity if it is not negative.
    pub fn set_quantity(&mut self, quantity: i64) -> InventoryResult<()> {
        if quantity < 0 {
            return Err(InventoryError::negative_quantity(quantity));
        }
        self.quantity = quantity;
        Ok(())
    }

    /// Sets the price if it is a finite, non-negative number.
    pub fn set_price(&mut self, price: f64) -> InventoryResult<()> {
        if !price.is_finite() || price < 0.0 {
            return Err(InventoryError::invalid_price(price));
        }
        self.price = price;
        Ok(())
    }

    /// One-line description used by listings and search results.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | {} | Cantidad: {} | Precio: ${:.2}",
            self.id, self.name, self.quantity, self.price
        )
    }
}
