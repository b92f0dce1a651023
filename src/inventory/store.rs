//! Keyed product collection.

use std::collections::BTreeMap;

use super::errors::{InventoryError, InventoryResult};
use super::product::Product;

/// In-memory product store keyed by product ID.
///
/// Iteration is in ascending ID order. Callers only ever get shared
/// references to the products; all mutation goes through the store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    products: BTreeMap<u64, Product>,
}

impl Inventory {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a product. Fails without touching the store if the ID is taken.
    pub fn insert(&mut self, product: Product) -> InventoryResult<()> {
        let id = product.id();
        if self.products.contains_key(&id) {
            return Err(InventoryError::DuplicateId(id));
        }
        self.products.insert(id, product);
        Ok(())
    }

    /// Removes a product and returns its name.
    pub fn remove(&mut self, id: u64) -> InventoryResult<String> {
        self.products
            .remove(&id)
            .map(|product| product.name().to_string())
            .ok_or(InventoryError::NotFound(id))
    }

    pub fn update_quantity(&mut self, id: u64, quantity: i64) -> InventoryResult<()> {
        self.get_mut(id)?.set_quantity(quantity)
    }

    pub fn update_price(&mut self, id: u64, price: f64) -> InventoryResult<()> {
        self.get_mut(id)?.set_price(price)
    }

    pub fn rename(&mut self, id: u64, name: impl Into<String>) -> InventoryResult<()> {
        self.get_mut(id)?.set_name(name);
        Ok(())
    }

    /// Products whose name contains `needle`, ignoring case.
    ///
    /// A blank needle (empty or only whitespace) matches every product.
    pub fn find_by_name<'a>(&'a self, needle: &str) -> impl Iterator<Item = &'a Product> + 'a {
        let needle = if needle.trim().is_empty() {
            String::new()
        } else {
            needle.to_lowercase()
        };
        self.products
            .values()
            .filter(move |product| product.name().to_lowercase().contains(&needle))
    }

    pub fn find_by_id(&self, id: u64) -> Option<&Product> {
        self.products.get(&id)
    }

    /// All products in ID order.
    pub fn list_all(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    /// `1` for an empty store, otherwise one past the highest ID.
    ///
    /// Nothing is reserved; `insert` still accepts any free ID.
    pub fn next_available_id(&self) -> u64 {
        self.products
            .last_key_value()
            .map_or(1, |(max, _)| max.saturating_add(1))
    }

    /// Discards the current contents and inserts `products`, each keyed by
    /// its own ID. A later product with a repeated ID replaces the earlier one.
    pub fn replace_all(&mut self, products: impl IntoIterator<Item = Product>) {
        self.products.clear();
        for product in products {
            self.products.insert(product.id(), product);
        }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    fn get_mut(&mut self, id: u64) -> InventoryResult<&mut Product> {
        self.products
            .get_mut(&id)
            .ok_or(InventoryError::NotFound(id))
    }
}

impl FromIterator<Product> for Inventory {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        let mut inventory = Inventory::new();
        inventory.replace_all(iter);
        inventory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Inventory {
        let mut inventory = Inventory::new();
        inventory.insert(Product::new(1, "Widget", 10, 2.50)).unwrap();
        inventory.insert(Product::new(2, "Gadget", 0, 9.99)).unwrap();
        inventory
    }

    fn names<'a>(products: impl Iterator<Item = &'a Product>) -> Vec<&'a str> {
        products.map(Product::name).collect()
    }

    #[test]
    fn test_insert_then_find_by_id() {
        let inventory = sample();
        let found = inventory.find_by_id(1).unwrap();
        assert_eq!(found, &Product::new(1, "Widget", 10, 2.50));
    }

    #[test]
    fn test_duplicate_insert_rejected() {
        let mut inventory = sample();
        let result = inventory.insert(Product::new(1, "Other", 1, 1.0));
        assert_eq!(result, Err(InventoryError::DuplicateId(1)));
        assert_eq!(inventory.len(), 2);
        assert_eq!(inventory.find_by_id(1).unwrap().name(), "Widget");
    }

    #[test]
    fn test_remove_returns_name() {
        let mut inventory = sample();
        assert_eq!(inventory.remove(2).unwrap(), "Gadget");
        assert!(inventory.find_by_id(2).is_none());
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn test_remove_missing() {
        let mut inventory = sample();
        assert_eq!(inventory.remove(99), Err(InventoryError::NotFound(99)));
        assert_eq!(inventory.len(), 2);
    }

    #[test]
    fn test_update_quantity_and_price() {
        let mut inventory = sample();
        inventory.update_quantity(1, 3).unwrap();
        inventory.update_price(1, 4.0).unwrap();

        let widget = inventory.find_by_id(1).unwrap();
        assert_eq!(widget.quantity(), 3);
        assert_eq!(widget.price(), 4.0);
    }

    #[test]
    fn test_update_propagates_validation() {
        let mut inventory = sample();
        let err = inventory.update_quantity(1, -1).unwrap_err();
        assert_eq!(err.code(), "INV_VALIDATION_ERROR");
        let err = inventory.update_price(1, -1.0).unwrap_err();
        assert_eq!(err.code(), "INV_VALIDATION_ERROR");

        let widget = inventory.find_by_id(1).unwrap();
        assert_eq!(widget.quantity(), 10);
        assert_eq!(widget.price(), 2.50);
    }

    #[test]
    fn test_update_missing_id() {
        let mut inventory = sample();
        assert_eq!(
            inventory.update_quantity(5, 1),
            Err(InventoryError::NotFound(5))
        );
        assert_eq!(
            inventory.update_price(5, 1.0),
            Err(InventoryError::NotFound(5))
        );
        assert_eq!(inventory.rename(5, "x"), Err(InventoryError::NotFound(5)));
    }

    #[test]
    fn test_rename() {
        let mut inventory = sample();
        inventory.rename(2, "Gizmo").unwrap();
        assert_eq!(inventory.find_by_id(2).unwrap().name(), "Gizmo");
    }

    #[test]
    fn test_find_by_name_case_insensitive() {
        let inventory = sample();
        assert_eq!(names(inventory.find_by_name("get")), vec!["Gadget"]);
        assert_eq!(names(inventory.find_by_name("WID")), vec!["Widget"]);
        assert!(inventory.find_by_name("bolt").next().is_none());
    }

    #[test]
    fn test_find_by_name_blank_matches_all() {
        let inventory = sample();
        assert_eq!(inventory.find_by_name("").count(), 2);
        assert_eq!(inventory.find_by_name("   ").count(), 2);
    }

    #[test]
    fn test_find_by_name_non_ascii() {
        let mut inventory = Inventory::new();
        inventory.insert(Product::new(1, "Café Molido", 4, 7.0)).unwrap();
        assert_eq!(inventory.find_by_name("CAFÉ").count(), 1);
    }

    #[test]
    fn test_next_available_id() {
        let mut inventory = Inventory::new();
        assert_eq!(inventory.next_available_id(), 1);

        for id in [3, 7, 2] {
            inventory.insert(Product::new(id, "p", 1, 1.0)).unwrap();
        }
        assert_eq!(inventory.next_available_id(), 8);
    }

    #[test]
    fn test_list_all_in_id_order() {
        let mut inventory = Inventory::new();
        for id in [5, 1, 3] {
            inventory.insert(Product::new(id, "p", 1, 1.0)).unwrap();
        }
        let ids: Vec<u64> = inventory.list_all().map(Product::id).collect();
        assert_eq!(ids, vec![1, 3, 5]);
    }

    #[test]
    fn test_replace_all_clears_and_overwrites() {
        let mut inventory = sample();
        inventory.replace_all(vec![
            Product::new(9, "First", 1, 1.0),
            Product::new(9, "Second", 2, 2.0),
        ]);
        assert_eq!(inventory.len(), 1);
        assert_eq!(inventory.find_by_id(9).unwrap().name(), "Second");
        assert!(inventory.find_by_id(1).is_none());
    }
}
