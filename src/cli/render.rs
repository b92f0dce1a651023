//! Text rendering for the menu and one-shot commands.

use crate::inventory::{Inventory, InventoryError, Product};
use crate::persistence::{LoadOutcome, LoadStatus, PersistenceError};

const WIDE_RULE: usize = 60;
const MENU_RULE: usize = 50;

pub fn menu() -> Vec<String> {
    let rule = "=".repeat(MENU_RULE);
    vec![
        String::new(),
        rule.clone(),
        "     GESTIÓN DE INVENTARIO - TIENDA".to_string(),
        rule.clone(),
        "1. Agregar producto".to_string(),
        "2. Eliminar producto por ID".to_string(),
        "3. Actualizar cantidad".to_string(),
        "4. Actualizar precio".to_string(),
        "5. Buscar por nombre".to_string(),
        "6. Buscar por ID".to_string(),
        "7. Mostrar todos los productos".to_string(),
        "8. Guardar en archivo".to_string(),
        "9. Cargar desde archivo".to_string(),
        "0. Salir".to_string(),
        rule,
    ]
}

/// Full listing with banner and total, or the empty notice.
pub fn listing(inventory: &Inventory) -> Vec<String> {
    if inventory.is_empty() {
        return vec![String::new(), "El inventario está vacío".to_string()];
    }

    let rule = "=".repeat(WIDE_RULE);
    let mut lines = vec![
        String::new(),
        rule.clone(),
        "             INVENTARIO COMPLETO".to_string(),
        rule.clone(),
    ];
    lines.extend(inventory.list_all().map(Product::describe));
    lines.push(rule.clone());
    lines.push(format!("Total de productos: {}", inventory.len()));
    lines.push(rule);
    lines
}

pub fn search_results<'a>(results: impl IntoIterator<Item = &'a Product>) -> Vec<String> {
    let described: Vec<String> = results.into_iter().map(Product::describe).collect();
    if described.is_empty() {
        return vec!["No se encontraron productos".to_string()];
    }

    let mut lines = vec![
        String::new(),
        format!("Se encontraron {} productos:", described.len()),
    ];
    lines.extend(described);
    lines
}

pub fn found(product: Option<&Product>) -> Vec<String> {
    match product {
        Some(product) => vec![
            String::new(),
            "Producto encontrado:".to_string(),
            product.describe(),
        ],
        None => vec!["Producto no encontrado".to_string()],
    }
}

pub fn inventory_error(error: &InventoryError) -> String {
    match error {
        InventoryError::Validation { field: "price", .. } => {
            "Error: El precio no puede ser negativo".to_string()
        }
        InventoryError::Validation { .. } => {
            "Error: La cantidad no puede ser negativa".to_string()
        }
        InventoryError::DuplicateId(id) => {
            format!("Error: Ya existe un producto con ID {}", id)
        }
        InventoryError::NotFound(id) => {
            format!("Error: No existe producto con ID {}", id)
        }
    }
}

pub fn saved(path: &str) -> String {
    format!("Inventario guardado en '{}'", path)
}

pub fn save_failed(error: &PersistenceError) -> String {
    format!("Error al guardar: {}", error)
}

pub fn load_outcome(outcome: &LoadOutcome, path: &str) -> String {
    match &outcome.status {
        LoadStatus::Loaded(count) => format!("Inventario cargado. {} productos.", count),
        LoadStatus::Missing => format!("No existe '{}'. Se creará uno nuevo.", path),
        LoadStatus::Failed(e) => format!("Error al cargar: {}", e),
    }
}
