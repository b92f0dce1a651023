//! Observable events for inventario
//!
//! Events are explicit and typed. Each one carries its default severity.

use std::fmt;

use super::logger::Severity;

/// Observable events in an inventory session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Session lifecycle
    /// Interactive session begins
    SessionStart,
    /// Interactive session ends
    SessionEnd,
    /// Configuration resolved
    ConfigLoaded,

    // Persistence
    /// Inventory file read and decoded
    InventoryLoaded,
    /// Inventory file does not exist, starting empty
    InventoryFileMissing,
    /// Inventory file could not be read or decoded
    InventoryLoadFailed,
    /// Inventory written to disk
    InventorySaved,
    /// Inventory could not be written
    InventorySaveFailed,

    // Store mutations
    /// Product inserted
    ProductAdded,
    /// Product removed
    ProductRemoved,
    /// Product quantity or price changed
    ProductUpdated,
    /// Store operation rejected
    OperationRejected,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::SessionStart => "SESSION_START",
            Event::SessionEnd => "SESSION_END",
            Event::ConfigLoaded => "CONFIG_LOADED",

            Event::InventoryLoaded => "INVENTORY_LOADED",
            Event::InventoryFileMissing => "INVENTORY_FILE_MISSING",
            Event::InventoryLoadFailed => "INVENTORY_LOAD_FAILED",
            Event::InventorySaved => "INVENTORY_SAVED",
            Event::InventorySaveFailed => "INVENTORY_SAVE_FAILED",

            Event::ProductAdded => "PRODUCT_ADDED",
            Event::ProductRemoved => "PRODUCT_REMOVED",
            Event::ProductUpdated => "PRODUCT_UPDATED",
            Event::OperationRejected => "OPERATION_REJECTED",
        }
    }

    /// Severity the event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::InventoryLoadFailed | Event::InventorySaveFailed => Severity::Error,
            Event::InventoryFileMissing | Event::OperationRejected => Severity::Warn,
            Event::ProductAdded | Event::ProductRemoved | Event::ProductUpdated => {
                Severity::Trace
            }
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
