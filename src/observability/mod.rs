//! Observability for inventario
//!
//! Structured JSON logging of typed lifecycle events. Logging is read-only:
//! it never changes the outcome of an operation and never fails the caller.
//!
//! ```ignore
//! use inventario::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::InventorySaved, &[("records", "3")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a lifecycle event at its default severity
pub fn log_event(event: Event) {
    Logger::log(event.severity(), event.as_str(), &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
