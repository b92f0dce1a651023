//! Persistence for inventario
//!
//! The whole inventory is stored as a single JSON document. `serialize` and
//! `deserialize` convert between the store and the document; `save` and
//! `load` move the document to and from a file path supplied by the caller.
//!
//! # Failure policy
//!
//! - `save` returns a `PersistenceError`; the caller decides how to report it
//! - `save` refuses non-finite prices up front and leaves the old file alone
//! - `load` never fails: missing or unreadable files yield an empty inventory
//! - No atomic replace: an interrupted save can corrupt the target file

mod document;
mod errors;
mod file;

pub use document::{deserialize, serialize, InventoryDocument, ProductEntry};
pub use errors::{PersistenceError, PersistenceErrorCode, PersistenceResult};
pub use file::{load, save, LoadOutcome, LoadStatus, DEFAULT_FILE_NAME};
