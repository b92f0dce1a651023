//! Reading and writing inventory files.
//!
//! Files are UTF-8 JSON indented with four spaces. Writes go straight to the
//! target path; there is no atomic replace, so an interrupted save can leave
//! a truncated file behind.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use super::document::{deserialize, serialize, InventoryDocument};
use super::errors::{PersistenceError, PersistenceResult};
use crate::inventory::Inventory;
use crate::observability::{log_event_with_fields, Event};

/// Default inventory file name, relative to the working directory
pub const DEFAULT_FILE_NAME: &str = "inventario.json";

const INDENT: &[u8] = b"    ";

/// What `load` found at the path
#[derive(Debug)]
pub enum LoadStatus {
    /// File read and decoded; carries the number of products loaded
    Loaded(usize),
    /// No file at the path
    Missing,
    /// File exists but could not be read or decoded
    Failed(PersistenceError),
}

/// Result of `load`: always an inventory, plus how it was obtained
#[derive(Debug)]
pub struct LoadOutcome {
    pub inventory: Inventory,
    pub status: LoadStatus,
}

impl LoadOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self.status, LoadStatus::Loaded(_))
    }
}

/// Writes `inventory` to `path`, creating or truncating the file.
pub fn save(inventory: &Inventory, path: &Path) -> PersistenceResult<()> {
    let result = write_document(&serialize(inventory), path);

    let path_str = path.display().to_string();
    match &result {
        Ok(()) => {
            let records = inventory.len().to_string();
            log_event_with_fields(
                Event::InventorySaved,
                &[("path", path_str.as_str()), ("records", records.as_str())],
            );
        }
        Err(e) => {
            log_event_with_fields(
                Event::InventorySaveFailed,
                &[("code", e.code().code()), ("error", e.message()), ("path", path_str.as_str())],
            );
        }
    }

    result
}

/// Reads the inventory at `path`.
///
/// Never fails: a missing file or an unreadable one both yield an empty
/// inventory, with the reason in `status`.
pub fn load(path: &Path) -> LoadOutcome {
    let path_str = path.display().to_string();

    if !path.exists() {
        log_event_with_fields(Event::InventoryFileMissing, &[("path", path_str.as_str())]);
        return LoadOutcome {
            inventory: Inventory::new(),
            status: LoadStatus::Missing,
        };
    }

    match read_document(path) {
        Ok(document) => {
            let inventory = deserialize(document);
            let count = inventory.len();
            let records = count.to_string();
            log_event_with_fields(
                Event::InventoryLoaded,
                &[("path", path_str.as_str()), ("records", records.as_str())],
            );
            LoadOutcome {
                inventory,
                status: LoadStatus::Loaded(count),
            }
        }
        Err(e) => {
            log_event_with_fields(
                Event::InventoryLoadFailed,
                &[("code", e.code().code()), ("error", e.message()), ("path", path_str.as_str())],
            );
            LoadOutcome {
                inventory: Inventory::new(),
                status: LoadStatus::Failed(e),
            }
        }
    }
}

fn encode<W: Write>(document: &InventoryDocument, writer: W) -> serde_json::Result<()> {
    let mut serializer = Serializer::with_formatter(writer, PrettyFormatter::with_indent(INDENT));
    document.serialize(&mut serializer)
}

/// serde_json writes non-finite floats as `null`, which would not load back.
fn check_encodable(document: &InventoryDocument, path: &Path) -> PersistenceResult<()> {
    let mut entries = document.productos.iter().flatten();
    match entries.find(|entry| !entry.precio.is_finite()) {
        Some(entry) => Err(PersistenceError::non_finite_price(
            path,
            entry.id_producto,
            entry.precio,
        )),
        None => Ok(()),
    }
}

fn write_document(document: &InventoryDocument, path: &Path) -> PersistenceResult<()> {
    // Must run before File::create truncates the previous file
    check_encodable(document, path)?;

    let file = File::create(path)
        .map_err(|e| PersistenceError::io_error(path, "failed to create inventory file", e))?;
    let mut writer = BufWriter::new(file);

    encode(document, &mut writer).map_err(|e| PersistenceError::encode_error(path, e))?;
    writer
        .write_all(b"\n")
        .and_then(|()| writer.flush())
        .map_err(|e| PersistenceError::io_error(path, "failed to flush inventory file", e))
}

fn read_document(path: &Path) -> PersistenceResult<InventoryDocument> {
    let file = File::open(path)
        .map_err(|e| PersistenceError::io_error(path, "failed to open inventory file", e))?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| PersistenceError::parse_error(path, e))
}
