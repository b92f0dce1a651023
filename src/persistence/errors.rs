//! Persistence error types
//!
//! Error codes:
//! - INV_PERSISTENCE_IO_ERROR: file could not be opened, read or written
//! - INV_PERSISTENCE_PARSE_ERROR: file contents are not a valid document
//! - INV_PERSISTENCE_ENCODE_ERROR: inventory could not be encoded (e.g. a
//!   non-finite price)
//!
//! None of these are fatal. Save reports failure, load degrades to an empty
//! inventory.

use std::error::Error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Persistence error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistenceErrorCode {
    IoError,
    ParseError,
    EncodeError,
}

impl PersistenceErrorCode {
    pub fn code(&self) -> &'static str {
        match self {
            PersistenceErrorCode::IoError => "INV_PERSISTENCE_IO_ERROR",
            PersistenceErrorCode::ParseError => "INV_PERSISTENCE_PARSE_ERROR",
            PersistenceErrorCode::EncodeError => "INV_PERSISTENCE_ENCODE_ERROR",
        }
    }
}

impl fmt::Display for PersistenceErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Failure while saving or loading an inventory file
#[derive(Debug)]
pub struct PersistenceError {
    code: PersistenceErrorCode,
    message: String,
    path: PathBuf,
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

impl PersistenceError {
    pub fn io_error(path: &Path, message: impl Into<String>, source: io::Error) -> Self {
        Self {
            code: PersistenceErrorCode::IoError,
            message: message.into(),
            path: path.to_path_buf(),
            source: Some(Box::new(source)),
        }
    }

    pub fn parse_error(path: &Path, source: serde_json::Error) -> Self {
        Self {
            code: PersistenceErrorCode::ParseError,
            message: format!("invalid inventory document: {}", source),
            path: path.to_path_buf(),
            source: Some(Box::new(source)),
        }
    }

    pub fn encode_error(path: &Path, source: serde_json::Error) -> Self {
        // serde_json reports writer failures as io-category errors
        let code = if source.is_io() {
            PersistenceErrorCode::IoError
        } else {
            PersistenceErrorCode::EncodeError
        };
        Self {
            code,
            message: format!("failed to write inventory: {}", source),
            path: path.to_path_buf(),
            source: Some(Box::new(source)),
        }
    }

    /// A price JSON cannot represent. Raised before the file is touched.
    pub fn non_finite_price(path: &Path, id: u64, price: f64) -> Self {
        Self {
            code: PersistenceErrorCode::EncodeError,
            message: format!("product {} has a non-finite price ({})", id, price),
            path: path.to_path_buf(),
            source: None,
        }
    }

    pub fn code(&self) -> PersistenceErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} ({})",
            self.code,
            self.message,
            self.path.display()
        )
    }
}

impl Error for PersistenceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}

/// Result type for persistence operations
pub type PersistenceResult<T> = Result<T, PersistenceError>;
