use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EventpageError {
    // File errors
    #[error("NOT_FOUND: '{}' does not exist", .path.display())]
    NotFound { path: PathBuf },

    #[error("ALREADY_EXISTS: '{}' already exists, refusing to overwrite", .path.display())]
    AlreadyExists { path: PathBuf },

    // Config errors
    #[error("CONFIG_PARSE_ERROR: failed to parse '{}': {reason}", .path.display())]
    ConfigParse { path: PathBuf, reason: String },

    #[error(
        "CONFIG_VALIDATION_ERROR: missing or empty required field(s): {}",
        .missing_fields.join(", ")
    )]
    ConfigValidation { missing_fields: Vec<String> },

    // Artifact errors
    #[error("WRITE_ERROR: failed to write '{}': {reason}", .path.display())]
    Write { path: PathBuf, reason: String },

    #[error("ANCHOR_SET_INVALID: {reason}")]
    InvalidAnchorSet { reason: String },

    // IO errors
    #[error("IO_ERROR: '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Coarse classification of [`EventpageError`] for callers that branch on it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    AlreadyExists,
    Parse,
    Validation,
    Write,
    AnchorSet,
    Io,
}

impl EventpageError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EventpageError::NotFound { .. } => ErrorKind::NotFound,
            EventpageError::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            EventpageError::ConfigParse { .. } => ErrorKind::Parse,
            EventpageError::ConfigValidation { .. } => ErrorKind::Validation,
            EventpageError::Write { .. } => ErrorKind::Write,
            EventpageError::InvalidAnchorSet { .. } => ErrorKind::AnchorSet,
            EventpageError::Io { .. } => ErrorKind::Io,
        }
    }

    /// Map a read failure, keeping `NotFound` distinct from other I/O errors
    pub(crate) fn from_read(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        let path = path.into();
        if err.kind() == std::io::ErrorKind::NotFound {
            EventpageError::NotFound { path }
        } else {
            EventpageError::Io { path, source: err }
        }
    }
}

pub type Result<T> = std::result::Result<T, EventpageError>;
