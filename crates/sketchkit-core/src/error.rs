//! Error handling for SketchKit
//!
//! Provides the error types for each layer of the drawing engine:
//! - Scene errors (rejected structural edits, empty clipboard)
//! - Persistence errors (malformed drawings, storage failures)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Scene error type
///
/// Raised by scene-store and clipboard operations that cannot be applied.
/// The editor treats every variant as a silent no-op: these arise from
/// ordinary interaction races such as clicking on empty canvas.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// The operation does not apply to the current scene
    #[error("Invalid operation: {reason}")]
    InvalidOperation {
        /// Why the operation was rejected.
        reason: String,
    },

    /// Paste was requested with nothing on the clipboard
    #[error("Clipboard is empty")]
    EmptyClipboard,
}

impl SceneError {
    /// Create an `InvalidOperation` from a reason
    pub fn invalid(reason: impl Into<String>) -> Self {
        SceneError::InvalidOperation {
            reason: reason.into(),
        }
    }
}

/// Persistence error type
///
/// Represents failures while decoding a stored drawing or talking to the
/// storage collaborator that holds it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// The stored drawing is structurally invalid
    #[error("Malformed drawing data: {reason}")]
    MalformedData {
        /// What was wrong with the input.
        reason: String,
    },

    /// The storage backend failed to read or write a slot
    #[error("Storage error: {reason}")]
    Storage {
        /// The reason reported by the backend.
        reason: String,
    },

    /// A scene could not be encoded as text
    #[error("Encoding error: {reason}")]
    Encoding {
        /// The encoder's message.
        reason: String,
    },
}

impl PersistenceError {
    /// Create a `MalformedData` error from a reason
    pub fn malformed(reason: impl Into<String>) -> Self {
        PersistenceError::MalformedData {
            reason: reason.into(),
        }
    }

    /// Create a `Storage` error from a reason
    pub fn storage(reason: impl Into<String>) -> Self {
        PersistenceError::Storage {
            reason: reason.into(),
        }
    }

    /// Create an `Encoding` error from a reason
    pub fn encoding(reason: impl Into<String>) -> Self {
        PersistenceError::Encoding {
            reason: reason.into(),
        }
    }
}

/// Main error type for SketchKit
///
/// Wraps all the specific error types into one enum.
#[derive(Error, Debug)]
pub enum Error {
    /// Scene error
    #[error(transparent)]
    Scene(#[from] SceneError),

    /// Persistence error
    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this error means a stored drawing could not be decoded
    pub fn is_malformed_data(&self) -> bool {
        matches!(
            self,
            Error::Persistence(PersistenceError::MalformedData { .. })
        )
    }

    /// Check if this is a scene error
    pub fn is_scene_error(&self) -> bool {
        matches!(self, Error::Scene(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
