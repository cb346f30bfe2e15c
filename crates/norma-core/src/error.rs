//! Error types for the Norma application.

use thiserror::Error;

/// A shared error type for the entire Norma application.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait. Every variant is
/// user-presentable; none of them is fatal to the session, and every failure
/// leaves the session state exactly as it was before the failing operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormaError {
    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// A question was submitted while no chat thread is active
    #[error("No active chat; start a new chat before asking a question")]
    NoActiveChat,

    /// Document ingestion produced no readable content
    #[error("No readable content found in '{name}'")]
    EmptyOrUnreadable { name: String },

    /// The backend reported that it could not remove the document
    #[error("Failed to remove document '{name}'")]
    RemovalFailed { name: String },

    /// The persisted document metadata store exists but cannot be parsed
    #[error("Document metadata store is unreadable: {message}")]
    CorruptMetadata { message: String },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "JSON", "TOML", etc.
        message: String,
    },

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl NormaError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a CorruptMetadata error
    pub fn corrupt_metadata(message: impl Into<String>) -> Self {
        Self::CorruptMetadata {
            message: message.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a CorruptMetadata error
    pub fn is_corrupt_metadata(&self) -> bool {
        matches!(self, Self::CorruptMetadata { .. })
    }

    /// Check if this error is recoverable by repeating the action after the
    /// user fixes its cause (as opposed to a UI-sync or internal fault).
    pub fn is_user_recoverable(&self) -> bool {
        matches!(
            self,
            Self::NoActiveChat | Self::EmptyOrUnreadable { .. } | Self::RemovalFailed { .. }
        )
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for NormaError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for NormaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

/// Conversion from anyhow::Error (for backend collaborators built on anyhow)
impl From<anyhow::Error> for NormaError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// A type alias for `Result<T, NormaError>`.
pub type Result<T> = std::result::Result<T, NormaError>;
