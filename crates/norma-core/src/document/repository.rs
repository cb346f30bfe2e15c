//! Metadata repository trait.
//!
//! Defines the interface for reading the persisted document metadata store.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One record of the persisted metadata store.
///
/// The store is written by the backend during indexing; this core only reads
/// it. Records carry more fields than the core cares about, so everything
/// except the `document` name is dropped at this boundary. A record whose
/// `document` field is missing or malformed is represented as `None` rather
/// than failing the whole load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Name of the document this record belongs to, if any.
    #[serde(default)]
    pub document: Option<String>,
}

/// An abstract repository for reading persisted document metadata.
///
/// This trait decouples the document registry from the specific storage
/// mechanism (e.g., a JSON file, a database, a remote API).
#[async_trait]
pub trait MetadataRepository: Send + Sync {
    /// Loads all metadata records from the store.
    ///
    /// # Returns
    ///
    /// - `Ok(records)`: All records found; an empty vector if the store does
    ///   not exist yet
    /// - `Err(CorruptMetadata)`: The store exists but cannot be parsed
    /// - `Err(_)`: Another fault occurred during retrieval
    async fn load_records(&self) -> Result<Vec<DocumentRecord>>;
}
