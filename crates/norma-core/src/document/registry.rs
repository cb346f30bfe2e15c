//! In-memory document registry.

use std::collections::BTreeSet;

use tracing::debug;

use super::repository::MetadataRepository;
use crate::error::Result;

/// Authoritative in-memory set of known document names.
///
/// The registry is seeded from the persisted metadata store at session start
/// and updated as documents are ingested or removed. It is purely in-memory:
/// writing the persisted store is the backend's responsibility after a
/// successful ingest or removal, never the registry's.
///
/// Names are kept as a duplicate-free set; display order is lexicographic.
#[derive(Debug, Clone, Default)]
pub struct DocumentRegistry {
    names: BTreeSet<String>,
}

impl DocumentRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a registry from the persisted metadata store.
    ///
    /// Collects the distinct `document` names found in the store's records;
    /// records without a usable name are skipped. A store that does not
    /// exist yet yields an empty registry without error.
    ///
    /// # Errors
    ///
    /// Returns `CorruptMetadata` if the store exists but cannot be parsed.
    pub async fn load(repository: &dyn MetadataRepository) -> Result<Self> {
        let records = repository.load_records().await?;
        let names: BTreeSet<String> = records.into_iter().filter_map(|r| r.document).collect();
        debug!(count = names.len(), "loaded document registry");
        Ok(Self { names })
    }

    /// Inserts a document name. Idempotent: inserting a name that is already
    /// present is not an error. Returns true if the name was newly inserted.
    pub fn add(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    /// Removes a document name. Idempotent: removing an absent name is not
    /// an error. Returns true if the name was present.
    pub fn remove(&mut self, name: &str) -> bool {
        self.names.remove(name)
    }

    /// Returns true if the registry contains the given name.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Returns all document names in lexicographic order.
    pub fn names(&self) -> Vec<String> {
        self.names.iter().cloned().collect()
    }

    /// Returns the number of known documents.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if no documents are known.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
