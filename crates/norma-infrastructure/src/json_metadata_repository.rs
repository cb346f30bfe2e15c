//! JSON-file implementation of the metadata repository.

use std::fs;
use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use norma_core::document::{DocumentRecord, MetadataRepository};
use norma_core::error::{NormaError, Result};

/// Reads the document metadata store the backend writes during indexing.
///
/// The store is a single JSON array of records; each record may carry a
/// `document` string field naming the document it belongs to, alongside
/// whatever indexing fields the backend keeps for itself. This repository is
/// read-only: the backend is the sole writer.
pub struct JsonMetadataRepository {
    path: PathBuf,
}

impl JsonMetadataRepository {
    /// Creates a repository reading from the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a repository reading from the platform default location.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the platform data directory cannot be
    /// determined.
    pub fn from_default_location() -> Result<Self> {
        Ok(Self::new(crate::paths::metadata_path()?))
    }
}

#[async_trait]
impl MetadataRepository for JsonMetadataRepository {
    /// Loads all metadata records from the store file.
    ///
    /// A store that does not exist yet, or is empty, yields no records
    /// without error. A store that exists but is not a parseable JSON array
    /// fails with `CorruptMetadata`. Records whose `document` field is
    /// missing or not a string are kept with `document: None` rather than
    /// failing the load.
    async fn load_records(&self) -> Result<Vec<DocumentRecord>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "metadata store not present yet");
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let value: serde_json::Value = serde_json::from_str(&content)
            .map_err(|e| NormaError::corrupt_metadata(e.to_string()))?;

        let records = value
            .as_array()
            .ok_or_else(|| NormaError::corrupt_metadata("expected a JSON array of records"))?;

        Ok(records
            .iter()
            .map(|record| DocumentRecord {
                document: record
                    .get("document")
                    .and_then(|v| v.as_str())
                    .map(str::to_string),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use norma_core::document::DocumentRegistry;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn store_with(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_missing_store_yields_no_records() {
        let repository = JsonMetadataRepository::new("/nonexistent/metadata.json");
        assert!(repository.load_records().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_store_yields_no_records() {
        let file = store_with("");
        let repository = JsonMetadataRepository::new(file.path());
        assert!(repository.load_records().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_records_round_trip_into_sorted_registry() {
        let file = store_with(
            r#"[{"document": "b", "pages": 12}, {"document": "a"}, {"document": "b"}]"#,
        );
        let repository = JsonMetadataRepository::new(file.path());

        let registry = DocumentRegistry::load(&repository).await.unwrap();
        assert_eq!(registry.names(), vec!["a".to_string(), "b".to_string()]);
    }

    #[tokio::test]
    async fn test_records_without_document_field_are_kept_as_none() {
        let file = store_with(r#"[{"document": "spec.pdf"}, {"chunks": 4}, {"document": 7}]"#);
        let repository = JsonMetadataRepository::new(file.path());

        let records = repository.load_records().await.unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].document.as_deref(), Some("spec.pdf"));
        assert_eq!(records[1].document, None);
        // A non-string `document` value is malformed, not fatal.
        assert_eq!(records[2].document, None);
    }

    #[tokio::test]
    async fn test_unparseable_store_is_corrupt_metadata() {
        let file = store_with("{ this is not json");
        let repository = JsonMetadataRepository::new(file.path());

        let err = repository.load_records().await.unwrap_err();
        assert!(err.is_corrupt_metadata());
    }

    #[tokio::test]
    async fn test_non_array_store_is_corrupt_metadata() {
        let file = store_with(r#"{"document": "spec.pdf"}"#);
        let repository = JsonMetadataRepository::new(file.path());

        let err = repository.load_records().await.unwrap_err();
        assert!(err.is_corrupt_metadata());
    }
}
