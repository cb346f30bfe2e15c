//! Answer engine trait.
//!
//! Defines the contract of the retrieval/answer backend this core delegates
//! to. The engine's internals (document indexing, retrieval, answer
//! generation) are out of scope here; the session controller only consumes
//! this interface.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::session::{AnswerMode, DocumentScope};

/// Handle to a file the user wants indexed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentUpload {
    /// Original filename; becomes the document's registry name on success.
    pub name: String,
    /// Path to the uploaded content on disk.
    pub path: PathBuf,
}

/// An answer produced by the engine, with its source citations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// The answer text.
    pub text: String,
    /// Ordered source citations, possibly empty.
    pub sources: Vec<String>,
}

/// An abstract retrieval/answer backend.
///
/// Calls into the engine are the only latency-bearing steps in this core:
/// each one blocks the calling flow until the engine returns. There is no
/// streaming, no partial result, and no cancellation at this layer.
#[async_trait]
pub trait AnswerEngine: Send + Sync {
    /// Indexes an uploaded document.
    ///
    /// # Returns
    ///
    /// - `Ok(true)`: The document was indexed successfully
    /// - `Ok(false)`: The file held no readable content (a routine outcome,
    ///   not a fault)
    /// - `Err(_)`: A genuine fault occurred
    async fn ingest_document(&self, upload: &DocumentUpload) -> Result<bool>;

    /// Removes a document from the index.
    ///
    /// # Returns
    ///
    /// - `Ok(true)`: The document was removed
    /// - `Ok(false)`: The engine could not remove it
    /// - `Err(_)`: A genuine fault occurred
    async fn remove_document(&self, name: &str) -> Result<bool>;

    /// Answers a question against the indexed corpus.
    ///
    /// # Arguments
    ///
    /// * `question` - The user's question text
    /// * `mode` - Answer-style hint, passed through opaquely
    /// * `scope` - Restriction to one document or the entire corpus
    async fn answer_question(
        &self,
        question: &str,
        mode: AnswerMode,
        scope: &DocumentScope,
    ) -> Result<Answer>;
}
