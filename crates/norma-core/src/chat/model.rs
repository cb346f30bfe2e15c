//! Chat thread domain models.
//!
//! This module contains the core entities of a conversation: the thread
//! itself and the question/answer messages it accumulates.

use serde::{Deserialize, Serialize};

/// Sentinel title carried by a thread until its first question arrives.
pub const NEW_CHAT_TITLE: &str = "New Chat";

/// Maximum number of characters carried into an auto-derived thread title.
pub const TITLE_MAX_CHARS: usize = 40;

/// A single question/answer exchange in a thread's history.
///
/// Messages are immutable once appended: the history of a thread only ever
/// grows, in chronological append order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// The user's question. Non-empty as stored; the input surface never
    /// submits blank questions.
    pub question: String,
    /// The backend-supplied answer.
    pub answer: String,
    /// Source citations backing the answer, possibly empty.
    pub sources: Vec<String>,
    /// Timestamp of answer receipt (ISO 8601 format).
    pub time: String,
}

/// One independent conversation with its own history and title.
///
/// A thread is created empty with the [`NEW_CHAT_TITLE`] sentinel; its title
/// is derived from the first question and set at most once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatThread {
    /// Unique thread identifier (UUID format)
    pub id: String,
    /// Human-readable thread title
    pub title: String,
    /// Ordered question/answer history, append-only
    pub messages: Vec<Message>,
    /// Timestamp when the thread was created (ISO 8601 format), immutable
    pub created_at: String,
}

impl ChatThread {
    /// Creates an empty thread with the sentinel title and the current time.
    pub fn new(id: String) -> Self {
        Self {
            id,
            title: NEW_CHAT_TITLE.to_string(),
            messages: Vec::new(),
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Returns true if the title has not yet been derived from a question.
    pub fn has_default_title(&self) -> bool {
        self.title == NEW_CHAT_TITLE
    }
}

/// Derives a thread title from its first question.
///
/// Truncation counts Unicode scalar values, not bytes, so a multi-byte
/// character is never split. No ellipsis is appended and internal whitespace
/// is preserved as typed.
pub(crate) fn derive_title(question: &str) -> String {
    question.chars().take(TITLE_MAX_CHARS).collect()
}
