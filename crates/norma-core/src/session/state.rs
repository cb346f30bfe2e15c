//! Session state types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Display label of the whole-corpus document scope.
pub const ALL_DOCUMENTS_LABEL: &str = "All Documents";

/// The screen the session is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum View {
    /// The conversation screen. This is where a session starts.
    #[default]
    Chatbot,
    /// Document and chat counts at a glance.
    Dashboard,
    /// The list of indexed documents.
    Documents,
    /// Answer mode and document scope configuration.
    Settings,
}

/// Answer-style hint passed opaquely to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AnswerMode {
    #[default]
    Auto,
    Strict,
    Assist,
}

/// Restriction of question-answering to one document or the entire corpus.
///
/// When not [`DocumentScope::AllDocuments`], the named document must be a
/// current registry member at the moment it is selected. The selection
/// surface enforces that by only offering current members.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum DocumentScope {
    /// Answer against the entire corpus.
    #[default]
    AllDocuments,
    /// Answer against one named document.
    Document(String),
}

impl DocumentScope {
    /// Returns the named document, if this scope is restricted to one.
    pub fn document(&self) -> Option<&str> {
        match self {
            Self::AllDocuments => None,
            Self::Document(name) => Some(name),
        }
    }
}

impl fmt::Display for DocumentScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllDocuments => f.write_str(ALL_DOCUMENTS_LABEL),
            Self::Document(name) => f.write_str(name),
        }
    }
}

/// The per-session state the controller owns.
///
/// One value exists per session, exclusively owned by its
/// [`SessionController`](super::SessionController); there is no process-wide
/// mutable singleton.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionState {
    /// The screen currently shown.
    pub view: View,
    /// Id of the active chat thread, if one is selected. Always refers to an
    /// existing thread in the session's chat store.
    pub active_chat_id: Option<String>,
    /// Current answer mode.
    pub mode: AnswerMode,
    /// Current document scope.
    pub scope: DocumentScope,
}
