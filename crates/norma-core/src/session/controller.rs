//! Top-level session controller.

use std::sync::Arc;

use tracing::{info, warn};

use super::state::{AnswerMode, DocumentScope, SessionState, View};
use crate::chat::ChatStore;
use crate::document::{DocumentRegistry, MetadataRepository};
use crate::engine::{AnswerEngine, DocumentUpload};
use crate::error::{NormaError, Result};

/// The session's top-level state machine.
///
/// `SessionController` exclusively owns the [`SessionState`], the
/// [`ChatStore`], and the [`DocumentRegistry`] for the lifetime of one
/// session, and orchestrates every user action against them and the answer
/// engine. It has no terminal state; every view accepts every action.
///
/// Each action runs to completion before the next is accepted. The only
/// suspension points are the engine-delegating operations, which await the
/// engine's response. No failure mutates state: an operation either completes
/// fully or leaves the session exactly as it was.
pub struct SessionController {
    /// The session's navigation and configuration state
    state: SessionState,
    /// All chat threads of this session
    chats: ChatStore,
    /// Known documents, seeded from the persisted metadata store
    documents: DocumentRegistry,
    /// The retrieval/answer backend
    engine: Arc<dyn AnswerEngine>,
}

impl SessionController {
    /// Creates a controller for a new session, seeding the document registry
    /// from the persisted metadata store.
    ///
    /// An unreadable store degrades to an empty document set with a warning;
    /// it never aborts session startup.
    pub async fn new(engine: Arc<dyn AnswerEngine>, metadata: &dyn MetadataRepository) -> Self {
        let documents = match DocumentRegistry::load(metadata).await {
            Ok(registry) => registry,
            Err(e) => {
                warn!(error = %e, "starting with an empty document set");
                DocumentRegistry::new()
            }
        };

        Self {
            state: SessionState::default(),
            chats: ChatStore::new(),
            documents,
            engine,
        }
    }

    // ============================================================================
    // Navigation and chat lifecycle
    // ============================================================================

    /// Switches to the given view. No other side effects.
    pub fn navigate(&mut self, view: View) {
        self.state.view = view;
    }

    /// Creates a new chat thread, activates it, and switches to the chatbot
    /// view. Returns the new thread's id.
    pub fn start_new_chat(&mut self) -> String {
        let id = self.chats.create_thread();
        self.state.active_chat_id = Some(id.clone());
        self.state.view = View::Chatbot;
        info!(chat_id = %id, "started new chat");
        id
    }

    /// Activates an existing chat thread and switches to the chatbot view.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no thread has the given id; the active chat and
    /// view are left unchanged. Under correct UI gating this cannot happen,
    /// but it must fail cleanly rather than corrupt state.
    pub fn select_chat(&mut self, id: &str) -> Result<()> {
        self.chats.select_thread(id)?;
        self.state.active_chat_id = Some(id.to_string());
        self.state.view = View::Chatbot;
        Ok(())
    }

    // ============================================================================
    // Document lifecycle
    // ============================================================================

    /// Ingests an uploaded document through the engine and registers its name
    /// on success.
    ///
    /// # Errors
    ///
    /// Returns `EmptyOrUnreadable` if the engine found no readable content;
    /// the registry is not mutated. Engine faults are propagated as-is.
    pub async fn ingest_document(&mut self, upload: &DocumentUpload) -> Result<()> {
        if self.engine.ingest_document(upload).await? {
            self.documents.add(upload.name.clone());
            info!(document = %upload.name, "document indexed");
            Ok(())
        } else {
            Err(NormaError::EmptyOrUnreadable {
                name: upload.name.clone(),
            })
        }
    }

    /// Removes a document through the engine and unregisters its name on
    /// success. Removing a name the registry no longer holds is a no-op, not
    /// an error.
    ///
    /// A successful removal of the document the scope currently points at
    /// resets the scope to [`DocumentScope::AllDocuments`], keeping the
    /// scope-refers-to-a-known-document invariant intact.
    ///
    /// # Errors
    ///
    /// Returns `RemovalFailed` if the engine reported failure; the registry
    /// and scope are not mutated. Engine faults are propagated as-is.
    pub async fn remove_document(&mut self, name: &str) -> Result<()> {
        if !self.engine.remove_document(name).await? {
            return Err(NormaError::RemovalFailed {
                name: name.to_string(),
            });
        }

        self.documents.remove(name);
        if self.state.scope.document() == Some(name) {
            self.state.scope = DocumentScope::AllDocuments;
        }
        info!(document = %name, "document removed");
        Ok(())
    }

    // ============================================================================
    // Answer configuration
    // ============================================================================

    /// Sets the answer mode. Total; always succeeds.
    pub fn set_mode(&mut self, mode: AnswerMode) {
        self.state.mode = mode;
    }

    /// Sets the document scope.
    ///
    /// A non-corpus scope must name a current registry member; the selection
    /// surface enforces that by offering only current members, so it is not
    /// re-validated here.
    pub fn set_scope(&mut self, scope: DocumentScope) {
        self.state.scope = scope;
    }

    // ============================================================================
    // Question answering
    // ============================================================================

    /// Submits a question on the active chat thread.
    ///
    /// Asks the engine with the current mode and scope, then appends the
    /// question/answer pair to the active thread. This call blocks the
    /// session until the engine returns.
    ///
    /// # Errors
    ///
    /// Returns `NoActiveChat` if no thread is active; neither the engine nor
    /// the chat store is touched. The caller should block submission and
    /// prompt the user to start a chat first. Engine faults are propagated
    /// as-is, leaving the thread unchanged.
    pub async fn submit_question(&mut self, text: &str) -> Result<()> {
        let chat_id = self
            .state
            .active_chat_id
            .clone()
            .ok_or(NormaError::NoActiveChat)?;

        let answer = self
            .engine
            .answer_question(text, self.state.mode, &self.state.scope)
            .await?;

        self.chats
            .append_message(&chat_id, text, &answer.text, answer.sources)?;
        info!(chat_id = %chat_id, "question answered");
        Ok(())
    }

    // ============================================================================
    // Presentation boundary
    // ============================================================================

    /// Returns the current session state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Returns the session's chat store.
    pub fn chats(&self) -> &ChatStore {
        &self.chats
    }

    /// Returns the session's document registry.
    pub fn documents(&self) -> &DocumentRegistry {
        &self.documents
    }

    /// Recomputes the render payload for the current state.
    ///
    /// Called by the presentation layer after every action: state changed,
    /// view recomputed.
    pub fn view_model(&self) -> crate::view::ViewModel {
        crate::view::route(&self.state, &self.chats, &self.documents)
    }
}
