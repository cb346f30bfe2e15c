//! In-memory chat thread store.

use std::collections::HashMap;

use uuid::Uuid;

use super::model::{ChatThread, Message, derive_title};
use crate::error::{NormaError, Result};

/// Owns every chat thread of one session and manages their lifecycle.
///
/// `ChatStore` is responsible for:
/// - Creating new threads with process-unique ids
/// - Looking threads up as a precondition for activation
/// - Appending question/answer messages and deriving titles
/// - Listing threads in reverse-creation order for display
///
/// The store is exclusively owned by one session's controller; there is no
/// concurrent mutation within a session.
#[derive(Debug, Default)]
pub struct ChatStore {
    /// All threads of the session, keyed by thread id
    threads: HashMap<String, ChatThread>,
    /// Thread ids in creation order, oldest first
    order: Vec<String>,
}

impl ChatStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new empty thread and returns its id.
    ///
    /// The id is a fresh UUID, unique against every id this store has ever
    /// issued. The thread starts with no messages, the sentinel title, and
    /// the current timestamp.
    pub fn create_thread(&mut self) -> String {
        let id = Uuid::new_v4().to_string();
        self.threads.insert(id.clone(), ChatThread::new(id.clone()));
        self.order.push(id.clone());
        id
    }

    /// Checks that a thread exists, as a precondition for selecting it.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no thread has the given id. Has no side effect
    /// in either case.
    pub fn select_thread(&self, id: &str) -> Result<()> {
        if self.threads.contains_key(id) {
            Ok(())
        } else {
            Err(NormaError::not_found("chat", id))
        }
    }

    /// Returns the thread with the given id, if any.
    pub fn get(&self, id: &str) -> Option<&ChatThread> {
        self.threads.get(id)
    }

    /// Appends a question/answer message to a thread.
    ///
    /// If the thread's title is still the sentinel, it is set to the question
    /// truncated to 40 characters; subsequent appends leave it untouched.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no thread has the given id; the store is left
    /// unchanged.
    pub fn append_message(
        &mut self,
        id: &str,
        question: &str,
        answer: &str,
        sources: Vec<String>,
    ) -> Result<()> {
        let thread = self
            .threads
            .get_mut(id)
            .ok_or_else(|| NormaError::not_found("chat", id))?;

        if thread.has_default_title() {
            thread.title = derive_title(question);
        }

        thread.messages.push(Message {
            question: question.to_string(),
            answer: answer.to_string(),
            sources,
            time: chrono::Utc::now().to_rfc3339(),
        });

        Ok(())
    }

    /// Lists all threads as `(id, thread)` pairs, most recently created first.
    ///
    /// The listing is recomputed from the current map on every call; it is
    /// not a live iterator.
    pub fn list_threads(&self) -> Vec<(&str, &ChatThread)> {
        self.order
            .iter()
            .rev()
            .filter_map(|id| self.threads.get(id).map(|t| (id.as_str(), t)))
            .collect()
    }

    /// Returns the number of threads in the store.
    pub fn len(&self) -> usize {
        self.threads.len()
    }

    /// Returns true if the store holds no threads.
    pub fn is_empty(&self) -> bool {
        self.threads.is_empty()
    }
}
