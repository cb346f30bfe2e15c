//! Session domain module.
//!
//! This module contains the session-level state types and the controller
//! that orchestrates every user action against the chat store, the document
//! registry, and the answer engine.
//!
//! # Module Structure
//!
//! - `state`: Session state types (`SessionState`, `View`, `AnswerMode`, `DocumentScope`)
//! - `controller`: Top-level state machine (`SessionController`)

mod controller;
mod state;

// Re-export public API
pub use controller::SessionController;
pub use state::{ALL_DOCUMENTS_LABEL, AnswerMode, DocumentScope, SessionState, View};
