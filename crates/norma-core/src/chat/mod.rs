//! Chat domain module.
//!
//! This module contains the chat-thread domain models and the in-memory
//! store that manages their lifecycle.
//!
//! # Module Structure
//!
//! - `model`: Chat thread domain models (`ChatThread`, `Message`)
//! - `store`: Thread lifecycle management (`ChatStore`)

mod model;
mod store;

// Re-export public API
pub use model::{ChatThread, Message, NEW_CHAT_TITLE, TITLE_MAX_CHARS};
pub use store::ChatStore;
