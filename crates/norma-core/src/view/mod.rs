//! View projection module.
//!
//! This module derives render payloads from session state. It owns no state
//! of its own and performs no mutation.
//!
//! # Module Structure
//!
//! - `router`: Pure projection of session state to render payloads (`route`, `ViewModel`)

mod router;

// Re-export public API
pub use router::{ChatbotView, ViewModel, route};
