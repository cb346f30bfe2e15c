pub mod chat;
pub mod document;
pub mod engine;
pub mod error;
pub mod session;
pub mod view;

// Re-export common error type
pub use error::NormaError;
