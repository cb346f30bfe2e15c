//! Document domain module.
//!
//! This module contains the in-memory document registry and the repository
//! interface through which the persisted metadata store is read.
//!
//! # Module Structure
//!
//! - `registry`: Authoritative in-memory set of known documents (`DocumentRegistry`)
//! - `repository`: Repository trait for the persisted metadata store

mod registry;
mod repository;

// Re-export public API
pub use registry::DocumentRegistry;
pub use repository::{DocumentRecord, MetadataRepository};
