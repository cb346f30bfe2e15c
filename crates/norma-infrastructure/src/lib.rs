pub mod json_metadata_repository;
pub mod paths;

pub use json_metadata_repository::JsonMetadataRepository;
