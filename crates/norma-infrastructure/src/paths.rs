//! Storage path resolution.

use std::path::PathBuf;

use norma_core::error::{NormaError, Result};

/// Directory name under the platform data directory.
const APP_DIR: &str = "norma";

/// File name of the document metadata store written by the backend.
const METADATA_FILE: &str = "metadata.json";

/// Resolves the default location of the document metadata store.
///
/// - macOS: `~/Library/Application Support/norma/metadata.json`
/// - Linux: `~/.local/share/norma/metadata.json`
/// - Windows: `%APPDATA%\norma\metadata.json`
///
/// # Errors
///
/// Returns an IO error if the platform data directory cannot be determined.
pub fn metadata_path() -> Result<PathBuf> {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR).join(METADATA_FILE))
        .ok_or_else(|| NormaError::io("could not determine the user data directory"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_path_ends_with_store_file() {
        let path = metadata_path().unwrap();
        assert!(path.ends_with("norma/metadata.json"));
    }
}
