use crate::ports::outbound::SbomReader;
use crate::shared::error::LicenseError;
use crate::shared::security::{validate_regular_file, MAX_SBOM_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading SBOM documents from disk
///
/// Symbolic links, non-regular files and files above the size limit are
/// refused before any byte is read.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomReader for FileSystemReader {
    fn read_sbom(&self, path: &Path) -> Result<Vec<u8>> {
        let read_error = |details: String| LicenseError::SbomReadError {
            path: path.to_path_buf(),
            details,
        };

        if !path.exists() {
            return Err(read_error("File does not exist".to_string()).into());
        }

        validate_regular_file(path, "SBOM", MAX_SBOM_SIZE)
            .map_err(|e| read_error(e.to_string()))?;

        Ok(fs::read(path).map_err(|e| read_error(e.to_string()))?)
    }
}
