use crate::shared::Result;
use std::path::Path;

/// SbomReader port for loading the raw SBOM document
pub trait SbomReader {
    /// Reads the SBOM at `path`
    ///
    /// # Errors
    /// Returns an error if the file does not exist, is not a regular file,
    /// is too large, or cannot be read.
    fn read_sbom(&self, path: &Path) -> Result<Vec<u8>>;
}
