use crate::shared::Result;
use std::path::{Path, PathBuf};

/// A license text found in the cache
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedLicense {
    path: PathBuf,
    extension: String,
}

impl CachedLicense {
    pub fn new(path: PathBuf, extension: impl Into<String>) -> Self {
        Self {
            path,
            extension: extension.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Extension the entry was stored with, `""` or starting with `.`
    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn read_content(&self) -> Result<Vec<u8>> {
        std::fs::read(&self.path).map_err(|e| {
            anyhow::anyhow!(
                "Failed to read cached license {}: {}",
                self.path.display(),
                e
            )
        })
    }
}

/// LicenseCache port for persisting license texts between runs
///
/// Entries are keyed by license name. There is at most one entry per name;
/// storing again replaces it.
pub trait LicenseCache: Send + Sync {
    /// Looks up the entry for `license_name`
    ///
    /// Missing entries (and anything that is not a regular file) are `None`,
    /// never an error.
    fn lookup(&self, license_name: &str) -> Option<CachedLicense>;

    /// Stores `content` as the entry for `license_name`
    ///
    /// # Errors
    /// Returns an error only for genuine I/O failures (permissions, disk full)
    /// or names that cannot be used as a file name.
    fn store(&self, license_name: &str, extension: &str, content: &[u8]) -> Result<()>;
}

impl<T: LicenseCache + ?Sized> LicenseCache for Box<T> {
    fn lookup(&self, license_name: &str) -> Option<CachedLicense> {
        (**self).lookup(license_name)
    }

    fn store(&self, license_name: &str, extension: &str, content: &[u8]) -> Result<()> {
        (**self).store(license_name, extension, content)
    }
}
