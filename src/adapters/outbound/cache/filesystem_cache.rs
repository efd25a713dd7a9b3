use crate::ports::outbound::{CachedLicense, LicenseCache};
use crate::shared::error::LicenseError;
use crate::shared::security::validate_file_name_component;
use crate::shared::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// File in the base directory recording which file belongs to which license
const INDEX_FILE_NAME: &str = ".license-index.json";

/// License name to stored file name, persisted as JSON
#[derive(Debug, Default, Serialize, Deserialize)]
struct CacheIndex {
    #[serde(default)]
    entries: BTreeMap<String, String>,
}

impl CacheIndex {
    fn owns(&self, file_name: &str) -> bool {
        self.entries.values().any(|owned| owned == file_name)
    }
}

/// FilesystemCache adapter storing license texts under a base directory
///
/// An entry for license `name` is the file `<base>/<name><extension>`, where
/// the extension is whatever the fetch reported (possibly empty). Every store
/// records the file in an index, so a name never picks up or deletes a file
/// written for another name that merely shares its prefix. Files placed in
/// the directory by hand are still found when no index record claims them.
///
/// The base directory is created on the first store. Concurrent runs sharing
/// a base directory are not coordinated.
#[derive(Debug, Clone)]
pub struct FilesystemCache {
    base_dir: PathBuf,
}

impl FilesystemCache {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn index_path(&self) -> PathBuf {
        self.base_dir.join(INDEX_FILE_NAME)
    }

    /// A missing or unreadable index is treated as empty; the next store
    /// rewrites it.
    fn load_index(&self) -> CacheIndex {
        fs::read(self.index_path())
            .ok()
            .and_then(|bytes| serde_json::from_slice(&bytes).ok())
            .unwrap_or_default()
    }

    fn save_index(&self, index: &CacheIndex) -> Result<()> {
        let content = serde_json::to_vec_pretty(index).map_err(|e| {
            LicenseError::CacheWriteError {
                path: self.index_path(),
                details: e.to_string(),
            }
        })?;
        self.write_atomically(&self.index_path(), &content)
    }

    /// The file the index records for `license_name`
    fn indexed_entry(&self, index: &CacheIndex, license_name: &str) -> Option<CachedLicense> {
        let file_name = index.entries.get(license_name)?;
        let extension = file_name.strip_prefix(license_name)?;
        let path = self.base_dir.join(file_name);
        path.is_file()
            .then(|| CachedLicense::new(path, extension.to_string()))
    }

    /// Unindexed files that look like an entry for `license_name`: the exact
    /// `<name>` file first, then `<name>.<ext>` files in sorted order
    fn probed_entry(&self, index: &CacheIndex, license_name: &str) -> Option<CachedLicense> {
        let unclaimed = |file_name: &str| file_name != INDEX_FILE_NAME && !index.owns(file_name);

        let exact = self.base_dir.join(license_name);
        if unclaimed(license_name) && exact.is_file() {
            return Some(CachedLicense::new(exact, ""));
        }

        let dir = fs::read_dir(&self.base_dir).ok()?;
        let mut candidates: Vec<CachedLicense> = dir
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| {
                let file_name = entry.file_name().into_string().ok()?;
                let extension = file_name.strip_prefix(license_name)?;
                if !is_stored_extension(extension) || !unclaimed(&file_name) {
                    return None;
                }
                let path = entry.path();
                path.is_file()
                    .then(|| CachedLicense::new(path, extension.to_string()))
            })
            .collect();
        candidates.sort_by(|a, b| a.path().cmp(b.path()));
        candidates.into_iter().next()
    }

    fn ensure_base_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.base_dir).map_err(|e| {
            LicenseError::CacheWriteError {
                path: self.base_dir.clone(),
                details: format!("Failed to create cache directory: {}", e),
            }
            .into()
        })
    }

    /// Writes through a temp file in the base directory, then renames it
    fn write_atomically(&self, target: &Path, content: &[u8]) -> Result<()> {
        let write_error = |details: String| LicenseError::CacheWriteError {
            path: target.to_path_buf(),
            details,
        };

        let mut temp_file = NamedTempFile::new_in(&self.base_dir)
            .map_err(|e| write_error(format!("Failed to create temporary file: {}", e)))?;
        temp_file
            .write_all(content)
            .map_err(|e| write_error(e.to_string()))?;
        temp_file
            .persist(target)
            .map_err(|e| write_error(e.error.to_string()))?;
        Ok(())
    }
}

/// An extension written by `store`: a dot followed by one alphanumeric
/// segment with at least one letter. Keeps `Apache-2` from matching a file
/// named `Apache-2.0`.
fn is_stored_extension(extension: &str) -> bool {
    let Some(segment) = extension.strip_prefix('.') else {
        return false;
    };
    !segment.is_empty()
        && segment.chars().all(|c| c.is_ascii_alphanumeric())
        && segment.chars().any(|c| c.is_ascii_alphabetic())
}

fn normalize_extension(extension: &str) -> String {
    match extension.trim() {
        "" => String::new(),
        ext if ext.starts_with('.') => ext.to_string(),
        ext => format!(".{}", ext),
    }
}

impl LicenseCache for FilesystemCache {
    fn lookup(&self, license_name: &str) -> Option<CachedLicense> {
        if validate_file_name_component(license_name).is_err() {
            return None;
        }
        let index = self.load_index();
        self.indexed_entry(&index, license_name)
            .or_else(|| self.probed_entry(&index, license_name))
    }

    fn store(&self, license_name: &str, extension: &str, content: &[u8]) -> Result<()> {
        validate_file_name_component(license_name)?;
        let file_name = format!("{}{}", license_name, normalize_extension(extension));
        if file_name == INDEX_FILE_NAME {
            return Err(LicenseError::InvalidLicenseName {
                name: license_name.to_string(),
                reason: "Name collides with the cache index file".to_string(),
            }
            .into());
        }
        self.ensure_base_dir()?;

        let target = self.base_dir.join(&file_name);
        self.write_atomically(&target, content)?;

        let mut index = self.load_index();
        let previous = index
            .entries
            .insert(license_name.to_string(), file_name.clone());
        // A record of another name pointing at the file just overwritten is stale.
        index
            .entries
            .retain(|name, owned| name == license_name || *owned != file_name);

        // One entry per name: drop the copy indexed under another extension.
        if let Some(stale) = previous.filter(|stale| *stale != file_name) {
            let stale_path = self.base_dir.join(&stale);
            match fs::remove_file(&stale_path) {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => {
                    return Err(LicenseError::CacheWriteError {
                        path: stale_path,
                        details: format!("Failed to remove stale cache entry: {}", e),
                    }
                    .into())
                }
            }
        }

        self.save_index(&index)
    }
}
