use crate::ports::outbound::{CachedLicense, LicenseCache};
use crate::shared::Result;

/// DisabledCache adapter used when no cache directory is configured
///
/// Every lookup misses and every store is silently dropped, so nothing
/// persists across runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledCache;

impl DisabledCache {
    pub fn new() -> Self {
        Self
    }
}

impl LicenseCache for DisabledCache {
    fn lookup(&self, _license_name: &str) -> Option<CachedLicense> {
        None
    }

    fn store(&self, _license_name: &str, _extension: &str, _content: &[u8]) -> Result<()> {
        Ok(())
    }
}
