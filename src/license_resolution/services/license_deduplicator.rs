use crate::license_resolution::domain::{Component, License};
use std::collections::HashSet;

/// LicenseDeduplicator collapses the licenses of all components into one
/// ordered list of distinct licenses.
///
/// Licenses are keyed by exact name. The first occurrence wins, including its
/// URLs; later occurrences with the same name are dropped even if they carry
/// different URLs.
pub struct LicenseDeduplicator;

impl LicenseDeduplicator {
    pub fn distinct(components: &[Component]) -> Vec<License> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut distinct = Vec::new();

        for license in components.iter().flat_map(|c| c.licenses()) {
            if seen.insert(license.name()) {
                distinct.push(license.clone());
            }
        }

        distinct
    }
}
