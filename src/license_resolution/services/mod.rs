/// Domain services
pub mod license_deduplicator;

pub use license_deduplicator::LicenseDeduplicator;
