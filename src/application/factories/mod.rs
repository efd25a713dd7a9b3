/// Factories wiring production adapters into use cases
mod license_downloader_factory;

pub use license_downloader_factory::{DefaultLicenseDownloader, LicenseDownloaderFactory};
