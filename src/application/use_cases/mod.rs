/// Use cases module containing application business logic orchestration
mod download_licenses;

pub use download_licenses::LicenseDownloader;
