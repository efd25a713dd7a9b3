//! sbom-licenses - License text resolution for CycloneDX SBOMs
//!
//! This library collects the license texts referenced by the components of an
//! SBOM. Each distinct license is served from a local cache when possible,
//! otherwise downloaded, written through to the cache, and delivered to a
//! target such as an output directory.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`license_resolution`): Licenses, components and deduplication
//! - **Application Layer** (`application`): The download use case and its factory
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities, security checks and error types
//!
//! # Example
//!
//! ```no_run
//! use sbom_licenses::prelude::*;
//! use std::path::Path;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! let config = Configuration::default();
//! let sbom = FileSystemReader::new().read_sbom(Path::new("bom.json"))?;
//!
//! let downloader = LicenseDownloaderFactory::create(&config)?;
//! let logger = StderrUserLogger::new();
//! let mut target = DirectoryTargetHandler::new(config.output_dir());
//!
//! downloader.download(&logger, &sbom, &mut target).await?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod license_resolution;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::cache::{DisabledCache, FilesystemCache};
    pub use crate::adapters::outbound::console::StderrUserLogger;
    pub use crate::adapters::outbound::filesystem::{DirectoryTargetHandler, FileSystemReader};
    pub use crate::adapters::outbound::network::HttpFileFetcher;
    pub use crate::adapters::outbound::sbom::CycloneDxComponentLister;
    pub use crate::application::factories::{DefaultLicenseDownloader, LicenseDownloaderFactory};
    pub use crate::application::use_cases::LicenseDownloader;
    pub use crate::config::Configuration;
    pub use crate::license_resolution::domain::{
        Component, License, ResolutionOutcome, ResolutionSummary,
    };
    pub use crate::license_resolution::services::LicenseDeduplicator;
    pub use crate::ports::outbound::{
        CachedLicense, ComponentLister, DownloadHandler, FileFetcher, LicenseCache, SbomReader,
        TargetHandler, UserLogger,
    };
    pub use crate::shared::Result;
}
