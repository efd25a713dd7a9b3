use crate::adapters::outbound::cache::{DisabledCache, FilesystemCache};
use crate::adapters::outbound::network::HttpFileFetcher;
use crate::adapters::outbound::sbom::CycloneDxComponentLister;
use crate::application::use_cases::LicenseDownloader;
use crate::config::Configuration;
use crate::ports::outbound::LicenseCache;
use crate::shared::Result;

/// LicenseDownloader wired with the production adapters
pub type DefaultLicenseDownloader =
    LicenseDownloader<CycloneDxComponentLister, Box<dyn LicenseCache>, HttpFileFetcher>;

/// Factory for creating a fully wired LicenseDownloader
///
/// Selects the cache adapter from the configuration and builds the HTTP
/// fetcher with the configured timeout and retry budget.
pub struct LicenseDownloaderFactory;

impl LicenseDownloaderFactory {
    /// Creates a LicenseDownloader for the given configuration
    ///
    /// # Examples
    /// ```
    /// use sbom_licenses::application::factories::LicenseDownloaderFactory;
    /// use sbom_licenses::config::Configuration;
    ///
    /// let downloader = LicenseDownloaderFactory::create(&Configuration::default()).unwrap();
    /// ```
    pub fn create(config: &Configuration) -> Result<DefaultLicenseDownloader> {
        let file_fetcher = HttpFileFetcher::with_settings(config.timeout(), config.max_retries())?;

        Ok(LicenseDownloader::new(
            CycloneDxComponentLister::new(),
            Self::create_cache(config),
            file_fetcher,
        ))
    }

    /// Returns a filesystem cache when a cache path is configured,
    /// otherwise a cache that never hits and never persists
    pub fn create_cache(config: &Configuration) -> Box<dyn LicenseCache> {
        match config.license_cache_path() {
            Some(path) => Box::new(FilesystemCache::new(path)),
            None => Box::new(DisabledCache::new()),
        }
    }
}
