use crate::license_resolution::domain::{License, ResolutionOutcome, ResolutionSummary};
use crate::license_resolution::services::LicenseDeduplicator;
use crate::ports::outbound::{
    CachedLicense, ComponentLister, FileFetcher, LicenseCache, TargetHandler, UserLogger,
};
use crate::shared::Result;

/// LicenseDownloader - Core use case resolving the license texts of an SBOM
///
/// Every distinct license (by exact name) referenced by the SBOM's components
/// is resolved at most once per run: first from the cache, otherwise from its
/// download URL (falling back to its view URL). Network results are written
/// to the cache before they are handed to the target.
///
/// All work is sequential. The cache phase finishes before the first network
/// fetch starts, and both phases follow the order in which licenses first
/// appear in the SBOM.
///
/// # Type Parameters
/// * `CL` - ComponentLister implementation
/// * `C` - LicenseCache implementation
/// * `FF` - FileFetcher implementation
pub struct LicenseDownloader<CL, C, FF> {
    component_lister: CL,
    cache: C,
    file_fetcher: FF,
}

impl<CL, C, FF> LicenseDownloader<CL, C, FF>
where
    CL: ComponentLister,
    C: LicenseCache,
    FF: FileFetcher,
{
    /// Creates a new LicenseDownloader with injected dependencies
    pub fn new(component_lister: CL, cache: C, file_fetcher: FF) -> Self {
        Self {
            component_lister,
            cache,
            file_fetcher,
        }
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Resolves every license referenced by `sbom` and delivers it to `target`
    ///
    /// # Errors
    /// Only a failure to list the SBOM's components is returned. Failures for
    /// individual licenses are reported through `logger` and the run goes on;
    /// such licenses simply never reach `target`.
    pub async fn download<UL, TH>(&self, logger: &UL, sbom: &[u8], target: &mut TH) -> Result<()>
    where
        UL: UserLogger + ?Sized,
        TH: TargetHandler + Send + ?Sized,
    {
        // Step 1: List components (fatal on failure)
        let components = self.component_lister.list_components(sbom)?;

        // Step 2: Collapse to distinct licenses
        let licenses = LicenseDeduplicator::distinct(&components);
        logger.info(&format!(
            "Found {} distinct license(s) in {} component(s).",
            licenses.len(),
            components.len()
        ));

        let mut summary = ResolutionSummary::default();

        // Step 3: Serve what the cache already has
        let (cached, uncached) = self.partition_by_cache(licenses);
        logger.info(&format!("Using {} license(s) from cache.", cached.len()));
        for (license, entry) in &cached {
            summary.record(Self::copy_from_cache(license, entry, logger, target));
        }

        // Step 4: Everything else needs a URL to be fetched from
        let mut downloadable = Vec::new();
        for license in &uncached {
            match license.effective_url() {
                Some(url) => downloadable.push((license, url)),
                None => summary.record(ResolutionOutcome::SkippedNoUrl),
            }
        }
        logger.info(&format!(
            "Will download {} license(s).",
            downloadable.len()
        ));

        // Step 5: Fetch one by one, writing through the cache
        let total = downloadable.len();
        for (index, (license, url)) in downloadable.into_iter().enumerate() {
            let outcome = self
                .download_license(license, url, index + 1, total, logger, target)
                .await;
            summary.record(outcome);
        }

        logger.info(&format!("License resolution complete: {}.", summary));
        Ok(())
    }

    /// Splits licenses into cache hits (with their entry) and misses,
    /// keeping the order of each side
    fn partition_by_cache(
        &self,
        licenses: Vec<License>,
    ) -> (Vec<(License, CachedLicense)>, Vec<License>) {
        let mut cached = Vec::new();
        let mut uncached = Vec::new();

        for license in licenses {
            match self.cache.lookup(license.name()) {
                Some(entry) => cached.push((license, entry)),
                None => uncached.push(license),
            }
        }

        (cached, uncached)
    }

    /// Delivers a cached license. A failure is logged and the license is
    /// skipped; it is not retried over the network.
    fn copy_from_cache<UL, TH>(
        license: &License,
        entry: &CachedLicense,
        logger: &UL,
        target: &mut TH,
    ) -> ResolutionOutcome
    where
        UL: UserLogger + ?Sized,
        TH: TargetHandler + ?Sized,
    {
        let delivered = entry
            .read_content()
            .and_then(|content| target.handle(license.name(), entry.extension(), &content));

        match delivered {
            Ok(()) => ResolutionOutcome::FromCache,
            Err(e) => {
                logger.error(&format!(
                    "Could not copy license file {} from cache: {}",
                    license.name(),
                    e
                ));
                ResolutionOutcome::Failed
            }
        }
    }

    /// Fetches `license` from `url`, its download URL or else its view URL
    async fn download_license<UL, TH>(
        &self,
        license: &License,
        url: &str,
        index: usize,
        total: usize,
        logger: &UL,
        target: &mut TH,
    ) -> ResolutionOutcome
    where
        UL: UserLogger + ?Sized,
        TH: TargetHandler + Send + ?Sized,
    {
        let name = license.name();

        logger.progress(
            index,
            total,
            &format!("Downloading license {} from {}", name, url),
        );

        let cache = &self.cache;
        let mut write_through = |extension: &str, content: &[u8]| -> Result<()> {
            cache.store(name, extension, content)?;
            target.handle(name, extension, content)
        };

        match self
            .file_fetcher
            .download_to_file(url, name, &mut write_through)
            .await
        {
            Ok(()) => ResolutionOutcome::Downloaded,
            Err(e) => {
                logger.error(&format!(
                    "Could not download license file {}: {:#}",
                    name, e
                ));
                ResolutionOutcome::Failed
            }
        }
    }
}
