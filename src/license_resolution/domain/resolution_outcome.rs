/// How a single distinct license ended up after a download run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionOutcome {
    /// Delivered from the local cache
    FromCache,
    /// Fetched from its URL, cached and delivered
    Downloaded,
    /// Not cached and no URL to fetch from
    SkippedNoUrl,
    /// Reading the cached copy or downloading failed
    Failed,
}

/// Tally of resolution outcomes for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolutionSummary {
    pub from_cache: usize,
    pub downloaded: usize,
    pub skipped_no_url: usize,
    pub failed: usize,
}

impl ResolutionSummary {
    pub fn record(&mut self, outcome: ResolutionOutcome) {
        match outcome {
            ResolutionOutcome::FromCache => self.from_cache += 1,
            ResolutionOutcome::Downloaded => self.downloaded += 1,
            ResolutionOutcome::SkippedNoUrl => self.skipped_no_url += 1,
            ResolutionOutcome::Failed => self.failed += 1,
        }
    }
}

impl std::fmt::Display for ResolutionSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} from cache, {} downloaded, {} failed, {} without URL",
            self.from_cache, self.downloaded, self.failed, self.skipped_no_url
        )
    }
}
