/// Network adapters for external downloads
mod http_file_fetcher;

pub use http_file_fetcher::{HttpFileFetcher, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT};
