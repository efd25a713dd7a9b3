use crate::ports::outbound::{DownloadHandler, FileFetcher};
use crate::shared::error::LicenseError;
use crate::shared::security::MAX_DOWNLOAD_SIZE;
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, CONTENT_DISPOSITION, CONTENT_TYPE};
use reqwest::{StatusCode, Url};
use std::time::Duration;

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default number of attempts per URL
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Delay unit between attempts (milliseconds); attempt `n` waits `n` units
const RETRY_BACKOFF_MS: u64 = 200;

/// A response body together with the extension it should be stored under
#[derive(Debug)]
struct FetchedFile {
    extension: String,
    content: Vec<u8>,
}

/// Failure of a single attempt, split by whether another attempt may help
enum AttemptError {
    Retryable(anyhow::Error),
    Fatal(anyhow::Error),
}

/// HttpFileFetcher adapter downloading license texts over HTTP(S)
///
/// Implements the FileFetcher port with an async reqwest client. Transport
/// errors and 5xx answers are retried; any other non-success status fails
/// immediately. The extension handed to the handler comes from the
/// `Content-Disposition` filename, then the `Content-Type`, then the URL path.
pub struct HttpFileFetcher {
    client: reqwest::Client,
    max_retries: u32,
}

impl HttpFileFetcher {
    /// Creates a fetcher with the default timeout and retry count
    pub fn new() -> Result<Self> {
        Self::with_settings(DEFAULT_TIMEOUT, DEFAULT_MAX_RETRIES)
    }

    pub fn with_settings(timeout: Duration, max_retries: u32) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("sbom-licenses/{}", version);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            max_retries: max_retries.max(1),
        })
    }

    /// Only absolute http(s) URLs are fetched
    fn parse_url(url: &str) -> Result<Url> {
        let parsed = Url::parse(url).map_err(|e| LicenseError::DownloadError {
            url: url.to_string(),
            details: format!("Invalid URL: {}", e),
        })?;

        match parsed.scheme() {
            "http" | "https" => Ok(parsed),
            scheme => Err(LicenseError::DownloadError {
                url: url.to_string(),
                details: format!("Unsupported URL scheme '{}'", scheme),
            }
            .into()),
        }
    }

    async fn fetch_with_retry(&self, url: &Url) -> Result<FetchedFile> {
        let mut last_error = None;

        for attempt in 1..=self.max_retries {
            match self.fetch_once(url).await {
                Ok(file) => return Ok(file),
                Err(AttemptError::Fatal(e)) => return Err(e),
                Err(AttemptError::Retryable(e)) => {
                    last_error = Some(e);
                    if attempt < self.max_retries {
                        tokio::time::sleep(Duration::from_millis(
                            RETRY_BACKOFF_MS * attempt as u64,
                        ))
                        .await;
                    }
                }
            }
        }

        Err(last_error.unwrap_or_else(|| anyhow::anyhow!("No download attempt was made")))
    }

    async fn fetch_once(&self, url: &Url) -> std::result::Result<FetchedFile, AttemptError> {
        let transport_error = |e: reqwest::Error| {
            AttemptError::Retryable(
                LicenseError::DownloadError {
                    url: url.to_string(),
                    details: e.to_string(),
                }
                .into(),
            )
        };

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let error = LicenseError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            }
            .into();
            return Err(if is_retryable_status(status) {
                AttemptError::Retryable(error)
            } else {
                AttemptError::Fatal(error)
            });
        }

        if let Some(length) = response.content_length() {
            if length > MAX_DOWNLOAD_SIZE {
                return Err(AttemptError::Fatal(too_large(url, length)));
            }
        }

        // Redirects may have changed the path the extension is derived from.
        let final_url = response.url().clone();
        let extension = extension_from_headers(response.headers())
            .unwrap_or_else(|| extension_from_url(&final_url));

        let content = response.bytes().await.map_err(transport_error)?;
        if content.len() as u64 > MAX_DOWNLOAD_SIZE {
            return Err(AttemptError::Fatal(too_large(url, content.len() as u64)));
        }

        Ok(FetchedFile {
            extension,
            content: content.to_vec(),
        })
    }
}

fn is_retryable_status(status: StatusCode) -> bool {
    status.is_server_error()
}

fn too_large(url: &Url, size: u64) -> anyhow::Error {
    LicenseError::DownloadError {
        url: url.to_string(),
        details: format!(
            "Security: response is too large ({} bytes). Maximum allowed size is {} bytes.",
            size, MAX_DOWNLOAD_SIZE
        ),
    }
    .into()
}

/// Extension from `Content-Disposition: ...; filename="LICENSE.txt"`, then
/// from a known `Content-Type`
fn extension_from_headers(headers: &HeaderMap) -> Option<String> {
    let from_disposition = headers
        .get(CONTENT_DISPOSITION)
        .and_then(|value| value.to_str().ok())
        .and_then(filename_from_disposition)
        .and_then(|filename| extension_of(&filename));

    from_disposition.or_else(|| {
        headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .and_then(extension_from_content_type)
            .map(String::from)
    })
}

fn filename_from_disposition(disposition: &str) -> Option<String> {
    disposition.split(';').map(str::trim).find_map(|param| {
        let (key, value) = param.split_once('=')?;
        key.trim()
            .eq_ignore_ascii_case("filename")
            .then(|| value.trim().trim_matches('"').to_string())
    })
}

fn extension_from_content_type(content_type: &str) -> Option<&'static str> {
    let mime = content_type.split(';').next()?.trim().to_ascii_lowercase();
    match mime.as_str() {
        "text/plain" => Some(".txt"),
        "text/html" | "application/xhtml+xml" => Some(".html"),
        "text/markdown" | "text/x-markdown" => Some(".md"),
        "application/pdf" => Some(".pdf"),
        "application/json" => Some(".json"),
        "application/xml" | "text/xml" => Some(".xml"),
        _ => None,
    }
}

/// Extension of the last path segment, or `""`
fn extension_from_url(url: &Url) -> String {
    url.path_segments()
        .and_then(|mut segments| segments.next_back().map(String::from))
        .map(|segment| {
            urlencoding::decode(&segment)
                .map(|decoded| decoded.into_owned())
                .unwrap_or(segment)
        })
        .and_then(|filename| extension_of(&filename))
        .unwrap_or_default()
}

/// `.ext` for `name.ext` when `ext` is a short alphanumeric suffix
fn extension_of(filename: &str) -> Option<String> {
    let (stem, ext) = filename.rsplit_once('.')?;
    let valid = !stem.is_empty()
        && (1..=5).contains(&ext.len())
        && ext.chars().all(|c| c.is_ascii_alphanumeric())
        && ext.chars().any(|c| c.is_ascii_alphabetic());
    valid.then(|| format!(".{}", ext.to_ascii_lowercase()))
}

#[async_trait]
impl FileFetcher for HttpFileFetcher {
    async fn download_to_file(
        &self,
        url: &str,
        license_name: &str,
        handler: &mut (dyn DownloadHandler + Send),
    ) -> Result<()> {
        let parsed = Self::parse_url(url)?;
        let file = self.fetch_with_retry(&parsed).await.map_err(|e| {
            e.context(format!("Failed to download license {}", license_name))
        })?;
        handler.handle(&file.extension, &file.content)
    }
}
