use crate::shared::Result;
use async_trait::async_trait;

/// Receives the payload of a successful fetch
///
/// `extension` is either empty or starts with a `.` (for example `.txt`).
pub trait DownloadHandler {
    fn handle(&mut self, extension: &str, content: &[u8]) -> Result<()>;
}

impl<F> DownloadHandler for F
where
    F: FnMut(&str, &[u8]) -> Result<()>,
{
    fn handle(&mut self, extension: &str, content: &[u8]) -> Result<()> {
        self(extension, content)
    }
}

/// FileFetcher port for retrieving a license text from a URL
///
/// Implementations own all transport concerns (timeouts, retries, redirects)
/// and decide which file extension the payload gets.
#[async_trait]
pub trait FileFetcher: Send + Sync {
    /// Fetches `url` and hands the payload to `handler` exactly once on success
    ///
    /// # Arguments
    /// * `url` - Location of the license text
    /// * `license_name` - Name of the license being fetched, for diagnostics
    /// * `handler` - Sink for the normalized extension and the payload
    ///
    /// # Errors
    /// Returns an error if the transfer fails, the server answers with a
    /// non-success status, or `handler` itself fails.
    async fn download_to_file(
        &self,
        url: &str,
        license_name: &str,
        handler: &mut (dyn DownloadHandler + Send),
    ) -> Result<()>;
}
