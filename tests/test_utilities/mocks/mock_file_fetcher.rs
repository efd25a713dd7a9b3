use async_trait::async_trait;
use sbom_licenses::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock FileFetcher serving canned responses per URL
///
/// Unknown URLs fail like an unreachable host would.
#[derive(Default, Clone)]
pub struct MockFileFetcher {
    responses: HashMap<String, (String, Vec<u8>)>,
    pub requests: Arc<Mutex<Vec<String>>>,
}

impl MockFileFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(mut self, url: &str, extension: &str, content: &str) -> Self {
        self.responses.insert(
            url.to_string(),
            (extension.to_string(), content.as_bytes().to_vec()),
        );
        self
    }

    pub fn get_requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl FileFetcher for MockFileFetcher {
    async fn download_to_file(
        &self,
        url: &str,
        _license_name: &str,
        handler: &mut (dyn DownloadHandler + Send),
    ) -> Result<()> {
        self.requests.lock().unwrap().push(url.to_string());

        match self.responses.get(url) {
            Some((extension, content)) => handler.handle(extension, content),
            None => anyhow::bail!("Connection refused: {}", url),
        }
    }
}
