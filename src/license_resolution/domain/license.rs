use crate::shared::Result;
use std::hash::{Hash, Hasher};

/// License value object
///
/// A license is identified by its `name` alone. The two URLs are only hints
/// for where the text can be retrieved and never take part in equality.
#[derive(Debug, Clone)]
pub struct License {
    name: String,
    view_url: Option<String>,
    download_url: Option<String>,
}

impl License {
    pub fn new(
        name: impl Into<String>,
        view_url: Option<String>,
        download_url: Option<String>,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            anyhow::bail!("License name cannot be empty");
        }

        Ok(Self {
            name,
            view_url: non_empty(view_url),
            download_url: non_empty(download_url),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn view_url(&self) -> Option<&str> {
        self.view_url.as_deref()
    }

    pub fn download_url(&self) -> Option<&str> {
        self.download_url.as_deref()
    }

    /// The URL a download should be issued against: the direct download
    /// location when known, the browsable one otherwise.
    pub fn effective_url(&self) -> Option<&str> {
        self.download_url().or_else(|| self.view_url())
    }
}

fn non_empty(url: Option<String>) -> Option<String> {
    url.filter(|u| !u.trim().is_empty())
}

impl PartialEq for License {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for License {}

impl Hash for License {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl std::fmt::Display for License {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
