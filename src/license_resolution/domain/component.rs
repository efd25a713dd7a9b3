use super::License;

/// Component read from an SBOM
///
/// Only the licenses matter for license resolution; name and version are
/// kept for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    name: String,
    version: Option<String>,
    licenses: Vec<License>,
}

impl Component {
    pub fn new(name: impl Into<String>, version: Option<String>, licenses: Vec<License>) -> Self {
        Self {
            name: name.into(),
            version,
            licenses,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn licenses(&self) -> &[License] {
        &self.licenses
    }
}
