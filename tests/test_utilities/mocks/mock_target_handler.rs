use sbom_licenses::prelude::*;

/// Mock TargetHandler collecting delivered license files in memory
#[derive(Default)]
pub struct MockTargetHandler {
    pub files: Vec<(String, String, Vec<u8>)>,
}

impl MockTargetHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn names(&self) -> Vec<String> {
        self.files.iter().map(|(name, _, _)| name.clone()).collect()
    }

    pub fn content_of(&self, name: &str) -> Option<String> {
        self.files
            .iter()
            .find(|(n, _, _)| n == name)
            .map(|(_, _, content)| String::from_utf8_lossy(content).into_owned())
    }
}

impl TargetHandler for MockTargetHandler {
    fn handle(&mut self, name: &str, extension: &str, content: &[u8]) -> Result<()> {
        self.files
            .push((name.to_string(), extension.to_string(), content.to_vec()));
        Ok(())
    }
}
