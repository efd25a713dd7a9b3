use sbom_licenses::prelude::*;

/// Mock ComponentLister returning a fixed list of components
pub struct MockComponentLister {
    components: Vec<Component>,
}

impl MockComponentLister {
    pub fn new() -> Self {
        Self {
            components: Vec::new(),
        }
    }

    /// Adds a component carrying the given licenses
    pub fn with_component(mut self, name: &str, licenses: Vec<License>) -> Self {
        self.components
            .push(Component::new(name, Some("1.0.0".to_string()), licenses));
        self
    }
}

impl ComponentLister for MockComponentLister {
    fn list_components(&self, _sbom: &[u8]) -> Result<Vec<Component>> {
        Ok(self.components.clone())
    }
}
