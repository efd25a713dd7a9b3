use crate::license_resolution::domain::Component;
use crate::shared::Result;

/// ComponentLister port for turning raw SBOM bytes into components
///
/// This port abstracts the SBOM format. The license pipeline only reads the
/// licenses of the returned components and never modifies them.
pub trait ComponentLister {
    /// Lists the components described by an SBOM
    ///
    /// # Arguments
    /// * `sbom` - The raw SBOM document
    ///
    /// # Returns
    /// Components in document order
    ///
    /// # Errors
    /// Returns an error if the document is malformed or cannot be interpreted.
    /// This error aborts the whole download run.
    fn list_components(&self, sbom: &[u8]) -> Result<Vec<Component>>;
}
