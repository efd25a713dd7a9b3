/// SBOM format adapters
mod cyclonedx_component_lister;

pub use cyclonedx_component_lister::CycloneDxComponentLister;
