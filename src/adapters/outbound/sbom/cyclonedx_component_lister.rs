use crate::license_resolution::domain::{Component, License};
use crate::ports::outbound::ComponentLister;
use crate::shared::error::LicenseError;
use crate::shared::Result;
use serde::Deserialize;

const BOM_FORMAT: &str = "CycloneDX";

#[derive(Debug, Deserialize)]
struct Bom {
    #[serde(rename = "bomFormat", default)]
    bom_format: Option<String>,
    #[serde(default)]
    components: Vec<BomComponent>,
}

#[derive(Debug, Deserialize)]
struct BomComponent {
    name: String,
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    licenses: Vec<LicenseChoice>,
    #[serde(default)]
    components: Vec<BomComponent>,
}

/// Either a single license or an SPDX expression
#[derive(Debug, Deserialize)]
struct LicenseChoice {
    #[serde(default)]
    license: Option<LicenseContent>,
    #[serde(default)]
    expression: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LicenseContent {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    url: Option<String>,
}

/// CycloneDxComponentLister adapter reading CycloneDX JSON documents
///
/// Nested components are listed depth-first after their parent. A license's
/// SPDX id (or its free-text name) becomes the license name and its `url`
/// the browsable location; expressions are kept verbatim as names without URLs.
pub struct CycloneDxComponentLister;

impl CycloneDxComponentLister {
    pub fn new() -> Self {
        Self
    }

    fn collect(component: BomComponent, out: &mut Vec<Component>) -> Result<()> {
        let licenses = component
            .licenses
            .into_iter()
            .filter_map(Self::to_license)
            .collect::<Result<Vec<_>>>()?;

        out.push(Component::new(component.name, component.version, licenses));

        for child in component.components {
            Self::collect(child, out)?;
        }
        Ok(())
    }

    fn to_license(choice: LicenseChoice) -> Option<Result<License>> {
        if let Some(content) = choice.license {
            let name = content
                .id
                .filter(|id| !id.trim().is_empty())
                .or(content.name)
                .filter(|name| !name.trim().is_empty())?;
            return Some(License::new(name, content.url, None));
        }

        choice
            .expression
            .filter(|expr| !expr.trim().is_empty())
            .map(|expr| License::new(expr, None, None))
    }
}

impl Default for CycloneDxComponentLister {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentLister for CycloneDxComponentLister {
    fn list_components(&self, sbom: &[u8]) -> Result<Vec<Component>> {
        let bom: Bom = serde_json::from_slice(sbom).map_err(|e| LicenseError::SbomParseError {
            details: e.to_string(),
        })?;

        if let Some(format) = bom.bom_format.as_deref() {
            if format != BOM_FORMAT {
                return Err(LicenseError::SbomParseError {
                    details: format!(
                        "Unsupported bomFormat '{}', expected '{}'",
                        format, BOM_FORMAT
                    ),
                }
                .into());
            }
        }

        let mut components = Vec::new();
        for component in bom.components {
            Self::collect(component, &mut components)?;
        }
        Ok(components)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(json: &str) -> Result<Vec<Component>> {
        CycloneDxComponentLister::new().list_components(json.as_bytes())
    }

    fn license_names(component: &Component) -> Vec<&str> {
        component.licenses().iter().map(|l| l.name()).collect()
    }

    #[test]
    fn test_list_components_with_ids_and_names() {
        let components = list(
            r#"{
                "bomFormat": "CycloneDX",
                "specVersion": "1.6",
                "components": [
                    {
                        "type": "library",
                        "name": "requests",
                        "version": "2.31.0",
                        "licenses": [
                            {"license": {"id": "Apache-2.0", "url": "https://www.apache.org/licenses/LICENSE-2.0.txt"}}
                        ]
                    },
                    {
                        "type": "library",
                        "name": "internal-lib",
                        "licenses": [
                            {"license": {"name": "Proprietary"}}
                        ]
                    }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(components.len(), 2);
        assert_eq!(components[0].name(), "requests");
        assert_eq!(components[0].version(), Some("2.31.0"));
        let apache = &components[0].licenses()[0];
        assert_eq!(apache.name(), "Apache-2.0");
        assert_eq!(
            apache.view_url(),
            Some("https://www.apache.org/licenses/LICENSE-2.0.txt")
        );
        assert_eq!(apache.download_url(), None);

        assert_eq!(license_names(&components[1]), vec!["Proprietary"]);
        assert_eq!(components[1].licenses()[0].view_url(), None);
    }

    #[test]
    fn test_list_components_expression() {
        let components = list(
            r#"{"components": [{"name": "dual", "licenses": [{"expression": "MIT OR Apache-2.0"}]}]}"#,
        )
        .unwrap();

        assert_eq!(license_names(&components[0]), vec!["MIT OR Apache-2.0"]);
        assert_eq!(components[0].licenses()[0].effective_url(), None);
    }

    #[test]
    fn test_list_components_nested_depth_first() {
        let components = list(
            r#"{
                "bomFormat": "CycloneDX",
                "components": [
                    {"name": "parent", "components": [{"name": "child"}]},
                    {"name": "sibling"}
                ]
            }"#,
        )
        .unwrap();

        let names: Vec<&str> = components.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["parent", "child", "sibling"]);
    }

    #[test]
    fn test_list_components_skips_empty_license_entries() {
        let components = list(
            r#"{"components": [{"name": "a", "licenses": [{"license": {}}, {"license": {"id": "", "name": "MIT"}}, {}]}]}"#,
        )
        .unwrap();

        assert_eq!(license_names(&components[0]), vec!["MIT"]);
    }

    #[test]
    fn test_list_components_empty_document() {
        assert!(list(r#"{"bomFormat": "CycloneDX"}"#).unwrap().is_empty());
    }

    #[test]
    fn test_list_components_invalid_json() {
        let err = list("not json").unwrap_err();
        assert!(err.to_string().contains("Failed to parse SBOM"));
    }

    #[test]
    fn test_list_components_wrong_format() {
        let err = list(r#"{"bomFormat": "SPDX", "components": []}"#).unwrap_err();
        assert!(err.to_string().contains("Unsupported bomFormat 'SPDX'"));
    }
}
