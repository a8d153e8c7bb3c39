//! Per-component detail records.
//!
//! [`CatalogProvider`](super::CatalogProvider) asks a [`DetailSource`] for
//! each component it reports on. The stock source fills a fixed template;
//! other sources can be plugged in with
//! [`CatalogProvider::with_detail_source`](super::CatalogProvider::with_detail_source).

use async_trait::async_trait;
use serde_json::json;

use super::{ComponentDetail, ProviderError};
use crate::mcp::schema::{self, COMPONENT_DETAIL, COMPONENT_TYPE};

const UNKNOWN_CATEGORY: &str = "unknown";

const INSTALLATION: &str = "TailGrids components are copy-paste ready. Simply copy the HTML/React/Vue code from the TailGrids website.";
const FEATURES: [&str; 5] = [
    "Tailwind CSS based",
    "Responsive design",
    "Dark mode support",
    "Customizable styling",
    "Copy-paste ready",
];
const FORMATS: [&str; 4] = ["HTML", "React", "Vue", "Figma"];

#[async_trait]
pub trait DetailSource {
    /// Detail record for `component_name`. `category` is `None` when the
    /// caller does not know it.
    async fn component_detail(
        &self,
        component_name: &str,
        category: Option<&str>,
    ) -> Result<ComponentDetail, ProviderError>;
}

/// Synthesizes details from a template. No network access.
#[derive(Debug, Clone)]
pub struct TemplateDetails {
    components_url: String,
}

impl TemplateDetails {
    pub fn new(components_url: impl Into<String>) -> Self {
        Self {
            components_url: components_url.into(),
        }
    }
}

#[async_trait]
impl DetailSource for TemplateDetails {
    async fn component_detail(
        &self,
        component_name: &str,
        category: Option<&str>,
    ) -> Result<ComponentDetail, ProviderError> {
        let candidate = json!({
            "name": component_name,
            "type": COMPONENT_TYPE,
            "category": category.unwrap_or(UNKNOWN_CATEGORY),
            "description": format!("{} component from TailGrids", component_name),
            "usage": format!(
                "Visit {} to find and copy the {} component code",
                self.components_url, component_name
            ),
            "installation": INSTALLATION,
            "features": FEATURES,
            "formats": FORMATS,
            "url": self.components_url,
        });

        schema::validate_into(&COMPONENT_DETAIL, candidate).map_err(|errors| {
            log::error!(
                "Error fetching component {}:\n{}",
                component_name,
                errors.to_mcp_message()
            );
            ProviderError::from(errors)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_template_without_category_is_unknown() {
        let source = TemplateDetails::new("https://tailgrids.com/components");
        let detail = source.component_detail("Hero", None).await.unwrap();

        assert_eq!(detail.category, "unknown");
        assert_eq!(detail.url, "https://tailgrids.com/components");
        assert_eq!(detail.formats, vec!["HTML", "React", "Vue", "Figma"]);
    }
}
