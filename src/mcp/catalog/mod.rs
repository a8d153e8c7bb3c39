//! Catalog data provider.
//!
//! Builds every payload the tools return. Component and category records are
//! synthesized from the static [`CategoryTable`]; documentation is fetched
//! from the TailGrids website through a [`DocsFetcher`].

pub mod details;
pub mod fetcher;
pub mod models;

use std::sync::Arc;

use serde_json::json;
use thiserror::Error;

use crate::config::{CategoryTable, McpConfig};
use crate::mcp::schema::{
    self, Partial, ValidationErrors, CATEGORY_TYPE, COMPONENT, COMPONENT_DETAIL, COMPONENT_TYPE,
    DOCUMENTATION_TYPE,
};

pub use details::{DetailSource, TemplateDetails};
pub use fetcher::{DocsFetcher, FetchError, HttpDocsFetcher};
pub use models::{Category, Component, ComponentDetail, DocumentationPage, SearchResult};

const DOCS_NAME: &str = "tailgrids-docs";

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("{0}")]
    Validation(#[from] ValidationErrors),
    #[error("unknown category '{0}'")]
    UnknownCategory(String),
    #[error("failed to serialize record: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Assembles catalog payloads. Cheap to clone; all state is shared and
/// read-only.
#[derive(Clone)]
pub struct CatalogProvider {
    config: Arc<McpConfig>,
    table: Arc<CategoryTable>,
    fetcher: Arc<dyn DocsFetcher + Send + Sync>,
    details: Arc<dyn DetailSource + Send + Sync>,
}

impl CatalogProvider {
    pub fn new(
        config: Arc<McpConfig>,
        table: Arc<CategoryTable>,
        fetcher: Arc<dyn DocsFetcher + Send + Sync>,
    ) -> Self {
        let details = Arc::new(TemplateDetails::new(config.components_url.clone()));
        Self {
            config,
            table,
            fetcher,
            details,
        }
    }

    /// Replace the source of per-component detail records.
    pub fn with_detail_source(mut self, details: Arc<dyn DetailSource + Send + Sync>) -> Self {
        self.details = details;
        self
    }

    pub fn table(&self) -> &CategoryTable {
        &self.table
    }

    /// Fetch the documentation page. Failures are logged here and returned
    /// to the caller.
    pub async fn fetch_docs(&self) -> Result<DocumentationPage, FetchError> {
        let url = &self.config.docs_url;
        match self.fetcher.fetch_text(url).await {
            Ok(content) => Ok(DocumentationPage {
                name: DOCS_NAME.to_string(),
                page_type: DOCUMENTATION_TYPE.to_string(),
                description:
                    "TailGrids Documentation - Comprehensive guide for using TailGrids components"
                        .to_string(),
                content,
                url: url.clone(),
            }),
            Err(err) => {
                log::error!("Error fetching TailGrids docs from {}: {}", url, err);
                Err(err)
            }
        }
    }

    /// Every (category, component) pair in table order. Candidates that fail
    /// the Component shape are dropped and reported in `errors`.
    pub fn list_components(&self) -> Partial<Component> {
        let candidates = self.table.iter().flat_map(|entry| {
            entry.components.iter().map(move |component| {
                json!({
                    "name": component,
                    "type": COMPONENT_TYPE,
                    "description": format!(
                        "{} component from TailGrids {} category",
                        component, entry.name
                    ),
                    "category": entry.name,
                    "url": format!(
                        "{}/{}/{}",
                        self.config.components_url,
                        entry.name.to_lowercase(),
                        component
                    ),
                })
            })
        });

        let partial: Partial<Component> = schema::validate_batch(&COMPONENT, candidates);
        for error in &partial.errors {
            log::warn!("Skipping invalid component: {}", error);
        }
        partial
    }

    /// Detail metadata for one component, from the configured
    /// [`DetailSource`].
    pub async fn fetch_component_detail(
        &self,
        component_name: &str,
        category: Option<&str>,
    ) -> Result<ComponentDetail, ProviderError> {
        self.details.component_detail(component_name, category).await
    }

    /// One record per table entry, in table order.
    pub fn list_categories(&self) -> Vec<Category> {
        self.table
            .iter()
            .map(|entry| Category {
                name: entry.name.clone(),
                category_type: CATEGORY_TYPE.to_string(),
                description: format!(
                    "{} category containing {} component types",
                    entry.name,
                    entry.components.len()
                ),
                components: entry.components.clone(),
                url: format!(
                    "{}#{}",
                    self.config.components_url,
                    entry.name.to_lowercase()
                ),
            })
            .collect()
    }

    /// Case-insensitive substring search over the documentation page.
    ///
    /// An empty query is contained in any page and therefore always found.
    pub async fn search_docs(&self, query: &str) -> Result<SearchResult, FetchError> {
        let docs = self.fetch_docs().await?;
        let found = docs.content.to_lowercase().contains(&query.to_lowercase());

        let result = if found {
            SearchResult {
                query: query.to_string(),
                found,
                description: format!("Documentation content related to \"{}\"", query),
                suggestion: format!(
                    "Visit {} for complete documentation on \"{}\"",
                    docs.url, query
                ),
                url: docs.url,
            }
        } else {
            SearchResult {
                query: query.to_string(),
                found,
                description: format!("No specific documentation found for \"{}\"", query),
                suggestion: format!("Visit {} to browse all available documentation", docs.url),
                url: docs.url,
            }
        };
        Ok(result)
    }

    /// Detail records for every component of `category`, fetched one after
    /// another. A failing component is logged and recorded, the rest still
    /// run.
    pub async fn fetch_category_details(
        &self,
        category: &str,
    ) -> Result<Partial<ComponentDetail>, ProviderError> {
        let entry = self
            .table
            .get(category)
            .ok_or_else(|| ProviderError::UnknownCategory(category.to_string()))?;

        let mut results: Partial<ComponentDetail> = Partial::new();
        for component_name in &entry.components {
            let outcome = match self
                .fetch_component_detail(component_name, Some(&entry.name))
                .await
            {
                Ok(detail) => serde_json::to_value(&detail)
                    .map_err(ProviderError::from)
                    .and_then(|value| {
                        schema::validate_into::<ComponentDetail>(&COMPONENT_DETAIL, value)
                            .map_err(ProviderError::from)
                    }),
                Err(err) => Err(err),
            };

            match outcome {
                Ok(detail) => results.push(detail),
                Err(err) => {
                    log::error!("Error processing component {}: {}", component_name, err);
                    results.record(format!("{}: {}", component_name, err));
                }
            }
        }

        Ok(results)
    }
}
