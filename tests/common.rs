#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use tailgrids_mcp_server::config::{CategoryTable, McpConfig};
use tailgrids_mcp_server::mcp::catalog::{
    CatalogProvider, ComponentDetail, DetailSource, DocsFetcher, FetchError, ProviderError,
    TemplateDetails,
};
use tailgrids_mcp_server::mcp::schema::{ValidationError, ValidationErrors};

pub const DOCS_BODY: &str =
    "<html><body><h1>TailGrids Docs</h1><p>Install the Button and Navbar components.</p></body></html>";

/// In-memory fetcher returning a canned response and recording requested URLs.
pub struct MockDocsFetcher {
    response: Result<String, FetchError>,
    requested: Mutex<Vec<String>>,
}

impl MockDocsFetcher {
    pub fn ok(body: &str) -> Self {
        Self {
            response: Ok(body.to_string()),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn status(status: u16, status_text: &str) -> Self {
        Self {
            response: Err(FetchError::Status {
                status,
                status_text: status_text.to_string(),
            }),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn network(message: &str) -> Self {
        Self {
            response: Err(FetchError::Network(message.to_string())),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl DocsFetcher for MockDocsFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        self.requested.lock().unwrap().push(url.to_string());
        self.response.clone()
    }
}

/// Template details, except `failing` which comes back without a usage field.
pub struct FailingDetails {
    inner: TemplateDetails,
    failing: String,
}

impl FailingDetails {
    pub fn new(failing: &str) -> Self {
        Self {
            inner: TemplateDetails::new(McpConfig::tailgrids().components_url),
            failing: failing.to_string(),
        }
    }
}

#[async_trait::async_trait]
impl DetailSource for FailingDetails {
    async fn component_detail(
        &self,
        component_name: &str,
        category: Option<&str>,
    ) -> Result<ComponentDetail, ProviderError> {
        if component_name == self.failing {
            let mut errors = ValidationErrors::new("ComponentDetail");
            errors.add(ValidationError::missing_field("usage"));
            return Err(errors.into());
        }
        self.inner.component_detail(component_name, category).await
    }
}

pub fn three_buttons_table() -> CategoryTable {
    CategoryTable::new([("Buttons", vec!["DefaultButton", "OutlineButton", "IconButton"])])
}

pub fn buttons_table() -> CategoryTable {
    CategoryTable::new([("Buttons", vec!["DefaultButton", "OutlineButton"])])
}

pub fn provider_with(table: CategoryTable, fetcher: Arc<MockDocsFetcher>) -> CatalogProvider {
    CatalogProvider::new(Arc::new(McpConfig::tailgrids()), Arc::new(table), fetcher)
}

pub fn default_provider() -> CatalogProvider {
    provider_with(CategoryTable::tailgrids(), Arc::new(MockDocsFetcher::ok(DOCS_BODY)))
}
