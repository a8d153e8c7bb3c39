//! Fixed catalog tools: component list, documentation, categories, search.

use serde::Deserialize;
use serde_json::json;

use super::registry::ToolDescriptor;
use crate::mcp::catalog::CatalogProvider;
use crate::mcp::content::{builder, ContentBuilder, ToolResult};

// =============================================================================
// Tool Names
// =============================================================================

pub const GET_COMPONENTS_TOOL: &str = "getComponents";
pub const GET_DOCS_TOOL: &str = "getDocs";
pub const GET_CATEGORIES_TOOL: &str = "getCategories";
pub const SEARCH_DOCS_TOOL: &str = "searchDocs";

// =============================================================================
// Tool Descriptors
// =============================================================================

fn no_arguments() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {}
    })
}

pub fn get_components_descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: GET_COMPONENTS_TOOL.to_string(),
        description:
            "Provides a comprehensive list of all TailGrids UI components organized by category."
                .to_string(),
        input_schema: no_arguments(),
    }
}

pub fn get_docs_descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: GET_DOCS_TOOL.to_string(),
        description:
            "Fetches TailGrids documentation content for installation and usage guides."
                .to_string(),
        input_schema: no_arguments(),
    }
}

pub fn get_categories_descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: GET_CATEGORIES_TOOL.to_string(),
        description: "Lists all available TailGrids component categories and their contents."
            .to_string(),
        input_schema: no_arguments(),
    }
}

pub fn search_docs_descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: SEARCH_DOCS_TOOL.to_string(),
        description: "Search TailGrids documentation for specific topics or components."
            .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Search query for TailGrids documentation"
                }
            },
            "required": ["query"]
        }),
    }
}

// =============================================================================
// Request Types
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct SearchDocsRequest {
    pub query: String,
}

// =============================================================================
// Handlers
// =============================================================================

pub fn call_get_components(provider: &CatalogProvider) -> ToolResult {
    let components = provider.list_components();

    match ContentBuilder::new().json(&components.items) {
        Ok(content) => content.skipped(&components.errors).build(),
        Err(err) => {
            log::error!("Failed to serialize components: {}", err);
            builder::error("Failed to fetch TailGrids components")
        }
    }
}

pub async fn call_get_docs(provider: &CatalogProvider) -> ToolResult {
    let docs = match provider.fetch_docs().await {
        Ok(docs) => docs,
        Err(err) => {
            return builder::error(format!("Failed to fetch TailGrids documentation: {}", err))
        }
    };

    match ContentBuilder::new().json(&docs) {
        Ok(content) => content.build(),
        Err(err) => {
            log::error!("Failed to serialize documentation page: {}", err);
            builder::error("Failed to fetch TailGrids documentation")
        }
    }
}

pub fn call_get_categories(provider: &CatalogProvider) -> ToolResult {
    let categories = provider.list_categories();

    match ContentBuilder::new().json(&categories) {
        Ok(content) => content.build(),
        Err(err) => {
            log::error!("Failed to serialize categories: {}", err);
            builder::error("Failed to fetch TailGrids categories")
        }
    }
}

pub async fn call_search_docs(provider: &CatalogProvider, request: SearchDocsRequest) -> ToolResult {
    let failure = || {
        builder::error(format!(
            "Failed to search TailGrids documentation for \"{}\"",
            request.query
        ))
    };

    let result = match provider.search_docs(&request.query).await {
        Ok(result) => result,
        Err(err) => {
            log::error!("Error searching docs for \"{}\": {}", request.query, err);
            return failure();
        }
    };

    match ContentBuilder::new().json(&result) {
        Ok(content) => content.build(),
        Err(err) => {
            log::error!("Failed to serialize search result: {}", err);
            failure()
        }
    }
}
