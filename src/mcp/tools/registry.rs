//! Tool registry - central routing for MCP tools.
//!
//! Tools are registered one at a time through [`ToolRegistry::register`] and
//! dispatched by name from `tools/call`. Any failure inside a tool is turned
//! into an `isError` result here; nothing escapes to the protocol layer.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::mcp::catalog::CatalogProvider;
use crate::mcp::content::ToolResult;

use super::{catalog_tools, category_tools};

lazy_static! {
    static ref TOOL_NAME_PATTERN: Regex =
        Regex::new(r"^[A-Za-z0-9_-]{1,64}$").expect("tool name pattern is valid");
}

/// Tool descriptor conforming to MCP specification.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// What a registered tool does when called.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolHandler {
    Components,
    Docs,
    Categories,
    SearchDocs,
    /// Detail records for every component of the named category.
    Category(String),
}

#[derive(Debug, Error, PartialEq)]
pub enum RegistryError {
    #[error("tool '{0}' is already registered")]
    DuplicateTool(String),
    #[error("'{0}' is not a valid tool name (expected 1-64 of A-Z, a-z, 0-9, '_' or '-')")]
    InvalidToolName(String),
}

struct RegisteredTool {
    descriptor: ToolDescriptor,
    handler: ToolHandler,
}

/// Central registry for all MCP tools.
pub struct ToolRegistry {
    provider: CatalogProvider,
    tools: Vec<RegisteredTool>,
}

impl ToolRegistry {
    /// Empty registry over `provider`.
    pub fn new(provider: CatalogProvider) -> Self {
        Self {
            provider,
            tools: Vec::new(),
        }
    }

    pub fn provider(&self) -> &CatalogProvider {
        &self.provider
    }

    /// Register one tool. Names must be unique and protocol-safe.
    pub fn register(
        &mut self,
        descriptor: ToolDescriptor,
        handler: ToolHandler,
    ) -> Result<(), RegistryError> {
        if !TOOL_NAME_PATTERN.is_match(&descriptor.name) {
            return Err(RegistryError::InvalidToolName(descriptor.name));
        }
        if self.contains(&descriptor.name) {
            return Err(RegistryError::DuplicateTool(descriptor.name));
        }

        log::debug!("registered tool {}", descriptor.name);
        self.tools.push(RegisteredTool {
            descriptor,
            handler,
        });
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tools.iter().any(|tool| tool.descriptor.name == name)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// List all available tools per MCP spec, in registration order.
    pub fn list_tools(&self) -> Vec<ToolDescriptor> {
        self.tools.iter().map(|tool| tool.descriptor.clone()).collect()
    }

    /// Call a tool by name with the given arguments.
    pub async fn call_tool(&self, name: &str, arguments: Option<Value>) -> ToolResult {
        let Some(tool) = self.tools.iter().find(|tool| tool.descriptor.name == name) else {
            let available: Vec<&str> = self
                .tools
                .iter()
                .map(|tool| tool.descriptor.name.as_str())
                .collect();
            return ToolResult::error(format!(
                "Tool '{}' is not available. Available tools: {}",
                name,
                available.join(", ")
            ));
        };

        log::info!("calling tool {}", name);

        match &tool.handler {
            ToolHandler::Components => catalog_tools::call_get_components(&self.provider),
            ToolHandler::Docs => catalog_tools::call_get_docs(&self.provider).await,
            ToolHandler::Categories => catalog_tools::call_get_categories(&self.provider),
            ToolHandler::SearchDocs => {
                let request = match parse_arguments::<catalog_tools::SearchDocsRequest>(arguments)
                {
                    Ok(req) => req,
                    Err(err) => return ToolResult::error(err),
                };
                catalog_tools::call_search_docs(&self.provider, request).await
            }
            ToolHandler::Category(category) => {
                category_tools::call_get_category(&self.provider, category).await
            }
        }
    }
}

fn parse_arguments<T: for<'de> Deserialize<'de>>(arguments: Option<Value>) -> Result<T, String> {
    let value = arguments.unwrap_or(Value::Null);
    serde_json::from_value(value).map_err(|err| format!("Invalid arguments: {}", err))
}
