//! One `get<Category>` tool per entry of the category table.

use serde_json::json;

use super::registry::ToolDescriptor;
use crate::config::CategoryEntry;
use crate::mcp::catalog::CatalogProvider;
use crate::mcp::content::{builder, ContentBuilder, ToolResult};

pub const CATEGORY_TOOL_PREFIX: &str = "get";

pub fn tool_name(category: &str) -> String {
    format!("{}{}", CATEGORY_TOOL_PREFIX, category)
}

pub fn category_descriptor(entry: &CategoryEntry) -> ToolDescriptor {
    ToolDescriptor {
        name: tool_name(&entry.name),
        description: format!(
            "Provides TailGrids {} components: {}. Shows usage instructions, features, and available formats.",
            entry.name,
            entry.components.join(", ")
        ),
        input_schema: json!({
            "type": "object",
            "properties": {}
        }),
    }
}

pub async fn call_get_category(provider: &CatalogProvider, category: &str) -> ToolResult {
    let failure = |message: String| {
        builder::error(format!(
            "Error processing TailGrids {} components: {}",
            category, message
        ))
    };

    let details = match provider.fetch_category_details(category).await {
        Ok(details) => details,
        Err(err) => return failure(err.to_string()),
    };

    if !details.is_complete() {
        log::warn!(
            "{} of {} component(s) processed for {}",
            details.items.len(),
            details.items.len() + details.errors.len(),
            category
        );
    }

    match ContentBuilder::new().json(&details.items) {
        Ok(content) => content.skipped(&details.errors).build(),
        Err(err) => failure(err.to_string()),
    }
}
