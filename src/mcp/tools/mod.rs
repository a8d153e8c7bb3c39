//! MCP Tools module - defines tools exposed via JSON-RPC.
//!
//! Four fixed tools cover the whole catalogue; one more tool per category
//! returns detail records for that category's components.

pub mod catalog_tools;
pub mod category_tools;
pub mod registry;

pub use registry::{RegistryError, ToolDescriptor, ToolHandler, ToolRegistry};

/// Register the fixed tools followed by one tool per category.
///
/// Stops at the first failure. Tools registered before it stay in the
/// registry and remain callable. Returns the number of tools registered.
pub fn register_all(registry: &mut ToolRegistry) -> Result<usize, RegistryError> {
    registry.register(
        catalog_tools::get_components_descriptor(),
        ToolHandler::Components,
    )?;
    registry.register(catalog_tools::get_docs_descriptor(), ToolHandler::Docs)?;
    registry.register(
        catalog_tools::get_categories_descriptor(),
        ToolHandler::Categories,
    )?;
    registry.register(
        catalog_tools::search_docs_descriptor(),
        ToolHandler::SearchDocs,
    )?;

    let tools: Vec<(ToolDescriptor, ToolHandler)> = registry
        .provider()
        .table()
        .iter()
        .map(|entry| {
            (
                category_tools::category_descriptor(entry),
                ToolHandler::Category(entry.name.clone()),
            )
        })
        .collect();

    for (descriptor, handler) in tools {
        registry.register(descriptor, handler)?;
    }

    Ok(registry.len())
}
