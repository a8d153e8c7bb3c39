//! TailGrids MCP server.
//!
//! Exposes the TailGrids component catalogue (components, categories,
//! documentation and a documentation search) as MCP tools over stdio.

use std::sync::Arc;

use anyhow::Context;

pub mod config;
pub mod mcp;

pub use crate::config::{CategoryTable, McpConfig};
use crate::mcp::catalog::{CatalogProvider, HttpDocsFetcher};
use crate::mcp::{tools, McpService, ToolRegistry};

/// Logs go to stderr; stdout carries protocol frames only.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();
}

/// Register every tool and wrap the registry in a service.
///
/// A registration failure is logged and the service is still returned with
/// whatever tools were registered before it.
pub fn start_service(provider: CatalogProvider) -> McpService {
    let mut registry = ToolRegistry::new(provider);

    match tools::register_all(&mut registry) {
        Ok(count) => log::info!("registered {} tools", count),
        Err(err) => {
            log::error!("Error registering tools: {}", err);
            log::warn!(
                "MCP server starting with limited functionality ({} tools registered)",
                registry.len()
            );
        }
    }

    McpService::new(registry)
}

pub async fn run() -> anyhow::Result<()> {
    let config = Arc::new(McpConfig::tailgrids());
    let table = Arc::new(CategoryTable::tailgrids());
    let fetcher = HttpDocsFetcher::with_default_client().context("failed to build HTTP client")?;

    log::info!(
        "{} v{} starting (stdio transport, {} categories)",
        config.project_name,
        env!("CARGO_PKG_VERSION"),
        table.len()
    );

    let provider = CatalogProvider::new(config, table, Arc::new(fetcher));
    let service = start_service(provider);

    mcp::transport::serve_stdio(&service)
        .await
        .context("stdio transport failed")
}
