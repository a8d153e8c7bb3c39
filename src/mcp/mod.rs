//! MCP (Model Context Protocol) Module
//!
//! Provides JSON-RPC 2.0 over stdio exposing the TailGrids catalogue to AI
//! agents.

pub mod catalog;
pub mod content;
pub mod rpc;
pub mod schema;
pub mod service;
pub mod tools;
pub mod transport;

pub use catalog::CatalogProvider;
pub use service::McpService;
pub use tools::ToolRegistry;
