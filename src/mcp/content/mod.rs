//! Content types module for MCP tool responses.
//!
//! Every tool answers with text content; structured payloads are carried as
//! pretty-printed JSON inside a text item.

pub mod builder;
pub mod types;

pub use builder::ContentBuilder;
pub use types::{ContentItem, ToolResult};
