//! Builder pattern for constructing tool responses.

use serde::Serialize;

use super::types::{ContentItem, ToolResult};

/// Builder for constructing ToolResult with fluent API.
#[derive(Debug, Default)]
pub struct ContentBuilder {
    items: Vec<ContentItem>,
    is_error: bool,
}

impl ContentBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a text message.
    pub fn text(mut self, message: impl Into<String>) -> Self {
        self.items.push(ContentItem::text(message));
        self
    }

    /// Add a value as pretty-printed JSON text.
    pub fn json<T: Serialize + ?Sized>(mut self, value: &T) -> Result<Self, serde_json::Error> {
        self.items.push(ContentItem::json(value)?);
        Ok(self)
    }

    /// Add a note listing items skipped during a partial batch. No-op when
    /// nothing was skipped.
    pub fn skipped(self, errors: &[String]) -> Self {
        if errors.is_empty() {
            return self;
        }
        let mut lines = vec![format!("Skipped {} item(s):", errors.len())];
        lines.extend(errors.iter().map(|error| format!("- {}", error)));
        self.text(lines.join("\n"))
    }

    /// Mark this result as an error.
    pub fn error(mut self) -> Self {
        self.is_error = true;
        self
    }

    /// Build the final ToolResult.
    pub fn build(self) -> ToolResult {
        ToolResult {
            content: self.items,
            is_error: self.is_error,
        }
    }
}

/// Convenience function to create an error response.
pub fn error(message: impl Into<String>) -> ToolResult {
    ContentBuilder::new().text(message).error().build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_text() {
        let result = ContentBuilder::new().text("Hello world").build();

        assert!(!result.is_error);
        assert_eq!(result.content.len(), 1);
        assert_eq!(result.content[0].content_type, "text");
    }

    #[test]
    fn test_builder_json_then_skipped() {
        let errors = vec!["Broken: [name] required field is missing".to_string()];
        let result = ContentBuilder::new()
            .json(&vec!["a", "b"])
            .unwrap()
            .skipped(&errors)
            .build();

        assert!(!result.is_error);
        assert_eq!(result.content.len(), 2);
        assert!(result.content[1].text.starts_with("Skipped 1 item(s):"));
        assert!(result.content[1].text.contains("- Broken"));
    }

    #[test]
    fn test_skipped_without_errors_adds_nothing() {
        let result = ContentBuilder::new().text("x").skipped(&[]).build();
        assert_eq!(result.content.len(), 1);
    }

    #[test]
    fn test_convenience_error() {
        let result = error("Failed to process");
        assert!(result.is_error);
        assert_eq!(result.first_text(), Some("Failed to process"));
    }
}
