//! Validation error types for shape checks.
//!
//! Messages are written so that an AI client reading a tool response can tell
//! which field failed and how to fix it.

use std::fmt;

/// A single field that failed a shape check.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// The field that failed validation
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Required field absent (or `null`).
    pub fn missing_field(field: &str) -> Self {
        Self::new(field, "required field is missing")
    }

    /// Field present with the wrong JSON type.
    pub fn wrong_type(field: &str, expected: &str, found: &str) -> Self {
        Self::new(field, format!("expected {}, found {}", expected, found))
    }

    /// Literal tag field holding something other than its tag.
    pub fn wrong_literal(field: &str, expected: &str, found: &str) -> Self {
        Self::new(field, format!("expected literal \"{}\", found {}", expected, found))
            .with_suggestion(format!("Set {} to \"{}\"", field, expected))
    }

    /// Candidate is not a JSON object at all.
    pub fn not_an_object(shape: &str, found: &str) -> Self {
        Self::new(shape, format!("expected an object, found {}", found))
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.field, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, ". {}", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// All violations found while checking one candidate against one shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    shape: String,
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new(shape: impl Into<String>) -> Self {
        Self {
            shape: shape.into(),
            errors: Vec::new(),
        }
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn shape(&self) -> &str {
        &self.shape
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Whether any violation concerns `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|error| error.field == field)
    }

    /// Multi-line message suitable for an MCP error response.
    pub fn to_mcp_message(&self) -> String {
        if self.errors.is_empty() {
            return String::new();
        }

        let mut parts = vec![format!(
            "{} validation failed: {} error(s)",
            self.shape,
            self.errors.len()
        )];

        for (i, error) in self.errors.iter().enumerate() {
            parts.push(format!("{}. {}", i + 1, error));
        }

        parts.join("\n")
    }

    /// `Ok` if no errors were collected.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<String> = self.errors.iter().map(ToString::to_string).collect();
        write!(f, "{} does not match: {}", self.shape, fields.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}
