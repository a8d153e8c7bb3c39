//! Records returned by the catalog tools.

use serde::{Deserialize, Serialize};

/// One entry in the component listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Component {
    pub name: String,
    #[serde(rename = "type")]
    pub component_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Descriptive metadata for a single component.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComponentDetail {
    pub name: String,
    #[serde(rename = "type")]
    pub component_type: String,
    pub category: String,
    pub description: String,
    pub usage: String,
    pub installation: String,
    pub features: Vec<String>,
    pub formats: Vec<String>,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub name: String,
    #[serde(rename = "type")]
    pub category_type: String,
    pub description: String,
    pub components: Vec<String>,
    pub url: String,
}

/// A fetched documentation page; `content` is the unparsed body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DocumentationPage {
    pub name: String,
    #[serde(rename = "type")]
    pub page_type: String,
    pub description: String,
    pub content: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    pub query: String,
    pub found: bool,
    pub description: String,
    pub url: String,
    pub suggestion: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_omits_absent_optionals() {
        let component = Component {
            name: "Checkbox".to_string(),
            component_type: "tailgrids:component".to_string(),
            description: None,
            category: Some("Forms".to_string()),
            url: None,
        };

        let json = serde_json::to_value(&component).unwrap();
        assert_eq!(json["type"], "tailgrids:component");
        assert_eq!(json["category"], "Forms");
        assert!(json.get("description").is_none());
        assert!(json.get("url").is_none());
    }

    #[test]
    fn test_search_result_field_names() {
        let json = r#"{
            "query": "grid",
            "found": false,
            "description": "d",
            "url": "https://tailgrids.com/docs",
            "suggestion": "s"
        }"#;

        let result: SearchResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.query, "grid");
        assert!(!result.found);
    }
}
