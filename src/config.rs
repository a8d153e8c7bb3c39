//! Static configuration for the TailGrids MCP server.
//!
//! The server consumes no environment variables or CLI flags; everything it
//! needs to know is in [`McpConfig`] and the [`CategoryTable`].

use serde::Serialize;

/// Fixed URL bundle for the TailGrids website.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct McpConfig {
    pub project_name: String,
    pub base_url: String,
    pub docs_url: String,
    pub components_url: String,
}

impl McpConfig {
    pub fn tailgrids() -> Self {
        Self {
            project_name: "tailgrids-mcp-server".to_string(),
            base_url: "https://tailgrids.com".to_string(),
            docs_url: "https://tailgrids.com/docs".to_string(),
            components_url: "https://tailgrids.com/components".to_string(),
        }
    }

    /// Same URL layout rooted at another base, e.g. a local stub server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            project_name: "tailgrids-mcp-server".to_string(),
            docs_url: format!("{}/docs", base_url),
            components_url: format!("{}/components", base_url),
            base_url,
        }
    }
}

impl Default for McpConfig {
    fn default() -> Self {
        Self::tailgrids()
    }
}

/// One row of the category table.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryEntry {
    pub name: String,
    pub components: Vec<String>,
}

/// Ordered, read-only mapping from category name to component names.
///
/// This is the single source of truth for which categories and components
/// exist. Iteration order is insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryTable {
    entries: Vec<CategoryEntry>,
}

impl CategoryTable {
    /// Build a table from `(category, components)` pairs, keeping their order.
    pub fn new<I, N, C, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (N, C)>,
        N: Into<String>,
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(name, components)| CategoryEntry {
                    name: name.into(),
                    components: components.into_iter().map(Into::into).collect(),
                })
                .collect(),
        }
    }

    /// The built-in TailGrids category table.
    pub fn tailgrids() -> Self {
        Self::new([
            (
                "Alerts",
                vec!["WarningAlert", "SuccessAlert", "DangerAlert", "InfoAlert"],
            ),
            (
                "Buttons",
                vec![
                    "DefaultButton",
                    "OutlineButton",
                    "RoundedButton",
                    "IconButton",
                    "ButtonGroup",
                ],
            ),
            (
                "Cards",
                vec!["BlogCard", "ProductCard", "ProfileCard", "PricingCard"],
            ),
            ("Modals", vec!["PopupModal", "ConfirmModal", "FormModal"]),
            (
                "Navbars",
                vec!["SimpleNavbar", "DropdownNavbar", "SearchNavbar"],
            ),
            (
                "Forms",
                vec!["InputGroup", "Checkbox", "RadioButton", "Toggle", "Select"],
            ),
            ("Tables", vec!["SimpleTable", "StripedTable", "DataTable"]),
            (
                "Badges",
                vec!["DefaultBadge", "PillBadge", "DotBadge"],
            ),
            (
                "Breadcrumbs",
                vec!["SimpleBreadcrumb", "ArrowBreadcrumb"],
            ),
            (
                "Pagination",
                vec!["SimplePagination", "NumberedPagination"],
            ),
            ("Tabs", vec!["UnderlineTabs", "PillTabs", "VerticalTabs"]),
            (
                "Footers",
                vec!["SimpleFooter", "NewsletterFooter", "SocialFooter"],
            ),
        ])
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryEntry> {
        self.entries.iter()
    }

    pub fn get(&self, name: &str) -> Option<&CategoryEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
