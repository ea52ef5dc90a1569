//! Top navigation bar definition.
//!
//! The nav tree is fixed at compile time; [`nav`] returns the ordered
//! sequence the framework renders in the top bar. `active_match` is a
//! path prefix the router compares against the current page path to
//! decide which entry to highlight.

use crate::config::types::{ConfigDiagnostics, FieldPath};
use serde::Serialize;

const NAV_FIELD: FieldPath = FieldPath::new("themeConfig.nav");

/// A top navigation bar entry.
///
/// An entry either links somewhere (`link`) or groups nested entries
/// (`items`) shown as a dropdown. One of the two must be present.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    /// Display label.
    pub text: String,

    /// Target route or external URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// Path prefix used to highlight the active entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_match: Option<String>,

    /// Nested entries (dropdown menu).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<NavItem>,
}

impl NavItem {
    /// Entry pointing at a content page, highlighted under `active_match`.
    pub fn page(
        text: impl Into<String>,
        link: impl Into<String>,
        active_match: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            link: Some(link.into()),
            active_match: Some(active_match.into()),
            items: Vec::new(),
        }
    }

    /// Entry pointing at an external site; never highlighted.
    pub fn external(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: Some(link.into()),
            active_match: None,
            items: Vec::new(),
        }
    }
}

/// Ordered top navigation for the docs site.
pub fn nav() -> Vec<NavItem> {
    vec![
        NavItem::page("概念", "/guide/concepts", "/guide/"),
        NavItem::page("SpringAI", "/spring/concepts", "/spring/"),
        NavItem::external("DebugTools", "https://debug-tools.cc/zh"),
    ]
}

/// Validate a nav tree.
///
/// # Checks
/// - `text` must be non-empty
/// - each entry carries a non-empty `link` or non-empty `items`, never neither
pub fn validate(items: &[NavItem], diag: &mut ConfigDiagnostics) {
    for item in items {
        if item.text.is_empty() {
            diag.error(NAV_FIELD, "nav entry has an empty label");
        }

        let has_link = item.link.as_deref().is_some_and(|l| !l.is_empty());
        if !has_link && item.items.is_empty() {
            diag.error(
                NAV_FIELD,
                format!("nav entry '{}' has neither a link nor nested items", item.text),
            );
        }

        validate(&item.items, diag);
    }
}

// ============================================================================
// tests
// ============================================================================
