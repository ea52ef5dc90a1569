//! Sidebar trees per content area.
//!
//! Each top-level content area (the guide and the Spring AI section) owns
//! one sidebar: an ordered list of collapsible sections whose leaf links
//! are relative to the area's base path. The framework picks the sidebar
//! whose path prefix matches the current page.

use crate::config::types::{ConfigDiagnostics, FieldPath};
use crate::config::util::{is_clean_route, join_route};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

const SIDEBAR_FIELD: FieldPath = FieldPath::new("themeConfig.sidebar");

/// A sidebar leaf entry. `link` is relative to the owning group's base.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SidebarEntry {
    pub text: String,
    pub link: String,
}

impl SidebarEntry {
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }
}

/// A collapsible group of links within one sidebar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SidebarSection {
    /// Heading label.
    pub text: String,
    /// Collapsed by default.
    pub collapsed: bool,
    /// Ordered leaf entries.
    pub items: Vec<SidebarEntry>,
}

impl SidebarSection {
    pub fn new(text: impl Into<String>, collapsed: bool, items: Vec<SidebarEntry>) -> Self {
        Self {
            text: text.into(),
            collapsed,
            items,
        }
    }
}

/// One content area's sidebar: a base path plus its sections.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SidebarGroup {
    /// Base path prepended to every leaf link.
    pub base: String,
    /// Ordered sections.
    pub items: Vec<SidebarSection>,
}

impl SidebarGroup {
    pub fn new(base: impl Into<String>, items: Vec<SidebarSection>) -> Self {
        Self {
            base: base.into(),
            items,
        }
    }

    /// Resolve a leaf entry to the route the framework will serve.
    pub fn resolve(&self, entry: &SidebarEntry) -> String {
        join_route(&self.base, &entry.link)
    }
}

/// Ordered path-prefix to sidebar mapping.
///
/// Serializes as a JSON object; prefix order is declaration order, which
/// matters because the framework matches prefixes first to last.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SidebarMap {
    pub groups: Vec<(String, SidebarGroup)>,
}

impl SidebarMap {
    pub fn get(&self, prefix: &str) -> Option<&SidebarGroup> {
        self.groups
            .iter()
            .find(|(p, _)| p == prefix)
            .map(|(_, g)| g)
    }

    /// Validate every group in the map.
    ///
    /// # Checks
    /// - prefixes and bases are absolute (`/`-rooted)
    /// - section headings and entry labels are non-empty
    /// - every resolved route is clean (no `//`, no template markers)
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (prefix, group) in &self.groups {
            if !prefix.starts_with('/') {
                diag.error(
                    SIDEBAR_FIELD,
                    format!("sidebar prefix '{prefix}' must start with '/'"),
                );
            }
            if !group.base.starts_with('/') {
                diag.error(
                    SIDEBAR_FIELD,
                    format!("sidebar base '{}' must start with '/'", group.base),
                );
            }

            for section in &group.items {
                if section.text.is_empty() {
                    diag.error(
                        SIDEBAR_FIELD,
                        format!("section under '{prefix}' has an empty heading"),
                    );
                }
                for entry in &section.items {
                    if entry.text.is_empty() {
                        diag.error(
                            SIDEBAR_FIELD,
                            format!("entry '{}' under '{prefix}' has an empty label", entry.link),
                        );
                    }
                    let route = group.resolve(entry);
                    if !is_clean_route(&route) {
                        diag.error_with_hint(
                            SIDEBAR_FIELD,
                            format!("entry '{}' resolves to malformed route '{route}'", entry.text),
                            "links are joined to the group base; drop extra slashes and template markers",
                        );
                    }
                }
            }
        }
    }
}

impl Serialize for SidebarMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (prefix, group) in &self.groups {
            map.serialize_entry(prefix, group)?;
        }
        map.end()
    }
}

// ============================================================================
// builders
// ============================================================================

/// Sidebar sections for the concepts guide area.
pub fn sidebar_guide() -> Vec<SidebarSection> {
    vec![SidebarSection::new(
        "概览",
        false,
        vec![SidebarEntry::new("AI核心概念", "concepts")],
    )]
}

/// Sidebar sections for the Spring AI area.
pub fn sidebar_spring() -> Vec<SidebarSection> {
    vec![
        SidebarSection::new(
            "概览",
            false,
            vec![SidebarEntry::new("Spring AI", "concepts")],
        ),
        SidebarSection::new(
            "教程",
            false,
            vec![
                SidebarEntry::new("聊天模型(Chat Model)", "chat-model"),
                SidebarEntry::new("嵌入模型(Embedding Model)", "embedding-model"),
                SidebarEntry::new("Chat Client", "chat-client"),
                SidebarEntry::new("工具(Tool)/功能调用(Function Calling)", "function-calling"),
                SidebarEntry::new("结构化输出(Structured Output)", "structured-output"),
                SidebarEntry::new("文档检索(Document Retriever)", "document-retriever"),
                SidebarEntry::new("ETL管道(ETL Pipeline)", "etl-pipeline"),
                SidebarEntry::new("向量存储(Vector Store)", "vector-store"),
                SidebarEntry::new("索引增强生成(RAG)", "rag"),
                SidebarEntry::new("聊天记忆(Chat Memory)", "chat-memory"),
                SidebarEntry::new("模型上下文协议(MCP)", "mcp"),
            ],
        ),
    ]
}

/// Full prefix-to-sidebar mapping for the site.
pub fn sidebar() -> SidebarMap {
    SidebarMap {
        groups: vec![
            (
                "/guide".to_string(),
                SidebarGroup::new("/guide/", sidebar_guide()),
            ),
            (
                "/spring".to_string(),
                SidebarGroup::new("/spring/", sidebar_spring()),
            ),
        ],
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sidebar_prefixes_and_bases() {
        let map = sidebar();
        assert_eq!(map.groups.len(), 2);
        assert_eq!(map.get("/guide").unwrap().base, "/guide/");
        assert_eq!(map.get("/spring").unwrap().base, "/spring/");
        assert!(map.get("/missing").is_none());
    }

    #[test]
    fn test_spring_tutorial_entries() {
        let sections = sidebar_spring();
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[1].text, "教程");
        assert_eq!(sections[1].items.len(), 11);
        assert!(!sections[1].collapsed);

        let links: Vec<&str> = sections[1].items.iter().map(|e| e.link.as_str()).collect();
        assert_eq!(links.first(), Some(&"chat-model"));
        assert_eq!(links.last(), Some(&"mcp"));
    }

    #[test]
    fn test_all_resolved_routes_are_clean() {
        // base + link never yields doubled separators or template markers
        let map = sidebar();
        for (_, group) in &map.groups {
            for section in &group.items {
                for entry in &section.items {
                    let route = group.resolve(entry);
                    assert!(is_clean_route(&route), "malformed route: {route}");
                    assert!(route.starts_with(&group.base));
                }
            }
        }
    }

    #[test]
    fn test_builtin_sidebar_validates() {
        let mut diag = ConfigDiagnostics::new();
        sidebar().validate(&mut diag);
        assert!(diag.is_empty(), "built-in sidebar must validate: {diag}");
    }

    #[test]
    fn test_validate_rejects_malformed_entries() {
        let map = SidebarMap {
            groups: vec![(
                "guide".to_string(), // missing leading slash
                SidebarGroup::new(
                    "/guide/",
                    vec![SidebarSection::new(
                        "概览",
                        false,
                        vec![
                            SidebarEntry::new("ok", "concepts"),
                            SidebarEntry::new("double", "/extra//slash"),
                            SidebarEntry::new("marker", ":path"),
                        ],
                    )],
                ),
            )],
        };
        let mut diag = ConfigDiagnostics::new();
        map.validate(&mut diag);
        // prefix + two malformed routes
        assert_eq!(diag.len(), 3);
    }

    #[test]
    fn test_serialize_keyed_by_prefix_in_order() {
        let json = serde_json::to_value(sidebar()).unwrap();
        let obj = json.as_object().unwrap();
        let keys: Vec<&String> = obj.keys().collect();
        assert_eq!(keys, ["/guide", "/spring"]);
        assert_eq!(json["/spring"]["base"], "/spring/");
        assert_eq!(json["/guide"]["items"][0]["items"][0]["link"], "concepts");
    }
}
