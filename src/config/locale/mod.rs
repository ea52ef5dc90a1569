//! Per-language site definitions.
//!
//! A locale bundles everything language-specific: metadata for the HTML
//! head, the navigation and sidebar trees, and the theme labels. The site
//! currently ships one locale (Simplified Chinese) registered under the
//! framework's `root` key; adding a language means adding a constructor
//! here and registering it in [`crate::config::SiteConfig`].

pub mod nav;
pub mod sidebar;
pub mod theme;

pub use nav::NavItem;
pub use sidebar::{SidebarEntry, SidebarGroup, SidebarMap, SidebarSection};
pub use theme::ThemeConfig;

use crate::config::types::{ConfigDiagnostics, FieldPath};
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

const LANG_FIELD: FieldPath = FieldPath::new("locale.lang");
const TITLE_FIELD: FieldPath = FieldPath::new("locale.title");

/// Analytics bootstrap injected into every page's head.
const ANALYTICS_SNIPPET: &str = r#"var _hmt = _hmt || [];
(function() {
  var hm = document.createElement("script");
  hm.src = "https://hm.baidu.com/hm.js?8037de16a5792e203ce7aed2fe892e69";
  var s = document.getElementsByTagName("script")[0];
  s.parentNode.insertBefore(hm, s);
})();"#;

/// One language variant of the site.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleConfig {
    /// BCP 47 language tag (e.g. "zh-Hans").
    pub lang: String,

    /// Site title for this locale.
    pub title: String,

    /// Browser tab title suffix.
    pub title_template: String,

    /// Meta description.
    pub description: String,

    /// Extra head tags, emitted in order.
    pub head: Vec<HeadEntry>,

    /// Theme configuration (nav, sidebar, labels, footer).
    #[serde(rename = "themeConfig")]
    pub theme: ThemeConfig,
}

impl LocaleConfig {
    /// The Simplified-Chinese locale.
    pub fn zh() -> Self {
        Self {
            lang: "zh-Hans".to_string(),
            title: "Ai Agent".to_string(),
            title_template: "智能体(ai agent)开发示例".to_string(),
            description: "智能体（ai agent）开发的相关知识与代码示例".to_string(),
            head: vec![
                HeadEntry::meta("theme-color", "#389BFF"),
                HeadEntry::script(ANALYTICS_SNIPPET),
            ],
            theme: ThemeConfig::zh(),
        }
    }

    /// Short locale code used to key search widget labels
    /// ("zh-Hans" -> "zh").
    pub fn search_code(&self) -> &str {
        self.lang.split('-').next().unwrap_or(&self.lang)
    }

    /// Validate locale metadata and the theme tree.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.lang.is_empty() {
            diag.error(LANG_FIELD, "language tag must not be empty");
        }
        if self.title.is_empty() {
            diag.error(TITLE_FIELD, "title must not be empty");
        }
        self.theme.validate(diag);
    }
}

// ============================================================================
// head entries
// ============================================================================

/// A head-tag directive.
///
/// Serializes in the framework's tuple form: `["meta", {attrs}]` for
/// attribute-only tags, `["script", {}, body]` for inline scripts.
#[derive(Debug, Clone, PartialEq)]
pub enum HeadEntry {
    /// `<meta name content>` tag.
    Meta { name: String, content: String },
    /// Inline `<script>` body.
    Script { body: String },
}

impl HeadEntry {
    pub fn meta(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self::Meta {
            name: name.into(),
            content: content.into(),
        }
    }

    pub fn script(body: impl Into<String>) -> Self {
        Self::Script { body: body.into() }
    }
}

#[derive(Serialize)]
struct MetaAttrs<'a> {
    name: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct NoAttrs {}

impl Serialize for HeadEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Meta { name, content } => {
                let mut seq = serializer.serialize_seq(Some(2))?;
                seq.serialize_element("meta")?;
                seq.serialize_element(&MetaAttrs { name, content })?;
                seq.end()
            }
            Self::Script { body } => {
                let mut seq = serializer.serialize_seq(Some(3))?;
                seq.serialize_element("script")?;
                seq.serialize_element(&NoAttrs {})?;
                seq.serialize_element(body)?;
                seq.end()
            }
        }
    }
}

// ============================================================================
// tests
// ============================================================================
