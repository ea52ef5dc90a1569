//! Theme configuration: labels, footer, edit links, social links.
//!
//! Everything here is handed verbatim to the framework's default theme.
//! The only computed value is the footer copyright range, whose end year
//! is read from the calendar at assembly time and never cached.

use crate::config::locale::{nav, sidebar};
use crate::config::types::{ConfigDiagnostics, FieldPath};
use chrono::Datelike;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

const EDIT_LINK_FIELD: FieldPath = FieldPath::new("themeConfig.editLink.pattern");

/// Theme configuration for one locale.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Title shown in the navbar.
    pub site_title: String,

    /// Logo path under the public assets root.
    pub logo: String,

    /// Ordered top navigation entries.
    pub nav: Vec<nav::NavItem>,

    /// Outline (on-page table of contents) settings.
    pub outline: OutlineConfig,

    /// "Edit this page" link settings.
    pub edit_link: EditLinkConfig,

    /// Prev/next page labels below the content.
    pub doc_footer: DocFooterConfig,

    pub return_to_top_label: String,
    pub dark_mode_switch_label: String,
    pub light_mode_switch_title: String,
    pub dark_mode_switch_title: String,

    /// Last-updated timestamp label.
    pub last_updated: LastUpdatedConfig,

    /// Path-prefix to sidebar mapping.
    pub sidebar: sidebar::SidebarMap,

    /// Social icon links in the navbar.
    pub social_links: Vec<SocialLink>,

    /// Footer message and copyright line.
    pub footer: FooterConfig,
}

impl ThemeConfig {
    /// Theme for the Simplified-Chinese locale.
    pub fn zh() -> Self {
        Self {
            site_title: "Ai Agent".to_string(),
            logo: "/pluginIcon.svg".to_string(),
            nav: nav::nav(),
            outline: OutlineConfig {
                level: OutlineLevel::Deep,
                label: "页面导航".to_string(),
            },
            edit_link: EditLinkConfig {
                pattern: "https://github.com/future0923/ai-agent-example/edit/main/docs/:path"
                    .to_string(),
                text: "在 GitHub 上编辑此页面".to_string(),
            },
            doc_footer: DocFooterConfig {
                prev: "上一页".to_string(),
                next: "下一页".to_string(),
            },
            return_to_top_label: "回到顶部".to_string(),
            dark_mode_switch_label: "主题".to_string(),
            light_mode_switch_title: "切换到浅色模式".to_string(),
            dark_mode_switch_title: "切换到深色模式".to_string(),
            last_updated: LastUpdatedConfig {
                text: "最后更新于".to_string(),
            },
            sidebar: sidebar::sidebar(),
            social_links: vec![SocialLink {
                icon: "github".to_string(),
                link: "https://github.com/future0923/ai-agent-example".to_string(),
            }],
            footer: FooterConfig {
                license_notice: "基于 Apache 许可发布".to_string(),
                since: 2024,
                author_link: "<a href=\"https://github.com/future0923/\" target=\"_blank\">Future0923</a>"
                    .to_string(),
                copyright: "<a href=\"https://beian.miit.gov.cn/\" target=\"_blank\">吉ICP备2024021764号-1</a> | <img src=\"/icon/beian.png\" alt=\"\" style=\"display: inline-block; width: 18px; height: 18px; vertical-align: middle;\" /> <a href=\"https://beian.mps.gov.cn/#/query/webSearch?code=22010302000528\" rel=\"noreferrer\" target=\"_blank\">吉公网安备22010302000528</a>"
                    .to_string(),
            },
        }
    }

    /// Validate the theme tree (nav, sidebar, edit link).
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        nav::validate(&self.nav, diag);
        self.sidebar.validate(diag);

        if self.edit_link.pattern.is_empty() {
            diag.error(EDIT_LINK_FIELD, "edit link pattern must not be empty");
        } else if !self.edit_link.pattern.contains(":path") {
            diag.error_with_hint(
                EDIT_LINK_FIELD,
                "edit link pattern has no ':path' placeholder",
                "the framework substitutes ':path' with the page's source path",
            );
        }
    }
}

// ============================================================================
// outline
// ============================================================================

/// On-page outline settings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutlineConfig {
    pub level: OutlineLevel,
    pub label: String,
}

/// Outline depth: all heading levels or a single depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutlineLevel {
    /// Every heading level ("deep").
    Deep,
    /// A single heading depth (2..=6).
    Depth(u8),
}

impl Serialize for OutlineLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Deep => serializer.serialize_str("deep"),
            Self::Depth(depth) => serializer.serialize_u8(*depth),
        }
    }
}

// ============================================================================
// labels
// ============================================================================

/// "Edit this page" link settings. `pattern` keeps the framework's
/// `:path` placeholder unresolved on purpose.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditLinkConfig {
    pub pattern: String,
    pub text: String,
}

/// Prev/next labels below the page content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocFooterConfig {
    pub prev: String,
    pub next: String,
}

/// Last-updated timestamp label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LastUpdatedConfig {
    pub text: String,
}

/// A social icon link in the navbar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SocialLink {
    pub icon: String,
    pub link: String,
}

// ============================================================================
// footer
// ============================================================================

/// Site footer. The message carries a copyright range from `since` to the
/// current calendar year, rendered at serialization time.
#[derive(Debug, Clone, PartialEq)]
pub struct FooterConfig {
    /// License notice shown before the copyright range.
    pub license_notice: String,
    /// First year of the copyright range.
    pub since: i32,
    /// Author link HTML appended after the range.
    pub author_link: String,
    /// Separate copyright line (registration notices).
    pub copyright: String,
}

impl FooterConfig {
    /// Render the footer message for a given end year.
    pub fn message(&self, year: i32) -> String {
        format!(
            "{} | 版权所有 © {}-{} {}",
            self.license_notice, self.since, year, self.author_link
        )
    }
}

/// Current calendar year, read fresh on every call.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

impl Serialize for FooterConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FooterConfig", 2)?;
        state.serialize_field("message", &self.message(current_year()))?;
        state.serialize_field("copyright", &self.copyright)?;
        state.end()
    }
}

// ============================================================================
// tests
// ============================================================================
