//! Search provider wiring and widget label translations.
//!
//! The hosted search service is queried by client-side widget code at page
//! view time; this module only supplies its credentials and the per-locale
//! UI labels. Credentials differ per deployment and come from the
//! `[search]` section of `docsite.toml`:
//!
//! ```toml
//! [search]
//! provider = "algolia"
//! app_id = "XXXXXXXXXX"
//! api_key = "0123456789abcdef0123456789abcdef"
//! index_name = "agentdocs"
//! ```

use crate::config::types::{ConfigDiagnostics, FieldPath};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Search provider configuration for one deployment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Provider identifier understood by the framework.
    pub provider: String,

    /// Application id issued by the search service.
    pub app_id: String,

    /// Search-only API key. Safe to ship to clients; never the admin key.
    pub api_key: String,

    /// Index holding this deployment's pages.
    pub index_name: String,

    /// Per-locale widget labels, keyed by short locale code.
    #[serde(skip)]
    pub locales: FxHashMap<String, SearchLocaleTranslations>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            provider: "algolia".to_string(),
            app_id: String::new(),
            api_key: String::new(),
            index_name: String::new(),
            locales: FxHashMap::default(),
        }
    }
}

pub struct SearchConfigFields {
    pub provider: FieldPath,
    pub app_id: FieldPath,
    pub api_key: FieldPath,
    pub index_name: FieldPath,
    pub locales: FieldPath,
}

impl SearchConfig {
    pub const FIELDS: SearchConfigFields = SearchConfigFields {
        provider: FieldPath::new("search.provider"),
        app_id: FieldPath::new("search.app_id"),
        api_key: FieldPath::new("search.api_key"),
        index_name: FieldPath::new("search.index_name"),
        locales: FieldPath::new("search.locales"),
    };

    /// Search is enabled once any credential is set; a deployment without
    /// credentials simply ships no search box.
    pub fn is_enabled(&self) -> bool {
        !self.app_id.is_empty() || !self.api_key.is_empty() || !self.index_name.is_empty()
    }

    /// Validate credentials and label coverage.
    ///
    /// # Checks
    /// - when enabled, all of provider/app_id/api_key/index_name are non-empty
    /// - every registered locale code has a complete label set (warning:
    ///   the widget falls back to its own defaults, the build still works)
    pub fn validate(&self, locale_codes: &[&str], diag: &mut ConfigDiagnostics) {
        if !self.is_enabled() {
            return;
        }

        for (field, value) in [
            (Self::FIELDS.provider, &self.provider),
            (Self::FIELDS.app_id, &self.app_id),
            (Self::FIELDS.api_key, &self.api_key),
            (Self::FIELDS.index_name, &self.index_name),
        ] {
            if value.is_empty() {
                diag.error_with_hint(
                    field,
                    "must not be empty when search is enabled",
                    "copy the value from the search service dashboard",
                );
            }
        }

        for code in locale_codes {
            match self.locales.get(*code) {
                None => diag.warn(
                    Self::FIELDS.locales,
                    format!("no widget labels for locale `{code}`, widget falls back to defaults"),
                ),
                Some(translations) if !translations.is_complete() => diag.warn(
                    Self::FIELDS.locales,
                    format!("label set for locale `{code}` has empty entries"),
                ),
                Some(_) => {}
            }
        }
    }

    /// Search block of the framework configuration.
    pub fn framework_value(&self) -> serde_json::Value {
        json!({
            "provider": self.provider,
            "options": {
                "appId": self.app_id,
                "apiKey": self.api_key,
                "indexName": self.index_name,
                "locales": self.locales,
            }
        })
    }
}

/// Built-in label table, keyed by short locale code.
pub fn search_locales() -> FxHashMap<String, SearchLocaleTranslations> {
    let mut locales = FxHashMap::default();
    locales.insert("zh".to_string(), SearchLocaleTranslations::zh());
    locales
}

// ============================================================================
// widget labels
// ============================================================================

/// Widget labels for one locale, in the widget's nested shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchLocaleTranslations {
    pub placeholder: String,
    pub translations: WidgetTranslations,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetTranslations {
    pub button: ButtonTranslations,
    pub modal: ModalTranslations,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonTranslations {
    pub button_text: String,
    pub button_aria_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalTranslations {
    pub search_box: SearchBoxTranslations,
    pub start_screen: StartScreenTranslations,
    pub error_screen: ErrorScreenTranslations,
    pub footer: FooterTranslations,
    pub no_results_screen: NoResultsScreenTranslations,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchBoxTranslations {
    pub reset_button_title: String,
    pub reset_button_aria_label: String,
    pub cancel_button_text: String,
    pub cancel_button_aria_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartScreenTranslations {
    pub recent_searches_title: String,
    pub no_recent_searches_text: String,
    pub save_recent_search_button_title: String,
    pub remove_recent_search_button_title: String,
    pub favorite_searches_title: String,
    pub remove_favorite_search_button_title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorScreenTranslations {
    pub title_text: String,
    pub help_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterTranslations {
    pub select_text: String,
    pub navigate_text: String,
    pub close_text: String,
    pub search_by_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoResultsScreenTranslations {
    pub no_results_text: String,
    pub suggested_query_text: String,
    pub report_missing_results_text: String,
    pub report_missing_results_link_text: String,
}

impl SearchLocaleTranslations {
    /// Simplified-Chinese widget labels.
    pub fn zh() -> Self {
        Self {
            placeholder: "搜索文档".to_string(),
            translations: WidgetTranslations {
                button: ButtonTranslations {
                    button_text: "搜索文档".to_string(),
                    button_aria_label: "搜索文档".to_string(),
                },
                modal: ModalTranslations {
                    search_box: SearchBoxTranslations {
                        reset_button_title: "清除查询条件".to_string(),
                        reset_button_aria_label: "清除查询条件".to_string(),
                        cancel_button_text: "取消".to_string(),
                        cancel_button_aria_label: "取消".to_string(),
                    },
                    start_screen: StartScreenTranslations {
                        recent_searches_title: "搜索历史".to_string(),
                        no_recent_searches_text: "没有搜索历史".to_string(),
                        save_recent_search_button_title: "保存至搜索历史".to_string(),
                        remove_recent_search_button_title: "从搜索历史中移除".to_string(),
                        favorite_searches_title: "收藏".to_string(),
                        remove_favorite_search_button_title: "从收藏中移除".to_string(),
                    },
                    error_screen: ErrorScreenTranslations {
                        title_text: "无法获取结果".to_string(),
                        help_text: "你可能需要检查你的网络连接".to_string(),
                    },
                    footer: FooterTranslations {
                        select_text: "选择".to_string(),
                        navigate_text: "切换".to_string(),
                        close_text: "关闭".to_string(),
                        search_by_text: "搜索提供者".to_string(),
                    },
                    no_results_screen: NoResultsScreenTranslations {
                        no_results_text: "无法找到相关结果".to_string(),
                        suggested_query_text: "你可以尝试查询".to_string(),
                        report_missing_results_text: "你认为该查询应该有结果？".to_string(),
                        report_missing_results_link_text: "点击反馈".to_string(),
                    },
                },
            },
        }
    }

    /// True when every leaf label is non-empty.
    pub fn is_complete(&self) -> bool {
        let t = &self.translations;
        let m = &t.modal;
        [
            self.placeholder.as_str(),
            t.button.button_text.as_str(),
            t.button.button_aria_label.as_str(),
            m.search_box.reset_button_title.as_str(),
            m.search_box.reset_button_aria_label.as_str(),
            m.search_box.cancel_button_text.as_str(),
            m.search_box.cancel_button_aria_label.as_str(),
            m.start_screen.recent_searches_title.as_str(),
            m.start_screen.no_recent_searches_text.as_str(),
            m.start_screen.save_recent_search_button_title.as_str(),
            m.start_screen.remove_recent_search_button_title.as_str(),
            m.start_screen.favorite_searches_title.as_str(),
            m.start_screen.remove_favorite_search_button_title.as_str(),
            m.error_screen.title_text.as_str(),
            m.error_screen.help_text.as_str(),
            m.footer.select_text.as_str(),
            m.footer.navigate_text.as_str(),
            m.footer.close_text.as_str(),
            m.footer.search_by_text.as_str(),
            m.no_results_screen.no_results_text.as_str(),
            m.no_results_screen.suggested_query_text.as_str(),
            m.no_results_screen.report_missing_results_text.as_str(),
            m.no_results_screen.report_missing_results_link_text.as_str(),
        ]
        .iter()
        .all(|label| !label.is_empty())
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn enabled_config() -> SearchConfig {
        SearchConfig {
            app_id: "ABCDEF1234".to_string(),
            api_key: "0123456789abcdef0123456789abcdef".to_string(),
            index_name: "agentdocs".to_string(),
            locales: search_locales(),
            ..SearchConfig::default()
        }
    }

    #[test]
    fn test_zh_labels_complete() {
        let locales = search_locales();
        let zh = locales.get("zh").expect("zh labels present");
        assert!(zh.is_complete());
        assert_eq!(zh.placeholder, "搜索文档");
        assert_eq!(zh.translations.modal.footer.search_by_text, "搜索提供者");
    }

    #[test]
    fn test_defaults_disable_search() {
        let config = SearchConfig::default();
        assert_eq!(config.provider, "algolia");
        assert!(!config.is_enabled());

        // Disabled search skips all checks
        let mut diag = ConfigDiagnostics::new();
        config.validate(&["zh"], &mut diag);
        assert!(diag.is_empty());
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_partial_credentials_rejected() {
        let mut config = enabled_config();
        config.api_key.clear();
        config.index_name.clear();

        let mut diag = ConfigDiagnostics::new();
        config.validate(&["zh"], &mut diag);
        assert_eq!(diag.len(), 2);
    }

    #[test]
    fn test_missing_locale_labels_warn_only() {
        let config = enabled_config();
        let mut diag = ConfigDiagnostics::new();
        config.validate(&["zh", "en"], &mut diag);

        // Fallback is degraded UI, not a build failure
        assert!(diag.is_empty());
        assert_eq!(diag.warnings().len(), 1);
        assert!(diag.warnings()[0].1.contains("en"));
    }

    #[test]
    fn test_incomplete_labels_warn() {
        let mut config = enabled_config();
        config
            .locales
            .get_mut("zh")
            .unwrap()
            .translations
            .modal
            .footer
            .close_text
            .clear();

        let mut diag = ConfigDiagnostics::new();
        config.validate(&["zh"], &mut diag);
        assert!(diag.is_empty());
        assert_eq!(diag.warnings().len(), 1);
    }

    #[test]
    fn test_framework_value_shape() {
        let config = enabled_config();
        let value = config.framework_value();

        assert_eq!(value["provider"], "algolia");
        let options = &value["options"];
        assert_eq!(options["appId"], "ABCDEF1234");
        assert_eq!(options["indexName"], "agentdocs");
        assert_eq!(
            options["locales"]["zh"]["translations"]["button"]["buttonText"],
            "搜索文档"
        );
        assert_eq!(
            options["locales"]["zh"]["translations"]["modal"]["noResultsScreen"]["noResultsText"],
            "无法找到相关结果"
        );
    }

    #[test]
    fn test_toml_profile_roundtrip() {
        let config: SearchConfig = toml::from_str(
            r#"
provider = "algolia"
app_id = "APP"
api_key = "KEY"
index_name = "idx"
"#,
        )
        .unwrap();
        assert!(config.is_enabled());
        assert_eq!(config.index_name, "idx");
        // Labels are code-defined, not profile-defined
        assert!(config.locales.is_empty());
    }
}
