//! Site configuration assembly for the docs site.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── locale/        # Per-language definitions
//! │   ├── nav        # Top navigation bar
//! │   ├── sidebar    # Sidebar trees per content area
//! │   └── theme      # Theme labels, footer, social links
//! ├── search         # Provider credentials + widget labels
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! ├── util           # Route helpers
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Deployment profile
//!
//! Locale, navigation, and label definitions are code; only
//! deployment-specific values live in `docsite.toml`:
//!
//! ```toml
//! [sitemap]
//! hostname = "https://docs.example.com"
//!
//! last_updated = true
//!
//! [search]
//! app_id = "XXXXXXXXXX"
//! api_key = "0123456789abcdef0123456789abcdef"
//! index_name = "agentdocs"
//! ```
//!
//! [`SiteConfig::load`] reads a profile, merges the built-in definitions,
//! validates, and [`SiteConfig::framework_config`] emits the one JSON
//! object the external framework consumes. Content existence (whether a
//! nav or sidebar route has a page behind it) is the framework's concern;
//! this crate only guarantees structural soundness.

pub mod locale;
pub mod search;
pub mod types;
mod util;

pub use locale::LocaleConfig;
pub use search::{SearchConfig, SearchLocaleTranslations};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use anyhow::Result;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::{
    fs,
    path::{Path, PathBuf},
};

const LOCALES_FIELD: FieldPath = FieldPath::new("locales");

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration for one deployment of the docs site.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Absolute path to the profile file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Sitemap generation settings.
    pub sitemap: SitemapConfig,

    /// Show last-updated timestamps on pages.
    pub last_updated: bool,

    /// Search provider settings.
    pub search: SearchConfig,

    /// Registered locales, keyed by the framework's locale root key.
    /// A single-language deployment registers exactly `"root"`.
    #[serde(skip)]
    pub locales: FxHashMap<String, LocaleConfig>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            sitemap: SitemapConfig::default(),
            last_updated: true,
            search: SearchConfig::default(),
            locales: FxHashMap::default(),
        }
    }
}

impl SiteConfig {
    /// Load a deployment profile and merge the built-in definitions.
    ///
    /// Unknown profile fields are reported as a warning; validation
    /// failures abort with the collected diagnostics.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        config.config_path = path.to_path_buf();
        config.finalize();
        config.validate()?;

        Ok(config)
    }

    /// Parse a profile from a TOML string and merge built-in definitions.
    /// Does not validate.
    pub fn from_str(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content)?;
        config.finalize();
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        eprintln!();
        crate::log!("warning"; "unknown fields in {}:", display_path);
        crate::log!("warning"; "ignoring:");
        for field in fields {
            eprintln!("- {}", field);
        }
        eprintln!();
    }

    /// Fill in the code-defined parts the profile never carries:
    /// locale registration and the widget label table.
    fn finalize(&mut self) {
        if self.locales.is_empty() {
            self.locales
                .insert("root".to_string(), LocaleConfig::zh());
        }
        if self.search.locales.is_empty() {
            self.search.locales = search::search_locales();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the assembled configuration.
    ///
    /// Collects all validation errors and returns them at once; warnings
    /// (degraded search UI) are printed but do not fail the build.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.sitemap.validate(&mut diag);

        if self.locales.is_empty() {
            diag.error(LOCALES_FIELD, "at least one locale must be registered");
        }
        for locale in self.locales.values() {
            locale.validate(&mut diag);
        }

        let codes: Vec<&str> = self.locales.values().map(|l| l.search_code()).collect();
        self.search.validate(&codes, &mut diag);

        diag.print_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    // ========================================================================
    // assembly
    // ========================================================================

    /// The single configuration object handed to the external framework.
    ///
    /// Deterministic one-shot merge: per-locale definitions under their
    /// root keys, search wiring under `themeConfig`. Key order follows
    /// insertion order.
    pub fn framework_config(&self) -> serde_json::Value {
        json!({
            "sitemap": { "hostname": self.sitemap.hostname },
            "lastUpdated": self.last_updated,
            "locales": self.locales,
            "themeConfig": {
                "search": self.search.framework_value(),
            },
        })
    }
}

// ============================================================================
// sitemap
// ============================================================================

/// Sitemap generation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    /// Canonical origin the sitemap is generated against.
    pub hostname: String,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            hostname: String::new(),
        }
    }
}

pub struct SitemapConfigFields {
    pub hostname: FieldPath,
}

impl SitemapConfig {
    pub const FIELDS: SitemapConfigFields = SitemapConfigFields {
        hostname: FieldPath::new("sitemap.hostname"),
    };

    /// Validate the sitemap hostname.
    ///
    /// # Checks
    /// - `hostname` must be set
    /// - `hostname` must be a valid http/https URL with a host
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.hostname.is_empty() {
            diag.error_with_hint(
                Self::FIELDS.hostname,
                "required for sitemap generation",
                format!(
                    "set {}, e.g.: \"https://example.com\"",
                    Self::FIELDS.hostname
                ),
            );
            return;
        }

        match url::Url::parse(&self.hostname) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::FIELDS.hostname,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::FIELDS.hostname,
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::FIELDS.hostname,
                    format!("invalid URL: {}", e),
                    "use format like https://example.com",
                );
            }
        }
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse a profile with a minimal valid `[sitemap]` section and merge the
/// built-in definitions. Panics if there are unknown fields (to catch
/// profile typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let profile = format!("{extra}\n[sitemap]\nhostname = \"https://docs.example.com\"\n");
    let (mut parsed, ignored) = SiteConfig::parse_with_ignored(&profile).unwrap();
    assert!(
        ignored.is_empty(),
        "test profile has unknown fields: {:?}",
        ignored
    );
    parsed.finalize();
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SEARCH_VARIANT_A: &str = r#"
[search]
app_id = "AAAAAAAAAA"
api_key = "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"
index_name = "agentdocs"
"#;

    const SEARCH_VARIANT_B: &str = r#"
[search]
app_id = "BBBBBBBBBB"
api_key = "bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb"
index_name = "agentdocs-mirror"
"#;

    #[test]
    fn test_from_str_invalid_toml() {
        // Invalid TOML syntax - unclosed bracket
        let result = SiteConfig::from_str("[sitemap\nhostname = \"https://a.com\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();

        assert_eq!(config.config_path, PathBuf::new());
        assert!(config.last_updated);
        assert!(config.sitemap.hostname.is_empty());
        assert_eq!(config.search.provider, "algolia");
        assert!(config.locales.is_empty());
    }

    #[test]
    fn test_finalize_registers_root_locale() {
        // Single-locale deployment: exactly one key, and it is "root"
        let config = test_parse_config("last_updated = true");
        assert!(config.last_updated);
        assert_eq!(config.locales.len(), 1);
        let locale = config.locales.get("root").expect("root locale registered");
        assert_eq!(locale.lang, "zh-Hans");
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[sitemap]\nhostname = \"https://a.com\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.sitemap.hostname, "https://a.com");
        assert!(!ignored.is_empty());
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[sitemap]\nhostname = \"https://a.com\"";
        let (_, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_validate_requires_hostname() {
        let mut config = SiteConfig::default();
        config.finalize();
        assert!(config.validate().is_err());

        config.sitemap.hostname = "https://docs.example.com".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_hostname() {
        for hostname in ["ftp://docs.example.com", "not a url", "https://"] {
            let mut diag = ConfigDiagnostics::new();
            SitemapConfig {
                hostname: hostname.to_string(),
            }
            .validate(&mut diag);
            assert!(diag.has_errors(), "should reject hostname: {hostname}");
        }
    }

    #[test]
    fn test_translations_cover_registered_locales() {
        // Every registered locale has a complete widget label set
        let config = test_parse_config(SEARCH_VARIANT_A);
        for locale in config.locales.values() {
            let labels = config
                .search
                .locales
                .get(locale.search_code())
                .expect("labels for registered locale");
            assert!(labels.is_complete());
        }
    }

    #[test]
    fn test_both_search_variants_validate() {
        // The two deployments share everything except credentials
        for variant in [SEARCH_VARIANT_A, SEARCH_VARIANT_B] {
            let config = test_parse_config(variant);
            assert!(config.validate().is_ok());

            let value = config.search.framework_value();
            let options = &value["options"];
            for key in ["appId", "apiKey", "indexName"] {
                assert!(!options[key].as_str().unwrap().is_empty());
            }
            assert!(!options["locales"].as_object().unwrap().is_empty());
        }
    }

    #[test]
    fn test_framework_config_shape() {
        let config = test_parse_config(SEARCH_VARIANT_A);
        let value = config.framework_config();

        assert_eq!(value["sitemap"]["hostname"], "https://docs.example.com");
        assert_eq!(value["lastUpdated"], true);
        assert_eq!(value["locales"]["root"]["lang"], "zh-Hans");
        assert_eq!(
            value["locales"]["root"]["themeConfig"]["siteTitle"],
            "Ai Agent"
        );
        assert_eq!(value["themeConfig"]["search"]["provider"], "algolia");
        assert_eq!(
            value["themeConfig"]["search"]["options"]["appId"],
            "AAAAAAAAAA"
        );
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "[sitemap]\nhostname = \"https://docs.example.com\"\n{SEARCH_VARIANT_A}"
        )
        .unwrap();

        let config = SiteConfig::load(file.path()).unwrap();
        assert_eq!(config.config_path, file.path());
        assert_eq!(config.locales.len(), 1);
        assert!(config.search.is_enabled());
    }

    #[test]
    fn test_load_missing_file() {
        let err = SiteConfig::load(Path::new("/nonexistent/docsite.toml")).unwrap_err();
        assert!(err.to_string().contains("IO error"));
    }
}
