//! Configuration for the ai-agent documentation site.
//!
//! This crate owns everything the external static-site framework needs to
//! know about the site: metadata, locale registration, navigation and
//! sidebar trees, theme labels, and search-provider wiring. It renders
//! nothing itself; [`SiteConfig::framework_config`] produces the single
//! JSON object handed to the framework at build time.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── locale/        # Per-language site definitions
//! │   ├── nav        # Top navigation bar
//! │   ├── sidebar    # Sidebar trees per content area
//! │   └── theme      # Theme labels, footer, social links
//! ├── search         # Search provider credentials + widget labels
//! ├── types/         # ConfigError, diagnostics, field paths
//! ├── util           # Route joining helpers
//! └── mod.rs         # SiteConfig (deployment profile + assembly)
//! ```
//!
//! Deployment-specific values (sitemap hostname, search credentials) come
//! from a `docsite.toml` profile; everything else is defined in code and
//! shared between deployments.

pub mod config;
pub mod logger;

pub use config::{
    ConfigDiagnostics, ConfigError, FieldPath, LocaleConfig, SearchConfig, SiteConfig,
};
