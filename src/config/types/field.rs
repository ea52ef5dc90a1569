//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// A type-safe wrapper for config field paths.
///
/// Each validated config struct exposes a `FIELDS` constant holding one
/// `FieldPath` per reportable field, so diagnostics always print the
/// dotted path the user would write in `docsite.toml` (or the camelCase
/// path of the emitted framework object).
///
/// # Example
///
/// ```ignore
/// impl SitemapConfig {
///     pub const FIELDS: SitemapConfigFields = SitemapConfigFields {
///         hostname: FieldPath::new("sitemap.hostname"),
///     };
/// }
///
/// // Usage:
/// diag.error(SitemapConfig::FIELDS.hostname, "required");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}
