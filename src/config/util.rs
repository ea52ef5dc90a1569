//! Configuration utility functions.

/// Join a sidebar base path with a relative link
///
/// The base always comes from a sidebar group declaration (e.g. `/guide/`)
/// and the link from a leaf entry (e.g. `concepts`). Slashes on either side
/// of the seam are collapsed so the result never contains `//`.
///
/// # Examples
/// ```ignore
/// join_route("/guide/", "concepts")  -> "/guide/concepts"
/// join_route("/spring", "chat-model") -> "/spring/chat-model"
/// join_route("/", "index")           -> "/index"
/// ```
pub fn join_route(base: &str, link: &str) -> String {
    let base = base.trim_end_matches('/');
    let link = link.trim_start_matches('/');
    format!("{base}/{link}")
}

/// Check that a resolved route is ready for the framework's router
///
/// A clean route has no doubled separators and no leftover template
/// markers (`:param` placeholders or `{}` substitution braces). Edit-link
/// patterns keep their `:path` marker on purpose; this check only applies
/// to nav and sidebar targets.
pub fn is_clean_route(route: &str) -> bool {
    !route.is_empty()
        && !route.contains("//")
        && !route.contains(':')
        && !route.contains('{')
        && !route.contains('}')
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_route() {
        // Base with trailing slash
        assert_eq!(join_route("/guide/", "concepts"), "/guide/concepts");

        // Base without trailing slash
        assert_eq!(join_route("/spring", "chat-model"), "/spring/chat-model");

        // Link with leading slash
        assert_eq!(join_route("/spring/", "/rag"), "/spring/rag");

        // Root base
        assert_eq!(join_route("/", "index"), "/index");
    }

    #[test]
    fn test_is_clean_route() {
        assert!(is_clean_route("/guide/concepts"));
        assert!(is_clean_route("/spring/etl-pipeline"));

        // Doubled separator
        assert!(!is_clean_route("/guide//concepts"));

        // Unresolved template markers
        assert!(!is_clean_route("/guide/:path"));
        assert!(!is_clean_route("/guide/{page}"));

        // Empty route
        assert!(!is_clean_route(""));
    }
}
