//! URL resolution and scope containment helpers.

use url::Url;

use crate::error::Result;

/// Resolve a potentially relative hyperlink reference against a base URL.
///
/// Handles absolute, scheme-relative, absolute-path, relative-path and
/// fragment-only references per RFC 3986. Malformed references are surfaced
/// as errors so the caller can skip the single offending link.
pub fn resolve_url(base: &Url, href: &str) -> Result<String> {
    Ok(base.join(href)?.to_string())
}

/// Scope containment test: a URL is in scope iff its string form starts
/// with the scope root.
///
/// This is a plain prefix test, not a same-origin comparison. A scope root
/// of `https://example.com/a` therefore also admits
/// `https://example.com/ab`; that looseness is the contracted containment
/// policy and is kept as-is.
pub fn in_scope(url: &str, scope_root: &str) -> bool {
    url.starts_with(scope_root)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://example.com/docs/index.html").unwrap()
    }

    #[test]
    fn resolve_absolute_reference() {
        assert_eq!(
            resolve_url(&base(), "https://other.com/page").unwrap(),
            "https://other.com/page"
        );
    }

    #[test]
    fn resolve_absolute_path() {
        assert_eq!(
            resolve_url(&base(), "/about").unwrap(),
            "https://example.com/about"
        );
    }

    #[test]
    fn resolve_relative_path() {
        assert_eq!(
            resolve_url(&base(), "guide.html").unwrap(),
            "https://example.com/docs/guide.html"
        );
    }

    #[test]
    fn resolve_scheme_relative() {
        assert_eq!(
            resolve_url(&base(), "//cdn.example.com/lib.js").unwrap(),
            "https://cdn.example.com/lib.js"
        );
    }

    #[test]
    fn resolve_fragment_only() {
        assert_eq!(
            resolve_url(&base(), "#section").unwrap(),
            "https://example.com/docs/index.html#section"
        );
    }

    #[test]
    fn in_scope_is_a_prefix_test() {
        assert!(in_scope("https://example.com/about", "https://example.com"));
        assert!(!in_scope("https://www.external.com/", "https://example.com"));
    }

    #[test]
    fn in_scope_admits_longer_sibling_path() {
        // Documented looseness of the prefix policy.
        assert!(in_scope(
            "https://example.com/ab",
            "https://example.com/a"
        ));
    }
}
