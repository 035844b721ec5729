//! Best-effort extraction of visible text and hyperlinks from HTML.
//!
//! Parsing never fails: html5ever recovers from malformed markup, so even
//! truncated or invalid documents yield whatever text and links are present.

use scraper::{ElementRef, Html};

/// Extraction result for a single page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPage {
    /// Visible text content, whitespace-normalized.
    pub text: String,
    /// Raw `href` values of anchor elements, in document order.
    /// May contain relative references; resolution is the caller's concern.
    pub links: Vec<String>,
}

/// Parse an HTML document into its visible text and hyperlink references.
pub fn parse(body: &str) -> ParsedPage {
    let document = Html::parse_document(body);

    let mut text = String::new();
    let mut links = Vec::new();
    walk(document.root_element(), &mut text, &mut links);

    ParsedPage {
        text: normalize_whitespace(&text),
        links,
    }
}

/// Subtrees whose text is never rendered.
fn is_hidden(name: &str) -> bool {
    matches!(name, "script" | "style" | "noscript" | "head" | "template")
}

fn walk(element: ElementRef<'_>, text: &mut String, links: &mut Vec<String>) {
    for child in element.children() {
        if let Some(el) = ElementRef::wrap(child) {
            let name = el.value().name();
            if is_hidden(name) {
                continue;
            }
            if name == "a" {
                if let Some(href) = el.value().attr("href") {
                    links.push(href.to_string());
                }
            }
            walk(el, text, links);
        } else if let Some(t) = child.value().as_text() {
            text.push_str(t);
        }
    }
}

fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        <html><head><title>Ignored</title></head><body>
            <h1>Welcome!</h1>
            <a href="/about">About Us</a>
            <a href="https://www.external.com">External Link</a>
        </body></html>
    "#;

    #[test]
    fn extracts_visible_text() {
        let page = parse(SAMPLE);
        assert!(page.text.contains("Welcome!"));
        assert!(page.text.contains("About Us"));
        assert!(!page.text.contains("Ignored"));
    }

    #[test]
    fn extracts_links_in_document_order() {
        let page = parse(SAMPLE);
        assert_eq!(page.links, vec!["/about", "https://www.external.com"]);
    }

    #[test]
    fn skips_script_and_style_text() {
        let html = "<body><script>var x = 1;</script><style>.a{}</style><p>shown</p></body>";
        let page = parse(html);
        assert_eq!(page.text, "shown");
    }

    #[test]
    fn normalizes_whitespace() {
        let page = parse("<body><p>one\n   two\t three</p></body>");
        assert_eq!(page.text, "one two three");
    }

    #[test]
    fn tolerates_malformed_markup() {
        let page = parse("<body><p>unclosed <a href=\"/x\">link");
        assert!(page.text.contains("unclosed"));
        assert_eq!(page.links, vec!["/x"]);
    }

    #[test]
    fn anchors_without_href_are_ignored() {
        let page = parse("<body><a name=\"top\">anchor</a><a href=\"/y\">y</a></body>");
        assert_eq!(page.links, vec!["/y"]);
    }

    #[test]
    fn empty_document_yields_empty_page() {
        let page = parse("");
        assert_eq!(page.text, "");
        assert!(page.links.is_empty());
    }
}
