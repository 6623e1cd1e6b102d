//! Test utilities for component markup
//!
//! Rendered markup is compared against expected HTML after canonicalization,
//! so that attribute order and whitespace between tags do not matter.
//!
//! The canonical form:
//! - attributes sorted by name, `class` values whitespace-normalized
//! - whitespace-only text between tags dropped
//! - runs of whitespace inside text collapsed and trimmed
//! - void elements written without a closing tag

use dom_query::{Document, Node};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::markup::escape_html_cow;
use crate::node_ext::NodeExt;

static WHITESPACE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Normalize HTML for comparison by parsing and re-serializing
///
/// # Examples
///
/// ```
/// use ccs_frontend_helpers::test_utils::normalize_html;
///
/// let html1 = "<div  class=\"test\"   id=\"main\" >\n  <p>Hello</p>\n</div>";
/// let html2 = "<div id=\"main\" class=\"test\"><p>Hello</p></div>";
///
/// assert_eq!(normalize_html(html1), normalize_html(html2));
/// ```
pub fn normalize_html(html: &str) -> String {
    let doc = Document::from(html);
    let body = doc.select("body");
    let mut out = String::with_capacity(html.len());
    for node in body.nodes() {
        write_children(node, &mut out);
    }
    out
}

fn write_children(node: &Node, out: &mut String) {
    for child in node.child_nodes() {
        if child.is_element() {
            write_element(&child, out);
        } else if child.is_text() {
            let text = child.text_content();
            let text = WHITESPACE_REGEX.replace_all(text.trim(), " ");
            if !text.is_empty() {
                out.push_str(&escape_html_cow(&text));
            }
        }
    }
}

fn write_element(node: &Node, out: &mut String) {
    let Some(name) = node.tag_name() else {
        return;
    };
    out.push('<');
    out.push_str(&name);
    for (attr, value) in node.sorted_attrs() {
        let value = if attr == "class" {
            value.split_whitespace().collect::<Vec<_>>().join(" ")
        } else {
            value
        };
        out.push(' ');
        out.push_str(&attr);
        out.push_str("=\"");
        out.push_str(&escape_html_cow(&value));
        out.push('"');
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&name.as_str()) {
        return;
    }
    write_children(node, out);
    out.push_str("</");
    out.push_str(&name);
    out.push('>');
}

/// Assert that two HTML strings are equivalent
///
/// This macro normalizes both HTML strings before comparison,
/// ignoring differences in whitespace and attribute order.
///
/// # Examples
///
/// ```
/// use ccs_frontend_helpers::assert_html_eq;
///
/// assert_html_eq!(
///     "<div class=\"a\" id=\"b\"><p>Text</p></div>",
///     "<div id=\"b\" class=\"a\" ><p>Text</p></div>"
/// );
/// ```
#[macro_export]
macro_rules! assert_html_eq {
    ($left:expr, $right:expr) => {
        {
            let left_normalized = $crate::test_utils::normalize_html($left);
            let right_normalized = $crate::test_utils::normalize_html($right);

            if left_normalized != right_normalized {
                panic!(
                    "HTML assertion failed\n\nLeft (normalized):\n{}\n\nRight (normalized):\n{}\n\nOriginal left:\n{}\n\nOriginal right:\n{}",
                    left_normalized,
                    right_normalized,
                    $left,
                    $right
                );
            }
        }
    };
    ($left:expr, $right:expr, $($arg:tt)*) => {
        {
            let left_normalized = $crate::test_utils::normalize_html($left);
            let right_normalized = $crate::test_utils::normalize_html($right);

            if left_normalized != right_normalized {
                panic!(
                    "HTML assertion failed: {}\n\nLeft (normalized):\n{}\n\nRight (normalized):\n{}\n\nOriginal left:\n{}\n\nOriginal right:\n{}",
                    format!($($arg)*),
                    left_normalized,
                    right_normalized,
                    $left,
                    $right
                );
            }
        }
    };
}

/// Compare two HTML strings and return whether they're equivalent
///
/// Like `assert_html_eq!` but returns a bool instead of panicking
pub fn html_eq(html1: &str, html2: &str) -> bool {
    normalize_html(html1) == normalize_html(html2)
}

/// Extract text content from HTML, ignoring all tags
pub fn extract_text(html: &str) -> String {
    let doc = Document::from(html);
    let text = doc.select("body").text();
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Extract all text content from elements matching a selector
pub fn extract_text_by_selector(html: &str, selector: &str) -> Vec<String> {
    let doc = Document::from(html);
    let selection = doc.select(selector);

    selection
        .nodes()
        .iter()
        .map(|node| node.text().trim().to_string())
        .collect()
}

/// Extract attribute values from elements matching a selector
pub fn extract_attrs_by_selector(html: &str, selector: &str, attr: &str) -> Vec<String> {
    let doc = Document::from(html);
    let selection = doc.select(selector);

    selection
        .nodes()
        .iter()
        .filter_map(|node| node.attr(attr).map(|v| v.to_string()))
        .collect()
}

/// Count elements matching a selector
pub fn count_elements(html: &str, selector: &str) -> usize {
    let doc = Document::from(html);
    doc.select(selector).nodes().len()
}

/// Check if HTML contains an element matching a selector
pub fn has_element(html: &str, selector: &str) -> bool {
    count_elements(html, selector) > 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_attribute_order() {
        let html1 = r#"<input type="text" id="email" class="govuk-input">"#;
        let html2 = r#"<input class="govuk-input" id="email" type="text">"#;
        assert_eq!(normalize_html(html1), normalize_html(html2));
        assert_eq!(
            normalize_html(html1),
            r#"<input class="govuk-input" id="email" type="text">"#
        );
    }

    #[test]
    fn test_normalize_whitespace() {
        let html1 = "<div class=\"govuk-form-group\">\n  <p>\n    Hello   World\n  </p>\n</div>";
        let html2 = r#"<div class="govuk-form-group"><p>Hello World</p></div>"#;
        assert_eq!(normalize_html(html1), normalize_html(html2));
    }

    #[test]
    fn test_normalize_class_whitespace() {
        assert!(html_eq(
            r#"<div class="a   b"></div>"#,
            r#"<div class="a b"></div>"#
        ));
    }

    #[test]
    fn test_html_eq_detects_differences() {
        assert!(!html_eq("<div><span>Text1</span></div>", "<div><span>Text2</span></div>"));
        assert!(!html_eq(r#"<div id="a"></div>"#, r#"<div id="b"></div>"#));
    }

    #[test]
    fn test_extract_text() {
        let html = r#"
            <div>
                <h1>Title</h1>
                <p>Paragraph <strong>with bold</strong> text.</p>
            </div>
        "#;

        assert_eq!(extract_text(html), "Title Paragraph with bold text.");
    }

    #[test]
    fn test_extract_text_by_selector() {
        let html = r#"<p class="govuk-hint">First</p><p>Second</p><p class="govuk-hint">Third</p>"#;
        assert_eq!(extract_text_by_selector(html, "p.govuk-hint"), vec!["First", "Third"]);
    }

    #[test]
    fn test_extract_attrs_by_selector() {
        let html = r#"<a href="/page1">1</a><a href="/page2" class="external">2</a>"#;
        assert_eq!(extract_attrs_by_selector(html, "a", "href"), vec!["/page1", "/page2"]);
        assert_eq!(extract_attrs_by_selector(html, "a", "class"), vec!["external"]);
    }

    #[test]
    fn test_count_and_has_element() {
        let html = "<ul><li>1</li><li>2</li><li>3</li></ul>";
        assert_eq!(count_elements(html, "li"), 3);
        assert!(has_element(html, "ul"));
        assert!(!has_element(html, "div"));
    }

    #[test]
    fn test_assert_html_eq_macro() {
        assert_html_eq!(
            "<div class='a' id='b'>Text</div>",
            "<div id='b' class='a'>Text</div>"
        );
    }

    #[test]
    #[should_panic(expected = "HTML assertion failed")]
    fn test_assert_html_eq_macro_panic() {
        assert_html_eq!("<div>Text1</div>", "<div>Text2</div>");
    }
}
