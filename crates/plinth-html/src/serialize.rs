//! HTML5 serializer for the document tree.
//!
//! Follows HTML5 serialization rules:
//!
//! - Void elements never get end tags
//! - Text content is escaped
//! - Attribute values are escaped and double-quoted
//! - Raw text elements (script, style) are emitted verbatim
//! - RCDATA elements (title, textarea) escape only `&` and `<`
//!
//! Output is minified and deterministic: attribute and child order is
//! whatever the tree builder produced.

use crate::node::{Document, Element, Node};

/// HTML5 void elements - these never have end tags.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Raw text elements - content is not escaped.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// RCDATA elements - only `&` and `<` are escaped.
const RCDATA_ELEMENTS: &[&str] = &["title", "textarea"];

fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.iter().any(|t| tag.eq_ignore_ascii_case(t))
}

fn is_raw_text_element(tag: &str) -> bool {
    RAW_TEXT_ELEMENTS.iter().any(|t| tag.eq_ignore_ascii_case(t))
}

fn is_rcdata_element(tag: &str) -> bool {
    RCDATA_ELEMENTS.iter().any(|t| tag.eq_ignore_ascii_case(t))
}

/// Serialize a document: `<!DOCTYPE {name}>`, a newline, then the root.
pub fn serialize_document(doc: &Document) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE ");
    out.push_str(&doc.doctype);
    out.push_str(">\n");
    write_element(&mut out, &doc.root);
    out
}

/// Serialize an element and its children.
pub fn serialize_element(elem: &Element) -> String {
    let mut out = String::new();
    write_element(&mut out, elem);
    out
}

/// Escape text content for normal HTML elements.
fn write_text_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

/// Escape text content for RCDATA elements (only & and <).
fn write_rcdata_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            _ => out.push(c),
        }
    }
}

/// Escape an attribute value (written double-quoted).
fn write_attr_value_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

fn write_element(out: &mut String, elem: &Element) {
    out.push('<');
    out.push_str(&elem.tag);

    for (name, value) in elem.attrs.iter() {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        write_attr_value_escaped(out, value);
        out.push('"');
    }

    out.push('>');

    // Void elements have no end tag and no serializable children.
    if is_void_element(&elem.tag) {
        return;
    }

    if is_raw_text_element(&elem.tag) {
        for child in &elem.children {
            if let Node::Text(text) = child {
                out.push_str(text);
            }
        }
    } else if is_rcdata_element(&elem.tag) {
        for child in &elem.children {
            if let Node::Text(text) = child {
                write_rcdata_escaped(out, text);
            }
        }
    } else {
        for child in &elem.children {
            write_node(out, child);
        }
    }

    out.push_str("</");
    out.push_str(&elem.tag);
    out.push('>');
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Element(elem) => write_element(out, elem),
        Node::Text(text) => write_text_escaped(out, text),
    }
}

impl Element {
    /// Serialize this element to an HTML string.
    pub fn to_html(&self) -> String {
        serialize_element(self)
    }
}

impl Document {
    /// Serialize this document to an HTML string, doctype included.
    pub fn to_html(&self) -> String {
        serialize_document(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn void_elements_have_no_end_tag() {
        let div = Element::new("div")
            .child(Element::new("br"))
            .child(Element::new("meta").attr("charset", "utf-8"));

        let html = div.to_html();
        assert_eq!(html, "<div><br><meta charset=\"utf-8\"></div>");
    }

    #[test]
    fn text_is_escaped() {
        let p = Element::new("p").text("<script>alert('xss')</script>");

        let html = p.to_html();
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>alert"));
    }

    #[test]
    fn attribute_values_are_escaped() {
        let a = Element::new("a")
            .attr("href", "test?a=1&b=2")
            .attr("title", "Say \"hello\"");

        let html = a.to_html();
        assert!(html.contains("href=\"test?a=1&amp;b=2\""));
        assert!(html.contains("title=\"Say &quot;hello&quot;\""));
    }

    #[test]
    fn style_content_is_not_escaped() {
        let style = Element::new("style").text("a > b { color: \"red\"; }");

        let html = style.to_html();
        assert_eq!(html, "<style>a > b { color: \"red\"; }</style>");
    }

    #[test]
    fn title_is_rcdata() {
        let title = Element::new("title").text("Test & <Demo>");

        let html = title.to_html();
        // RCDATA: & and < are escaped, > is not
        assert_eq!(html, "<title>Test &amp; &lt;Demo></title>");
    }

    #[test]
    fn document_emits_doctype_and_newline() {
        let doc = Document::html5(Element::new("html").attr("lang", "en"));

        let html = doc.to_html();
        assert!(html.starts_with("<!DOCTYPE html>\n"));
        assert!(html.contains("<html lang=\"en\"></html>"));
    }

    #[test]
    fn attribute_order_is_insertion_order() {
        let elem = Element::new("meta")
            .attr("property", "og:type")
            .attr("content", "website");

        assert_eq!(
            elem.to_html(),
            "<meta property=\"og:type\" content=\"website\">"
        );
    }

    #[test]
    fn nested_elements_serialize_in_order() {
        let ul = Element::new("ul")
            .child(Element::new("li").text("one"))
            .child(Element::new("li").text("two"));

        assert_eq!(ul.to_html(), "<ul><li>one</li><li>two</li></ul>");
    }
}
