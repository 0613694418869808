//! Document tree types.
//!
//! A page is represented as a tree of [`Node`]s rooted in a [`Document`].
//! Trees are constructed fresh per page and never mutated after
//! construction; only their serialized form is persisted.

/// An ordered collection of attributes.
///
/// Insertion order is preserved so serialization is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    /// Create a new empty attribute collection.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Get an attribute value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set an attribute value. If the attribute already exists, updates it.
    pub fn set(&mut self, name: String, value: String) {
        if let Some((_, v)) = self.entries.iter_mut().find(|(n, _)| n == &name) {
            *v = value;
        } else {
            self.entries.push((name, value));
        }
    }

    /// Check if an attribute exists.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// Iterate over all attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Get the number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no attributes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Tree content: an element or a text run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An element node
    Element(Element),
    /// A text node
    Text(String),
}

impl Node {
    /// Get as element reference.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get as text reference.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Get text content of this node and all descendants.
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(t) => t.clone(),
            Node::Element(e) => e.text_content(),
        }
    }
}

/// An HTML element: tag name, ordered attributes, ordered children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Tag name, e.g. "div".
    pub tag: String,
    /// Attributes in insertion order.
    pub attrs: Attributes,
    /// Child nodes in document order.
    pub children: Vec<Node>,
}

impl Element {
    /// Create a new element with the given tag name.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Attributes::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute, chaining.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(name.into(), value.into());
        self
    }

    /// Append a child element, chaining.
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    /// Append a text node, chaining.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Append any node.
    pub fn push_child(&mut self, node: Node) {
        self.children.push(node);
    }

    /// Get text content of this element and all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            out.push_str(&child.text_content());
        }
        out
    }
}

/// A complete page: doctype name plus the root element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Doctype name; "html" for HTML5 documents.
    pub doctype: String,
    /// Root element, conventionally `<html>`.
    pub root: Element,
}

impl Document {
    /// Create an HTML5 document around the given root element.
    pub fn html5(root: Element) -> Self {
        Self {
            doctype: "html".to_string(),
            root,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attributes_preserve_insertion_order() {
        let elem = Element::new("div")
            .attr("zebra", "1")
            .attr("alpha", "2")
            .attr("mike", "3");

        let names: Vec<&str> = elem.attrs.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["zebra", "alpha", "mike"]);
    }

    #[test]
    fn attr_overwrites_existing_value_in_place() {
        let elem = Element::new("a").attr("href", "a.html").attr("href", "b.html");

        assert_eq!(elem.attrs.len(), 1);
        assert_eq!(elem.attrs.get("href"), Some("b.html"));
    }

    #[test]
    fn text_content_walks_descendants() {
        let p = Element::new("p")
            .text("Hello, ")
            .child(Element::new("em").text("world"))
            .text("!");

        assert_eq!(p.text_content(), "Hello, world!");
    }
}
