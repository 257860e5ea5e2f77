//! Minimal element tree for embed fragments and hero block markup.
//!
//! Elements keep their attributes in insertion order so serialized markup is
//! stable. Attributes with an empty value serialize as bare boolean
//! attributes (`allowfullscreen`, `controls`, ...).

use std::borrow::Cow;
use std::fmt;

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: &[&str] = &["source", "track", "img", "br", "input"];

/// A node in an element tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Element(el) => el.fmt(f),
            Node::Text(text) => f.write_str(&escape_text(text)),
        }
    }
}

/// An HTML element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder form of [`Element::set_attr`].
    pub fn with_attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Builder form for a boolean attribute.
    pub fn with_flag(self, name: &str) -> Self {
        self.with_attr(name, "")
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.append(child);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Set an attribute, replacing an existing value in place.
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name.to_string(), value)),
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Class names in the `class` attribute.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attr("class").unwrap_or_default().split_whitespace()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }

    /// Add a class unless it is already present.
    pub fn add_class(&mut self, class: &str) {
        if self.has_class(class) {
            return;
        }
        let joined = match self.attr("class") {
            Some(existing) if !existing.trim().is_empty() => {
                format!("{} {}", existing.trim(), class)
            }
            _ => class.to_string(),
        };
        self.set_attr("class", joined);
    }

    pub fn append(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        })
    }

    /// First descendant with the given tag, depth first. Does not match `self`.
    pub fn find(&self, tag: &str) -> Option<&Element> {
        for child in self.child_elements() {
            if child.tag == tag {
                return Some(child);
            }
            if let Some(found) = child.find(tag) {
                return Some(found);
            }
        }
        None
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }

    pub fn to_html(&self) -> String {
        self.to_string()
    }

    fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.tag.as_str())
    }
}

fn collect_text(el: &Element, out: &mut String) {
    for child in &el.children {
        match child {
            Node::Text(text) => out.push_str(text),
            Node::Element(inner) => collect_text(inner, out),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (name, value) in &self.attributes {
            if value.is_empty() {
                write!(f, " {}", name)?;
            } else {
                write!(f, " {}=\"{}\"", name, escape_attr(value))?;
            }
        }
        f.write_str(">")?;
        if self.is_void() {
            return Ok(());
        }
        for child in &self.children {
            child.fmt(f)?;
        }
        write!(f, "</{}>", self.tag)
    }
}

/// Escape text content.
pub fn escape_text(input: &str) -> Cow<'_, str> {
    escape(input, false)
}

/// Escape a double-quoted attribute value.
pub fn escape_attr(input: &str) -> Cow<'_, str> {
    escape(input, true)
}

fn escape(input: &str, quotes: bool) -> Cow<'_, str> {
    let needs = |c: char| matches!(c, '&' | '<' | '>') || (quotes && c == '"');
    if !input.contains(needs) {
        return Cow::Borrowed(input);
    }
    let mut out = String::with_capacity(input.len() + 8);
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if quotes => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_nested() {
        let el = Element::new("div")
            .with_attr("class", "outer")
            .with_child(Element::new("h1").with_text("Hi"));
        assert_eq!(el.to_html(), "<div class=\"outer\"><h1>Hi</h1></div>");
    }

    #[test]
    fn test_boolean_and_void() {
        let el = Element::new("video")
            .with_flag("controls")
            .with_child(Element::new("source").with_attr("src", "a.mp4"));
        assert_eq!(
            el.to_html(),
            "<video controls><source src=\"a.mp4\"></video>"
        );
    }

    #[test]
    fn test_set_attr_keeps_order() {
        let mut el = Element::new("video")
            .with_flag("controls")
            .with_flag("loop");
        el.set_attr("controls", "true");
        assert_eq!(
            el.attributes().collect::<Vec<_>>(),
            [("controls", "true"), ("loop", "")]
        );
        assert!(!el.has_attr("autoplay"));
    }

    #[test]
    fn test_add_class_no_duplicates() {
        let mut el = Element::new("div").with_attr("class", "block my-block");
        el.add_class("hero-video");
        el.add_class("hero-video");
        assert_eq!(el.attr("class"), Some("block my-block hero-video"));

        let mut bare = Element::new("div");
        bare.add_class("hero-video");
        assert_eq!(bare.attr("class"), Some("hero-video"));
    }

    #[test]
    fn test_escaping() {
        let el = Element::new("h1")
            .with_attr("title", "say \"hi\" & <bye>")
            .with_text("Tom & <Jerry>");
        assert_eq!(
            el.to_html(),
            "<h1 title=\"say &quot;hi&quot; &amp; &lt;bye&gt;\">Tom &amp; &lt;Jerry&gt;</h1>"
        );
        assert!(matches!(escape_text("plain"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_find_and_text_content() {
        let el = Element::new("div").with_child(
            Element::new("div")
                .with_child(Element::new("iframe").with_attr("src", "x"))
                .with_text("caption"),
        );
        assert_eq!(el.find("iframe").and_then(|f| f.attr("src")), Some("x"));
        assert!(el.find("video").is_none());
        assert_eq!(el.text_content(), "caption");
    }
}
