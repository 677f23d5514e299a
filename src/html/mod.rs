//! Renderable markup tree.
//!
//! Pages are assembled as an immutable [`Node`] tree and serialized once,
//! at the end of the request. Keeping the tree structured (instead of
//! concatenating strings) lets the layout shell embed a content fragment
//! unchanged, and lets tests compare pages structurally.

mod document;

pub use document::Document;

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::error::Result;
use crate::utils::html_escape;

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// A node in a markup tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Text content, escaped on render.
    Text(String),
    /// Trusted markup, emitted verbatim.
    Raw(String),
    /// A sequence of sibling nodes without a wrapping element.
    Fragment(Vec<Node>),
    /// A complete HTML document.
    Document(Box<Document>),
}

/// An HTML element with ordered attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute, replacing an earlier value for the same name.
    ///
    /// An empty value renders as a bare boolean attribute (`checked`).
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    fn write_html(&self, out: &mut String) -> Result<()> {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            if !value.is_empty() {
                out.push_str("=\"");
                out.push_str(&html_escape(value));
                out.push('"');
            }
        }
        out.push('>');

        if VOID_ELEMENTS.contains(&self.tag) {
            return Ok(());
        }

        for child in &self.children {
            child.write_html(out)?;
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
        Ok(())
    }
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn raw(markup: impl Into<String>) -> Self {
        Node::Raw(markup.into())
    }

    pub fn fragment<I>(nodes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        Node::Fragment(nodes.into_iter().map(Into::into).collect())
    }

    /// Serialize the tree to an HTML string.
    pub fn render(&self) -> Result<String> {
        let mut out = String::new();
        self.write_html(&mut out)?;
        Ok(out)
    }

    pub(crate) fn write_html(&self, out: &mut String) -> Result<()> {
        match self {
            Node::Element(el) => el.write_html(out)?,
            Node::Text(text) => out.push_str(&html_escape(text)),
            Node::Raw(markup) => out.push_str(markup),
            Node::Fragment(nodes) => {
                for node in nodes {
                    node.write_html(out)?;
                }
            }
            Node::Document(doc) => out.push_str(&doc.render()?),
        }
        Ok(())
    }

    /// Direct children of this node.
    pub fn child_nodes(&self) -> &[Node] {
        match self {
            Node::Element(el) => &el.children,
            Node::Fragment(nodes) => nodes,
            Node::Document(doc) => &doc.body,
            Node::Text(_) | Node::Raw(_) => &[],
        }
    }

    /// True if `other` is this node or appears anywhere beneath it.
    pub fn contains(&self, other: &Node) -> bool {
        self == other || self.child_nodes().iter().any(|c| c.contains(other))
    }

    /// Depth-first search for the element carrying the given `id`.
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        if let Node::Element(el) = self {
            if el.get_attr("id") == Some(id) {
                return Some(el);
            }
        }
        self.child_nodes().iter().find_map(|c| c.find_by_id(id))
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl From<Document> for Node {
    fn from(doc: Document) -> Self {
        Node::Document(Box::new(doc))
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl IntoResponse for Node {
    fn into_response(self) -> Response {
        match self.render() {
            Ok(html) => Html(html).into_response(),
            Err(e) => {
                tracing::error!("Failed to render page: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
            }
        }
    }
}

macro_rules! tags {
    ($($name:ident),* $(,)?) => {
        $(
            #[doc = concat!("`<", stringify!($name), ">` element.")]
            pub fn $name() -> Element {
                Element::new(stringify!($name))
            }
        )*
    };
}

tags!(a, code, div, footer, h1, h2, input, li, link, main, meta, nav, p, script, span, ul);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_nested_elements() {
        let node: Node = div()
            .class("card")
            .child(h1().text("Title"))
            .child(p().text("Body"))
            .into();

        assert_eq!(
            node.render().unwrap(),
            r#"<div class="card"><h1>Title</h1><p>Body</p></div>"#
        );
    }

    #[test]
    fn test_render_escapes_text_and_attributes() {
        let node: Node = a()
            .attr("href", "/search?q=a&b")
            .attr("title", "say \"hi\"")
            .text("<b>not bold</b>")
            .into();

        assert_eq!(
            node.render().unwrap(),
            r#"<a href="/search?q=a&amp;b" title="say &quot;hi&quot;">&lt;b&gt;not bold&lt;/b&gt;</a>"#
        );
    }

    #[test]
    fn test_raw_is_not_escaped() {
        let node = Node::fragment([Node::raw("<svg></svg>"), Node::text("&")]);
        assert_eq!(node.render().unwrap(), "<svg></svg>&amp;");
    }

    #[test]
    fn test_void_and_boolean_attributes() {
        let node: Node = input()
            .attr("type", "radio")
            .attr("checked", "")
            .child("ignored")
            .into();
        assert_eq!(node.render().unwrap(), r#"<input type="radio" checked>"#);
    }

    #[test]
    fn test_attr_replaces_existing_value() {
        let el = div().class("a").id("x").class("b");
        assert_eq!(el.get_attr("class"), Some("b"));
        assert_eq!(
            Node::from(el).render().unwrap(),
            r#"<div class="b" id="x"></div>"#
        );
    }

    #[test]
    fn test_contains_and_find_by_id() {
        let inner: Node = span().id("inner").text("x").into();
        let outer: Node = div().child(ul().child(li().child(inner.clone()))).into();

        assert!(outer.contains(&inner));
        assert!(outer.contains(&outer));
        assert!(!inner.contains(&outer));
        assert_eq!(outer.find_by_id("inner").map(Element::tag), Some("span"));
        assert!(outer.find_by_id("missing").is_none());
    }
}
