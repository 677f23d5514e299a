//! Page layout shell.
//!
//! The shell is everything that survives in-place navigation: document
//! head, navbar, footer and the alert container. Page content is placed in
//! the `#main-content` container, which htmx links swap.

use crate::components::alert_container;
use crate::config::AppConfig;
use crate::html::{link, script, Document, Element, Node};
use crate::htmx::{dispatch, try_dispatch, HtmxRequest};
use crate::ids::AppHtmlIds;

/// Path the bundled client script is served from.
pub const APP_JS_PATH: &str = "/static/app.js";

/// Chrome placed around page content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutOptions {
    pub navbar: Option<Node>,
    pub footer: Option<Node>,
    pub container_id: String,
    pub container_tag: &'static str,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            navbar: None,
            footer: None,
            container_id: AppHtmlIds::MainContent.as_str().to_string(),
            container_tag: "main",
        }
    }
}

/// Wrap content in the layout body: navbar, content container, footer.
pub fn wrap_with_layout(content: Node, options: &LayoutOptions) -> Node {
    let container = Element::new(options.container_tag)
        .id(options.container_id.as_str())
        .child(content);

    let mut body = Vec::with_capacity(4);
    body.extend(options.navbar.clone());
    body.push(Node::from(container));
    body.extend(options.footer.clone());
    body.push(Node::from(alert_container()));
    Node::Fragment(body)
}

/// Document head contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageHead {
    pub title: String,
    pub theme: Option<String>,
    pub stylesheets: Vec<String>,
    pub scripts: Vec<String>,
}

impl PageHead {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            title: config.title.clone(),
            theme: Some(config.theme.clone()).filter(|t| !t.is_empty()),
            stylesheets: vec![config.assets.daisyui_css_url.clone()],
            scripts: vec![
                config.assets.tailwind_url.clone(),
                config.assets.htmx_url.clone(),
                APP_JS_PATH.to_string(),
            ],
        }
    }

    fn nodes(&self) -> Vec<Node> {
        let links = self
            .stylesheets
            .iter()
            .map(|href| link().attr("rel", "stylesheet").attr("href", href.as_str()));
        let scripts = self
            .scripts
            .iter()
            .map(|src| script().attr("src", src.as_str()));
        links.chain(scripts).map(Node::from).collect()
    }
}

/// Full-page wrapper shared by every route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub head: PageHead,
    pub options: LayoutOptions,
}

impl Default for Layout {
    /// Bare shell without navbar or footer.
    fn default() -> Self {
        Self::new(
            PageHead::from_config(&AppConfig::default()),
            LayoutOptions::default(),
        )
    }
}

impl Layout {
    pub fn new(head: PageHead, options: LayoutOptions) -> Self {
        Self { head, options }
    }

    /// Turn content into a complete document.
    pub fn wrap(&self, content: Node) -> Node {
        let doc = Document {
            title: self.head.title.clone(),
            lang: "en".to_string(),
            theme: self.head.theme.clone(),
            head: self.head.nodes(),
            body: vec![wrap_with_layout(content, &self.options)],
        };
        Node::from(doc)
    }

    /// Render `content` as a fragment or full page depending on the request.
    pub fn respond<C>(&self, request: &HtmxRequest, content: C) -> Node
    where
        C: FnOnce() -> Node,
    {
        dispatch(request, content, |c| self.wrap(c))
    }

    pub fn try_respond<C, E>(&self, request: &HtmxRequest, content: C) -> Result<Node, E>
    where
        C: FnOnce() -> Result<Node, E>,
    {
        try_dispatch(request, content, |c| self.wrap(c))
    }
}
