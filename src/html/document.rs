//! Full HTML document rendered through an askama shell.

use askama::Template;

use super::Node;
use crate::error::Result;

/// A complete page: document head plus body nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub title: String,
    pub lang: String,
    /// Value of the `data-theme` attribute on `<html>`.
    pub theme: Option<String>,
    pub head: Vec<Node>,
    pub body: Vec<Node>,
}

/// Document shell template.
#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate<'a> {
    title: &'a str,
    lang: &'a str,
    theme: &'a str,
    has_theme: bool,
    head: String,
    body: String,
}

impl Document {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lang: "en".to_string(),
            theme: None,
            head: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn render(&self) -> Result<String> {
        let template = PageTemplate {
            title: &self.title,
            lang: &self.lang,
            theme: self.theme.as_deref().unwrap_or_default(),
            has_theme: self.theme.is_some(),
            head: render_all(&self.head)?,
            body: render_all(&self.body)?,
        };
        Ok(template.render()?)
    }
}

fn render_all(nodes: &[Node]) -> Result<String> {
    let mut out = String::new();
    for node in nodes {
        node.write_html(&mut out)?;
    }
    Ok(out)
}
