//! Responsive navbar with htmx navigation links.

use crate::html::{a, div, input, li, ul, Element, Node};
use crate::ids::AppHtmlIds;

/// A navbar entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: String,
    pub href: String,
}

impl NavItem {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavbarOptions {
    pub title: String,
    pub items: Vec<NavItem>,
    pub home_route: String,
    pub theme_selector: bool,
    pub themes: Vec<String>,
    /// Theme whose selector radio starts checked.
    pub current_theme: Option<String>,
}

impl Default for NavbarOptions {
    fn default() -> Self {
        Self {
            title: String::new(),
            items: Vec::new(),
            home_route: "/".to_string(),
            theme_selector: false,
            themes: Vec::new(),
            current_theme: None,
        }
    }
}

/// Link that swaps `#main-content` in place and pushes the URL to history.
///
/// `href` is kept so the link still works without JavaScript.
pub fn create_nav_link(label: &str, href: &str) -> Element {
    a().attr("href", href)
        .attr("hx-get", href)
        .attr("hx-target", AppHtmlIds::MainContent.as_selector())
        .attr("hx-push-url", "true")
        .text(label)
}

fn menu_items(items: &[NavItem]) -> impl Iterator<Item = Element> + '_ {
    items
        .iter()
        .map(|item| li().child(create_nav_link(&item.label, &item.href)))
}

fn mobile_menu(items: &[NavItem]) -> Element {
    div()
        .class("dropdown")
        .child(
            div()
                .attr("tabindex", "0")
                .attr("role", "button")
                .attr("aria-label", "Open menu")
                .class("btn btn-ghost lg:hidden")
                .text("☰"),
        )
        .child(
            ul().attr("tabindex", "0")
                .class("menu menu-sm dropdown-content bg-base-100 rounded-box z-10 mt-3 w-52 p-2 shadow")
                .children(menu_items(items)),
        )
}

fn theme_selector(themes: &[String], current: Option<&str>) -> Element {
    let options = themes.iter().map(|theme| {
        let mut radio = input()
            .attr("type", "radio")
            .attr("name", "theme-dropdown")
            .class("theme-controller btn btn-sm btn-block btn-ghost justify-start")
            .attr("aria-label", theme.as_str())
            .attr("value", theme.as_str());
        if current == Some(theme.as_str()) {
            radio = radio.attr("checked", "");
        }
        li().child(radio)
    });

    div()
        .class("dropdown dropdown-end")
        .child(
            div()
                .attr("tabindex", "0")
                .attr("role", "button")
                .class("btn btn-ghost")
                .text("Theme"),
        )
        .child(
            ul().attr("tabindex", "0")
                .class("dropdown-content menu bg-base-200 rounded-box z-10 w-40 p-2 shadow")
                .children(options),
        )
}

pub fn create_navbar(options: &NavbarOptions) -> Node {
    let brand =
        create_nav_link(&options.title, &options.home_route).class("btn btn-ghost text-xl");

    let start = div()
        .class("navbar-start")
        .child(mobile_menu(&options.items))
        .child(brand);

    let center = div().class("navbar-center hidden lg:flex").child(
        ul().class("menu menu-horizontal px-1")
            .children(menu_items(&options.items)),
    );

    let mut end = div().class("navbar-end");
    if options.theme_selector && !options.themes.is_empty() {
        end = end.child(theme_selector(
            &options.themes,
            options.current_theme.as_deref(),
        ));
    }

    div()
        .id(AppHtmlIds::Navbar.as_str())
        .class("navbar bg-base-100 shadow-sm")
        .child(start)
        .child(center)
        .child(end)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> NavbarOptions {
        NavbarOptions {
            title: "Demo".to_string(),
            items: vec![NavItem::new("Home", "/"), NavItem::new("Alerts", "/alerts")],
            ..NavbarOptions::default()
        }
    }

    #[test]
    fn test_nav_link_attributes() {
        let link = create_nav_link("Alerts", "/alerts");
        assert_eq!(link.get_attr("href"), Some("/alerts"));
        assert_eq!(link.get_attr("hx-get"), Some("/alerts"));
        assert_eq!(link.get_attr("hx-target"), Some("#main-content"));
        assert_eq!(link.get_attr("hx-push-url"), Some("true"));
    }

    #[test]
    fn test_navbar_renders_links_for_both_menus() {
        let html = create_navbar(&options()).render().unwrap();
        assert!(html.starts_with(r#"<div id="navbar" class="navbar bg-base-100 shadow-sm">"#));
        assert_eq!(html.matches(r#"hx-get="/alerts""#).count(), 2);
        // brand plus Home in both menus
        assert_eq!(html.matches(r#"hx-get="/""#).count(), 3);
        assert!(!html.contains("theme-controller"));
    }

    #[test]
    fn test_navbar_theme_selector() {
        let opts = NavbarOptions {
            theme_selector: true,
            themes: vec!["light".to_string(), "dark".to_string()],
            current_theme: Some("dark".to_string()),
            ..options()
        };
        let html = create_navbar(&opts).render().unwrap();
        assert_eq!(html.matches("theme-controller").count(), 2);
        assert!(html.contains(r#"aria-label="dark" value="dark" checked>"#));
        assert!(!html.contains(r#"value="light" checked"#));
    }
}
