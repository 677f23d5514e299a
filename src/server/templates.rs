//! Page content for the demo routes.
//!
//! Each function here is a content producer: it builds only what goes into
//! `#main-content`. Wrapping in the layout shell is left to the dispatcher.

use super::routes;
use crate::components::{
    create_error_alert, create_info_alert, create_nav_link, create_success_alert,
    create_warning_alert,
};
use crate::html::{code, div, h1, h2, li, p, span, ul, Element, Node};
use crate::ids::AppHtmlIds;

const PAGE_CLASS: &str = "container max-w-4xl mx-auto p-8";

fn page_title(text: &str) -> Element {
    h1().class("text-3xl font-bold mb-6").text(text)
}

fn section_title(text: &str, first: bool) -> Element {
    let class = if first {
        "text-2xl font-bold mb-3"
    } else {
        "text-2xl font-bold mb-3 mt-6"
    };
    h2().class(class).text(text)
}

/// List item made of a code snippet followed by a description.
fn api_item(snippet: &str, description: &str) -> Element {
    li().child(code().text(snippet)).text(format!(" - {}", description))
}

fn feature_section(title: &str, intro: &str, items: Vec<Element>) -> Element {
    div()
        .child(section_title(title, true))
        .child(p().class("mb-2").text(intro))
        .child(ul().class("list-disc ml-6 mb-6").children(items))
}

fn nav_button(label: &str, href: &str, class: &str) -> Element {
    create_nav_link(label, href).class(class)
}

pub fn home_content() -> Node {
    let checklist = [
        "Centralized HTML ID management",
        "daisyUI alert components (success, error, warning, info)",
        "htmx partial-render dispatch",
        "Flexible page layout wrapper",
        "Responsive navbar with mobile support",
    ];

    let items = checklist.iter().map(|text| {
        div()
            .class("mb-3")
            .child(span().class("text-2xl mr-3").text("✓"))
            .child(span().text(*text))
    });

    div()
        .class(format!("{} text-center", PAGE_CLASS))
        .child(h1().class("text-4xl font-bold mb-4").text("App Core Demo"))
        .child(
            p().class("text-lg mb-6")
                .text("A library of reusable server-rendered page utilities:"),
        )
        .child(div().class("text-left mb-8").children(items))
        .child(
            div()
                .child(nav_button(
                    "View Alerts Demo",
                    routes::ALERTS,
                    "btn btn-primary btn-lg mr-2",
                ))
                .child(nav_button(
                    "View Features",
                    routes::FEATURES,
                    "btn btn-secondary btn-lg",
                )),
        )
        .into()
}

pub fn alerts_content(dismiss_after_ms: Option<u64>) -> Node {
    div()
        .class(PAGE_CLASS)
        .child(page_title("Alert Components"))
        .child(p().class("text-lg mb-8").text("Examples of all available alert types:"))
        .child(section_title("Success Alert", true))
        .child(
            create_success_alert("Operation completed successfully!")
                .dismiss_after(dismiss_after_ms),
        )
        .child(section_title("Error Alert", false))
        .child(create_error_alert(
            "An error occurred",
            Some("Please check your input and try again"),
        ))
        .child(section_title("Warning Alert", false))
        .child(
            create_warning_alert(
                "Proceeding may cause issues",
                Some("Consider reviewing your changes"),
            )
            .dismiss_after(dismiss_after_ms),
        )
        .child(section_title("Info Alert", false))
        .child(
            create_info_alert(
                "New features available",
                Some("Check out the updated documentation"),
            )
            .dismiss_after(dismiss_after_ms),
        )
        .into()
}

pub fn features_content() -> Node {
    let mut id_items: Vec<Element> = AppHtmlIds::ALL
        .iter()
        .map(|id| li().text(format!("{:?} = '{}'", id, id)))
        .collect();
    id_items.push(api_item("as_selector()", "CSS selector helper"));

    div()
        .class(PAGE_CLASS)
        .child(page_title("Library Features"))
        .child(feature_section(
            "AppHtmlIds",
            "Centralized HTML ID management:",
            id_items,
        ))
        .child(feature_section(
            "Alert Components",
            "Four alert types with auto-dismiss and optional details:",
            vec![
                api_item("create_success_alert()", "Success messages"),
                api_item("create_error_alert()", "Error messages with details"),
                api_item("create_warning_alert()", "Warning messages"),
                api_item("create_info_alert()", "Informational messages"),
            ],
        ))
        .child(feature_section(
            "htmx Utilities",
            "Helpers for in-place navigation:",
            vec![
                api_item("is_htmx_request()", "Detect htmx requests"),
                api_item("dispatch()", "Fragment or full page from one content producer"),
            ],
        ))
        .child(feature_section(
            "Layout Wrapper",
            "Consistent page structure:",
            vec![
                api_item("wrap_with_layout()", "Wrap content with navbar/footer"),
                li().text("Configurable container ID and tag"),
            ],
        ))
        .child(feature_section(
            "Navbar Component",
            "Responsive navigation bar:",
            vec![
                api_item("create_navbar()", "Full navbar with mobile support"),
                api_item("create_nav_link()", "htmx navigation links"),
                li().text("Optional theme selector"),
                li().text("Mobile dropdown menu"),
            ],
        ))
        .into()
}
