//! daisyUI alert components.

use crate::html::{div, span, Element, Node};
use crate::ids::AppHtmlIds;

const ICON_SUCCESS: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" class="h-6 w-6 shrink-0 stroke-current" fill="none" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z"/></svg>"#;
const ICON_ERROR: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" class="h-6 w-6 shrink-0 stroke-current" fill="none" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M10 14l2-2m0 0l2-2m-2 2l-2-2m2 2l2 2m7-2a9 9 0 11-18 0 9 9 0 0118 0z"/></svg>"#;
const ICON_WARNING: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" class="h-6 w-6 shrink-0 stroke-current" fill="none" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 9v2m0 4h.01m-6.938 4h13.856c1.54 0 2.502-1.667 1.732-3L13.732 4c-.77-1.333-2.694-1.333-3.464 0L3.34 16c-.77 1.333.192 3 1.732 3z"/></svg>"#;
const ICON_INFO: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" class="h-6 w-6 shrink-0 stroke-current" fill="none" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M13 16h-1v-4h-1m1-4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z"/></svg>"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
    Warning,
    Info,
}

impl AlertKind {
    fn class(self) -> &'static str {
        match self {
            AlertKind::Success => "alert alert-success",
            AlertKind::Error => "alert alert-error",
            AlertKind::Warning => "alert alert-warning",
            AlertKind::Info => "alert alert-info",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            AlertKind::Success => ICON_SUCCESS,
            AlertKind::Error => ICON_ERROR,
            AlertKind::Warning => ICON_WARNING,
            AlertKind::Info => ICON_INFO,
        }
    }
}

/// An alert message with optional details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    kind: AlertKind,
    message: String,
    details: Option<String>,
    dismiss_after_ms: Option<u64>,
}

impl Alert {
    pub fn new(kind: AlertKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            details: None,
            dismiss_after_ms: None,
        }
    }

    pub fn details(mut self, details: Option<&str>) -> Self {
        self.details = details.map(str::to_string);
        self
    }

    /// Remove the alert client-side after the given delay.
    ///
    /// Ignored for error alerts, which stay until the user reads them.
    pub fn dismiss_after(mut self, ms: Option<u64>) -> Self {
        self.dismiss_after_ms = ms;
        self
    }

    pub fn kind(&self) -> AlertKind {
        self.kind
    }

    pub fn into_element(self) -> Element {
        let mut body = div().child(span().class("font-bold").text(self.message));
        if let Some(details) = self.details {
            body = body.child(div().class("text-sm").text(details));
        }

        let mut el = div()
            .attr("role", "alert")
            .class(self.kind.class())
            .child(Node::raw(self.kind.icon()))
            .child(body);

        if self.kind != AlertKind::Error {
            if let Some(ms) = self.dismiss_after_ms {
                el = el.attr("data-dismiss-after", ms.to_string());
            }
        }
        el
    }
}

impl From<Alert> for Node {
    fn from(alert: Alert) -> Self {
        Node::Element(alert.into_element())
    }
}

pub fn create_success_alert(message: &str) -> Alert {
    Alert::new(AlertKind::Success, message)
}

pub fn create_error_alert(message: &str, details: Option<&str>) -> Alert {
    Alert::new(AlertKind::Error, message).details(details)
}

pub fn create_warning_alert(message: &str, details: Option<&str>) -> Alert {
    Alert::new(AlertKind::Warning, message).details(details)
}

pub fn create_info_alert(message: &str, details: Option<&str>) -> Alert {
    Alert::new(AlertKind::Info, message).details(details)
}

/// Empty container that alerts are swapped into.
pub fn alert_container() -> Element {
    div()
        .id(AppHtmlIds::AlertContainer.as_str())
        .class("toast toast-top toast-end z-50")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_alert_markup() {
        let node: Node = create_success_alert("Saved").into();
        let html = node.render().unwrap();
        assert!(html.starts_with(r#"<div role="alert" class="alert alert-success">"#));
        assert!(html.contains(r#"<span class="font-bold">Saved</span>"#));
        assert!(!html.contains("text-sm"));
        assert!(!html.contains("data-dismiss-after"));
    }

    #[test]
    fn test_alert_with_details() {
        let el = create_warning_alert("Careful", Some("Check <input>")).into_element();
        let html = Node::from(el).render().unwrap();
        assert!(html.contains("alert-warning"));
        assert!(html.contains(r#"<div class="text-sm">Check &lt;input&gt;</div>"#));
    }

    #[test]
    fn test_auto_dismiss() {
        let info = create_info_alert("Heads up", None)
            .dismiss_after(Some(3000))
            .into_element();
        assert_eq!(info.get_attr("data-dismiss-after"), Some("3000"));

        let disabled = create_info_alert("Heads up", None)
            .dismiss_after(None)
            .into_element();
        assert_eq!(disabled.get_attr("data-dismiss-after"), None);
    }

    #[test]
    fn test_error_alert_never_dismisses() {
        let alert = create_error_alert("Failed", Some("Try again")).dismiss_after(Some(3000));
        assert_eq!(alert.kind(), AlertKind::Error);
        assert_eq!(alert.into_element().get_attr("data-dismiss-after"), None);
    }

    #[test]
    fn test_alert_container_id() {
        assert_eq!(alert_container().get_attr("id"), Some("alert-container"));
    }
}
