//! Centralized HTML element IDs.
//!
//! Every ID that server code and htmx attributes refer to lives here, so a
//! `hx-target` can never drift from the element it points at.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppHtmlIds {
    /// Container swapped by in-place navigation.
    MainContent,
    /// Target for out-of-band alert insertion.
    AlertContainer,
    Navbar,
    Footer,
}

impl AppHtmlIds {
    pub const ALL: [AppHtmlIds; 4] = [
        AppHtmlIds::MainContent,
        AppHtmlIds::AlertContainer,
        AppHtmlIds::Navbar,
        AppHtmlIds::Footer,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            AppHtmlIds::MainContent => "main-content",
            AppHtmlIds::AlertContainer => "alert-container",
            AppHtmlIds::Navbar => "navbar",
            AppHtmlIds::Footer => "footer",
        }
    }

    /// CSS selector form, e.g. `#main-content`.
    pub fn as_selector(self) -> String {
        format!("#{}", self.as_str())
    }
}

impl fmt::Display for AppHtmlIds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
