//! Reusable page components.

pub mod alerts;
pub mod navbar;

pub use alerts::{
    alert_container, create_error_alert, create_info_alert, create_success_alert,
    create_warning_alert, Alert, AlertKind,
};
pub use navbar::{create_nav_link, create_navbar, NavItem, NavbarOptions};
