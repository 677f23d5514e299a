//! Demo web application.
//!
//! Three pages (home, alerts, features) sharing one layout shell. Each page
//! answers htmx navigations with its content fragment and regular loads
//! with the full document.

mod assets;
mod handlers;
mod routes;
mod templates;

pub use routes::{create_router, ALERTS, FEATURES, HOME};

use std::sync::Arc;

use crate::components::{create_navbar, NavItem, NavbarOptions};
use crate::config::AppConfig;
use crate::layout::{Layout, LayoutOptions, PageHead};

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub layout: Arc<Layout>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let navbar = create_navbar(&NavbarOptions {
            title: config.title.clone(),
            items: vec![
                NavItem::new("Home", HOME),
                NavItem::new("Alerts", ALERTS),
                NavItem::new("Features", FEATURES),
            ],
            home_route: HOME.to_string(),
            theme_selector: config.theme_selector,
            themes: config.themes.clone(),
            current_theme: Some(config.theme.clone()),
        });

        let layout = Layout::new(
            PageHead::from_config(&config),
            LayoutOptions {
                navbar: Some(navbar),
                ..LayoutOptions::default()
            },
        );

        Self {
            config: Arc::new(config),
            layout: Arc::new(layout),
        }
    }
}
