//! Server-rendered page helpers for htmx applications.
//!
//! - [`htmx`]: decide between a content fragment and a full page per request
//! - [`layout`]: the persistent page shell around content
//! - [`components`]: daisyUI alerts and a responsive navbar
//! - [`ids`]: centralized HTML element IDs
//! - [`html`]: the renderable markup tree everything is built from
//! - [`server`]: a demo axum application wiring it all together

pub mod components;
pub mod config;
pub mod error;
pub mod html;
pub mod htmx;
pub mod ids;
pub mod layout;
pub mod server;
mod utils;

pub use config::AppConfig;
pub use error::{Error, Result};
pub use html::Node;
pub use htmx::{dispatch, is_htmx_request, try_dispatch, HtmxRequest};
pub use ids::AppHtmlIds;
pub use layout::{wrap_with_layout, Layout, LayoutOptions};
