//! HTTP request handlers for the demo application.

mod pages;
mod static_files;

pub use pages::{alerts, features, index};
pub use static_files::serve_js;
