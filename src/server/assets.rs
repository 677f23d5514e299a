//! Static asset constants.

/// Client script: alert auto-dismiss.
pub const JS: &str = include_str!("scripts.js");
