//! Application configuration loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file at all) yields a
//! working demo configuration.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default delay before success/warning/info alerts dismiss themselves.
pub const DEFAULT_ALERT_DISMISS_MS: u64 = 5000;

/// Top-level application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Page title and navbar brand.
    pub title: String,
    /// Initial `data-theme` of the document.
    pub theme: String,
    /// Themes offered by the navbar theme selector.
    pub themes: Vec<String>,
    /// Whether the navbar renders a theme selector.
    pub theme_selector: bool,
    /// Auto-dismiss delay for non-error alerts (0 disables).
    pub alert_dismiss_ms: u64,
    pub assets: AssetsConfig,
}

/// External script and stylesheet locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    pub htmx_url: String,
    pub daisyui_css_url: String,
    pub tailwind_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "App Core Demo".to_string(),
            theme: "light".to_string(),
            themes: vec![
                "light".to_string(),
                "dark".to_string(),
                "cupcake".to_string(),
                "nord".to_string(),
            ],
            theme_selector: true,
            alert_dismiss_ms: DEFAULT_ALERT_DISMISS_MS,
            assets: AssetsConfig::default(),
        }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            htmx_url: "https://unpkg.com/htmx.org@2.0.4".to_string(),
            daisyui_css_url: "https://cdn.jsdelivr.net/npm/daisyui@5".to_string(),
            tailwind_url: "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| Error::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Load from `path` when given, falling back to defaults if it is absent.
    ///
    /// A file that exists but fails to parse is still an error.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        match Self::load(path) {
            Err(Error::ConfigIo { source, .. }) if source.kind() == ErrorKind::NotFound => {
                tracing::debug!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Auto-dismiss delay, or `None` when disabled.
    pub fn alert_dismiss_after(&self) -> Option<u64> {
        (self.alert_dismiss_ms > 0).then_some(self.alert_dismiss_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.alert_dismiss_after(), Some(DEFAULT_ALERT_DISMISS_MS));
    }

    #[test]
    fn test_partial_config_overrides() {
        let config = AppConfig::from_toml_str(
            r#"
            title = "My App"
            alert_dismiss_ms = 0

            [assets]
            htmx_url = "/static/htmx.min.js"
            "#,
        )
        .unwrap();

        assert_eq!(config.title, "My App");
        assert_eq!(config.theme, "light");
        assert_eq!(config.alert_dismiss_after(), None);
        assert_eq!(config.assets.htmx_url, "/static/htmx.min.js");
        assert_eq!(
            config.assets.daisyui_css_url,
            AssetsConfig::default().daisyui_css_url
        );
    }

    #[test]
    fn test_invalid_config_is_error() {
        let err = AppConfig::from_toml_str("title = 42").unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempdir().unwrap();
        let config = AppConfig::load_or_default(Some(&dir.path().join("missing.toml"))).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(AppConfig::load_or_default(None).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.toml");
        std::fs::write(&path, "theme = \"dark\"\nthemes = [\"dark\"]\n").unwrap();

        let config = AppConfig::load_or_default(Some(&path)).unwrap();
        assert_eq!(config.theme, "dark");
        assert_eq!(config.themes, vec!["dark".to_string()]);
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let dir = tempdir().unwrap();
        let err = AppConfig::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, Error::ConfigIo { .. }));
    }
}
