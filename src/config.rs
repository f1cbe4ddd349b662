//! Run configuration, loaded from an optional `routemap.toml`.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File name of the emitted sitemap, fixed under the public root.
pub const SITEMAP_FILE: &str = "sitemap.xml";

/// Symbolic name of the sitemap-serving route itself, always excluded.
pub const RESERVED_ROUTE_NAME: &str = "routemap.sitemap";

/// Configuration for a mapping run.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// HTTP method tokens gating which routes are eligible.
    pub allowed_methods: Vec<String>,
    /// Attempt a desktop notification after the run. Notification failures
    /// never fail the run; the console summary is printed either way.
    pub notifications: bool,
    /// Base URL the application is served from; emitted `loc` values are
    /// resolved against it.
    pub base_url: String,
    /// Publicly served directory the sitemap is written into.
    pub public_root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            allowed_methods: vec!["GET".to_string()],
            notifications: false,
            base_url: "http://localhost/".to_string(),
            public_root: PathBuf::from("public"),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file, falling back to defaults when
    /// the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&text)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Full path of the output artifact.
    pub fn sitemap_path(&self) -> PathBuf {
        self.public_root.join(SITEMAP_FILE)
    }

    /// Whether any of the route's methods is in the allow-set.
    pub fn method_allowed(&self, methods: &[String]) -> bool {
        methods
            .iter()
            .any(|m| self.allowed_methods.iter().any(|a| a.eq_ignore_ascii_case(m)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.allowed_methods, vec!["GET"]);
        assert!(!config.notifications);
        assert_eq!(config.sitemap_path(), PathBuf::from("public/sitemap.xml"));
    }

    #[test]
    fn test_parse_toml() {
        let config: Config = toml::from_str(
            r#"
            allowed_methods = ["GET", "HEAD"]
            notifications = true
            base_url = "https://example.com/"
            public_root = "www"
            "#,
        )
        .unwrap();
        assert_eq!(config.allowed_methods.len(), 2);
        assert!(config.notifications);
        assert_eq!(config.sitemap_path(), PathBuf::from("www/sitemap.xml"));
    }

    #[test]
    fn test_method_allowed_case_insensitive() {
        let config = Config::default();
        assert!(config.method_allowed(&["get".to_string(), "POST".to_string()]));
        assert!(!config.method_allowed(&["POST".to_string()]));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = Config::load(Path::new("/nonexistent/routemap.toml")).unwrap();
        assert_eq!(config.allowed_methods, vec!["GET"]);
    }
}
