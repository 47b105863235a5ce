//! Application configuration.
//!
//! Defaults are constants; `FOLIO_*` environment variables (a `.env` file is
//! loaded by the binary) override them, and CLI flags override both.

use std::path::PathBuf;

use crate::api::logs::log_warning;
use crate::render::{Theme, DEFAULT_PAGE_TITLE};

/// Dataset read when no path is given.
pub const DEFAULT_DATA_PATH: &str = "data/portfolio.csv";

/// Directory served under `/assets`.
pub const DEFAULT_ASSETS_DIR: &str = "data/assets";

/// HTTP port.
pub const DEFAULT_PORT: u16 = 3000;

pub const ENV_DATA: &str = "FOLIO_DATA";
pub const ENV_PORT: &str = "FOLIO_PORT";
pub const ENV_ASSETS: &str = "FOLIO_ASSETS";
pub const ENV_THEME: &str = "FOLIO_THEME";
pub const ENV_TITLE: &str = "FOLIO_TITLE";

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub data_path: PathBuf,
    pub assets_dir: PathBuf,
    pub port: u16,
    pub theme: Theme,
    pub page_title: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            port: DEFAULT_PORT,
            theme: Theme::default(),
            page_title: DEFAULT_PAGE_TITLE.to_string(),
        }
    }
}

impl AppConfig {
    /// Read overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read overrides through a lookup function. Invalid values are
    /// reported and replaced by the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup(ENV_DATA).filter(|v| !v.trim().is_empty()) {
            config.data_path = PathBuf::from(path.trim());
        }
        if let Some(dir) = lookup(ENV_ASSETS).filter(|v| !v.trim().is_empty()) {
            config.assets_dir = PathBuf::from(dir.trim());
        }
        if let Some(port) = lookup(ENV_PORT) {
            match port.trim().parse() {
                Ok(p) => config.port = p,
                Err(_) => log_warning(format!("{}='{}' is not a valid port, using {}", ENV_PORT, port, DEFAULT_PORT)),
            }
        }
        if let Some(theme) = lookup(ENV_THEME) {
            match theme.parse() {
                Ok(t) => config.theme = t,
                Err(e) => log_warning(format!("{}: {}", ENV_THEME, e)),
            }
        }
        if let Some(title) = lookup(ENV_TITLE).filter(|v| !v.trim().is_empty()) {
            config.page_title = title.trim().to_string();
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[]));
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.port, 3000);
        assert_eq!(config.data_path, PathBuf::from("data/portfolio.csv"));
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            (ENV_DATA, "/srv/me.csv"),
            (ENV_PORT, "8080"),
            (ENV_THEME, "dark"),
            (ENV_TITLE, "Ada"),
        ]));
        assert_eq!(config.data_path, PathBuf::from("/srv/me.csv"));
        assert_eq!(config.port, 8080);
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.page_title, "Ada");
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = AppConfig::from_lookup(lookup(&[(ENV_PORT, "http"), (ENV_THEME, "sepia")]));
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.theme, Theme::Light);
    }
}
