//! Configuration settings for betboard.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration struct.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API configuration.
    pub api: ApiConfig,
    /// UI configuration.
    pub ui: UiConfig,
    /// Key bindings.
    pub keybindings: KeyBindings,
}

impl Config {
    /// Load configuration from the default location, falling back to defaults.
    pub fn load_or_default() -> crate::Result<Self> {
        Self::load_or_init(default_path())
    }

    /// Load configuration from `path`, writing the defaults there first if
    /// the file does not exist yet so they can be edited.
    ///
    /// Failing to write the file is logged and otherwise ignored.
    pub fn load_or_init(path: PathBuf) -> crate::Result<Self> {
        if path.exists() {
            return Self::load(Some(path));
        }

        let config = Self::default();
        match config.save(Some(path.clone())) {
            Ok(()) => tracing::info!(path = %path.display(), "wrote default configuration"),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "could not write default configuration")
            }
        }
        Ok(config)
    }

    /// Load configuration from file.
    ///
    /// A missing file yields the default configuration; missing keys fall
    /// back to their defaults.
    pub fn load(path: Option<PathBuf>) -> crate::Result<Self> {
        let config_path = path.unwrap_or_else(default_path);

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let settings = config::Config::builder()
            .add_source(config::File::from(config_path.clone()).format(config::FileFormat::Toml))
            .build()
            .map_err(|e| crate::Error::config(e.to_string()))?;

        let loaded: Self = settings
            .try_deserialize()
            .map_err(|e| crate::Error::config(e.to_string()))?;

        tracing::info!(path = %config_path.display(), "loaded configuration");
        Ok(loaded)
    }

    /// Save configuration to file.
    pub fn save(&self, path: Option<PathBuf>) -> crate::Result<()> {
        let config_path = path.unwrap_or_else(default_path);

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::config(e.to_string()))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

fn default_path() -> PathBuf {
    super::config_dir()
        .map(|p| p.join("config.toml"))
        .unwrap_or_else(|_| PathBuf::from("config.toml"))
}

/// Which backend deployment to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endpoint {
    /// Development service on the local network.
    Local,
    /// Public deployment.
    #[default]
    Remote,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Remote => write!(f, "remote"),
        }
    }
}

/// API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Selected endpoint.
    pub endpoint: Endpoint,
    /// Base URL of the local development service.
    pub local_url: String,
    /// Base URL of the remote service.
    pub remote_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// Base URL for the selected endpoint.
    pub fn base_url(&self) -> &str {
        match self.endpoint {
            Endpoint::Local => &self.local_url,
            Endpoint::Remote => &self.remote_url,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: Endpoint::default(),
            local_url: "http://192.168.18.20:8000".to_string(),
            remote_url: "http://45.189.109.4:8000".to_string(),
            timeout_secs: 30,
        }
    }
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Tick rate in milliseconds for UI redraws.
    pub tick_rate_ms: u64,
    /// Enable mouse support.
    pub mouse_support: bool,
    /// Show status bar.
    pub show_status_bar: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            mouse_support: true,
            show_status_bar: true,
        }
    }
}

/// Key bindings configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Quit the application.
    pub quit: String,
    /// Show help.
    pub help: String,
    /// Navigate up.
    pub up: String,
    /// Navigate down.
    pub down: String,
    /// Refresh the selected bet.
    pub select: String,
    /// Cancel/back.
    pub back: String,
    /// Reload the bet list.
    pub refresh: String,
    /// Switch to the bets view.
    pub bets: String,
    /// Open the new bet form.
    pub new_bet: String,
    /// Sign the selected bet.
    pub sign: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            quit: "q".to_string(),
            help: "?".to_string(),
            up: "k".to_string(),
            down: "j".to_string(),
            select: "Enter".to_string(),
            back: "Esc".to_string(),
            refresh: "r".to_string(),
            bets: "1".to_string(),
            new_bet: "2".to_string(),
            sign: "s".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("betboard-{}-{}.toml", name, uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_default_endpoint_is_remote() {
        let api = ApiConfig::default();
        assert_eq!(api.endpoint, Endpoint::Remote);
        assert_eq!(api.base_url(), "http://45.189.109.4:8000");
    }

    #[test]
    fn test_local_endpoint_selects_local_url() {
        let api = ApiConfig {
            endpoint: Endpoint::Local,
            ..ApiConfig::default()
        };
        assert_eq!(api.base_url(), "http://192.168.18.20:8000");
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = Config::load(Some(temp_path("missing"))).unwrap();
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.keybindings.quit, "q");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let path = temp_path("partial");
        std::fs::write(&path, "[api]\nendpoint = \"local\"\ntimeout_secs = 5\n").unwrap();

        let config = Config::load(Some(path.clone())).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.api.endpoint, Endpoint::Local);
        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(config.api.remote_url, "http://45.189.109.4:8000");
        assert_eq!(config.ui.tick_rate_ms, 250);
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("saved");
        let mut config = Config::default();
        config.api.endpoint = Endpoint::Local;
        config.keybindings.sign = "Ctrl+s".to_string();
        config.save(Some(path.clone())).unwrap();

        let loaded = Config::load(Some(path.clone())).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.api.endpoint, Endpoint::Local);
        assert_eq!(loaded.keybindings.sign, "Ctrl+s");
    }

    #[test]
    fn test_unknown_endpoint_is_config_error() {
        let path = temp_path("bad");
        std::fs::write(&path, "[api]\nendpoint = \"staging\"\n").unwrap();

        let result = Config::load(Some(path.clone()));
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(crate::Error::Config(_))));
    }

    #[test]
    fn test_first_run_writes_defaults() {
        let dir = std::env::temp_dir().join(format!("betboard-init-{}", uuid::Uuid::new_v4()));
        let path = dir.join("config.toml");

        let config = Config::load_or_init(path.clone()).unwrap();
        assert_eq!(config.api.endpoint, Endpoint::Remote);
        assert!(path.exists());

        std::fs::write(&path, "[api]\nendpoint = \"local\"\n").unwrap();
        let edited = Config::load_or_init(path.clone()).unwrap();
        std::fs::remove_dir_all(&dir).ok();

        assert_eq!(edited.api.endpoint, Endpoint::Local);
        assert_eq!(edited.keybindings.quit, "q");
    }
}
