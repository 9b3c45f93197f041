//! Persistent settings.
//!
//! Stored as TOML in the platform config directory:
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8000/"
//! user_agent = "enroll-admin/0.1.0"
//! ```

use std::path::{Path, PathBuf};

use enroll_client::ApiConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api: ApiConfig,
}

impl Settings {
    /// Load settings from the default path.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load settings from a specific path.
    ///
    /// A missing file yields the defaults; an unparsable one is logged and
    /// also yields the defaults.
    pub fn load_from(path: &Path) -> Self {
        let Ok(content) = std::fs::read_to_string(path) else {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Self::default();
        };
        Self::parse(&content).unwrap_or_else(|error| {
            tracing::warn!(path = %path.display(), %error, "ignoring unreadable settings file");
            Self::default()
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Get the default config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("", "", "enroll-admin")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }

    /// API settings with the command-line/environment override applied.
    #[must_use]
    pub fn api_config(&self, api_url: Option<&str>) -> ApiConfig {
        match api_url {
            Some(url) => self.api.clone().with_base_url(url),
            None => self.api.clone(),
        }
    }
}
