//! # Dashboard Configuration
//!
//! Settings are resolved in three steps:
//! 1. Defaults ([`DashboardConfig::default`]).
//! 2. An optional YAML file ([`DashboardConfig::load_from_yaml`]); missing keys keep their defaults.
//! 3. Command-line / environment overrides ([`DashboardConfig::merge_overrides`]).
//!
//! The result is validated once, before anything is spawned.
//!
//! ```yaml
//! api_url: http://localhost:5000
//! request_timeout_secs: 10
//! layout: cards
//! buffer_size: 32
//! ```

use crate::view::Layout;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, trace};

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unable to read config file {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to parse yaml config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid api_url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("request_timeout_secs must be greater than zero")]
    ZeroTimeout,

    #[error("buffer_size must be greater than zero")]
    ZeroBuffer,

    #[error("Unable to build HTTP client: {0}")]
    HttpClient(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Root of the order service; `/orders` is appended.
    pub api_url: String,
    pub request_timeout_secs: u64,
    pub layout: Layout,
    /// Capacity of the store's request channel.
    pub buffer_size: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            layout: Layout::default(),
            buffer_size: crate::order_store::DEFAULT_BUFFER_SIZE,
        }
    }
}

impl DashboardConfig {
    pub fn load_from_yaml(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let conf_str = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "Config file read");
        Self::from_yaml(&conf_str)
    }

    pub fn from_yaml(conf_str: &str) -> Result<Self, ConfigError> {
        // An empty file is a valid "all defaults" config.
        if conf_str.trim().is_empty() {
            return Ok(Self::default());
        }
        let conf: DashboardConfig = serde_yaml::from_str(conf_str)?;
        trace!(?conf, "Loaded config");
        Ok(conf)
    }

    /// Applies overrides from the command line. `None` keeps the current value.
    pub fn merge_overrides(
        &mut self,
        api_url: Option<&str>,
        request_timeout_secs: Option<u64>,
        layout: Option<Layout>,
    ) {
        if let Some(url) = api_url {
            self.api_url = url.to_string();
        }
        if let Some(secs) = request_timeout_secs {
            self.request_timeout_secs = secs;
        }
        if let Some(layout) = layout {
            self.layout = layout;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = reqwest::Url::parse(&self.api_url).map_err(|e| ConfigError::InvalidUrl {
            url: self.api_url.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl {
                url: self.api_url.clone(),
                reason: format!("unsupported scheme {}", url.scheme()),
            });
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        if self.buffer_size == 0 {
            return Err(ConfigError::ZeroBuffer);
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let conf = DashboardConfig::default();
        assert_eq!(conf.api_url, "http://localhost:5000");
        assert_eq!(conf.request_timeout(), Duration::from_secs(10));
        assert_eq!(conf.layout, Layout::Table);
        assert!(conf.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let conf = DashboardConfig::from_yaml("layout: cards\nrequest_timeout_secs: 3\n").unwrap();
        assert_eq!(conf.layout, Layout::Cards);
        assert_eq!(conf.request_timeout_secs, 3);
        assert_eq!(conf.api_url, DEFAULT_API_URL);
        assert_eq!(conf.buffer_size, 32);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(
            DashboardConfig::from_yaml("  \n").unwrap(),
            DashboardConfig::default()
        );
    }

    #[test]
    fn test_bad_yaml() {
        let result = DashboardConfig::from_yaml("layout: [");
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        let result = DashboardConfig::from_yaml("layout: grid");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_overrides_win() {
        let mut conf = DashboardConfig::from_yaml("api_url: http://erp.local:8080").unwrap();
        conf.merge_overrides(None, Some(30), None);
        assert_eq!(conf.api_url, "http://erp.local:8080");
        assert_eq!(conf.request_timeout_secs, 30);

        conf.merge_overrides(Some("https://orders.example.com/"), None, Some(Layout::Cards));
        assert_eq!(conf.api_url, "https://orders.example.com/");
        assert_eq!(conf.layout, Layout::Cards);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut conf = DashboardConfig::default();
        conf.api_url = "localhost:5000/orders".into();
        assert!(matches!(conf.validate(), Err(ConfigError::InvalidUrl { .. })));

        let mut conf = DashboardConfig::default();
        conf.api_url = "not a url".into();
        assert!(matches!(conf.validate(), Err(ConfigError::InvalidUrl { .. })));

        let mut conf = DashboardConfig::default();
        conf.request_timeout_secs = 0;
        assert!(matches!(conf.validate(), Err(ConfigError::ZeroTimeout)));

        let mut conf = DashboardConfig::default();
        conf.buffer_size = 0;
        assert!(matches!(conf.validate(), Err(ConfigError::ZeroBuffer)));
    }

    #[test]
    fn test_missing_file() {
        let result = DashboardConfig::load_from_yaml("/nonexistent/factory-erp.yaml");
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
