pub mod sources;

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::constants::{
    DEFAULT_REQUEST_TIMEOUT, DEFAULT_SCROLL_THRESHOLD_PX, DEFAULT_SERVER_URL,
};

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub search: SearchConfig,
    pub recent: RecentConfig,
    pub metadata: ConfigMetadata,
}

impl Config {
    /// Built-in defaults, before any file or environment layer.
    pub fn with_defaults() -> Result<Self, url::ParseError> {
        Ok(Self {
            server: ServerConfig::try_default()?,
            search: SearchConfig::default(),
            recent: RecentConfig::default(),
            metadata: ConfigMetadata::default(),
        })
    }

    /// Base URL without a trailing slash, ready for path joining.
    pub fn server_url(&self) -> &str {
        self.server.base_url.as_str().trim_end_matches('/')
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub base_url: Url,
    pub request_timeout: Duration,
}

impl ServerConfig {
    pub fn try_default() -> Result<Self, url::ParseError> {
        Ok(Self {
            base_url: Url::parse(DEFAULT_SERVER_URL)?,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        })
    }
}

#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub scroll_threshold_px: f32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            scroll_threshold_px: DEFAULT_SCROLL_THRESHOLD_PX,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecentConfig {
    /// Persist the recently-selected list between runs.
    pub persist: bool,
    /// Override for the persisted file; defaults to the platform data dir.
    pub path: Option<PathBuf>,
}

impl Default for RecentConfig {
    fn default() -> Self {
        Self {
            persist: true,
            path: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConfigMetadata {
    pub config_path: Option<PathBuf>,
    pub env_file_loaded: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_catalogue() {
        let config = Config::with_defaults().expect("defaults parse");

        assert_eq!(config.server_url(), DEFAULT_SERVER_URL);
        assert_eq!(config.server.request_timeout, DEFAULT_REQUEST_TIMEOUT);
        assert!(config.recent.persist);
        assert_eq!(
            config.search.scroll_threshold_px,
            DEFAULT_SCROLL_THRESHOLD_PX
        );
    }
}
