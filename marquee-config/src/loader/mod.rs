pub mod error;

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants::{
    DEFAULT_CONFIG_FILE, DEFAULT_SERVER_URL, ENV_CONFIG_PATH, ENV_PERSIST_RECENT,
    ENV_RECENT_PATH, ENV_REQUEST_TIMEOUT, ENV_SCROLL_THRESHOLD_PX,
    ENV_SERVER_URL,
};
use crate::models::sources::FileConfig;
use crate::models::Config;
use crate::util::{normalize_server_url, parse_bool, parse_server_url};

use error::ConfigLoadError;

/// Result of a successful load: the resolved config plus non-fatal notes.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: Vec<String>,
}

/// Resolves [`Config`] from defaults, an optional TOML file and the
/// environment, in that order of precedence (later wins).
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_file: Option<PathBuf>,
    skip_env_file: bool,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicit TOML file. A missing explicit file is an error.
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    pub fn with_env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file = Some(path.into());
        self
    }

    pub fn without_env_file(mut self) -> Self {
        self.skip_env_file = true;
        self
    }

    /// Load using the process environment (after applying any `.env` file).
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = self.load_env_file()?;
        let mut load = self.load_with_env(|key| std::env::var(key).ok())?;
        load.config.metadata.env_file_loaded = env_file_loaded;
        Ok(load)
    }

    /// Load with an injected environment lookup.
    pub fn load_with_env<F>(&self, env: F) -> Result<ConfigLoad, ConfigLoadError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::with_defaults().map_err(|err| {
            ConfigLoadError::InvalidServerUrl {
                value: DEFAULT_SERVER_URL.to_string(),
                reason: err.to_string(),
            }
        })?;
        let mut warnings = Vec::new();

        let (path, required) = self.resolve_config_path(&env);
        if let Some(file) = read_file_config(&path, required)? {
            apply_file(&mut config, file, &mut warnings)?;
            config.metadata.config_path = Some(path);
        }

        apply_env(&mut config, &env, &mut warnings)?;
        validate(&config)?;

        if !config.recent.persist && config.recent.path.is_some() {
            warnings.push(
                "recent path is set but persistence is disabled; it will be ignored"
                    .to_string(),
            );
        }

        for warning in &warnings {
            log::warn!("[Config] {}", warning);
        }

        Ok(ConfigLoad { config, warnings })
    }

    fn load_env_file(&self) -> Result<bool, ConfigLoadError> {
        if self.skip_env_file {
            return Ok(false);
        }

        if let Some(path) = &self.env_file {
            dotenvy::from_path(path).map_err(|source| {
                ConfigLoadError::EnvFile {
                    path: path.clone(),
                    source,
                }
            })?;
            return Ok(true);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                log::debug!("[Config] loaded env file {}", path.display());
                Ok(true)
            }
            Err(err) if err.not_found() => Ok(false),
            Err(source) => Err(ConfigLoadError::EnvFile {
                path: PathBuf::from(".env"),
                source,
            }),
        }
    }

    /// Returns the path to read and whether it must exist.
    fn resolve_config_path<F>(&self, env: &F) -> (PathBuf, bool)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = &self.config_path {
            return (path.clone(), true);
        }
        if let Some(raw) = env(ENV_CONFIG_PATH)
            && !raw.trim().is_empty()
        {
            return (PathBuf::from(raw.trim()), true);
        }
        (PathBuf::from(DEFAULT_CONFIG_FILE), false)
    }
}

fn read_file_config(
    path: &Path,
    required: bool,
) -> Result<Option<FileConfig>, ConfigLoadError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err)
            if !required && err.kind() == std::io::ErrorKind::NotFound =>
        {
            return Ok(None);
        }
        Err(source) => {
            return Err(ConfigLoadError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    toml::from_str::<FileConfig>(&contents)
        .map(Some)
        .map_err(|source| ConfigLoadError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

fn apply_file(
    config: &mut Config,
    file: FileConfig,
    warnings: &mut Vec<String>,
) -> Result<(), ConfigLoadError> {
    if let Some(url) = file.server.url {
        apply_server_url(config, &url, warnings)?;
    }
    if let Some(raw) = file.server.request_timeout {
        config.server.request_timeout =
            parse_timeout("server.request_timeout", &raw)?;
    }
    if let Some(threshold) = file.search.scroll_threshold_px {
        config.search.scroll_threshold_px = threshold;
    }
    if let Some(persist) = file.recent.persist {
        config.recent.persist = persist;
    }
    if let Some(path) = file.recent.path {
        config.recent.path = Some(path);
    }
    Ok(())
}

fn apply_env<F>(
    config: &mut Config,
    env: &F,
    warnings: &mut Vec<String>,
) -> Result<(), ConfigLoadError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = non_empty(env(ENV_SERVER_URL)) {
        apply_server_url(config, &url, warnings)?;
    }
    if let Some(raw) = non_empty(env(ENV_REQUEST_TIMEOUT)) {
        config.server.request_timeout =
            parse_timeout(ENV_REQUEST_TIMEOUT, &raw)?;
    }
    if let Some(raw) = non_empty(env(ENV_SCROLL_THRESHOLD_PX)) {
        config.search.scroll_threshold_px =
            raw.trim().parse::<f32>().map_err(|err| {
                ConfigLoadError::InvalidValue {
                    key: ENV_SCROLL_THRESHOLD_PX,
                    reason: err.to_string(),
                }
            })?;
    }
    if let Some(raw) = non_empty(env(ENV_PERSIST_RECENT)) {
        config.recent.persist =
            parse_bool(&raw).ok_or_else(|| ConfigLoadError::InvalidValue {
                key: ENV_PERSIST_RECENT,
                reason: format!("'{raw}' is not a boolean"),
            })?;
    }
    if let Some(raw) = non_empty(env(ENV_RECENT_PATH)) {
        config.recent.path = Some(PathBuf::from(raw.trim()));
    }
    Ok(())
}

fn apply_server_url(
    config: &mut Config,
    raw: &str,
    warnings: &mut Vec<String>,
) -> Result<(), ConfigLoadError> {
    let url = parse_server_url(raw).map_err(|reason| {
        ConfigLoadError::InvalidServerUrl {
            value: raw.to_string(),
            reason,
        }
    })?;
    let normalized = normalize_server_url(raw);
    if normalized != raw {
        warnings.push(format!(
            "normalized server URL from '{}' to '{}'",
            raw, normalized
        ));
    }
    config.server.base_url = url;
    Ok(())
}

fn parse_timeout(
    key: &'static str,
    raw: &str,
) -> Result<Duration, ConfigLoadError> {
    humantime::parse_duration(raw.trim()).map_err(|err| {
        ConfigLoadError::InvalidValue {
            key,
            reason: err.to_string(),
        }
    })
}

fn validate(config: &Config) -> Result<(), ConfigLoadError> {
    let threshold = config.search.scroll_threshold_px;
    if !threshold.is_finite() || threshold < 0.0 {
        return Err(ConfigLoadError::InvalidValue {
            key: "search.scroll_threshold_px",
            reason: format!("{threshold} must be a finite, non-negative number"),
        });
    }
    if config.server.request_timeout.is_zero() {
        return Err(ConfigLoadError::InvalidValue {
            key: "server.request_timeout",
            reason: "timeout must be greater than zero".to_string(),
        });
    }
    Ok(())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|raw| !raw.trim().is_empty())
}
