use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::record::validate_url;

/// Asset base URL used when neither the environment nor the config file sets one.
pub const DEFAULT_BASE_URL: &str = "https://mrstevea.github.io/email-signatures/assets";

/// Environment variable that overrides the asset base URL for one run.
pub const BASE_URL_ENV: &str = "BASE_URL";

/// Logo file name appended to the base URL for every signature.
pub const LOGO_FILENAME: &str = "spendrule-logo.png";

/// Settings loaded from `~/.config/sigsmith/config.toml`.
///
/// Keys missing from the file take their default values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SigsmithConfig {
    /// Asset base URL; the `BASE_URL` environment variable wins over this.
    pub base_url: Option<String>,
    /// Template used when `--template` is not given.
    pub template: PathBuf,
    /// Directory signatures are written to when `--output-dir` is not given.
    pub output_dir: PathBuf,
    /// Team list used by `batch` when `--team` is not given.
    pub team_file: PathBuf,
}

impl Default for SigsmithConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            template: PathBuf::from("templates/signature.html"),
            output_dir: PathBuf::from("output"),
            team_file: PathBuf::from("team.json"),
        }
    }
}

/// Base URL that failed to parse as an absolute URL.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid base URL {value:?} from {origin}: expected an absolute URL")]
pub struct ConfigError {
    pub origin: &'static str,
    pub value: String,
}

/// Process-wide settings the composer reads. Resolved once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    base_url: String,
}

impl Configuration {
    /// Builds a configuration from an explicit base URL, checking that it is absolute.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        Self::checked(base_url.into(), "argument")
    }

    /// Resolves the base URL: environment override, then config file, then default.
    ///
    /// An empty environment value counts as unset.
    pub fn resolve(env_override: Option<&str>, file: &SigsmithConfig) -> Result<Self, ConfigError> {
        if let Some(value) = env_override.filter(|v| !v.is_empty()) {
            return Self::checked(value.to_string(), BASE_URL_ENV);
        }
        if let Some(value) = file.base_url.as_deref() {
            return Self::checked(value.to_string(), "config file");
        }
        Ok(Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Resolves against the live `BASE_URL` environment variable.
    pub fn from_env(file: &SigsmithConfig) -> Result<Self, ConfigError> {
        let env = std::env::var(BASE_URL_ENV).ok();
        Self::resolve(env.as_deref(), file)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn checked(value: String, origin: &'static str) -> Result<Self, ConfigError> {
        if validate_url(origin, &value).is_err() {
            return Err(ConfigError { origin, value });
        }
        Ok(Self { base_url: value })
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("sigsmith")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SigsmithConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SigsmithConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: SigsmithConfig = toml::from_str(&data)?;
    Ok(cfg)
}
