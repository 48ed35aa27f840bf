use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::candidate::{BaseUrlError, ImageBase, DEFAULT_IMAGE_BASE_URL};
use crate::probe::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_PROBE_TIMEOUT};
use crate::sku::{SkuMode, DEFAULT_SUFFIX};

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("locate XDG directories: {0}")]
    Xdg(#[from] xdg::BaseDirectoriesError),
    #[error("read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error(transparent)]
    BaseUrl(#[from] BaseUrlError),
    #[error("default_suffix must be non-empty letters or digits, got '{0}'")]
    Suffix(String),
    #[error("probe_timeout_secs must be at least 1")]
    Timeout,
}

/// Optional configuration loaded from `~/.config/skuview/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkuviewConfig {
    /// Directory on the image host that holds one folder per SKU.
    pub image_base_url: String,
    /// Suffix used to complete `K-<root>` and bare roots in full mode.
    pub default_suffix: String,
    /// Mode used when the command line does not pick one.
    pub default_mode: SkuMode,
    /// Upper bound for one HEAD probe, in seconds.
    pub probe_timeout_secs: u64,
    /// Connect timeout in seconds; clamped to `probe_timeout_secs`.
    pub connect_timeout_secs: u64,
}

impl Default for SkuviewConfig {
    fn default() -> Self {
        Self {
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            default_suffix: DEFAULT_SUFFIX.to_string(),
            default_mode: SkuMode::FullSku,
            probe_timeout_secs: DEFAULT_PROBE_TIMEOUT.as_secs(),
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT.as_secs(),
        }
    }
}

/// Validated, ready-to-use form of [`SkuviewConfig`].
#[derive(Debug, Clone)]
pub struct Settings {
    pub image_base: ImageBase,
    pub default_suffix: String,
    pub default_mode: SkuMode,
    pub probe_timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            image_base: ImageBase::default(),
            default_suffix: DEFAULT_SUFFIX.to_string(),
            default_mode: SkuMode::FullSku,
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }
}

impl SkuviewConfig {
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn settings(&self) -> Result<Settings, ConfigError> {
        let image_base = ImageBase::parse(&self.image_base_url)?;
        let suffix = self.default_suffix.trim().to_uppercase();
        if suffix.is_empty() || !suffix.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ConfigError::Suffix(self.default_suffix.clone()));
        }
        if self.probe_timeout_secs == 0 {
            return Err(ConfigError::Timeout);
        }
        Ok(Settings {
            image_base,
            default_suffix: suffix,
            default_mode: self.default_mode,
            probe_timeout: Duration::from_secs(self.probe_timeout_secs),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
        })
    }
}

/// Path of an existing config file, if any. Never creates directories.
pub fn config_path() -> Result<Option<PathBuf>, ConfigError> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("skuview")?;
    Ok(xdg_dirs.find_config_file(CONFIG_FILE))
}

pub fn load_from(path: &Path) -> Result<SkuviewConfig, ConfigError> {
    let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&data).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the config file if present, otherwise built-in defaults.
pub fn load_or_default() -> Result<SkuviewConfig, ConfigError> {
    match config_path()? {
        Some(path) => {
            let cfg = load_from(&path)?;
            tracing::debug!("loaded config from {}", path.display());
            Ok(cfg)
        }
        None => Ok(SkuviewConfig::default()),
    }
}
