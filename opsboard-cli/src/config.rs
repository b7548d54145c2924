//! Configuration loading using figment
//!
//! Sources, lowest to highest precedence:
//!
//! 1. Built-in defaults
//! 2. YAML file: `--config <path>` if given, else `./.opsboard/config.yaml`
//!    when it exists
//! 3. Environment variables prefixed `OPSBOARD_` (e.g. `OPSBOARD_LOG_FILTER`)

use crate::error::{CliError, Result};
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use opsboard_kanban::{DEFAULT_ACTIVATION_DISTANCE, DEFAULT_ACTIVITY_CAPACITY};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "OPSBOARD_";

/// Project-local config file, relative to the working directory
pub fn default_config_path() -> PathBuf {
    Path::new(".opsboard").join("config.yaml")
}

/// Resolved CLI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpsboardConfig {
    /// Seed board file (YAML or JSON); the built-in board when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<PathBuf>,

    /// Tracing filter used when `RUST_LOG` is unset
    pub log_filter: String,

    /// Activity log entries kept in memory
    pub activity_capacity: usize,

    /// Pointer travel, in pixels, before a press becomes a drag
    pub activation_distance: f32,

    /// Name recorded on activity log entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,
}

impl Default for OpsboardConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_filter: "warn".to_string(),
            activity_capacity: DEFAULT_ACTIVITY_CAPACITY,
            activation_distance: DEFAULT_ACTIVATION_DISTANCE,
            actor: None,
        }
    }
}

impl OpsboardConfig {
    /// Load configuration from all sources.
    ///
    /// An explicit path that does not exist is an error; the implicit
    /// project file is simply skipped.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let figment = Self::figment(explicit, &default_config_path())?;
        let config: Self = figment.extract()?;
        debug!(?config, "loaded configuration");
        Ok(config)
    }

    /// Build the figment with all sources in precedence order
    pub fn figment(explicit: Option<&Path>, fallback: &Path) -> Result<Figment> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        match explicit {
            Some(path) if !path.exists() => {
                return Err(CliError::ConfigNotFound {
                    path: path.to_path_buf(),
                })
            }
            Some(path) => {
                debug!(path = %path.display(), "using config file");
                figment = figment.merge(Yaml::file(path));
            }
            None if fallback.exists() => {
                debug!(path = %fallback.display(), "using project config file");
                figment = figment.merge(Yaml::file(fallback));
            }
            None => {}
        }

        Ok(figment.merge(Env::prefixed(ENV_PREFIX).map(|key| key.as_str().to_lowercase().into())))
    }
}
