//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`LINSCALE_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Scaling job configuration
    #[serde(default)]
    pub job: JobConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`LINSCALE_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // LINSCALE_JOB__AXIS_FACTOR=3 -> job.axis_factor = 3.0
        figment = figment.merge(Env::prefixed("LINSCALE_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Scaling job configuration
///
/// All component lists must have the same length (2, 3 or 4).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JobConfig {
    /// Vector the scales are applied to
    pub vector: Vec<f32>,
    /// Per-axis factors for the axis-aligned scale
    pub factors: Vec<f32>,
    /// Factor for the uniform scale
    pub uniform_factor: f32,
    /// Direction for the arbitrary-axis scale (need not be unit length)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis: Option<Vec<f32>>,
    /// Factor applied along `axis`
    pub axis_factor: f32,
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            vector: vec![1.0, 0.0],
            factors: vec![2.0, 1.0],
            uniform_factor: 2.0,
            axis: Some(vec![1.0, 1.0]),
            axis_factor: 2.0,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
