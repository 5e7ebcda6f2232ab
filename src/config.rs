//! Configuration management for the Print Hub server

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// "pretty" or "json"
    pub format: String,
    /// When set, logs are also written to a daily rolling file in this directory
    pub directory: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DataConfig {
    /// Snapshot file imported at startup, if any
    pub initial_snapshot: Option<String>,
    /// Spools with less filament than this are reported as low
    pub low_filament_threshold_g: f64,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Buffer applied when an assignment request does not carry one
    pub default_buffer_hr: f64,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct NotificationsConfig {
    pub channel_capacity: usize,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub scheduler: SchedulerConfig,
    #[serde(default)]
    pub notifications: NotificationsConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Environment variables (with prefix PRINTHUB_), e.g. PRINTHUB_SERVER__PORT
            .add_source(
                Environment::with_prefix("PRINTHUB")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option(
                "data.initial_snapshot",
                env::var("PRINTHUB_SNAPSHOT").ok(),
            )?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            directory: None,
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            initial_snapshot: None,
            low_filament_threshold_g: 100.0,
        }
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            default_buffer_hr: 0.25,
        }
    }
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 64,
        }
    }
}
