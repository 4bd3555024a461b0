use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub calendar: CalendarConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// `pretty` or `json`
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl ObservabilityConfig {
    pub fn is_json(&self) -> bool {
        self.format == "json"
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct CalendarConfig {
    #[serde(default = "default_date_pattern")]
    pub date_pattern: String,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            date_pattern: default_date_pattern(),
        }
    }
}

fn default_date_pattern() -> String {
    nutrilog_calendar::DEFAULT_PATTERN.to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (NUTRILOG__CALENDAR__DATE_PATTERN, etc.)
    /// 2. Config file specified by path, else CONFIG_PATH, else config/default.toml
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("observability.log_level", default_log_level())?
            .set_default("observability.format", default_log_format())?
            .set_default("calendar.date_pattern", default_date_pattern())?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, a missing file keeps the defaults
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("NUTRILOG")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.observability.log_level.trim().is_empty() {
            return Err("Log level must not be empty".to_string());
        }
        if !matches!(self.observability.format.as_str(), "pretty" | "json") {
            return Err(format!(
                "Unknown log format '{}', expected 'pretty' or 'json'",
                self.observability.format
            ));
        }
        if self.calendar.date_pattern.trim().is_empty() {
            return Err("Calendar date pattern must not be empty".to_string());
        }
        Ok(())
    }
}
