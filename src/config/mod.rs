#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::{ContactError, Result};
use crate::utils::validation::{validate_host, validate_positive_number, Validate};
use serde::{Deserialize, Serialize};
use std::env;

pub use toml_config::FileConfig;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
/// 100 KiB, the usual default of JSON body parsers.
pub const DEFAULT_BODY_LIMIT: usize = 100 * 1024;
pub const PORT_ENV: &str = "PORT";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// Fully resolved settings for one server process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub body_limit: usize,
    pub verbose: bool,
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            body_limit: DEFAULT_BODY_LIMIT,
            verbose: false,
            log_format: LogFormat::Compact,
        }
    }
}

/// Values given explicitly on the command line (or through `PORT`).
/// `None` means "not given", so lower layers still apply.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub body_limit: Option<usize>,
    pub verbose: bool,
    pub log_format: Option<LogFormat>,
}

impl ServerConfig {
    /// Defaults plus the `PORT` environment variable, nothing else.
    pub fn from_env() -> Result<Self> {
        let port = parse_port(env::var(PORT_ENV).ok().as_deref())?;
        Ok(Self {
            port,
            ..Self::default()
        })
    }

    /// Layers overrides on top of a config file on top of the defaults.
    pub fn layered(file: &FileConfig, overrides: ConfigOverrides) -> Self {
        let defaults = Self::default();
        let server = file.server.clone().unwrap_or_default();
        let logging = file.logging.clone().unwrap_or_default();

        Self {
            host: overrides.host.or(server.host).unwrap_or(defaults.host),
            port: overrides.port.or(server.port).unwrap_or(defaults.port),
            body_limit: overrides
                .body_limit
                .or(server.body_limit)
                .unwrap_or(defaults.body_limit),
            verbose: overrides.verbose || logging.verbose.unwrap_or(defaults.verbose),
            log_format: overrides
                .log_format
                .or(logging.format)
                .unwrap_or(defaults.log_format),
        }
    }
}

/// Parses a raw `PORT` value. Unset or blank falls back to the default port.
pub fn parse_port(raw: Option<&str>) -> Result<u16> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value.parse::<u16>().map_err(|e| ContactError::ConfigError {
            message: format!("{} must be a port number, got '{}': {}", PORT_ENV, value, e),
        }),
    }
}

impl ConfigProvider for ServerConfig {
    fn host(&self) -> &str {
        &self.host
    }

    fn port(&self) -> u16 {
        self.port
    }

    fn body_limit(&self) -> usize {
        self.body_limit
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        validate_host("host", &self.host)?;
        validate_positive_number("body_limit", self.body_limit, 1)?;

        tracing::debug!("✅ Server configuration validation passed");
        Ok(())
    }
}
