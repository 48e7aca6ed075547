use crate::config::{ConfigOverrides, FileConfig, LogFormat, ServerConfig};
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "portfolio-contact")]
#[command(about = "Contact form backend for the portfolio site")]
pub struct CliArgs {
    #[arg(long, env = "PORT", help = "Port to listen on [default: 5000]")]
    pub port: Option<u16>,

    #[arg(long, help = "Address to bind [default: 0.0.0.0]")]
    pub host: Option<String>,

    #[arg(long, help = "Maximum JSON body size in bytes [default: 102400]")]
    pub body_limit: Option<usize>,

    #[arg(long, value_enum, help = "Log output format [default: compact]")]
    pub log_format: Option<LogFormat>,

    #[arg(long, help = "Optional TOML config file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            host: self.host.clone(),
            port: self.port,
            body_limit: self.body_limit,
            verbose: self.verbose,
            log_format: self.log_format,
        }
    }

    /// Loads the config file (if any) and layers the command line over it.
    pub fn resolve(&self) -> Result<ServerConfig> {
        let file = match &self.config {
            Some(path) => FileConfig::from_file(path)?,
            None => FileConfig::default(),
        };

        Ok(ServerConfig::layered(&file, self.overrides()))
    }
}
