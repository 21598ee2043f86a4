//! Command-line interface.
//!
//! Flags override values from the optional TOML file; the merged result is
//! validated before startup continues.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{load_config, validate_config, ConfigError, RotatorConfig};

#[derive(Parser, Debug, Default)]
#[command(name = "status-rotator")]
#[command(about = "HTTP server that answers each request with the next status code in a rotation", long_about = None)]
pub struct Cli {
    /// Configuration file path (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Listen address, e.g. 0.0.0.0:8080
    #[arg(short, long)]
    pub bind: Option<String>,

    /// Comma-separated rotation list, e.g. 404,403,500,502,503
    #[arg(long, value_delimiter = ',')]
    pub codes: Option<Vec<u16>>,

    /// Default log filter when RUST_LOG is unset
    #[arg(short, long)]
    pub log_level: Option<String>,
}

impl Cli {
    /// Load the config file (or defaults) and apply flag overrides.
    pub fn resolve_config(&self) -> Result<RotatorConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => RotatorConfig::default(),
        };

        if let Some(bind) = &self.bind {
            config.listener.bind_address = bind.clone();
        }
        if let Some(codes) = &self.codes {
            config.rotation.status_codes = codes.clone();
        }
        if let Some(level) = &self.log_level {
            config.observability.log_level = level.clone();
        }

        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}
