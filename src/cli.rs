use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, ConfigError};

/// Browse TheMealDB meals in the terminal.
#[derive(Debug, Parser)]
#[command(name = "mealboard", version)]
pub struct Cli {
    /// Config file (default: ~/.config/mealboard/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the meal list URL
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,
}

impl Cli {
    /// Load the config file and apply command line overrides.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        if let Some(endpoint) = &self.endpoint {
            config.endpoint = endpoint.clone();
            config.validate()?;
        }
        Ok(config)
    }
}
