use crate::config::toml_config::{AppConfig, Backend};
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "titles-api")]
#[command(about = "HTTP API for title records with change-event publishing")]
pub struct CliConfig {
    #[arg(long, help = "Path to a TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Socket address to listen on, e.g. 0.0.0.0:8080")]
    pub bind: Option<String>,

    #[arg(long, value_enum)]
    pub backend: Option<Backend>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl CliConfig {
    /// Defaults, then the config file, then flags.
    pub fn resolve(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::from_file(path)?,
            None => AppConfig::default(),
        };

        if let Some(bind) = &self.bind {
            config.server.bind_address = bind.clone();
        }
        if let Some(backend) = self.backend {
            config.server.backend = backend;
        }
        if self.json_logs {
            config.logging.json = true;
        }

        Ok(config)
    }
}
