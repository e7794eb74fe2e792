//! `marksite build` command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use marksite_config::Config;

use crate::site;

#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Path to configuration file (default: marksite.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Base path the site is served from (overrides config).
    #[arg(long)]
    base_path: Option<String>,
}

impl BuildArgs {
    pub(crate) fn execute(self) -> Result<()> {
        let config_path = self.config.unwrap_or_else(Config::config_path);
        let mut config = match Config::load_from_path(&config_path)
            .with_context(|| format!("loading {}", config_path.display()))?
        {
            Some(config) => {
                log::info!("Config path: {}", config_path.display());
                config
            }
            None => {
                log::info!("No config at {}, using defaults", config_path.display());
                Config::default()
            }
        };
        if let Some(base_path) = self.base_path {
            config.base_path = base_path;
        }

        let pages = site::build(&config)?;
        log::info!("Built {pages} pages into {}", config.output_dir.display());
        Ok(())
    }
}
