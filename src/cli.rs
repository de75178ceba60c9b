use anyhow::{Context as _, Result};
use bikeshare::config::ExplorerConfig;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "bikeshare",
    version,
    about = "Explore US bikeshare trip data interactively"
)]
pub struct Cli {
    /// Path to a JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory holding chicago.csv, new_york_city.csv and washington.csv
    #[arg(long, env = "BIKESHARE_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Rows shown per page of raw data
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub page_size: Option<u16>,

    /// Do not print how long each statistics section took
    #[arg(long)]
    pub no_timing: bool,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Builds the effective configuration: compiled defaults, then the config
    /// file, then command-line flags.
    pub fn resolve_config(&self) -> Result<ExplorerConfig> {
        let mut config = match &self.config {
            Some(path) => ExplorerConfig::load(path)
                .with_context(|| format!("Failed to load {}", path.display()))?,
            None => ExplorerConfig::default(),
        };

        if let Some(dir) = &self.data_dir {
            config.data_dir.clone_from(dir);
        }
        if let Some(size) = self.page_size {
            config.page_size = usize::from(size);
        }
        if self.no_timing {
            config.show_timing = false;
        }

        config.validate().context("Invalid configuration")?;
        Ok(config)
    }
}
