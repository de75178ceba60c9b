use crate::error::{BikeshareError, Result};
use crate::explore::types::City;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_PAGE_SIZE: usize = 5;

/// File name of each city's trip data, relative to the data directory.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CitySources {
    pub chicago: String,
    pub new_york_city: String,
    pub washington: String,
}

impl CitySources {
    pub fn file_for(&self, city: City) -> &str {
        match city {
            City::Chicago => &self.chicago,
            City::NewYorkCity => &self.new_york_city,
            City::Washington => &self.washington,
        }
    }
}

impl Default for CitySources {
    fn default() -> Self {
        Self {
            chicago: "chicago.csv".to_owned(),
            new_york_city: "new_york_city.csv".to_owned(),
            washington: "washington.csv".to_owned(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Directory holding the city CSV files
    pub data_dir: PathBuf,
    pub sources: CitySources,
    /// Rows shown per raw-data page (default: 5)
    pub page_size: usize,
    /// Whether each report section ends with its computation time
    pub show_timing: bool,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            sources: CitySources::default(),
            page_size: DEFAULT_PAGE_SIZE,
            show_timing: true,
        }
    }
}

impl ExplorerConfig {
    /// Reads a JSON configuration file. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or fails
    /// [`ExplorerConfig::validate`].
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            BikeshareError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Checks values that deserialize fine but cannot be used.
    ///
    /// # Errors
    ///
    /// [`BikeshareError::Config`] if the page size is zero or a city has a blank
    /// file name.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(BikeshareError::Config(
                "page_size must be at least 1".to_owned(),
            ));
        }
        for city in City::ALL {
            if self.sources.file_for(city).trim().is_empty() {
                return Err(BikeshareError::Config(format!(
                    "no data source configured for {city}"
                )));
            }
        }
        Ok(())
    }

    pub fn source_path(&self, city: City) -> PathBuf {
        self.data_dir.join(self.sources.file_for(city))
    }
}
