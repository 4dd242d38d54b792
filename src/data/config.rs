//! Data provider configuration

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable that overrides the default data directory
pub const DATA_DIR_ENV: &str = "OLIST_DATA_DIR";

/// Configuration for locating and parsing the Olist CSV tables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Directory scanned for table files
    pub data_dir: PathBuf,

    /// Extension (without the dot) a file must carry to be loaded
    pub file_extension: String,

    /// Prefix stripped from file names when deriving table names
    pub table_prefix: String,

    /// Suffix stripped (after the extension) when deriving table names
    pub table_suffix: String,

    /// Number of rows polars reads to infer column types
    pub infer_schema_length: Option<usize>,

    /// CSV field separator
    pub separator: u8,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: std::env::var(DATA_DIR_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./data")),
            file_extension: "csv".to_string(),
            table_prefix: "olist_".to_string(),
            table_suffix: "_dataset".to_string(),
            infer_schema_length: Some(1000),
            separator: b',',
        }
    }
}

impl DataConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the data directory
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Builder method to set the accepted file extension
    pub fn with_file_extension(mut self, ext: &str) -> Self {
        self.file_extension = ext.trim_start_matches('.').to_string();
        self
    }

    /// Builder method to set the prefix and suffix stripped from file names
    pub fn with_affixes(mut self, prefix: &str, suffix: &str) -> Self {
        self.table_prefix = prefix.to_string();
        self.table_suffix = suffix.to_string();
        self
    }

    /// Builder method to set the schema inference window
    pub fn with_infer_schema_length(mut self, rows: Option<usize>) -> Self {
        self.infer_schema_length = rows;
        self
    }

    /// Builder method to set the CSV field separator
    pub fn with_separator(mut self, separator: u8) -> Self {
        self.separator = separator;
        self
    }

    /// Save the configuration as JSON
    pub fn save(&self, path: &str) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load a configuration from a JSON file
    pub fn load(path: &str) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        Ok(config)
    }
}
