//! Olist data provider

use super::config::DataConfig;
use super::loader::{table_name, TableLoader};
use super::Tables;
use crate::error::{OlistError, Result};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Loads every Olist table found in the configured data directory
#[derive(Debug, Clone)]
pub struct Olist {
    config: DataConfig,
}

impl Default for Olist {
    fn default() -> Self {
        Self::new()
    }
}

impl Olist {
    /// Create a provider with the default configuration
    pub fn new() -> Self {
        Self::with_config(DataConfig::default())
    }

    /// Create a provider with a custom configuration
    pub fn with_config(config: DataConfig) -> Self {
        Self { config }
    }

    /// Directory the provider reads from
    pub fn data_path(&self) -> &Path {
        &self.config.data_dir
    }

    /// Provider configuration
    pub fn config(&self) -> &DataConfig {
        &self.config
    }

    /// Table name a file would be registered under
    pub fn table_name(&self, file_name: &str) -> String {
        table_name(
            file_name,
            &self.config.table_prefix,
            &self.config.table_suffix,
            &self.config.file_extension,
        )
    }

    /// Read all matching files into a map of table name to DataFrame.
    ///
    /// Files are visited in file-name order. When two files normalize to
    /// the same table name the later one replaces the earlier one.
    pub fn load(&self) -> Result<Tables> {
        let start = Instant::now();
        let dir = self.data_path();

        if !dir.exists() {
            return Err(OlistError::DataDirNotFound(dir.to_path_buf()));
        }
        if !dir.is_dir() {
            return Err(OlistError::ConfigError(format!(
                "data path is not a directory: {}",
                dir.display()
            )));
        }

        let loader = TableLoader::new()
            .with_infer_schema_length(self.config.infer_schema_length)
            .with_separator(self.config.separator);

        let mut tables = Tables::new();
        for path in self.table_files(dir)? {
            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                warn!(path = %path.display(), "Skipping file with a non UTF-8 name");
                continue;
            };
            let name = self.table_name(file_name);
            let df = loader.load_csv(&path)?;
            debug!(table = %name, rows = df.height(), cols = df.width(), "Loaded table");

            if tables.insert(name.clone(), df).is_some() {
                warn!(table = %name, file = %file_name, "Table name collision, keeping the later file");
            }
        }

        info!(
            dir = %dir.display(),
            tables = tables.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Olist data loaded"
        );
        Ok(tables)
    }

    /// Liveness check
    pub fn ping(&self) -> &'static str {
        "pong"
    }

    fn table_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            let matches_ext = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e == self.config.file_extension);
            if path.is_file() && matches_ext {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ping() {
        assert_eq!(Olist::new().ping(), "pong");
    }

    #[test]
    fn test_missing_directory() {
        let provider = Olist::with_config(DataConfig::new().with_data_dir("/no/such/olist/dir"));
        let err = provider.load().unwrap_err();
        assert!(matches!(err, OlistError::DataDirNotFound(ref p) if p == Path::new("/no/such/olist/dir")));
    }

    #[test]
    fn test_path_is_a_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let provider = Olist::with_config(DataConfig::new().with_data_dir(file.path()));
        assert!(matches!(provider.load(), Err(OlistError::ConfigError(_))));
    }

    #[test]
    fn test_table_name_uses_config() {
        let provider = Olist::with_config(DataConfig::new().with_affixes("shop_", "_export"));
        assert_eq!(provider.table_name("shop_orders_export.csv"), "orders");
        assert_eq!(provider.table_name("olist_orders_dataset.csv"), "olist_orders_dataset");
    }

    #[cfg(unix)]
    #[test]
    fn test_skips_non_utf8_file_names() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("olist_orders_dataset.csv"), "order_id\no1\n").unwrap();
        let odd = dir.path().join(OsStr::from_bytes(b"olist_\xff_dataset.csv"));
        if std::fs::write(&odd, "order_id\no2\n").is_err() {
            // Some filesystems reject non UTF-8 names outright
            return;
        }

        let tables = Olist::with_config(DataConfig::new().with_data_dir(dir.path()))
            .load()
            .unwrap();
        assert_eq!(tables.len(), 1);
        assert!(tables.contains_key("orders"));
    }
}
