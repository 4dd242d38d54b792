//! CSV table loading

use crate::error::{OlistError, Result};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// Loads a single CSV file into a DataFrame
#[derive(Debug, Clone)]
pub struct TableLoader {
    /// Rows sampled for schema inference
    infer_schema_length: Option<usize>,
    /// Field separator
    separator: u8,
}

impl Default for TableLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl TableLoader {
    /// Create a new loader for comma separated files with headers
    pub fn new() -> Self {
        Self {
            infer_schema_length: Some(100),
            separator: b',',
        }
    }

    /// Set the schema inference window
    pub fn with_infer_schema_length(mut self, rows: Option<usize>) -> Self {
        self.infer_schema_length = rows;
        self
    }

    /// Set the field separator
    pub fn with_separator(mut self, separator: u8) -> Self {
        self.separator = separator;
        self
    }

    /// Load a CSV file
    pub fn load_csv(&self, path: &Path) -> Result<DataFrame> {
        let file = File::open(path)
            .map_err(|e| OlistError::DataError(format!("{}: {e}", path.display())))?;

        let parse_opts = CsvParseOptions::default().with_separator(self.separator);

        CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(self.infer_schema_length)
            .with_parse_options(parse_opts)
            .into_reader_with_file_handle(file)
            .finish()
            .map_err(|e| OlistError::DataError(format!("{}: {e}", path.display())))
    }
}

/// Derive a short table name from a file name.
///
/// The extension is removed first, then `suffix`, then `prefix`, so
/// `olist_order_items_dataset.csv` becomes `order_items`. Affixes that are
/// absent are left alone: `product_category_name_translation.csv` becomes
/// `product_category_name_translation`.
pub fn table_name(file_name: &str, prefix: &str, suffix: &str, extension: &str) -> String {
    let stem = match file_name.rsplit_once('.') {
        Some((stem, ext)) if ext == extension => stem,
        _ => file_name,
    };
    let stem = stem.strip_suffix(suffix).unwrap_or(stem);
    let stem = stem.strip_prefix(prefix).unwrap_or(stem);
    stem.to_string()
}
