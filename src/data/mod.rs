//! Olist data access
//!
//! Discovers the CSV tables of the Olist dataset in a directory and loads
//! them into polars DataFrames keyed by a short table name
//! (`olist_orders_dataset.csv` is served as `orders`).

mod config;
mod loader;
mod provider;

pub use config::{DataConfig, DATA_DIR_ENV};
pub use loader::{table_name, TableLoader};
pub use provider::Olist;

use polars::prelude::DataFrame;
use std::collections::HashMap;

/// Loaded tables keyed by table name
pub type Tables = HashMap<String, DataFrame>;
