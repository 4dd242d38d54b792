//! Olist Features - order-level feature tables for the Olist e-commerce dataset
//!
//! This crate loads the Olist CSV tables into polars DataFrames and derives
//! the per-order metrics used for review-score modelling.
//!
//! # Modules
//!
//! - [`data`] - Table discovery and CSV loading
//! - [`order`] - Per-order feature tables and the joined training table
//!
//! # Example
//!
//! ```no_run
//! use olist_features::prelude::*;
//!
//! let order = Order::from_provider(&Olist::with_config(
//!     DataConfig::new().with_data_dir("./data"),
//! ))?;
//! let training = order.training_data(true)?;
//! println!("{}", training.head(Some(5)));
//! # Ok::<(), OlistError>(())
//! ```

// Core error handling
pub mod error;

// Data access
pub mod data;

// Feature derivation
pub mod order;

pub use error::{OlistError, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::{OlistError, Result};
    pub use crate::data::{DataConfig, Olist, Tables};
    pub use crate::order::{Order, OrderConfig};
}
