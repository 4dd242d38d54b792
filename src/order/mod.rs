//! Order feature pipeline
//!
//! Derives per-order tables from the loaded Olist data and joins them into
//! a single training table keyed by `order_id`:
//! - [`Order::wait_time`] - delivery durations in days
//! - [`Order::review_score`] - review score and star indicators
//! - [`Order::number_items`] / [`Order::number_sellers`] - basket size
//! - [`Order::price_and_freight`] - order totals
//! - [`Order::training_data`] - inner join of all of the above

pub mod columns;
mod config;
mod features;

pub use config::OrderConfig;
pub use features::Order;
