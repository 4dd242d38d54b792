//! Order pipeline configuration

use serde::{Deserialize, Serialize};

/// Configuration for the order feature pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderConfig {
    /// strftime-style format of the order timestamp columns.
    /// `None` lets polars infer the format from the data.
    pub timestamp_format: Option<String>,

    /// Status value kept by `wait_time(true)`
    pub delivered_status: String,
}

impl Default for OrderConfig {
    fn default() -> Self {
        Self {
            timestamp_format: Some("%Y-%m-%d %H:%M:%S".to_string()),
            delivered_status: "delivered".to_string(),
        }
    }
}

impl OrderConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the timestamp format
    pub fn with_timestamp_format(mut self, format: Option<&str>) -> Self {
        self.timestamp_format = format.map(str::to_string);
        self
    }

    /// Builder method to set the delivered status label
    pub fn with_delivered_status(mut self, status: &str) -> Self {
        self.delivered_status = status.to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = OrderConfig::default();
        assert_eq!(config.timestamp_format.as_deref(), Some("%Y-%m-%d %H:%M:%S"));
        assert_eq!(config.delivered_status, "delivered");
    }

    #[test]
    fn test_builder_pattern() {
        let config = OrderConfig::new()
            .with_timestamp_format(None)
            .with_delivered_status("shipped");
        assert!(config.timestamp_format.is_none());
        assert_eq!(config.delivered_status, "shipped");
    }
}
