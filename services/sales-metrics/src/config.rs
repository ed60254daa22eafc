//! Metrics configuration

use serde::{Deserialize, Serialize};

use crate::error::SalesMetricsResult;

/// Order count a customer must exceed to be reported as a repeat customer
pub const DEFAULT_REPEAT_CUSTOMER_THRESHOLD: usize = 5;

/// Metrics engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Customers with strictly more orders than this are repeat customers
    pub repeat_customer_threshold: usize,
    /// Run input validation before `checked_report`
    pub validate_input: bool,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            repeat_customer_threshold: DEFAULT_REPEAT_CUSTOMER_THRESHOLD,
            validate_input: true,
        }
    }
}

impl MetricsConfig {
    /// Parse a configuration from JSON; absent fields keep their defaults
    pub fn from_json(json: &str) -> SalesMetricsResult<Self> {
        let config = serde_json::from_str(json)?;
        tracing::debug!(?config, "Loaded metrics configuration");
        Ok(config)
    }
}
