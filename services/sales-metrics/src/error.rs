//! Error types for sales metrics
//!
//! The metric functions themselves are total and never return these. They
//! come from input validation and configuration loading only.

use thiserror::Error;

/// Sales-metrics error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SalesMetricsError {
    /// Item price is negative, NaN or infinite
    #[error("Invalid price {price} for product '{product}' in order {order_id}")]
    InvalidPrice {
        /// Order carrying the bad item
        order_id: String,
        /// Product name of the bad item
        product: String,
        /// The offending price
        price: f64,
    },

    /// Item has a blank product name
    #[error("Empty product name in order {order_id}")]
    EmptyProductName {
        /// Order carrying the bad item
        order_id: String,
    },

    /// Customer attached to the order has no usable id
    #[error("Missing customer id in order {order_id}")]
    MissingCustomerId {
        /// Order with the anonymous customer
        order_id: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration {
        /// What went wrong while loading the configuration
        message: String,
    },
}

impl From<serde_json::Error> for SalesMetricsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Configuration {
            message: err.to_string(),
        }
    }
}

/// Type alias for sales-metrics results
pub type SalesMetricsResult<T> = Result<T, SalesMetricsError>;
