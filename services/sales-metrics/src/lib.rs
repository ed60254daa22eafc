//! Sales Metrics Service
//!
//! Sales analytics over in-memory order collections: unique customer
//! cities, delivered revenue, most popular product, average order value and
//! repeat-customer detection.
//!
//! DESIGN:
//! - Pure functions over `&[Order]`, no state between calls
//! - Only `Delivered` orders count towards revenue, popularity and average
//! - Customers are grouped by id, not by full record equality
//! - Degenerate input yields fallback values, never errors

pub mod analytics;
pub mod config;
pub mod error;
pub mod metrics;
pub mod models;
pub mod validation;

pub use config::MetricsConfig;
pub use error::{SalesMetricsError, SalesMetricsResult};
pub use metrics::{
    MetricsEngine, average_order_value, customers_with_more_than,
    customers_with_more_than_five_orders, most_popular_product, total_revenue, unique_cities,
};
pub use models::{Category, Customer, CustomerId, Order, OrderItem, OrderStatus};

use serde::{Deserialize, Serialize};

/// Snapshot of every sales metric for one order collection
///
/// Set-valued metrics are stored sorted so the snapshot serializes the
/// same way for the same input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesReport {
    /// Orders in the input, any status
    pub order_count: usize,
    /// Orders with status `Delivered`
    pub delivered_count: usize,
    /// Distinct customer cities, sorted
    pub unique_cities: Vec<String>,
    /// Revenue from delivered orders
    pub total_revenue: f64,
    /// Product with the highest delivered quantity
    pub most_popular_product: Option<String>,
    /// Revenue per delivered order
    pub average_order_value: f64,
    /// Ids of customers above the repeat threshold, sorted
    pub repeat_customers: Vec<CustomerId>,
}
