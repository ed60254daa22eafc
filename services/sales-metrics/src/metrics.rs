//! Sales metrics calculation engine
//!
//! Every metric is a pure function of the order slice it is handed. The
//! engine holds only its immutable configuration, so a single instance can
//! be shared freely across threads.

use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::BTreeSet;

use crate::SalesReport;
use crate::analytics;
use crate::config::{DEFAULT_REPEAT_CUSTOMER_THRESHOLD, MetricsConfig};
use crate::error::SalesMetricsResult;
use crate::models::{Customer, CustomerId, Order, OrderItem};
use crate::validation;

/// Orders that count towards revenue, popularity and average order value
#[inline]
pub(crate) fn delivered(orders: &[Order]) -> impl Iterator<Item = &Order> {
    orders.iter().filter(|order| order.is_delivered())
}

/// Items of delivered orders, flattened
#[inline]
pub(crate) fn delivered_items(orders: &[Order]) -> impl Iterator<Item = &OrderItem> {
    delivered(orders).flat_map(|order| order.items.iter())
}

/// Distinct customer cities across all orders, whatever their status
#[must_use]
pub fn unique_cities(orders: &[Order]) -> FxHashSet<String> {
    let cities: FxHashSet<String> = orders
        .iter()
        .map(|order| order.customer.city.clone())
        .collect();
    tracing::trace!(orders = orders.len(), cities = cities.len(), "unique_cities");
    cities
}

/// Revenue from delivered orders: sum of `quantity × price` over their items
#[must_use]
pub fn total_revenue(orders: &[Order]) -> f64 {
    let revenue = delivered_items(orders).map(OrderItem::line_total).sum();
    tracing::trace!(orders = orders.len(), revenue, "total_revenue");
    revenue
}

/// Product with the highest delivered quantity
///
/// Returns `None` when no delivered order has any items. When several
/// products share the maximum, which of them is returned is unspecified:
/// it follows the iteration order of the underlying hash map.
#[must_use]
pub fn most_popular_product(orders: &[Order]) -> Option<String> {
    let quantities = analytics::product_quantities(orders);
    let product = quantities
        .into_iter()
        .max_by_key(|(_, quantity)| *quantity)
        .map(|(name, _)| name);
    tracing::trace!(orders = orders.len(), ?product, "most_popular_product");
    product
}

/// Revenue per delivered order, `0.0` when nothing was delivered
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn average_order_value(orders: &[Order]) -> f64 {
    let delivered_count = delivered(orders).count();
    if delivered_count == 0 {
        return 0.0;
    }
    let average = total_revenue(orders) / delivered_count as f64;
    tracing::trace!(delivered_count, average, "average_order_value");
    average
}

/// Customers with strictly more than five orders of any status
#[must_use]
pub fn customers_with_more_than_five_orders(orders: &[Order]) -> FxHashSet<Customer> {
    customers_with_more_than(orders, DEFAULT_REPEAT_CUSTOMER_THRESHOLD)
}

/// Customers with strictly more than `threshold` orders of any status
///
/// Orders are grouped by customer id. The first record seen for an id is
/// the one placed in the result.
pub fn customers_with_more_than(orders: &[Order], threshold: usize) -> FxHashSet<Customer> {
    let mut counts: FxHashMap<&CustomerId, (&Customer, usize)> = FxHashMap::default();
    for order in orders {
        counts
            .entry(&order.customer.id)
            .or_insert((&order.customer, 0))
            .1 += 1;
    }

    let customers: FxHashSet<Customer> = counts
        .into_values()
        .filter(|(_, count)| *count > threshold)
        .map(|(customer, _)| customer.clone())
        .collect();
    tracing::trace!(threshold, customers = customers.len(), "customers_with_more_than");
    customers
}

/// Stateless metrics engine
///
/// Carries configuration only. All methods delegate to the free functions
/// of this module.
#[derive(Debug, Clone, Default)]
pub struct MetricsEngine {
    config: MetricsConfig,
}

impl MetricsEngine {
    /// Create new metrics engine
    pub fn new(config: MetricsConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &MetricsConfig {
        &self.config
    }

    /// See [`unique_cities`]
    pub fn unique_cities(&self, orders: &[Order]) -> FxHashSet<String> {
        unique_cities(orders)
    }

    /// See [`total_revenue`]
    pub fn total_revenue(&self, orders: &[Order]) -> f64 {
        total_revenue(orders)
    }

    /// See [`most_popular_product`]
    pub fn most_popular_product(&self, orders: &[Order]) -> Option<String> {
        most_popular_product(orders)
    }

    /// See [`average_order_value`]
    pub fn average_order_value(&self, orders: &[Order]) -> f64 {
        average_order_value(orders)
    }

    /// See [`customers_with_more_than_five_orders`]
    pub fn customers_with_more_than_five_orders(&self, orders: &[Order]) -> FxHashSet<Customer> {
        customers_with_more_than_five_orders(orders)
    }

    /// Repeat customers using the configured threshold
    pub fn repeat_customers(&self, orders: &[Order]) -> FxHashSet<Customer> {
        customers_with_more_than(orders, self.config.repeat_customer_threshold)
    }

    /// Compute every metric into one snapshot
    #[must_use]
    pub fn report(&self, orders: &[Order]) -> SalesReport {
        let unique_cities: BTreeSet<String> = unique_cities(orders).into_iter().collect();
        let repeat_customers: BTreeSet<CustomerId> = self
            .repeat_customers(orders)
            .into_iter()
            .map(|customer| customer.id)
            .collect();

        let report = SalesReport {
            order_count: orders.len(),
            delivered_count: delivered(orders).count(),
            unique_cities: unique_cities.into_iter().collect(),
            total_revenue: total_revenue(orders),
            most_popular_product: most_popular_product(orders),
            average_order_value: average_order_value(orders),
            repeat_customers: repeat_customers.into_iter().collect(),
        };

        tracing::debug!(
            orders = report.order_count,
            delivered = report.delivered_count,
            revenue = report.total_revenue,
            "Sales report generated"
        );
        report
    }

    /// Validate the input first when `validate_input` is set, then report
    pub fn checked_report(&self, orders: &[Order]) -> SalesMetricsResult<SalesReport> {
        if self.config.validate_input {
            validation::validate_orders(orders)?;
        }
        Ok(self.report(orders))
    }
}
