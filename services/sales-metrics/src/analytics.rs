//! Breakdown analytics for the sales metrics service
//!
//! Grouped views over the same order slices the headline metrics consume.
//! Revenue and quantity views only look at delivered orders; the count views
//! look at every order.

use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

use crate::metrics::{delivered, delivered_items};
use crate::models::{Category, CustomerId, Order, OrderStatus};

/// Delivered revenue per product category
pub fn revenue_by_category(orders: &[Order]) -> BTreeMap<Category, f64> {
    let mut revenue = BTreeMap::new();
    for item in delivered_items(orders) {
        *revenue.entry(item.category).or_insert(0.0) += item.line_total();
    }
    revenue
}

/// Delivered revenue per customer city
pub fn revenue_by_city(orders: &[Order]) -> BTreeMap<String, f64> {
    let mut revenue: BTreeMap<String, f64> = BTreeMap::new();
    for order in delivered(orders) {
        *revenue.entry(order.customer.city.clone()).or_insert(0.0) += order.total();
    }
    revenue
}

/// Order count per customer id, any status
pub fn orders_per_customer(orders: &[Order]) -> FxHashMap<CustomerId, usize> {
    let mut counts = FxHashMap::default();
    for order in orders {
        *counts.entry(order.customer.id.clone()).or_insert(0) += 1;
    }
    counts
}

/// Order count per status
pub fn status_breakdown(orders: &[Order]) -> BTreeMap<OrderStatus, usize> {
    let mut counts = BTreeMap::new();
    for order in orders {
        *counts.entry(order.status).or_insert(0) += 1;
    }
    counts
}

/// Delivered quantity per product name
pub fn product_quantities(orders: &[Order]) -> FxHashMap<String, u64> {
    let mut quantities: FxHashMap<String, u64> = FxHashMap::default();
    for item in delivered_items(orders) {
        // Clone the name only on first sight
        if let Some(total) = quantities.get_mut(item.product_name.as_str()) {
            *total += u64::from(item.quantity);
        } else {
            quantities.insert(item.product_name.clone(), u64::from(item.quantity));
        }
    }
    quantities
}
