//! Input validation
//!
//! Optional checks for callers that cannot vouch for their data source. The
//! metric functions never call these.

use crate::error::{SalesMetricsError, SalesMetricsResult};
use crate::models::Order;

/// Validate a single order
///
/// Rejects a blank customer id, blank product names, and prices that are
/// negative or not finite.
pub fn validate_order(order: &Order) -> SalesMetricsResult<()> {
    if order.customer.id.is_empty() {
        return Err(SalesMetricsError::MissingCustomerId {
            order_id: order.id.clone(),
        });
    }

    for item in &order.items {
        if item.product_name.trim().is_empty() {
            return Err(SalesMetricsError::EmptyProductName {
                order_id: order.id.clone(),
            });
        }
        if !item.price.is_finite() || item.price < 0.0 {
            return Err(SalesMetricsError::InvalidPrice {
                order_id: order.id.clone(),
                product: item.product_name.clone(),
                price: item.price,
            });
        }
    }

    Ok(())
}

/// Validate every order, stopping at the first failure
pub fn validate_orders(orders: &[Order]) -> SalesMetricsResult<()> {
    orders.iter().try_for_each(|order| {
        validate_order(order).inspect_err(|err| {
            tracing::warn!(order_id = %order.id, error = %err, "Order failed validation");
        })
    })
}
