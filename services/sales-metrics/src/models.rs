//! Order definitions and structures
//!
//! Plain value records supplied by the caller. The metrics layer only ever
//! borrows them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Newtype wrapper for customer identifiers
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub String);

impl CustomerId {
    /// Create a customer id from anything string-like
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the identifier is blank
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CustomerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for CustomerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Customer placing orders
///
/// Identity is the `id` field: two records with the same id are the same
/// customer for grouping and set membership, even if other fields differ.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    /// Unique customer ID
    pub id: CustomerId,
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Registration timestamp
    pub registered_at: DateTime<Utc>,
    /// Age in years
    pub age: u32,
    /// City of residence
    pub city: String,
}

impl Customer {
    /// Create a new customer record
    pub fn new(
        id: impl Into<CustomerId>,
        name: impl Into<String>,
        email: impl Into<String>,
        registered_at: DateTime<Utc>,
        age: u32,
        city: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            registered_at,
            age,
            city: city.into(),
        }
    }
}

impl PartialEq for Customer {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Customer {}

impl Hash for Customer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Product category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    /// Phones, laptops, peripherals
    Electronics,
    /// Printed and digital books
    Books,
    /// Apparel and footwear
    Clothing,
    /// Furniture and household goods
    Home,
    /// Cosmetics and personal care
    Beauty,
    /// Toys and games
    Toys,
}

/// Order lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Order placed, not yet picked up
    New,
    /// Being prepared
    Processing,
    /// Handed to the carrier
    Shipped,
    /// Received by the customer
    Delivered,
    /// Cancelled before delivery
    Cancelled,
}

impl OrderStatus {
    /// Only delivered orders count towards revenue and popularity
    #[inline]
    pub const fn is_delivered(self) -> bool {
        matches!(self, Self::Delivered)
    }
}

/// Single order line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Product name, also the popularity grouping key
    pub product_name: String,
    /// Units ordered
    pub quantity: u32,
    /// Per-unit price
    pub price: f64,
    /// Product category
    pub category: Category,
}

impl OrderItem {
    /// Create a new order line
    pub fn new(product_name: impl Into<String>, quantity: u32, price: f64, category: Category) -> Self {
        Self {
            product_name: product_name.into(),
            quantity,
            price,
            category,
        }
    }

    /// `quantity × price`
    #[inline]
    pub fn line_total(&self) -> f64 {
        f64::from(self.quantity) * self.price
    }
}

/// Order structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order ID
    pub id: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Customer who placed the order
    pub customer: Customer,
    /// Order lines, possibly empty
    pub items: Vec<OrderItem>,
    /// Order status
    pub status: OrderStatus,
}

impl Order {
    /// Create a new order
    pub fn new(
        id: impl Into<String>,
        created_at: DateTime<Utc>,
        customer: Customer,
        items: Vec<OrderItem>,
        status: OrderStatus,
    ) -> Self {
        Self {
            id: id.into(),
            created_at,
            customer,
            items,
            status,
        }
    }

    /// Sum of all line totals, regardless of status
    pub fn total(&self) -> f64 {
        self.items.iter().map(OrderItem::line_total).sum()
    }

    /// Shorthand for `self.status.is_delivered()`
    #[inline]
    pub const fn is_delivered(&self) -> bool {
        self.status.is_delivered()
    }
}
