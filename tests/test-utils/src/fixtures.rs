//! Test fixtures for the standard order scenarios

use chrono::Utc;
use rstest::*;
use sales_metrics::{Category, Customer, Order, OrderItem, OrderStatus};

use crate::factories::{OrderFactory, item};

/// Customer "1" living in New York
#[fixture]
pub fn andrei() -> Customer {
    Customer::new("1", "Andrei", "andrei@gmail.com", Utc::now(), 22, "New York")
}

/// Customer "2" living in London
#[fixture]
pub fn katya() -> Customer {
    Customer::new("2", "Katya", "andrei@gmail.com", Utc::now(), 25, "London")
}

/// Customer "3" living in New York
#[fixture]
pub fn rob() -> Customer {
    Customer::new("3", "Rob", "andrei@gmail.com", Utc::now(), 35, "New York")
}

/// Laptop×1@1000 and Mouse×2@25
#[fixture]
pub fn laptop_and_mice() -> Vec<OrderItem> {
    vec![
        OrderItem::new("Laptop", 1, 1000.0, Category::Electronics),
        OrderItem::new("Mouse", 2, 25.0, Category::Electronics),
    ]
}

/// Three delivered orders from New York, London, New York
#[fixture]
pub fn city_orders(andrei: Customer, katya: Customer, rob: Customer) -> Vec<Order> {
    let mut factory = OrderFactory::new();
    vec![
        factory.delivered(&andrei, Vec::new()),
        factory.delivered(&katya, Vec::new()),
        factory.delivered(&rob, Vec::new()),
    ]
}

/// Identical item lists, one delivered and one cancelled
#[fixture]
pub fn revenue_orders(andrei: Customer, laptop_and_mice: Vec<OrderItem>) -> Vec<Order> {
    let mut factory = OrderFactory::new();
    vec![
        factory.delivered(&andrei, laptop_and_mice.clone()),
        factory.cancelled(&andrei, laptop_and_mice),
    ]
}

/// Mouse wins on delivered quantity (7) over Keyboard (2) and Laptop (1)
#[fixture]
pub fn popularity_orders(andrei: Customer) -> Vec<Order> {
    let first = vec![item("Laptop", 1, 1000.0), item("Mouse", 3, 25.0)];
    let second = vec![item("Mouse", 4, 25.0), item("Keyboard", 2, 50.0)];

    let mut factory = OrderFactory::new();
    vec![
        factory.delivered(&andrei, first),
        factory.delivered(&andrei, second.clone()),
        factory.cancelled(&andrei, second),
    ]
}

/// Two delivered single-laptop orders and one cancelled
#[fixture]
pub fn average_orders(andrei: Customer) -> Vec<Order> {
    let laptop = vec![item("Laptop", 1, 1000.0)];

    let mut factory = OrderFactory::new();
    vec![
        factory.delivered(&andrei, laptop.clone()),
        factory.delivered(&andrei, laptop.clone()),
        factory.cancelled(&andrei, laptop),
    ]
}

/// Customer "1" with six delivered orders, customer "2" with five
#[fixture]
pub fn repeat_customer_orders(andrei: Customer, katya: Customer) -> Vec<Order> {
    let mut orders = OrderFactory::new()
        .with_prefix("1-")
        .build_batch(&andrei, 6, OrderStatus::Delivered);
    orders.extend(
        OrderFactory::new()
            .with_prefix("2-")
            .build_batch(&katya, 5, OrderStatus::Delivered),
    );
    orders
}

/// Nothing delivered: one cancelled, one processing
#[fixture]
pub fn undelivered_orders(andrei: Customer) -> Vec<Order> {
    let mut factory = OrderFactory::new();
    vec![
        factory.build(&andrei, Vec::new(), OrderStatus::Cancelled),
        factory.build(&andrei, vec![item("Laptop", 1, 1000.0)], OrderStatus::Processing),
    ]
}
