//! Test utilities and fixtures for sales-metrics testing
//!
//! This module provides:
//! - Customer and order factories
//! - rstest fixtures for the standard order scenarios
//! - Logging setup for tests
//! - Float-tolerant assertions

pub mod fixtures;
pub mod helpers;

pub use assertions::*;
pub use factories::*;
pub use fixtures::*;
pub use helpers::*;
