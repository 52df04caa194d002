//! Inventory Visibility Service
//!
//! Stock and demand for products held across warehouses, served to a dashboard.
//!
//! ## Features
//! - Filterable, paginated product listing
//! - Derived health status per record (healthy, low, critical)
//! - Store-wide totals and fill rate
//! - Deterministic daily KPI trend for charting
//! - Demand updates and cross-warehouse stock transfers

pub mod api;
pub mod config;
pub mod domain;
pub mod service;

pub use config::AppConfig;
pub use domain::{Inventory, KpiPoint, Product, ProductFilter, ProductPage, ProductView, StockStatus, Totals};
pub use service::InventoryService;

use thiserror::Error;

// =============================================================================
// Error Types
// =============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InventoryError {
    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("Insufficient stock to transfer: requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: u32 },

    #[error("Transfer would exceed stock capacity at {warehouse}: held {held}, incoming {incoming}")]
    CapacityExceeded { warehouse: String, held: u32, incoming: u32 },

    #[error("Invalid seed data: {0}")]
    InvalidSeed(String),
}

pub type Result<T> = std::result::Result<T, InventoryError>;
