//! Seed records loaded into the store at startup.

use serde::Deserialize;
use std::path::Path;
use crate::domain::aggregates::Product;
use crate::domain::value_objects::{Quantity, Sku};
use crate::{InventoryError, Result};

#[derive(Clone, Debug, Deserialize)]
pub struct SeedRecord {
    pub id: String,
    pub name: String,
    pub sku: Sku,
    pub warehouse: String,
    pub stock: Quantity,
    pub demand: Quantity,
}

impl From<SeedRecord> for Product {
    fn from(r: SeedRecord) -> Self {
        Product::create(r.id, r.name, r.sku, r.warehouse, r.stock, r.demand)
    }
}

fn record(id: &str, name: &str, sku: &str, warehouse: &str, stock: u32, demand: u32) -> Product {
    Product::create(id, name, Sku::new(sku), warehouse, Quantity::new(stock), Quantity::new(demand))
}

/// The built-in catalogue used when no seed file is configured.
pub fn default_products() -> Vec<Product> {
    vec![
        record("P-1001", "12mm Hex Bolt", "HEX-12-100", "BLR-A", 180, 120),
        record("P-1002", "Steel Washer", "WSR-08-500", "BLR-A", 50, 80),
        record("P-1003", "M8 Nut", "NUT-08-200", "PNQ-C", 80, 80),
        record("P-1004", "Bearing 608ZZ", "BRG-608-50", "DEL-B", 24, 120),
    ]
}

pub fn parse_products(json: &str) -> Result<Vec<Product>> {
    let records: Vec<SeedRecord> = serde_json::from_str(json)
        .map_err(|e| InventoryError::InvalidSeed(e.to_string()))?;
    Ok(records.into_iter().map(Product::from).collect())
}

pub fn load_products(path: &Path) -> Result<Vec<Product>> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| InventoryError::InvalidSeed(format!("{}: {e}", path.display())))?;
    parse_products(&json)
}
