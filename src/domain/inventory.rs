//! The product store and the mutations that keep its invariants.
//!
//! Invariants held between calls:
//! - ids are unique;
//! - at most one record per (sku, warehouse);
//! - records are never removed, so the store only grows.

use chrono::NaiveDate;
use std::collections::HashSet;
use crate::domain::aggregates::{Product, ProductError};
use crate::domain::kpi::{self, KpiPoint, Totals};
use crate::domain::query::{self, ProductFilter, ProductPage};
use crate::domain::value_objects::Quantity;
use crate::{InventoryError, Result};

const ID_PREFIX: &str = "P-";
const FIRST_ID: u64 = 1001;

#[derive(Clone, Debug)]
pub struct Inventory {
    products: Vec<Product>,
    next_id: u64,
}

impl Inventory {
    /// Builds a store from seed records, rejecting duplicate ids or (sku, warehouse) pairs.
    pub fn new(products: Vec<Product>) -> Result<Self> {
        let mut ids = HashSet::new();
        let mut locations = HashSet::new();
        for p in &products {
            if !ids.insert(p.id()) {
                return Err(InventoryError::InvalidSeed(format!("duplicate id {}", p.id())));
            }
            if !locations.insert((p.sku(), p.warehouse())) {
                return Err(InventoryError::InvalidSeed(format!("duplicate sku {} at {}", p.sku(), p.warehouse())));
            }
        }
        let next_id = products
            .iter()
            .filter_map(|p| p.id().strip_prefix(ID_PREFIX)?.parse::<u64>().ok()?.checked_add(1))
            .max()
            .unwrap_or(FIRST_ID);
        Ok(Self { products, next_id })
    }

    pub fn products(&self) -> &[Product] { &self.products }
    pub fn len(&self) -> usize { self.products.len() }
    pub fn is_empty(&self) -> bool { self.products.is_empty() }

    pub fn list(&self, filter: &ProductFilter) -> ProductPage { query::list_products(&self.products, filter) }
    pub fn get(&self, id: &str) -> Option<&Product> { query::find_product(&self.products, id) }
    pub fn warehouses(&self) -> Vec<String> { query::warehouses(&self.products) }
    pub fn totals(&self) -> Totals { kpi::totals(&self.products) }
    pub fn kpis(&self, range: i64, today: NaiveDate) -> Vec<KpiPoint> { kpi::kpi_trend(&self.products, range, today) }

    fn position(&self, id: &str) -> Result<usize> {
        self.products
            .iter()
            .position(|p| p.id() == id)
            .ok_or_else(|| InventoryError::NotFound(id.to_string()))
    }

    /// Sets demand, clamping negatives to zero.
    pub fn update_demand(&mut self, id: &str, demand: i64) -> Result<&Product> {
        let idx = self.position(id)?;
        let product = &mut self.products[idx];
        product.set_demand(Quantity::clamped(demand));
        Ok(product)
    }

    /// Moves `amount` units of the source's SKU to `to_warehouse`, merging into an
    /// existing record there or appending a new one. Returns the affected records,
    /// source first; a zero amount returns the untouched source alone.
    pub fn transfer_stock(&mut self, id: &str, to_warehouse: &str, amount: i64) -> Result<Vec<Product>> {
        let from = self.position(id)?;
        let amt = Quantity::clamped(amount);
        if amt.is_zero() {
            return Ok(vec![self.products[from].clone()]);
        }

        let source = &self.products[from];
        if source.stock() < amt {
            return Err(InventoryError::InsufficientStock { requested: amt.value(), available: source.stock().value() });
        }
        let target = self.products.iter().position(|p| p.is_stocked_at(source.sku(), to_warehouse));

        // Validate both ends before touching either record.
        if let Some(to) = target.filter(|&to| to != from) {
            let held = &self.products[to];
            if !held.can_receive(amt) {
                return Err(InventoryError::CapacityExceeded {
                    warehouse: to_warehouse.to_string(),
                    held: held.stock().value(),
                    incoming: amt.value(),
                });
            }
        }

        self.products[from].remove_stock(amt).map_err(|e| self.product_error(e, from))?;
        match target {
            Some(to) => {
                self.products[to].add_stock(amt).map_err(|e| self.product_error(e, to))?;
                Ok(vec![self.products[from].clone(), self.products[to].clone()])
            }
            None => {
                let new_id = self.allocate_id();
                let created = self.products[from].relocated(new_id, to_warehouse, amt);
                self.products.push(created.clone());
                Ok(vec![self.products[from].clone(), created])
            }
        }
    }

    fn product_error(&self, e: ProductError, idx: usize) -> InventoryError {
        match e {
            ProductError::InsufficientStock { requested, available } => InventoryError::InsufficientStock { requested, available },
            ProductError::CapacityExceeded { held, incoming } => InventoryError::CapacityExceeded {
                warehouse: self.products[idx].warehouse().to_string(),
                held,
                incoming,
            },
        }
    }

    fn allocate_id(&mut self) -> String {
        loop {
            let candidate = format!("{ID_PREFIX}{}", self.next_id);
            self.next_id = self.next_id.checked_add(1).unwrap_or(FIRST_ID);
            if self.get(&candidate).is_none() {
                return candidate;
            }
        }
    }
}
