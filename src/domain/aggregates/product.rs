//! Product Aggregate
//!
//! One product held at one warehouse. `status` is never stored; it is derived
//! from stock and demand whenever the record is read.

use serde::{Deserialize, Serialize};
use crate::domain::value_objects::{Quantity, Sku, StockStatus};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Product {
    id: String,
    name: String,
    sku: Sku,
    warehouse: String,
    stock: Quantity,
    demand: Quantity,
}

/// Wire shape of a product, with the derived status materialised.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub sku: String,
    pub warehouse: String,
    pub stock: u32,
    pub demand: u32,
    pub status: StockStatus,
}

impl Product {
    pub fn create(id: impl Into<String>, name: impl Into<String>, sku: Sku, warehouse: impl Into<String>, stock: Quantity, demand: Quantity) -> Self {
        Self { id: id.into(), name: name.into(), sku, warehouse: warehouse.into(), stock, demand }
    }

    pub fn id(&self) -> &str { &self.id }
    pub fn name(&self) -> &str { &self.name }
    pub fn sku(&self) -> &Sku { &self.sku }
    pub fn warehouse(&self) -> &str { &self.warehouse }
    pub fn stock(&self) -> Quantity { self.stock }
    pub fn demand(&self) -> Quantity { self.demand }
    pub fn status(&self) -> StockStatus { StockStatus::classify(self.stock, self.demand) }

    /// Copy of this product relocated to another warehouse, used when a transfer has no target.
    pub fn relocated(&self, id: impl Into<String>, warehouse: impl Into<String>, stock: Quantity) -> Self {
        Self {
            id: id.into(), name: self.name.clone(), sku: self.sku.clone(),
            warehouse: warehouse.into(), stock, demand: self.demand,
        }
    }

    pub fn is_stocked_at(&self, sku: &Sku, warehouse: &str) -> bool {
        &self.sku == sku && self.warehouse == warehouse
    }

    pub fn set_demand(&mut self, demand: Quantity) { self.demand = demand; }

    pub fn add_stock(&mut self, qty: Quantity) -> Result<(), ProductError> {
        self.stock = self.stock.add(qty).ok_or(ProductError::CapacityExceeded {
            held: self.stock.value(),
            incoming: qty.value(),
        })?;
        Ok(())
    }

    pub fn can_receive(&self, qty: Quantity) -> bool { self.stock.add(qty).is_some() }

    pub fn remove_stock(&mut self, qty: Quantity) -> Result<(), ProductError> {
        self.stock = self.stock.subtract(qty).ok_or(ProductError::InsufficientStock {
            requested: qty.value(),
            available: self.stock.value(),
        })?;
        Ok(())
    }

    pub fn view(&self) -> ProductView {
        ProductView {
            id: self.id.clone(),
            name: self.name.clone(),
            sku: self.sku.to_string(),
            warehouse: self.warehouse.clone(),
            stock: self.stock.value(),
            demand: self.demand.value(),
            status: self.status(),
        }
    }
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self { product.view() }
}

#[derive(Debug, Clone, PartialEq, Eq)] pub enum ProductError { InsufficientStock { requested: u32, available: u32 }, CapacityExceeded { held: u32, incoming: u32 } }
impl std::error::Error for ProductError {}
impl std::fmt::Display for ProductError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InsufficientStock { requested, available } => write!(f, "Insufficient stock: requested {requested}, available {available}"),
            Self::CapacityExceeded { held, incoming } => write!(f, "Stock capacity exceeded: held {held}, incoming {incoming}"),
        }
    }
}
