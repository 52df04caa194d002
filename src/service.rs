//! Shared, serialized access to the inventory store.
//!
//! Every operation holds the lock for its whole duration: reads see one
//! consistent snapshot, mutations are applied in full or not at all.

use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use crate::domain::{Inventory, KpiPoint, ProductFilter, ProductPage, ProductView, Totals};
use crate::Result;

#[derive(Clone)]
pub struct InventoryService {
    inventory: Arc<RwLock<Inventory>>,
}

impl InventoryService {
    pub fn new(inventory: Inventory) -> Self {
        Self { inventory: Arc::new(RwLock::new(inventory)) }
    }

    pub async fn products(&self, filter: &ProductFilter) -> ProductPage {
        let page = self.inventory.read().await.list(filter);
        tracing::debug!(?filter, total = page.total_count, returned = page.nodes.len(), "listed products");
        page
    }

    pub async fn product(&self, id: &str) -> Option<ProductView> {
        self.inventory.read().await.get(id).map(ProductView::from)
    }

    pub async fn warehouses(&self) -> Vec<String> {
        self.inventory.read().await.warehouses()
    }

    pub async fn totals(&self) -> Totals {
        self.inventory.read().await.totals()
    }

    /// Daily trend ending on today's UTC date.
    pub async fn kpis(&self, range: i64) -> Vec<KpiPoint> {
        let today = Utc::now().date_naive();
        self.inventory.read().await.kpis(range, today)
    }

    pub async fn update_demand(&self, id: &str, demand: i64) -> Result<ProductView> {
        let mut inventory = self.inventory.write().await;
        match inventory.update_demand(id, demand) {
            Ok(product) => {
                tracing::info!(id, demand = product.demand().value(), status = %product.status(), "demand updated");
                Ok(product.view())
            }
            Err(e) => {
                tracing::warn!(id, demand, error = %e, "demand update rejected");
                Err(e)
            }
        }
    }

    pub async fn transfer_stock(&self, id: &str, to_warehouse: &str, amount: i64) -> Result<Vec<ProductView>> {
        let mut inventory = self.inventory.write().await;
        let before = inventory.len();
        match inventory.transfer_stock(id, to_warehouse, amount) {
            Ok(affected) => {
                let target = affected.get(1).map(|p| p.id().to_string());
                tracing::info!(id, to_warehouse, amount, ?target, created = inventory.len() > before, "stock transferred");
                Ok(affected.iter().map(ProductView::from).collect())
            }
            Err(e) => {
                tracing::warn!(id, to_warehouse, amount, error = %e, "stock transfer rejected");
                Err(e)
            }
        }
    }
}
