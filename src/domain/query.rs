//! Listing, lookup and warehouse enumeration over a store snapshot.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use crate::domain::aggregates::{Product, ProductView};
use crate::domain::value_objects::StockStatus;

pub const DEFAULT_LIMIT: usize = 10;

/// Optional constraints for a product listing. `None` means "no constraint";
/// `Some("")` for `warehouse` is an exact match against the empty string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductFilter {
    pub search: Option<String>,
    pub warehouse: Option<String>,
    pub status: Option<StockStatus>,
    pub offset: usize,
    pub limit: usize,
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self { search: None, warehouse: None, status: None, offset: 0, limit: DEFAULT_LIMIT }
    }
}

impl ProductFilter {
    pub fn search(mut self, search: impl Into<String>) -> Self { self.search = Some(search.into()); self }
    pub fn warehouse(mut self, warehouse: impl Into<String>) -> Self { self.warehouse = Some(warehouse.into()); self }
    pub fn status(mut self, status: StockStatus) -> Self { self.status = Some(status); self }
    pub fn page(mut self, offset: usize, limit: usize) -> Self { self.offset = offset; self.limit = limit; self }

    fn matches(&self, needle: Option<&str>, product: &Product) -> bool {
        if let Some(q) = needle {
            let hit = product.name().to_lowercase().contains(q)
                || product.sku().as_str().to_lowercase().contains(q)
                || product.id().to_lowercase().contains(q);
            if !hit { return false; }
        }
        if let Some(warehouse) = &self.warehouse {
            if product.warehouse() != warehouse { return false; }
        }
        if let Some(status) = self.status {
            if product.status() != status { return false; }
        }
        true
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    pub nodes: Vec<ProductView>,
    pub total_count: usize,
}

/// Filters in store order, counts the matches, then slices `[offset, offset + limit)`.
pub fn list_products(products: &[Product], filter: &ProductFilter) -> ProductPage {
    let needle = filter
        .search
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_lowercase);

    let matched: Vec<&Product> = products
        .iter()
        .filter(|p| filter.matches(needle.as_deref(), p))
        .collect();

    let total_count = matched.len();
    let nodes = matched
        .into_iter()
        .skip(filter.offset)
        .take(filter.limit)
        .map(ProductView::from)
        .collect();

    ProductPage { nodes, total_count }
}

pub fn find_product<'a>(products: &'a [Product], id: &str) -> Option<&'a Product> {
    products.iter().find(|p| p.id() == id)
}

/// Distinct warehouses, sorted ascending.
pub fn warehouses(products: &[Product]) -> Vec<String> {
    products
        .iter()
        .map(|p| p.warehouse())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
