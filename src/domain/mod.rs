//! Inventory domain: records, derived status, and the query, aggregate and mutation rules over them.
pub mod aggregates;
pub mod inventory;
pub mod kpi;
pub mod query;
pub mod seed;
pub mod value_objects;

pub use aggregates::{Product, ProductError, ProductView};
pub use inventory::Inventory;
pub use kpi::{KpiPoint, Totals};
pub use query::{ProductFilter, ProductPage};
pub use value_objects::{Quantity, Sku, StockStatus};
