//! Aggregates module
pub mod product;

pub use product::{Product, ProductError, ProductView};
