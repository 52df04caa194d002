//! Value Objects for inventory records

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// SKU (Stock Keeping Unit), shared by every warehouse copy of a product. Kept verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sku(String);

impl Sku {
    pub fn new(value: impl Into<String>) -> Self { Self(value.into()) }
    pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for Sku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

/// Non-negative unit count used for both stock and demand
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    pub fn new(value: u32) -> Self { Self(value) }

    /// Clamps a signed caller-supplied amount into range; negatives become zero.
    pub fn clamped(value: i64) -> Self {
        Self(u32::try_from(value.max(0)).unwrap_or(u32::MAX))
    }

    pub fn value(&self) -> u32 { self.0 }
    pub fn add(&self, other: Quantity) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }
    pub fn subtract(&self, other: Quantity) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }
    pub fn is_zero(&self) -> bool { self.0 == 0 }
}

/// Health of a record, always derived from its stock and demand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockStatus {
    Healthy,
    Low,
    Critical,
}

impl StockStatus {
    /// Stock above demand is healthy, exactly meeting it is low, anything short is critical.
    pub fn classify(stock: Quantity, demand: Quantity) -> Self {
        match stock.cmp(&demand) {
            Ordering::Greater => Self::Healthy,
            Ordering::Equal => Self::Low,
            Ordering::Less => Self::Critical,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self { Self::Healthy => "HEALTHY", Self::Low => "LOW", Self::Critical => "CRITICAL" }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for StockStatus {
    type Err = StatusParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Healthy, Self::Low, Self::Critical]
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| StatusParseError(s.to_string()))
    }
}

#[derive(Debug, Clone)] pub struct StatusParseError(String);
impl std::error::Error for StatusParseError {}
impl fmt::Display for StatusParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "unknown status {:?}, expected HEALTHY, LOW or CRITICAL", self.0) }
}
