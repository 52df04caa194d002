//! Store-wide totals and the synthetic daily trend shown on the dashboard chart.
//!
//! The trend is not history: it perturbs today's totals with a deterministic
//! variation seeded from the record identifiers, so an unchanged store always
//! renders the same series.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use crate::domain::aggregates::Product;

pub const MIN_RANGE: u32 = 1;
pub const MAX_RANGE: u32 = 90;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub total_stock: u64,
    pub total_demand: u64,
    /// Percentage of total demand covered by stock, in `[0, 100]`.
    pub fill_rate: f64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiPoint {
    pub date: NaiveDate,
    pub stock: u64,
    pub demand: u64,
}

pub fn totals(products: &[Product]) -> Totals {
    let (total_stock, total_demand, filled) = products.iter().fold((0u64, 0u64, 0u64), |(s, d, f), p| {
        let stock = u64::from(p.stock().value());
        let demand = u64::from(p.demand().value());
        (s + stock, d + demand, f + stock.min(demand))
    });
    let fill_rate = if total_demand == 0 { 100.0 } else { filled as f64 / total_demand as f64 * 100.0 };
    Totals { total_stock, total_demand, fill_rate }
}

/// Sum of the third character's code point across all identifiers; shorter ids add nothing.
pub fn trend_seed(products: &[Product]) -> u64 {
    products
        .iter()
        .filter_map(|p| p.id().chars().nth(2))
        .map(|c| u64::from(u32::from(c)))
        .sum()
}

pub fn clamp_range(range: i64) -> u32 {
    range.clamp(i64::from(MIN_RANGE), i64::from(MAX_RANGE)) as u32
}

/// `range` daily points ending at `today`, oldest first.
pub fn kpi_trend(products: &[Product], range: i64, today: NaiveDate) -> Vec<KpiPoint> {
    let Totals { total_stock, total_demand, .. } = totals(products);
    let seed = trend_seed(products);
    let days = clamp_range(range);

    (0..days)
        .rev()
        .map(|i| {
            let variation = ((seed + u64::from(i) * 13) % 17) as i64 - 8;
            KpiPoint {
                date: today - Duration::days(i64::from(i)),
                stock: offset_clamped(total_stock, variation * 2),
                demand: offset_clamped(total_demand, variation),
            }
        })
        .collect()
}

fn offset_clamped(base: u64, delta: i64) -> u64 {
    if delta < 0 { base.saturating_sub(delta.unsigned_abs()) } else { base.saturating_add(delta as u64) }
}
