//! Daily price bar representation.

use chrono::NaiveDate;

/// One daily bar. Open/high/low are carried for display only; the
/// crossover strategy works on closes.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}
