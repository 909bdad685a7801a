//! Crossover signal and position-transition derivation.

use chrono::NaiveDate;

use super::moving_average::simple_moving_average;
use super::ohlcv::PriceBar;

/// One row of the annotated series, parallel to the price series by index:
/// the bar's close, both averages, the binary crossover signal, and the
/// signal transition at that index.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRow {
    pub date: NaiveDate,
    pub close: f64,
    pub short_ma: Option<f64>,
    pub long_ma: Option<f64>,
    /// 1 iff both averages are defined and short strictly exceeds long.
    pub signal: i8,
    /// signal[i] - signal[i-1]; `None` at index 0 (no prior signal to diff).
    pub position: Option<i8>,
}

impl AnalysisRow {
    /// Entry marker: the signal rose 0 -> 1 at this bar.
    pub fn is_buy(&self) -> bool {
        self.position == Some(1)
    }

    /// Exit marker: the signal fell 1 -> 0 at this bar.
    pub fn is_sell(&self) -> bool {
        self.position == Some(-1)
    }
}

/// Derive the annotated series for a window pair.
///
/// The result is rebuilt in full on every call; nothing is mutated in place.
pub fn annotate(bars: &[PriceBar], short_term: usize, long_term: usize) -> Vec<AnalysisRow> {
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let short = simple_moving_average(&closes, short_term);
    let long = simple_moving_average(&closes, long_term);

    let mut rows = Vec::with_capacity(bars.len());
    let mut prev_signal: Option<i8> = None;

    for (i, bar) in bars.iter().enumerate() {
        // An undefined average never exceeds anything: the signal stays 0
        // until both windows are warm, and exact ties stay 0.
        let signal: i8 = match (short[i], long[i]) {
            (Some(s), Some(l)) if s > l => 1,
            _ => 0,
        };
        let position = prev_signal.map(|p| signal - p);
        prev_signal = Some(signal);

        rows.push(AnalysisRow {
            date: bar.date,
            close: bar.close,
            short_ma: short[i],
            long_ma: long[i],
            signal,
            position,
        });
    }

    rows
}
