//! Backtest engine: single-position trade simulation and compounded return.

use chrono::NaiveDate;

use super::analysis::{annotate, AnalysisRow};
use super::error::MatraderError;
use super::ohlcv::PriceBar;

/// A realized round trip.
#[derive(Debug, Clone, PartialEq)]
pub struct Trade {
    pub entry_date: NaiveDate,
    pub exit_date: NaiveDate,
    pub entry_price: f64,
    pub exit_price: f64,
    /// (exit - entry) / entry * 100
    pub profit_pct: f64,
}

/// Result of one backtest run. Owned by the caller; a new run replaces it.
#[derive(Debug, Clone, PartialEq)]
pub struct BacktestResult {
    /// Geometric compounding of the per-trade returns, as a percentage.
    pub total_profit_pct: f64,
    pub trades: Vec<Trade>,
    /// Annotated series for charting, parallel to the input by index.
    pub rows: Vec<AnalysisRow>,
}

impl BacktestResult {
    pub fn trade_count(&self) -> usize {
        self.trades.len()
    }
}

#[derive(Clone, Copy)]
enum TradeState {
    Flat,
    Long {
        entry_date: NaiveDate,
        entry_price: f64,
    },
}

/// Fold one trade's percentage return into the running total multiplicatively.
///
/// total' = ((1 + trade/100) * (1 + total/100) - 1) * 100
pub fn compound(total_pct: f64, trade_pct: f64) -> f64 {
    ((1.0 + trade_pct / 100.0) * (1.0 + total_pct / 100.0) - 1.0) * 100.0
}

/// Run a crossover backtest over a chronologically ordered series.
///
/// Entries happen on a 0 -> 1 signal transition while flat, exits on 1 -> 0
/// while long, both at that bar's close. No pyramiding: a further entry
/// transition while long is ignored, as is an exit while flat. A position
/// still open after the last bar is left out of the trade list and the total.
///
/// All accumulator state is local to this call; repeated runs over the same
/// inputs return identical results.
pub fn run_backtest(
    bars: &[PriceBar],
    short_term: usize,
    long_term: usize,
) -> Result<BacktestResult, MatraderError> {
    if short_term == 0 || long_term == 0 {
        return Err(MatraderError::InvalidParameter {
            reason: "window lengths must be positive".into(),
        });
    }
    if short_term >= long_term {
        return Err(MatraderError::InvalidParameter {
            reason: format!(
                "short window ({short_term}) must be less than long window ({long_term})"
            ),
        });
    }
    if bars.is_empty() {
        return Err(MatraderError::NoData);
    }

    let rows = annotate(bars, short_term, long_term);

    let mut total_profit_pct = 0.0;
    let mut trades: Vec<Trade> = Vec::new();
    let mut state = TradeState::Flat;

    for row in &rows {
        match (state, row.position) {
            (TradeState::Flat, Some(1)) => {
                state = TradeState::Long {
                    entry_date: row.date,
                    entry_price: row.close,
                };
            }
            (
                TradeState::Long {
                    entry_date,
                    entry_price,
                },
                Some(-1),
            ) => {
                let profit_pct = (row.close - entry_price) / entry_price * 100.0;
                total_profit_pct = compound(total_profit_pct, profit_pct);
                trades.push(Trade {
                    entry_date,
                    exit_date: row.date,
                    entry_price,
                    exit_price: row.close,
                    profit_pct,
                });
                state = TradeState::Flat;
            }
            _ => {}
        }
    }

    Ok(BacktestResult {
        total_profit_pct,
        trades,
        rows,
    })
}
