//! Stateful load/run/chart facade consumed by the presentation layer.

use std::path::Path;

use crate::domain::analysis::AnalysisRow;
use crate::domain::backtest::{run_backtest, BacktestResult};
use crate::domain::error::MatraderError;
use crate::domain::ohlcv::PriceBar;
use crate::ports::data_port::DataPort;

/// Holds the last successfully loaded series and the last backtest result.
///
/// Not re-entrant: one session serves one caller at a time. A failed load or
/// run leaves the previous series and result untouched; each run starts from
/// a fresh accumulator inside [`run_backtest`], so nothing leaks between runs.
pub struct Session<D: DataPort> {
    data_port: D,
    series: Option<Vec<PriceBar>>,
    result: Option<BacktestResult>,
}

impl<D: DataPort> Session<D> {
    pub fn new(data_port: D) -> Self {
        Session {
            data_port,
            series: None,
            result: None,
        }
    }

    /// Load a price series, replacing any previously loaded one in full.
    ///
    /// Returns the number of bars loaded. On failure the prior series (if
    /// any) stays installed and usable. A successful load clears the prior
    /// result, which described the old series.
    pub fn load(&mut self, path: &Path) -> Result<usize, MatraderError> {
        let bars = self.data_port.load_bars(path)?;
        let count = bars.len();
        self.series = Some(bars);
        self.result = None;
        Ok(count)
    }

    /// Run a crossover backtest against the loaded series.
    pub fn run(
        &mut self,
        short_term: usize,
        long_term: usize,
    ) -> Result<&BacktestResult, MatraderError> {
        let bars = self.series.as_deref().ok_or(MatraderError::NoData)?;
        let result = run_backtest(bars, short_term, long_term)?;
        Ok(self.result.insert(result))
    }

    /// The annotated series from the last run, for chart rendering.
    /// Empty until a run has succeeded.
    pub fn chart_series(&self) -> &[AnalysisRow] {
        self.result.as_ref().map_or(&[], |r| r.rows.as_slice())
    }

    pub fn last_result(&self) -> Option<&BacktestResult> {
        self.result.as_ref()
    }

    pub fn series(&self) -> Option<&[PriceBar]> {
        self.series.as_deref()
    }
}
