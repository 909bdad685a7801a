#![allow(dead_code)]

use chrono::NaiveDate;
use matrader::domain::error::MatraderError;
pub use matrader::domain::ohlcv::PriceBar;
use matrader::ports::data_port::DataPort;
use std::collections::HashMap;
use std::path::Path;

/// In-memory data port keyed by file name; headless stand-in for the CSV
/// adapter.
pub struct MockDataPort {
    pub data: HashMap<String, Vec<PriceBar>>,
    pub errors: HashMap<String, String>,
}

impl MockDataPort {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    pub fn with_bars(mut self, name: &str, bars: Vec<PriceBar>) -> Self {
        self.data.insert(name.to_string(), bars);
        self
    }

    pub fn with_error(mut self, name: &str, reason: &str) -> Self {
        self.errors.insert(name.to_string(), reason.to_string());
        self
    }
}

impl DataPort for MockDataPort {
    fn load_bars(&self, path: &Path) -> Result<Vec<PriceBar>, MatraderError> {
        let name = path.to_string_lossy().to_string();
        if let Some(reason) = self.errors.get(&name) {
            return Err(MatraderError::Csv {
                reason: reason.clone(),
            });
        }
        Ok(self.data.get(&name).cloned().unwrap_or_default())
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn make_bar(date_str: &str, close: f64) -> PriceBar {
    PriceBar {
        date: NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap(),
        open: close - 1.0,
        high: close + 1.0,
        low: close - 2.0,
        close,
    }
}

/// Consecutive daily bars from the given closes, starting 2024-01-01.
pub fn make_bars(closes: &[f64]) -> Vec<PriceBar> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| PriceBar {
            date: date(2024, 1, 1) + chrono::Duration::days(i as i64),
            open: close,
            high: close + 1.0,
            low: close - 1.0,
            close,
        })
        .collect()
}
