//! CSV file data adapter.
//!
//! Reads comma-separated exports with a header row. Columns are located by
//! name: `<DTYYYYMMDD>`, `<OPEN>`, `<HIGH>`, `<LOW>`, `<CLOSE>` in the
//! MetaStock style, with the angle brackets optional and names
//! case-insensitive. Extra columns are ignored. Dates are eight digits,
//! `YYYYMMDD`.

use crate::domain::error::MatraderError;
use crate::domain::ohlcv::PriceBar;
use crate::ports::data_port::DataPort;
use chrono::NaiveDate;
use std::fs;
use std::path::Path;

pub struct CsvAdapter;

impl CsvAdapter {
    pub fn new() -> Self {
        CsvAdapter
    }
}

impl Default for CsvAdapter {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize_header(name: &str) -> String {
    name.trim()
        .trim_start_matches('<')
        .trim_end_matches('>')
        .to_ascii_uppercase()
}

fn find_column(headers: &csv::StringRecord, name: &str) -> Result<usize, MatraderError> {
    headers
        .iter()
        .position(|h| normalize_header(h) == name)
        .ok_or_else(|| MatraderError::Schema {
            column: name.to_string(),
        })
}

fn get_field<'r>(
    record: &'r csv::StringRecord,
    index: usize,
    column: &str,
) -> Result<&'r str, MatraderError> {
    record
        .get(index)
        .map(str::trim)
        .ok_or_else(|| MatraderError::Schema {
            column: column.to_string(),
        })
}

fn parse_date(value: &str) -> Result<NaiveDate, MatraderError> {
    NaiveDate::parse_from_str(value, "%Y%m%d").map_err(|e| MatraderError::Parse {
        field: "date".into(),
        value: value.to_string(),
        reason: e.to_string(),
    })
}

fn parse_price(field: &str, value: &str) -> Result<f64, MatraderError> {
    value
        .parse()
        .map_err(|e: std::num::ParseFloatError| MatraderError::Parse {
            field: field.to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        })
}

impl DataPort for CsvAdapter {
    fn load_bars(&self, path: &Path) -> Result<Vec<PriceBar>, MatraderError> {
        let content = fs::read_to_string(path)?;
        let mut rdr = csv::Reader::from_reader(content.as_bytes());

        let headers = rdr
            .headers()
            .map_err(|e| MatraderError::Csv {
                reason: e.to_string(),
            })?
            .clone();

        let date_col = find_column(&headers, "DTYYYYMMDD")?;
        let open_col = find_column(&headers, "OPEN")?;
        let high_col = find_column(&headers, "HIGH")?;
        let low_col = find_column(&headers, "LOW")?;
        let close_col = find_column(&headers, "CLOSE")?;

        let mut bars = Vec::new();
        for result in rdr.records() {
            let record = result.map_err(|e| MatraderError::Csv {
                reason: e.to_string(),
            })?;

            let date = parse_date(get_field(&record, date_col, "DTYYYYMMDD")?)?;
            let open = parse_price("open", get_field(&record, open_col, "OPEN")?)?;
            let high = parse_price("high", get_field(&record, high_col, "HIGH")?)?;
            let low = parse_price("low", get_field(&record, low_col, "LOW")?)?;
            let close = parse_price("close", get_field(&record, close_col, "CLOSE")?)?;

            bars.push(PriceBar {
                date,
                open,
                high,
                low,
                close,
            });
        }

        // Sources usually arrive ordered, but the engine requires it.
        bars.sort_by_key(|b| b.date);
        Ok(bars)
    }
}
