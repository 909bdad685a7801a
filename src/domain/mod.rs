//! Core domain types and logic.

pub mod ohlcv;
pub mod moving_average;
pub mod analysis;
pub mod backtest;
pub mod error;
