//! matrader — dual moving-average crossover backtester.
//!
//! Hexagonal architecture: domain logic in [`domain`], port traits in [`ports`],
//! concrete implementations in [`adapters`]. The [`session`] module exposes the
//! stateful load/run/chart facade consumed by the CLI.

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod session;
pub mod cli;
