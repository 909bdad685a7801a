//! Port traits implemented by adapters.

pub mod data_port;
