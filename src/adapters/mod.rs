//! Concrete port implementations and output rendering.

pub mod csv_adapter;
pub mod svg_chart;
