//! Data access port trait.

use crate::domain::error::MatraderError;
use crate::domain::ohlcv::PriceBar;
use std::path::Path;

pub trait DataPort {
    /// Load every bar from the source, sorted by date ascending.
    ///
    /// All-or-nothing: any malformed row fails the whole load.
    fn load_bars(&self, path: &Path) -> Result<Vec<PriceBar>, MatraderError>;
}
