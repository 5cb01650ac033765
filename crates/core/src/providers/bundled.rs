use crate::errors::CoreError;
use crate::models::nav::NavRecord;

use super::json::parse_records;
use super::traits::NavProvider;

/// The NAV dataset compiled into the library.
const PORTFOLIO_JSON: &str = include_str!("../../data/portfolio.json");

/// Provider for the dataset bundled with the crate.
///
/// This is the default data source of the portfolio page: the series
/// ships with the build, so rendering needs no I/O at all.
pub struct BundledNavProvider;

impl BundledNavProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BundledNavProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl NavProvider for BundledNavProvider {
    fn name(&self) -> &str {
        "Bundled"
    }

    fn load(&self) -> Result<Vec<NavRecord>, CoreError> {
        parse_records(self.name(), PORTFOLIO_JSON)
    }
}
