use crate::errors::CoreError;
use crate::models::nav::{NavRecord, NavSample};
use crate::providers::traits::NavProvider;

/// Turns raw dataset rows into a clean, chronologically sorted series.
///
/// Pure business logic — no I/O. Rows with an empty or unparseable date,
/// or without a numeric value, are dropped silently; the transform
/// downstream only ever sees well-formed samples.
pub struct DatasetService;

impl DatasetService {
    pub fn new() -> Self {
        Self
    }

    /// Load a provider's rows and prepare them for the transform.
    pub fn load(&self, provider: &dyn NavProvider) -> Result<Vec<NavSample>, CoreError> {
        Ok(self.prepare(provider.load()?))
    }

    /// Filter out malformed rows and sort ascending by parsed date.
    ///
    /// The sort is stable: rows sharing a date keep their source order,
    /// and duplicate dates are not deduplicated.
    pub fn prepare(&self, records: Vec<NavRecord>) -> Vec<NavSample> {
        let mut samples: Vec<NavSample> = records
            .iter()
            .filter_map(|record| {
                let date = record.parse_date()?;
                let equity = record.nav_value()?;
                Some(NavSample { date, equity })
            })
            .collect();

        samples.sort_by_key(|s| s.date);
        samples
    }
}

impl Default for DatasetService {
    fn default() -> Self {
        Self::new()
    }
}
