use crate::errors::CoreError;
use crate::models::nav::NavRecord;

/// Trait abstraction for NAV dataset sources.
///
/// The transform never cares where the data came from: the bundled
/// dataset, a caller-supplied JSON document, and a file on disk all
/// implement this trait. Swapping the data source touches nothing else.
pub trait NavProvider {
    /// Human-readable name of this source (for errors).
    fn name(&self) -> &str;

    /// Load the raw dataset rows.
    ///
    /// Rows are returned as exported, malformed entries included;
    /// filtering is `DatasetService`'s job, not the provider's.
    fn load(&self) -> Result<Vec<NavRecord>, CoreError>;
}
