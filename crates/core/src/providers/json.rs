use std::path::Path;

use crate::errors::CoreError;
use crate::models::nav::NavRecord;

use super::traits::NavProvider;

/// Provider for caller-supplied JSON datasets.
///
/// Accepts the same shape as the bundled dataset: a JSON array of rows
/// carrying "NAV Date" and "NAV" fields.
#[derive(Debug)]
pub struct JsonNavProvider {
    label: String,
    json: String,
}

impl JsonNavProvider {
    /// Wrap a JSON document held in memory.
    pub fn from_json(json: impl Into<String>) -> Self {
        Self {
            label: "JSON".to_string(),
            json: json.into(),
        }
    }

    /// Read a JSON dataset from disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let label = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("file")
            .to_string();
        Ok(Self { label, json })
    }
}

impl NavProvider for JsonNavProvider {
    fn name(&self) -> &str {
        &self.label
    }

    fn load(&self) -> Result<Vec<NavRecord>, CoreError> {
        parse_records(&self.label, &self.json)
    }
}

/// Parse a JSON dataset document into raw rows.
///
/// The document must be a JSON array. A row that is not an object (or
/// carries fields of unexpected types) becomes an empty record and is
/// dropped later by `DatasetService` — one junk row never fails the load.
pub(crate) fn parse_records(source: &str, json: &str) -> Result<Vec<NavRecord>, CoreError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let rows = value.as_array().ok_or_else(|| {
        CoreError::InvalidDataFormat(format!("{source} dataset is not a JSON array"))
    })?;

    Ok(rows
        .iter()
        .map(|row| serde_json::from_value(row.clone()).unwrap_or_default())
        .collect())
}
