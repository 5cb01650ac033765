use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Textual date layout used by the NAV dataset (day-month-year).
pub const NAV_DATE_FORMAT: &str = "%d-%m-%Y";

/// A raw row of the NAV dataset, exactly as exported.
///
/// Field names follow the data source ("NAV Date" / "NAV"), and the value
/// types are deliberately loose: real exports contain empty dates, missing
/// values, and numbers quoted as strings. `DatasetService` decides what
/// survives — this type only carries the row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NavRecord {
    /// Date in day-month-year form, e.g. "31-01-2024".
    #[serde(rename = "NAV Date", default)]
    pub date: Option<String>,

    /// Net asset value. A number, a numeric string, null, or absent.
    #[serde(rename = "NAV", default)]
    pub nav: Option<serde_json::Value>,
}

impl NavRecord {
    /// Convenience constructor for a well-formed row.
    pub fn new(date: impl Into<String>, nav: f64) -> Self {
        Self {
            date: Some(date.into()),
            nav: serde_json::Number::from_f64(nav).map(serde_json::Value::Number),
        }
    }

    /// Parse the date field. `None` for empty, absent, or malformed dates.
    #[must_use]
    pub fn parse_date(&self) -> Option<NaiveDate> {
        let raw = self.date.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }
        NaiveDate::parse_from_str(raw, NAV_DATE_FORMAT).ok()
    }

    /// Extract the net asset value as a finite number.
    ///
    /// Accepts JSON numbers and numeric strings (the dataset quotes some
    /// values); anything else is treated as missing.
    #[must_use]
    pub fn nav_value(&self) -> Option<f64> {
        match self.nav.as_ref()? {
            serde_json::Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
            serde_json::Value::String(s) => {
                s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
            }
            _ => None,
        }
    }
}

/// A validated dataset sample: parsed date plus numeric net asset value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavSample {
    pub date: NaiveDate,
    pub equity: f64,
}

impl NavSample {
    pub fn new(date: NaiveDate, equity: f64) -> Self {
        Self { date, equity }
    }
}

/// A derived row of the portfolio time series.
///
/// The core generates these — the frontend just renders them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioRow {
    /// The date for this row
    pub date: NaiveDate,

    /// Net asset value at this date
    pub equity: f64,

    /// Decline from the running peak — always ≤ 0, exactly 0 at and
    /// after a new peak
    pub drawdown: f64,

    /// Cumulative percentage change relative to the first sample
    pub growth: f64,
}
