use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Summary of the portfolio series, computed over the derived rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesSummary {
    /// Date of the first sample
    pub first_date: NaiveDate,

    /// Date of the last sample
    pub last_date: NaiveDate,

    /// Number of samples in the series
    pub samples: usize,

    /// Net asset value of the first sample
    pub initial_equity: f64,

    /// Net asset value of the last sample
    pub final_equity: f64,

    /// Cumulative growth at the last sample (percent)
    pub total_growth_pct: f64,

    /// Largest decline from a running peak (≤ 0, in value units)
    pub max_drawdown: f64,

    /// Date on which the largest decline occurred
    pub max_drawdown_date: NaiveDate,
}
