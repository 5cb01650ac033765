use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::nav::PortfolioRow;

/// A single point of the shaded drawdown overlay.
///
/// Values are clamped to ≤ 0 so the overlay never rises above the axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawdownPoint {
    pub date: NaiveDate,
    pub drawdown: f64,
}

/// Chart-ready data for the portfolio page.
///
/// The core computes these — the frontend only renders. `rows` feeds the
/// equity, growth, and drawdown lines plus the table; `drawdown_area`
/// feeds the shaded overlay under the drawdown line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioChart {
    pub rows: Vec<PortfolioRow>,
    pub drawdown_area: Vec<DrawdownPoint>,
}

impl PortfolioChart {
    /// Number of chart points (one per derived row).
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
