use crate::models::chart::{DrawdownPoint, PortfolioChart};
use crate::models::nav::PortfolioRow;

/// Generates chart-ready data sets for the portfolio page.
///
/// The core computes all the numbers — the frontend only renders.
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// Assemble the chart bundle from derived rows.
    ///
    /// The shaded overlay never rises above the axis: area values are
    /// clamped to ≤ 0 even if a row were to carry a positive drawdown.
    pub fn generate_portfolio_chart(&self, rows: &[PortfolioRow]) -> PortfolioChart {
        let drawdown_area = rows
            .iter()
            .map(|row| DrawdownPoint {
                date: row.date,
                drawdown: row.drawdown.min(0.0),
            })
            .collect();

        PortfolioChart {
            rows: rows.to_vec(),
            drawdown_area,
        }
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
