use crate::models::analytics::SeriesSummary;
use crate::models::nav::PortfolioRow;

/// Computes summary figures over the derived portfolio series.
pub struct AnalyticsService;

impl AnalyticsService {
    pub fn new() -> Self {
        Self
    }

    /// Summarize the series, or `None` when there is no data to show.
    ///
    /// The maximum drawdown is the most negative row drawdown; its date
    /// is the first date on which that decline was reached.
    pub fn summarize(&self, rows: &[PortfolioRow]) -> Option<SeriesSummary> {
        let first = rows.first()?;
        let last = rows.last()?;

        let mut max_drawdown = 0.0;
        let mut max_drawdown_date = first.date;
        for row in rows {
            if row.drawdown < max_drawdown {
                max_drawdown = row.drawdown;
                max_drawdown_date = row.date;
            }
        }

        Some(SeriesSummary {
            first_date: first.date,
            last_date: last.date,
            samples: rows.len(),
            initial_equity: first.equity,
            final_equity: last.equity,
            total_growth_pct: last.growth,
            max_drawdown,
            max_drawdown_date,
        })
    }
}

impl Default for AnalyticsService {
    fn default() -> Self {
        Self::new()
    }
}
