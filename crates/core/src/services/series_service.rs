use crate::models::nav::{NavSample, PortfolioRow};

/// The portfolio series transform: running peak, drawdown, growth.
///
/// Pure business logic — no I/O, no shared state. Easy to test.
pub struct SeriesService;

impl SeriesService {
    pub fn new() -> Self {
        Self
    }

    /// Derive one row per sample in a single forward pass.
    ///
    /// For each sample in chronological order:
    /// 1. Raise the running peak when the sample exceeds it
    /// 2. `drawdown = equity - peak` (always ≤ 0, exactly 0 at a new peak)
    /// 3. `growth = (equity - first) / first * 100`, or 0 when the first
    ///    sample's value is 0
    ///
    /// O(n) time, O(1) extra memory besides the output. Total over
    /// well-formed input — the caller filters malformed rows beforehand,
    /// so this never fails.
    pub fn transform(&self, samples: &[NavSample]) -> Vec<PortfolioRow> {
        let mut peak = f64::NEG_INFINITY;
        // The 1.0 fallback only guards the division; with no samples the
        // loop body never runs.
        let first = samples.first().map(|s| s.equity).unwrap_or(1.0);

        samples
            .iter()
            .map(|sample| {
                if sample.equity > peak {
                    peak = sample.equity;
                }
                let drawdown = sample.equity - peak;
                let growth = if first != 0.0 {
                    (sample.equity - first) / first * 100.0
                } else {
                    0.0
                };

                PortfolioRow {
                    date: sample.date,
                    equity: sample.equity,
                    drawdown,
                    growth,
                }
            })
            .collect()
    }
}

impl Default for SeriesService {
    fn default() -> Self {
        Self::new()
    }
}
