pub mod errors;
pub mod models;
pub mod providers;
pub mod services;

use chrono::NaiveDate;
use models::{
    analytics::SeriesSummary,
    blog::BlogPost,
    chart::PortfolioChart,
    nav::{NavSample, PortfolioRow},
    settings::Settings,
};
use providers::bundled::BundledNavProvider;
use providers::traits::NavProvider;
use services::{
    analytics_service::AnalyticsService, blog_service::BlogService, chart_service::ChartService,
    dataset_service::DatasetService, series_service::SeriesService,
};

use errors::CoreError;

/// Main entry point for the Capital site core.
/// Holds the dataset, the derived series, the page content, and all
/// services that operate on them.
#[must_use]
pub struct CapitalSite {
    samples: Vec<NavSample>,
    rows: Vec<PortfolioRow>,
    posts: Vec<BlogPost>,
    settings: Settings,
    dataset_service: DatasetService,
    series_service: SeriesService,
    chart_service: ChartService,
    analytics_service: AnalyticsService,
    blog_service: BlogService,
}

impl std::fmt::Debug for CapitalSite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CapitalSite")
            .field("samples", &self.samples.len())
            .field("posts", &self.posts.len())
            .field("settings", &self.settings)
            .finish()
    }
}

impl CapitalSite {
    /// Create a site with no portfolio data and no posts.
    pub fn new() -> Self {
        Self::build(Vec::new())
    }

    /// Load the portfolio series from a dataset provider.
    pub fn from_provider(provider: &dyn NavProvider) -> Result<Self, CoreError> {
        let samples = DatasetService::new().load(provider)?;
        Ok(Self::build(samples))
    }

    /// Load the dataset bundled with the crate.
    pub fn bundled() -> Result<Self, CoreError> {
        Self::from_provider(&BundledNavProvider::new())
    }

    /// Replace the portfolio dataset and recompute the derived series.
    ///
    /// There is no reactive state here: a dataset change is a plain
    /// re-invocation of the same pipeline. Posts and settings are kept.
    pub fn reload(&mut self, provider: &dyn NavProvider) -> Result<(), CoreError> {
        let samples = self.dataset_service.load(provider)?;
        self.rows = self.series_service.transform(&samples);
        self.samples = samples;
        Ok(())
    }

    // ── Portfolio Series ────────────────────────────────────────────

    /// The derived rows, ascending by date.
    #[must_use]
    pub fn portfolio_rows(&self) -> &[PortfolioRow] {
        &self.rows
    }

    /// `false` when the dataset produced no valid samples; the frontend
    /// renders its "no data" state instead of chart and table.
    #[must_use]
    pub fn has_portfolio_data(&self) -> bool {
        !self.rows.is_empty()
    }

    /// Number of valid samples in the loaded dataset.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Date of the earliest sample in the series.
    #[must_use]
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.samples.first().map(|s| s.date)
    }

    /// Date of the most recent sample in the series.
    #[must_use]
    pub fn latest_date(&self) -> Option<NaiveDate> {
        self.samples.last().map(|s| s.date)
    }

    // ── Charts ──────────────────────────────────────────────────────

    /// Chart-ready data for the portfolio page.
    #[must_use]
    pub fn portfolio_chart(&self) -> PortfolioChart {
        self.chart_service.generate_portfolio_chart(&self.rows)
    }

    // ── Analytics ───────────────────────────────────────────────────

    /// Summary figures for the series, or `None` with no data.
    #[must_use]
    pub fn portfolio_summary(&self) -> Option<SeriesSummary> {
        self.analytics_service.summarize(&self.rows)
    }

    // ── Blog ────────────────────────────────────────────────────────

    /// Add a post to the home-page listing.
    /// Validates the post before committing it.
    pub fn add_post(&mut self, post: BlogPost) -> Result<(), CoreError> {
        self.blog_service.add_post(&mut self.posts, post)
    }

    /// All posts, newest first.
    #[must_use]
    pub fn get_posts(&self) -> Vec<&BlogPost> {
        self.blog_service.get_posts(&self.posts)
    }

    /// Get a single post by id.
    #[must_use]
    pub fn get_post(&self, id: u32) -> Option<&BlogPost> {
        self.blog_service.get_post(&self.posts, id)
    }

    /// Number of posts in the listing.
    #[must_use]
    pub fn post_count(&self) -> usize {
        self.posts.len()
    }

    /// Collapsed-card preview of a post, using the configured length.
    #[must_use]
    pub fn post_preview(&self, post: &BlogPost) -> String {
        post.preview(self.settings.preview_chars)
    }

    // ── Settings ────────────────────────────────────────────────────

    /// Get current settings.
    #[must_use]
    pub fn get_settings(&self) -> &Settings {
        &self.settings
    }

    /// Set the symbol shown next to monetary values.
    /// The symbol must be non-empty after trimming.
    pub fn set_currency_symbol(&mut self, symbol: String) -> Result<(), CoreError> {
        let trimmed = symbol.trim();
        if trimmed.is_empty() {
            return Err(CoreError::ValidationError(
                "Currency symbol must not be empty".into(),
            ));
        }
        self.settings.currency_symbol = trimmed.to_string();
        Ok(())
    }

    // ── Export ──────────────────────────────────────────────────────

    /// Export the derived rows as a JSON string.
    pub fn export_rows_to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.rows).map_err(|e| {
            CoreError::Serialization(format!("Failed to serialize rows to JSON: {e}"))
        })
    }

    /// Export the derived rows as a CSV string.
    /// Columns mirror the portfolio table: date, equity, growth, drawdown.
    #[must_use]
    pub fn export_rows_to_csv(&self) -> String {
        let mut csv = String::from("date,equity,growth,drawdown\n");
        for row in &self.rows {
            csv.push_str(&format!(
                "{},{},{},{}\n",
                row.date, row.equity, row.growth, row.drawdown,
            ));
        }
        csv
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(samples: Vec<NavSample>) -> Self {
        let series_service = SeriesService::new();
        let rows = series_service.transform(&samples);

        Self {
            samples,
            rows,
            posts: Vec::new(),
            settings: Settings::default(),
            dataset_service: DatasetService::new(),
            series_service,
            chart_service: ChartService::new(),
            analytics_service: AnalyticsService::new(),
            blog_service: BlogService::new(),
        }
    }
}

impl Default for CapitalSite {
    fn default() -> Self {
        Self::new()
    }
}
