// ═══════════════════════════════════════════════════════════════════
// Model Tests — NavRecord, NavSample, PortfolioRow, PortfolioChart,
// BlogPost, Settings, SeriesSummary
// ═══════════════════════════════════════════════════════════════════

use chrono::NaiveDate;
use serde_json::json;

use capital_core::models::analytics::SeriesSummary;
use capital_core::models::blog::BlogPost;
use capital_core::models::chart::{DrawdownPoint, PortfolioChart};
use capital_core::models::nav::{NavRecord, NavSample, PortfolioRow, NAV_DATE_FORMAT};
use capital_core::models::settings::Settings;

fn make_date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ═══════════════════════════════════════════════════════════════════
// NavRecord
// ═══════════════════════════════════════════════════════════════════

mod nav_record {
    use super::*;

    #[test]
    fn deserializes_dataset_field_names() {
        let record: NavRecord =
            serde_json::from_str(r#"{ "NAV Date": "31-01-2024", "NAV": 123.45 }"#).unwrap();

        assert_eq!(record.parse_date().unwrap(), make_date(2024, 1, 31));
        assert!((record.nav_value().unwrap() - 123.45).abs() < 1e-10);
    }

    #[test]
    fn deserializes_with_missing_fields() {
        let record: NavRecord = serde_json::from_str("{}").unwrap();
        assert!(record.parse_date().is_none());
        assert!(record.nav_value().is_none());
    }

    #[test]
    fn numeric_string_nav_is_accepted() {
        let record = NavRecord {
            date: Some("31-01-2024".into()),
            nav: Some(json!("99.9")),
        };
        assert!((record.nav_value().unwrap() - 99.9).abs() < 1e-10);
    }

    #[test]
    fn non_numeric_nav_is_none() {
        let record = NavRecord {
            date: Some("31-01-2024".into()),
            nav: Some(json!("n/a")),
        };
        assert!(record.nav_value().is_none());
    }

    #[test]
    fn boolean_nav_is_none() {
        let record = NavRecord {
            date: Some("31-01-2024".into()),
            nav: Some(json!(true)),
        };
        assert!(record.nav_value().is_none());
    }

    #[test]
    fn empty_date_is_none() {
        let record = NavRecord {
            date: Some("   ".into()),
            nav: Some(json!(1.0)),
        };
        assert!(record.parse_date().is_none());
    }

    #[test]
    fn date_format_is_day_month_year() {
        assert_eq!(NAV_DATE_FORMAT, "%d-%m-%Y");
        // 05-01-2025 is the 5th of January, not the 1st of May
        let record = NavRecord::new("05-01-2025", 1.0);
        assert_eq!(record.parse_date().unwrap(), make_date(2025, 1, 5));
    }

    #[test]
    fn out_of_range_date_is_none() {
        let record = NavRecord::new("32-01-2024", 1.0);
        assert!(record.parse_date().is_none());
    }

    #[test]
    fn constructor_round_trips() {
        let record = NavRecord::new("15-06-2024", 250.75);
        assert_eq!(record.parse_date().unwrap(), make_date(2024, 6, 15));
        assert!((record.nav_value().unwrap() - 250.75).abs() < 1e-10);
    }
}

// ═══════════════════════════════════════════════════════════════════
// NavSample / PortfolioRow
// ═══════════════════════════════════════════════════════════════════

mod series_models {
    use super::*;

    #[test]
    fn nav_sample_serde_round_trip() {
        let sample = NavSample::new(make_date(2024, 1, 31), 100.5);
        let json = serde_json::to_string(&sample).unwrap();
        let back: NavSample = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample);
    }

    #[test]
    fn portfolio_row_serde_round_trip() {
        let row = PortfolioRow {
            date: make_date(2024, 1, 31),
            equity: 100.5,
            drawdown: -2.25,
            growth: 12.5,
        };
        let json = serde_json::to_string(&row).unwrap();
        let back: PortfolioRow = serde_json::from_str(&json).unwrap();
        assert_eq!(back, row);
    }

    #[test]
    fn row_date_serializes_as_iso() {
        let row = PortfolioRow {
            date: make_date(2024, 1, 31),
            equity: 1.0,
            drawdown: 0.0,
            growth: 0.0,
        };
        let json = serde_json::to_string(&row).unwrap();
        assert!(json.contains("2024-01-31"));
    }
}

// ═══════════════════════════════════════════════════════════════════
// PortfolioChart
// ═══════════════════════════════════════════════════════════════════

mod chart_model {
    use super::*;

    #[test]
    fn len_and_is_empty() {
        let empty = PortfolioChart {
            rows: Vec::new(),
            drawdown_area: Vec::new(),
        };
        assert!(empty.is_empty());
        assert_eq!(empty.len(), 0);

        let chart = PortfolioChart {
            rows: vec![PortfolioRow {
                date: make_date(2024, 1, 1),
                equity: 1.0,
                drawdown: 0.0,
                growth: 0.0,
            }],
            drawdown_area: vec![DrawdownPoint {
                date: make_date(2024, 1, 1),
                drawdown: 0.0,
            }],
        };
        assert!(!chart.is_empty());
        assert_eq!(chart.len(), 1);
    }

    #[test]
    fn serde_round_trip() {
        let chart = PortfolioChart {
            rows: vec![PortfolioRow {
                date: make_date(2024, 1, 1),
                equity: 100.0,
                drawdown: -5.0,
                growth: 2.0,
            }],
            drawdown_area: vec![DrawdownPoint {
                date: make_date(2024, 1, 1),
                drawdown: -5.0,
            }],
        };
        let json = serde_json::to_string(&chart).unwrap();
        let back: PortfolioChart = serde_json::from_str(&json).unwrap();
        assert_eq!(back.rows, chart.rows);
        assert_eq!(back.drawdown_area, chart.drawdown_area);
    }
}

// ═══════════════════════════════════════════════════════════════════
// BlogPost — preview & read-more
// ═══════════════════════════════════════════════════════════════════

mod blog_post {
    use super::*;

    fn post_with_summary(summary: String) -> BlogPost {
        BlogPost::new(1, "Title", summary, "Jane Doe", make_date(2024, 6, 1))
    }

    #[test]
    fn short_summary_unchanged() {
        let post = post_with_summary("Short and sweet.".into());
        assert_eq!(post.preview(300), "Short and sweet.");
        assert!(!post.has_more(300));
    }

    #[test]
    fn summary_at_limit_unchanged() {
        let post = post_with_summary("x".repeat(300));
        assert_eq!(post.preview(300).chars().count(), 300);
        assert!(!post.has_more(300));
    }

    #[test]
    fn summary_over_limit_truncated_with_ellipsis() {
        let post = post_with_summary("x".repeat(301));
        let preview = post.preview(300);

        assert!(preview.ends_with("..."));
        assert_eq!(preview.chars().count(), 303);
        assert!(post.has_more(300));
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        // Multi-byte characters must not split mid-codepoint
        let post = post_with_summary("é".repeat(10));
        let preview = post.preview(5);

        assert_eq!(preview, format!("{}...", "é".repeat(5)));
        assert!(post.has_more(5));
    }

    #[test]
    fn serde_round_trip() {
        let post = BlogPost::new(
            2,
            "Understanding Drawdowns",
            "Peaks, troughs, and everything between.",
            "John Smith",
            make_date(2024, 5, 28),
        );
        let json = serde_json::to_string(&post).unwrap();
        let back: BlogPost = serde_json::from_str(&json).unwrap();
        assert_eq!(back, post);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Settings
// ═══════════════════════════════════════════════════════════════════

mod settings {
    use super::*;

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "₹");
        assert_eq!(settings.preview_chars, 300);
    }

    #[test]
    fn serde_round_trip() {
        let settings = Settings {
            currency_symbol: "$".into(),
            preview_chars: 120,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }
}

// ═══════════════════════════════════════════════════════════════════
// SeriesSummary
// ═══════════════════════════════════════════════════════════════════

mod series_summary {
    use super::*;

    #[test]
    fn serde_round_trip() {
        let summary = SeriesSummary {
            first_date: make_date(2022, 1, 31),
            last_date: make_date(2024, 12, 31),
            samples: 36,
            initial_equity: 100000.0,
            final_equity: 158930.25,
            total_growth_pct: 58.93,
            max_drawdown: -8880.65,
            max_drawdown_date: make_date(2022, 6, 30),
        };
        let json = serde_json::to_string(&summary).unwrap();
        let back: SeriesSummary = serde_json::from_str(&json).unwrap();

        assert_eq!(back.samples, 36);
        assert_eq!(back.max_drawdown_date, summary.max_drawdown_date);
        assert!((back.max_drawdown - summary.max_drawdown).abs() < 1e-10);
    }
}
