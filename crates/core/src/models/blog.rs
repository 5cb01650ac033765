use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A blog article shown on the home page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    /// Numeric identifier, unique within the listing
    pub id: u32,

    pub title: String,

    /// Full article summary; the collapsed card shows a preview of it
    pub summary: String,

    pub author: String,

    /// Publication date
    pub date: NaiveDate,
}

impl BlogPost {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        summary: impl Into<String>,
        author: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            summary: summary.into(),
            author: author.into(),
            date,
        }
    }

    /// Shortened summary for the collapsed card.
    ///
    /// Summaries at or below `limit` characters are returned unchanged;
    /// longer ones are cut at `limit` with an ellipsis appended. Counts
    /// characters, not bytes — summaries are free text.
    #[must_use]
    pub fn preview(&self, limit: usize) -> String {
        if self.summary.chars().count() <= limit {
            self.summary.clone()
        } else {
            let cut: String = self.summary.chars().take(limit).collect();
            format!("{cut}...")
        }
    }

    /// Whether the summary is long enough to warrant a read-more toggle.
    #[must_use]
    pub fn has_more(&self, limit: usize) -> bool {
        self.summary.chars().count() > limit
    }
}
