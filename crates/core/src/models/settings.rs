use serde::{Deserialize, Serialize};

/// User-facing display settings for the site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Symbol the renderer prefixes to monetary values (e.g., "₹").
    pub currency_symbol: String,

    /// Collapsed-card summary length, in characters.
    pub preview_chars: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".to_string(),
            preview_chars: 300,
        }
    }
}
