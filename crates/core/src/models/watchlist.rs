use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A potential investment tracked on the backend watchlist.
///
/// The backend owns these records (creation, price refresh, status flips);
/// the core only posts additions and renders what comes back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchlistEntry {
    #[serde(default)]
    pub id: Option<String>,
    pub symbol: String,
    pub ideal_entry_price: f64,
    pub current_price: f64,
    pub stop_loss: f64,
    pub take_profit: f64,
    #[serde(default)]
    pub confidence_score: i64,
    #[serde(default)]
    pub added_at: Option<DateTime<Utc>>,
    /// Unrealized distance from the ideal entry, percent.
    #[serde(default)]
    pub pnl_percent: Option<f64>,
    /// "pending", "triggered", or "missed" — backend vocabulary.
    #[serde(default = "default_watchlist_status")]
    pub status: String,
    #[serde(default)]
    pub notes: Option<String>,
}

fn default_watchlist_status() -> String {
    "pending".to_string()
}
