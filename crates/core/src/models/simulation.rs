use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A hypothetical trade the backend tracks against live prices.
///
/// Created through `POST /simulate-trade`; exits (TP/SL hits) and P/L are
/// resolved server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulatedTrade {
    #[serde(default)]
    pub id: Option<String>,
    pub symbol: String,
    pub entry_price: f64,
    pub stop_loss: f64,
    pub take_profit: f64,
    #[serde(default = "default_position_size")]
    pub position_size: i64,
    #[serde(default)]
    pub entry_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub current_price: Option<f64>,
    /// "active", "success", or "failed" — backend vocabulary.
    #[serde(default = "default_trade_status")]
    pub status: String,
    #[serde(default)]
    pub exit_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub exit_price: Option<f64>,
    #[serde(default)]
    pub pnl_percent: Option<f64>,
    #[serde(default)]
    pub pnl_amount: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub strategy: Option<String>,
}

fn default_position_size() -> i64 {
    100
}

fn default_trade_status() -> String {
    "active".to_string()
}

/// Aggregate performance of simulated trades over a period.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StrategyStats {
    #[serde(default)]
    pub total_trades: i64,
    #[serde(default)]
    pub successful_trades: i64,
    #[serde(default)]
    pub failed_trades: i64,
    #[serde(default)]
    pub active_trades: i64,
    #[serde(default)]
    pub success_rate: f64,
    #[serde(default)]
    pub average_pnl: f64,
    #[serde(default)]
    pub total_pnl: f64,
    #[serde(default)]
    pub period_days: i64,
}
