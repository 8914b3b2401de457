use serde::{Deserialize, Serialize};

use crate::models::search::{ProviderInfo, SymbolMatch};

/// Parameters of `POST /analyze`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub symbol: String,
    pub provider: String,
    pub timeframe: String,
    pub period: String,
    pub lookback: u32,
}

impl AnalyzeRequest {
    /// Request with the backend's default provider and windows.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            provider: "yahoo".to_string(),
            timeframe: "1d".to_string(),
            period: "6mo".to_string(),
            lookback: 60,
        }
    }

    pub fn with_timeframe(mut self, timeframe: impl Into<String>) -> Self {
        self.timeframe = timeframe.into();
        self
    }

    pub fn with_period(mut self, period: impl Into<String>) -> Self {
        self.period = period.into();
        self
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct SymbolSearchRequest<'a> {
    pub query: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SymbolSearchResponse {
    #[serde(default)]
    pub results: Vec<SymbolMatch>,
}

#[derive(Debug, Serialize)]
pub(crate) struct OnDemandFetchRequest<'a> {
    pub symbol: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProvidersResponse {
    #[serde(default)]
    pub providers: Vec<ProviderInfo>,
}

/// Body of `POST /alerts/set` — mirrors the local alert onto the backend so
/// server-side checks can fire too.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetAlertRequest {
    pub symbol: String,
    pub target_price: f64,
    /// "take_profit", "stop_loss", or "ideal_entry" — backend vocabulary.
    pub alert_type: String,
    pub current_price: f64,
    #[serde(default)]
    pub user_note: Option<String>,
}

/// Inputs for the backend's entry optimizer (`POST /optimize-entry`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizeEntryRequest {
    pub symbol: String,
    pub current_price: f64,
    pub ema_20: f64,
    pub ema_50: f64,
    pub support: f64,
    pub resistance: f64,
    pub atr: f64,
    pub current_rr: f64,
    #[serde(default = "default_target_rr")]
    pub target_rr: f64,
}

fn default_target_rr() -> f64 {
    2.0
}

/// Result of the backend's entry optimizer: a suggested pullback entry with
/// its stop/target and the ratio it achieves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryOptimization {
    pub optimized: bool,
    #[serde(default)]
    pub current_rr: f64,
    pub ideal_entry: f64,
    pub ideal_sl: f64,
    pub ideal_tp: f64,
    pub ideal_rr: f64,
    #[serde(default)]
    pub entry_level: Option<String>,
    #[serde(default)]
    pub pullback_distance: Option<f64>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub warning: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
}

/// Body of `POST /simulate-trade`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulateTradeRequest {
    pub symbol: String,
    pub entry_price: f64,
    pub stop_loss: f64,
    pub take_profit: f64,
    #[serde(default = "default_position_size")]
    pub position_size: i64,
    #[serde(default)]
    pub strategy: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

fn default_position_size() -> i64 {
    100
}

/// Body of `POST /watchlist/add`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchlistAddRequest {
    pub symbol: String,
    pub ideal_entry_price: f64,
    pub current_price: f64,
    pub stop_loss: f64,
    pub take_profit: f64,
    #[serde(default)]
    pub confidence_score: i64,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Body of `POST /simulations/audit`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationAuditRequest {
    pub days: u32,
}
