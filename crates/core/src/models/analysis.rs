use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::candle::OhlcvBar;

/// Risk-management block of an analysis response.
///
/// Computed entirely by the backend; the core never recomputes these fields,
/// it only reads them (the trade planner derives *new* numbers from them).
/// Unknown fields the backend adds over time are carried through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskSummary {
    pub entry_price: f64,
    pub stop_loss: f64,
    pub take_profit: f64,
    pub risk_reward_ratio: f64,
    #[serde(default)]
    pub favorable: bool,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Key price levels the backend wants drawn on the chart.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChartLevels {
    #[serde(default)]
    pub support: Option<f64>,
    #[serde(default)]
    pub resistance: Option<f64>,
    #[serde(default)]
    pub stop_loss: Option<f64>,
    #[serde(default)]
    pub take_profit: Option<f64>,
    #[serde(default)]
    pub entry: Option<f64>,
}

/// A textual notice the backend attaches to an analysis
/// (earnings proximity, volatility spikes, and the like).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisNotice {
    #[serde(default)]
    pub severity: Option<String>,
    pub message: String,
}

/// Full result of `POST /analyze` for one symbol.
///
/// The backend is authoritative for every computed field here. The indicator
/// bundle and market context are deliberately opaque JSON: the core displays
/// them, it does not interpret them. Only `chart_data` is post-processed
/// locally (normalization, Heikin-Ashi, EMA overlays) for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub symbol: String,
    #[serde(default)]
    pub company_name: Option<String>,
    pub current_price: f64,
    #[serde(default)]
    pub price_change_percent: f64,
    pub signal: String,
    #[serde(default)]
    pub confidence_score: i64,
    #[serde(default)]
    pub indicators: Value,
    pub risk_management: RiskSummary,
    #[serde(default)]
    pub market_context: Value,
    #[serde(default)]
    pub alerts: Vec<AnalysisNotice>,
    #[serde(default)]
    pub ai_analysis: String,
    #[serde(default)]
    pub chart_data: Vec<OhlcvBar>,
    #[serde(default)]
    pub chart_levels: ChartLevels,
    #[serde(default)]
    pub override_reason: Option<String>,
    #[serde(default)]
    pub timestamp: String,
}
