use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle of a local price alert.
///
/// `Active → Triggered` is the only transition and it is terminal: a
/// triggered alert is never reactivated, only removed by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    Active,
    Triggered,
}

/// A client-local pullback alert: fire when the symbol's price comes *down*
/// to the target. Sell-side (price rising through a target) is not modeled.
///
/// Alerts live in local storage only — they do not survive across devices
/// and the backend never sees them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub id: Uuid,
    /// Ticker symbol, uppercased (e.g. "AAPL").
    pub symbol: String,
    pub target_price: f64,
    /// Price of the symbol when the alert was created, for display.
    pub price_at_creation: f64,
    pub status: AlertStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub triggered_at: Option<DateTime<Utc>>,
    /// Re-evaluation guard, runtime only. Not part of the persisted record.
    #[serde(skip)]
    pub last_checked_at: Option<DateTime<Utc>>,
}

impl Alert {
    pub fn new(
        symbol: impl Into<String>,
        target_price: f64,
        price_at_creation: f64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            symbol: symbol.into().to_uppercase(),
            target_price,
            price_at_creation,
            status: AlertStatus::Active,
            created_at,
            triggered_at: None,
            last_checked_at: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == AlertStatus::Active
    }
}
