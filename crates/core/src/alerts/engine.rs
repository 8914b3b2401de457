use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::alert::{Alert, AlertStatus};
use crate::storage::KeyValueStore;

use super::notify::{AlertSink, ToneCue};

/// Storage key for the persisted alert state.
const ALERTS_KEY: &str = "tradelens.alerts";

/// Default re-evaluation suppression window, seconds.
const DEFAULT_SUPPRESSION_SECS: i64 = 60;

/// The persisted shape: the alert list plus the sound toggle.
#[derive(Debug, Default, Serialize, Deserialize)]
struct AlertBook {
    alerts: Vec<Alert>,
    sound_enabled: bool,
}

/// Client-local alert watcher.
///
/// Alerts are long-entry pullback alerts: an alert fires when the latest
/// fetched price for its symbol comes down to or below the target. The
/// `Active → Triggered` transition is terminal; removal is always an explicit
/// user action.
///
/// Evaluation is opportunistic (callers invoke it whenever a fresh price
/// arrives), and a per-alert last-checked timestamp suppresses re-evaluation
/// inside a short window so rapid re-renders cannot double-fire side effects.
///
/// State persists through the injected [`KeyValueStore`] on every change.
pub struct AlertEngine {
    store: Box<dyn KeyValueStore>,
    book: AlertBook,
    suppression_window: Duration,
    cue: ToneCue,
}

impl std::fmt::Debug for AlertEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlertEngine")
            .field("alerts", &self.book.alerts.len())
            .field("sound_enabled", &self.book.sound_enabled)
            .finish()
    }
}

impl AlertEngine {
    /// Load the alert book from storage. A missing or unreadable entry
    /// starts an empty book — local alert state is advisory, not precious.
    pub fn load(store: Box<dyn KeyValueStore>) -> Self {
        let book = match store.get(ALERTS_KEY) {
            Ok(Some(value)) => serde_json::from_value(value).unwrap_or_else(|e| {
                warn!(error = %e, "stored alert state unreadable, starting fresh");
                AlertBook::default()
            }),
            Ok(None) => AlertBook::default(),
            Err(e) => {
                warn!(error = %e, "alert storage read failed, starting fresh");
                AlertBook::default()
            }
        };

        Self {
            store,
            book,
            suppression_window: Duration::seconds(DEFAULT_SUPPRESSION_SECS),
            cue: ToneCue::default(),
        }
    }

    /// Override the re-evaluation suppression window (default 60 s).
    pub fn set_suppression_window(&mut self, window: Duration) {
        self.suppression_window = window;
    }

    // ── Alert CRUD ──────────────────────────────────────────────────

    /// Create a new active alert and persist the book.
    pub fn create_alert(
        &mut self,
        symbol: &str,
        target_price: f64,
        current_price: f64,
        now: DateTime<Utc>,
    ) -> Result<Uuid, CoreError> {
        if !target_price.is_finite() || target_price <= 0.0 {
            return Err(CoreError::ValidationError(format!(
                "target price must be positive, got {target_price}"
            )));
        }

        let alert = Alert::new(symbol, target_price, current_price, now);
        let id = alert.id;
        self.book.alerts.push(alert);
        self.persist()?;
        Ok(id)
    }

    /// Remove an alert by id (the only way an alert ever leaves the book).
    pub fn remove_alert(&mut self, id: Uuid) -> Result<(), CoreError> {
        let before = self.book.alerts.len();
        self.book.alerts.retain(|a| a.id != id);
        if self.book.alerts.len() == before {
            return Err(CoreError::AlertNotFound(id.to_string()));
        }
        self.persist()
    }

    #[must_use]
    pub fn alerts(&self) -> &[Alert] {
        &self.book.alerts
    }

    #[must_use]
    pub fn active_alerts(&self) -> Vec<&Alert> {
        self.book.alerts.iter().filter(|a| a.is_active()).collect()
    }

    // ── Sound toggle ────────────────────────────────────────────────

    #[must_use]
    pub fn sound_enabled(&self) -> bool {
        self.book.sound_enabled
    }

    pub fn set_sound_enabled(&mut self, enabled: bool) -> Result<(), CoreError> {
        self.book.sound_enabled = enabled;
        self.persist()
    }

    // ── Evaluation ──────────────────────────────────────────────────

    /// Evaluate all active alerts for `symbol` against the latest price.
    ///
    /// Returns the ids of alerts that transitioned to `Triggered`. Side
    /// effects (cue, notification) go through `sink` and are best-effort:
    /// failures are logged and swallowed, never retried.
    pub fn evaluate(
        &mut self,
        symbol: &str,
        latest_price: f64,
        now: DateTime<Utc>,
        sink: &mut dyn AlertSink,
    ) -> Result<Vec<Uuid>, CoreError> {
        let symbol = symbol.to_uppercase();
        let mut fired = Vec::new();

        for alert in &mut self.book.alerts {
            if !alert.is_active() || alert.symbol != symbol {
                continue;
            }

            // Re-render shield: skip alerts checked inside the window.
            if let Some(checked) = alert.last_checked_at {
                if now - checked < self.suppression_window {
                    continue;
                }
            }
            alert.last_checked_at = Some(now);

            // Long-entry pullback: fire when the price came down to target.
            if latest_price <= alert.target_price {
                alert.status = AlertStatus::Triggered;
                alert.triggered_at = Some(now);
                info!(
                    symbol = %alert.symbol,
                    target = alert.target_price,
                    price = latest_price,
                    "alert triggered"
                );
                fired.push(alert.id);

                if self.book.sound_enabled {
                    if let Err(e) = sink.play_cue(&self.cue) {
                        warn!(error = %e, "alert cue playback failed");
                    }
                }
                if sink.notifications_permitted() {
                    if let Err(e) = sink.notify(alert) {
                        warn!(error = %e, "alert notification failed");
                    }
                }
            }
        }

        if !fired.is_empty() {
            self.persist()?;
        }
        Ok(fired)
    }

    // ── Internal ────────────────────────────────────────────────────

    fn persist(&mut self) -> Result<(), CoreError> {
        let value = serde_json::to_value(&self.book)
            .map_err(|e| CoreError::Serialization(e.to_string()))?;
        self.store.set(ALERTS_KEY, value)
    }
}
