use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Time key of an OHLCV bar as the backend sends it: either epoch seconds
/// or a date string (e.g. `"2024-01-02"`).
///
/// **Ordering** is numeric between epoch keys and lexicographic between date
/// strings (ISO dates sort correctly that way). A single series must use one
/// representation throughout — `normalize` rejects mixed series — so the
/// cross-variant ordering (epoch before text) exists only to keep `Ord` total.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimeKey {
    Epoch(i64),
    Date(String),
}

impl TimeKey {
    /// Returns `true` when both keys use the same representation.
    pub fn same_kind(&self, other: &TimeKey) -> bool {
        matches!(
            (self, other),
            (TimeKey::Epoch(_), TimeKey::Epoch(_)) | (TimeKey::Date(_), TimeKey::Date(_))
        )
    }
}

impl Ord for TimeKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (TimeKey::Epoch(a), TimeKey::Epoch(b)) => a.cmp(b),
            (TimeKey::Date(a), TimeKey::Date(b)) => a.cmp(b),
            (TimeKey::Epoch(_), TimeKey::Date(_)) => Ordering::Less,
            (TimeKey::Date(_), TimeKey::Epoch(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for TimeKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for TimeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeKey::Epoch(ts) => write!(f, "{ts}"),
            TimeKey::Date(d) => write!(f, "{d}"),
        }
    }
}

impl From<i64> for TimeKey {
    fn from(ts: i64) -> Self {
        TimeKey::Epoch(ts)
    }
}

impl From<&str> for TimeKey {
    fn from(date: &str) -> Self {
        TimeKey::Date(date.to_string())
    }
}

/// One time-sliced open/high/low/close/volume record of a price series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OhlcvBar {
    pub time: TimeKey,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(default)]
    pub volume: f64,
}

impl OhlcvBar {
    pub fn new(
        time: impl Into<TimeKey>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
    ) -> Self {
        Self {
            time: time.into(),
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Check the bar invariants: all fields finite and non-negative,
    /// `high >= max(open, close)`, `low <= min(open, close)`.
    pub fn is_well_formed(&self) -> bool {
        let fields = [self.open, self.high, self.low, self.close, self.volume];
        if fields.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return false;
        }
        self.high >= self.open.max(self.close) && self.low <= self.open.min(self.close)
    }
}

/// Extract the closing prices of a series, in order.
pub fn closing_prices(bars: &[OhlcvBar]) -> Vec<f64> {
    bars.iter().map(|b| b.close).collect()
}
