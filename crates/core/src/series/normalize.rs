use std::collections::HashSet;

use crate::errors::CoreError;
use crate::models::candle::{OhlcvBar, TimeKey};

/// Normalize a raw OHLCV series for chart consumption: drop duplicate time
/// keys (first-seen record wins) and sort ascending.
///
/// Charts require an ascending, duplicate-free series; the backend makes no
/// such promise, so every series passes through here before any transform.
///
/// A series mixing epoch and date-string time keys has no meaningful order
/// and is rejected rather than sorted heuristically. Already-normalized
/// input comes back unchanged.
pub fn normalize(bars: Vec<OhlcvBar>) -> Result<Vec<OhlcvBar>, CoreError> {
    if let Some(first) = bars.first() {
        if let Some(bad) = bars.iter().find(|b| !b.time.same_kind(&first.time)) {
            return Err(CoreError::MalformedSeries(format!(
                "mixed time representations in one series ({} vs {})",
                first.time, bad.time
            )));
        }
    }

    let mut seen: HashSet<TimeKey> = HashSet::with_capacity(bars.len());
    let mut unique: Vec<OhlcvBar> = Vec::with_capacity(bars.len());
    for bar in bars {
        if seen.insert(bar.time.clone()) {
            unique.push(bar);
        }
    }

    // Stable sort: equal keys cannot occur after dedup, but stability keeps
    // the pass a no-op on already-sorted input.
    unique.sort_by(|a, b| a.time.cmp(&b.time));
    Ok(unique)
}
