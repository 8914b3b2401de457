use crate::models::candle::OhlcvBar;

/// Transform an ascending OHLCV series into Heikin-Ashi candles.
///
/// Per-bar recurrence:
/// - `ha_close` = mean of the source open/high/low/close
/// - `ha_open`  = midpoint of the previous *derived* bar's open/close;
///   for the first bar, midpoint of its own source open/close
/// - `ha_high` / `ha_low` = extrema of the source high/low and the derived
///   open/close
///
/// The open recurrence makes every output bar depend on the whole prefix, so
/// the transform is always recomputed over the full series — there is no
/// valid suffix-only update. Time and volume carry over from the source.
pub fn heikin_ashi(bars: &[OhlcvBar]) -> Vec<OhlcvBar> {
    let mut out: Vec<OhlcvBar> = Vec::with_capacity(bars.len());

    for bar in bars {
        let ha_close = (bar.open + bar.high + bar.low + bar.close) / 4.0;
        let ha_open = match out.last() {
            Some(prev) => (prev.open + prev.close) / 2.0,
            None => (bar.open + bar.close) / 2.0,
        };
        let ha_high = bar.high.max(ha_open).max(ha_close);
        let ha_low = bar.low.min(ha_open).min(ha_close);

        out.push(OhlcvBar {
            time: bar.time.clone(),
            open: ha_open,
            high: ha_high,
            low: ha_low,
            close: ha_close,
            volume: bar.volume,
        });
    }

    out
}
