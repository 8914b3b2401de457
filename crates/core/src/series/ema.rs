/// Compute an exponential moving average aligned to its input.
///
/// The output has the same length as `closes` so overlay points line up with
/// candles by index. Indices below `period - 1` have no defined EMA and are
/// `None`; index `period - 1` is the simple average of the first `period`
/// closes; each later value is `close[i] * k + ema[i-1] * (1 - k)` with
/// `k = 2 / (period + 1)`.
///
/// The recurrence cannot be restarted mid-series: a correct value at any
/// index requires the whole prefix, so callers recompute from the first bar
/// whenever the series changes.
///
/// Degenerate inputs (`period == 0`, series shorter than `period`) produce an
/// all-`None` series. A non-finite value poisons the recurrence; output stops
/// at the last trustworthy index.
pub fn ema(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; closes.len()];
    if period == 0 || closes.len() < period {
        return out;
    }

    let seed: f64 = closes[..period].iter().sum::<f64>() / period as f64;
    if !seed.is_finite() {
        return out;
    }

    let k = 2.0 / (period as f64 + 1.0);
    out[period - 1] = Some(seed);

    let mut prev = seed;
    for i in period..closes.len() {
        let value = closes[i] * k + prev * (1.0 - k);
        if !value.is_finite() {
            break;
        }
        out[i] = Some(value);
        prev = value;
    }

    out
}
