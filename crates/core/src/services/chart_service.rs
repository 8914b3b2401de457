use crate::errors::CoreError;
use crate::models::candle::{closing_prices, OhlcvBar};
use crate::series;

/// How the chart wants its series prepared.
#[derive(Debug, Clone)]
pub struct ChartOptions {
    /// Render Heikin-Ashi candles instead of raw OHLC.
    pub heikin_ashi: bool,
    /// EMA overlay periods, one overlay per entry.
    pub ema_periods: Vec<usize>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            heikin_ashi: false,
            ema_periods: vec![20, 50],
        }
    }
}

/// One EMA overlay, index-aligned with the candles.
#[derive(Debug, Clone)]
pub struct EmaOverlay {
    pub period: usize,
    pub values: Vec<Option<f64>>,
}

/// Chart-ready output: candles plus overlays, all the same length.
#[derive(Debug, Clone)]
pub struct ChartSeries {
    pub candles: Vec<OhlcvBar>,
    pub overlays: Vec<EmaOverlay>,
}

/// Prepares backend OHLCV data for rendering.
///
/// The core computes all the numbers — the frontend only draws them.
/// Pipeline: normalize (sort + dedupe) → optional Heikin-Ashi restyle →
/// EMA overlays. Overlays are always computed from the source closes, so
/// the indicator keeps its meaning when candles are restyled.
#[derive(Debug, Default)]
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    pub fn build(
        &self,
        raw: &[OhlcvBar],
        options: &ChartOptions,
    ) -> Result<ChartSeries, CoreError> {
        if raw.is_empty() {
            return Err(CoreError::MalformedSeries(
                "empty series — nothing to chart".to_string(),
            ));
        }
        if let Some(bad) = raw.iter().find(|b| !b.is_well_formed()) {
            return Err(CoreError::MalformedSeries(format!(
                "bar at {} violates OHLCV invariants",
                bad.time
            )));
        }

        let normalized = series::normalize(raw.to_vec())?;
        let closes = closing_prices(&normalized);

        let overlays = options
            .ema_periods
            .iter()
            .map(|&period| EmaOverlay {
                period,
                values: series::ema(&closes, period),
            })
            .collect();

        let candles = if options.heikin_ashi {
            series::heikin_ashi(&normalized)
        } else {
            normalized
        };

        Ok(ChartSeries { candles, overlays })
    }
}
