//! Risk/reward planning for long pullback entries.
//!
//! Pure closed-form arithmetic over numbers the backend already computed.
//! Recomputed on every input change; no state, no side effects.

use serde::{Deserialize, Serialize};

/// Product constants of the planner. Kept configurable rather than baked in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// A ratio above this reads as a favorable setup.
    pub favorable_threshold: f64,
    /// Ratios are capped here for display; the raw value is kept alongside.
    pub max_display_ratio: f64,
    /// Relative distance to the optimal entry that counts as "in zone".
    pub entry_zone_tolerance: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            favorable_threshold: 1.5,
            max_display_ratio: 10.0,
            entry_zone_tolerance: 0.02,
        }
    }
}

/// A concrete trade plan around backend-supplied stop/target levels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskPlan {
    pub entry_price: f64,
    pub stop_loss: f64,
    pub take_profit: f64,
    pub risk_reward_ratio: f64,
    pub favorable: bool,
}

impl RiskPlan {
    pub fn new(entry_price: f64, stop_loss: f64, take_profit: f64, config: &PlannerConfig) -> Self {
        let ratio = current_rr(entry_price, stop_loss, take_profit);
        Self {
            entry_price,
            stop_loss,
            take_profit,
            risk_reward_ratio: ratio,
            favorable: ratio > config.favorable_threshold,
        }
    }

    /// Ratio clamped to the display maximum (raw value stays in
    /// `risk_reward_ratio`).
    pub fn display_ratio(&self, config: &PlannerConfig) -> f64 {
        self.risk_reward_ratio.min(config.max_display_ratio)
    }
}

/// Risk/reward ratio of entering at `entry` with the given stop and target:
/// `(tp - entry) / (entry - sl)`. Reported as 0 when `entry == sl` — the
/// ratio is undefined there and 0 renders as "no edge" instead of ±inf.
pub fn current_rr(entry: f64, stop_loss: f64, take_profit: f64) -> f64 {
    let risk = entry - stop_loss;
    if risk == 0.0 {
        return 0.0;
    }
    (take_profit - entry) / risk
}

/// The entry price at which the stop/target pair yields exactly `target_rr`.
///
/// Solves `target_rr = (tp - entry) / (entry - sl)` for `entry`:
/// `entry = (tp + target_rr * sl) / (target_rr + 1)`.
pub fn optimal_entry(stop_loss: f64, take_profit: f64, target_rr: f64) -> f64 {
    (take_profit + target_rr * stop_loss) / (target_rr + 1.0)
}

/// A pullback-entry proposal for a chosen target ratio.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullbackPlan {
    /// Limit price that would achieve the target ratio.
    pub entry: f64,
    /// The ratio actually achieved at `entry` (equals the target when
    /// realistic).
    pub ratio: f64,
    /// The target ratio the user asked for.
    pub target_ratio: f64,
    /// `false` when the required entry is not strictly between the stop and
    /// the current price — the target is unachievable with these levels and
    /// the entry must not be presented as actionable.
    pub realistic: bool,
    /// `true` when the market is already within the configured tolerance of
    /// the optimal entry.
    pub in_zone: bool,
}

/// Derive the pullback entry for `target_rr` given the current price and the
/// backend's stop/target levels.
pub fn plan_pullback(
    current_price: f64,
    stop_loss: f64,
    take_profit: f64,
    target_rr: f64,
    config: &PlannerConfig,
) -> PullbackPlan {
    let entry = optimal_entry(stop_loss, take_profit, target_rr);
    let realistic = stop_loss < entry && entry < current_price;
    let in_zone = if current_price > 0.0 {
        ((current_price - entry) / current_price).abs() < config.entry_zone_tolerance
    } else {
        false
    };

    PullbackPlan {
        entry,
        ratio: current_rr(entry, stop_loss, take_profit),
        target_ratio: target_rr,
        realistic,
        in_zone,
    }
}
