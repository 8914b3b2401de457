// ═══════════════════════════════════════════════════════════════════
// Model Tests — time keys, bars, alerts, backend DTOs
// ═══════════════════════════════════════════════════════════════════

use chrono::{TimeZone, Utc};
use serde_json::json;

use tradelens_core::models::alert::{Alert, AlertStatus};
use tradelens_core::models::analysis::AnalysisReport;
use tradelens_core::models::candle::{OhlcvBar, TimeKey};
use tradelens_core::models::settings::UserSettings;
use tradelens_core::models::simulation::SimulatedTrade;

// ═══════════════════════════════════════════════════════════════════
//  TimeKey
// ═══════════════════════════════════════════════════════════════════

mod time_key {
    use super::*;

    #[test]
    fn deserializes_epoch_seconds() {
        let key: TimeKey = serde_json::from_str("1700000000").unwrap();
        assert_eq!(key, TimeKey::Epoch(1_700_000_000));
    }

    #[test]
    fn deserializes_date_string() {
        let key: TimeKey = serde_json::from_str("\"2024-01-02\"").unwrap();
        assert_eq!(key, TimeKey::Date("2024-01-02".to_string()));
    }

    #[test]
    fn serializes_back_to_the_same_shape() {
        assert_eq!(
            serde_json::to_string(&TimeKey::Epoch(42)).unwrap(),
            "42"
        );
        assert_eq!(
            serde_json::to_string(&TimeKey::from("2024-01-02")).unwrap(),
            "\"2024-01-02\""
        );
    }

    #[test]
    fn epoch_keys_order_numerically() {
        assert!(TimeKey::Epoch(9) < TimeKey::Epoch(10));
    }

    #[test]
    fn date_keys_order_lexicographically() {
        assert!(TimeKey::from("2024-01-09") < TimeKey::from("2024-01-10"));
        assert!(TimeKey::from("2023-12-31") < TimeKey::from("2024-01-01"));
    }

    #[test]
    fn same_kind_detects_mixing() {
        assert!(TimeKey::Epoch(1).same_kind(&TimeKey::Epoch(2)));
        assert!(TimeKey::from("a").same_kind(&TimeKey::from("b")));
        assert!(!TimeKey::Epoch(1).same_kind(&TimeKey::from("2024-01-01")));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  OhlcvBar
// ═══════════════════════════════════════════════════════════════════

mod ohlcv_bar {
    use super::*;

    #[test]
    fn deserializes_backend_shape() {
        let bar: OhlcvBar = serde_json::from_value(json!({
            "time": "2024-01-02",
            "open": 10.0,
            "high": 12.0,
            "low": 9.0,
            "close": 11.0,
            "volume": 1000.0
        }))
        .unwrap();
        assert_eq!(bar.time, TimeKey::from("2024-01-02"));
        assert_eq!(bar.high, 12.0);
    }

    #[test]
    fn missing_volume_defaults_to_zero() {
        let bar: OhlcvBar = serde_json::from_value(json!({
            "time": 1700000000i64,
            "open": 10.0,
            "high": 12.0,
            "low": 9.0,
            "close": 11.0
        }))
        .unwrap();
        assert_eq!(bar.volume, 0.0);
    }

    #[test]
    fn well_formed_accepts_valid_bar() {
        let bar = OhlcvBar::new("2024-01-01", 10.0, 12.0, 9.0, 11.0, 100.0);
        assert!(bar.is_well_formed());
    }

    #[test]
    fn well_formed_rejects_high_below_close() {
        let bar = OhlcvBar::new("2024-01-01", 10.0, 10.5, 9.0, 11.0, 100.0);
        assert!(!bar.is_well_formed());
    }

    #[test]
    fn well_formed_rejects_low_above_open() {
        let bar = OhlcvBar::new("2024-01-01", 10.0, 12.0, 10.5, 11.0, 100.0);
        assert!(!bar.is_well_formed());
    }

    #[test]
    fn well_formed_rejects_non_finite_and_negative() {
        let bar = OhlcvBar::new("2024-01-01", f64::NAN, 12.0, 9.0, 11.0, 100.0);
        assert!(!bar.is_well_formed());
        let bar = OhlcvBar::new("2024-01-01", -1.0, 12.0, -2.0, 11.0, 100.0);
        assert!(!bar.is_well_formed());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Alert
// ═══════════════════════════════════════════════════════════════════

mod alert {
    use super::*;

    fn now() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap()
    }

    #[test]
    fn new_uppercases_symbol() {
        let alert = Alert::new("msft", 300.0, 320.0, now());
        assert_eq!(alert.symbol, "MSFT");
    }

    #[test]
    fn new_starts_active_without_trigger_stamp() {
        let alert = Alert::new("MSFT", 300.0, 320.0, now());
        assert!(alert.is_active());
        assert!(alert.triggered_at.is_none());
        assert!(alert.last_checked_at.is_none());
    }

    #[test]
    fn ids_are_unique() {
        let a = Alert::new("MSFT", 300.0, 320.0, now());
        let b = Alert::new("MSFT", 300.0, 320.0, now());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&AlertStatus::Active).unwrap(),
            "\"active\""
        );
        assert_eq!(
            serde_json::to_string(&AlertStatus::Triggered).unwrap(),
            "\"triggered\""
        );
    }

    #[test]
    fn runtime_check_stamp_is_not_serialized() {
        let mut alert = Alert::new("MSFT", 300.0, 320.0, now());
        alert.last_checked_at = Some(now());
        let value = serde_json::to_value(&alert).unwrap();
        assert!(value.get("last_checked_at").is_none());

        let back: Alert = serde_json::from_value(value).unwrap();
        assert!(back.last_checked_at.is_none());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  AnalysisReport
// ═══════════════════════════════════════════════════════════════════

mod analysis_report {
    use super::*;

    fn backend_payload() -> serde_json::Value {
        json!({
            "symbol": "AAPL",
            "company_name": "Apple Inc.",
            "current_price": 185.5,
            "price_change_percent": 1.25,
            "signal": "BUY",
            "confidence_score": 72,
            "indicators": {
                "rsi": {"value": 54.2, "signal": "neutral"},
                "atr": {"value": 3.1}
            },
            "risk_management": {
                "entry_price": 185.5,
                "stop_loss": 180.0,
                "take_profit": 199.0,
                "risk_reward_ratio": 2.45,
                "favorable": true,
                "position_size_suggestion": 18.2,
                "trailing_stop": 179.3
            },
            "market_context": {"vix": 13.9},
            "alerts": [
                {"severity": "info", "message": "Earnings in 12 days"}
            ],
            "ai_analysis": "Momentum is constructive above the 20-day EMA.",
            "chart_data": [
                {"time": "2024-01-01", "open": 180.0, "high": 183.0, "low": 179.0, "close": 182.0, "volume": 1000.0},
                {"time": "2024-01-02", "open": 182.0, "high": 186.0, "low": 181.0, "close": 185.5, "volume": 1200.0}
            ],
            "chart_levels": {
                "support": 178.0,
                "resistance": 199.0,
                "stop_loss": 180.0,
                "take_profit": 199.0,
                "entry": 185.5
            },
            "timestamp": "2024-06-01T12:00:00Z"
        })
    }

    #[test]
    fn deserializes_full_payload() {
        let report: AnalysisReport = serde_json::from_value(backend_payload()).unwrap();
        assert_eq!(report.symbol, "AAPL");
        assert_eq!(report.signal, "BUY");
        assert_eq!(report.confidence_score, 72);
        assert_eq!(report.chart_data.len(), 2);
        assert_eq!(report.chart_levels.resistance, Some(199.0));
        assert_eq!(report.alerts.len(), 1);
    }

    #[test]
    fn unknown_risk_fields_pass_through() {
        let report: AnalysisReport = serde_json::from_value(backend_payload()).unwrap();
        let extra = &report.risk_management.extra;
        assert_eq!(extra["position_size_suggestion"], json!(18.2));
        assert_eq!(extra["trailing_stop"], json!(179.3));
    }

    #[test]
    fn optional_blocks_default_when_absent() {
        let report: AnalysisReport = serde_json::from_value(json!({
            "symbol": "AAPL",
            "current_price": 185.5,
            "signal": "WAIT",
            "risk_management": {
                "entry_price": 185.5,
                "stop_loss": 180.0,
                "take_profit": 199.0,
                "risk_reward_ratio": 2.45
            }
        }))
        .unwrap();
        assert!(report.chart_data.is_empty());
        assert!(report.company_name.is_none());
        assert!(report.chart_levels.support.is_none());
        assert!(!report.risk_management.favorable);
    }

    #[test]
    fn indicator_bundle_stays_opaque() {
        let report: AnalysisReport = serde_json::from_value(backend_payload()).unwrap();
        assert_eq!(report.indicators["rsi"]["value"], json!(54.2));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Settings & simulation DTOs
// ═══════════════════════════════════════════════════════════════════

mod dtos {
    use super::*;

    #[test]
    fn default_settings_match_backend_defaults() {
        let settings = UserSettings::default();
        assert_eq!(settings.user_id, "default");
        assert_eq!(settings.default_timeframe, "1d");
        assert_eq!(settings.providers.len(), 3);
        assert!(settings.providers[0].enabled);
        assert_eq!(settings.providers[0].name, "yahoo");
    }

    #[test]
    fn simulated_trade_defaults_from_minimal_payload() {
        let trade: SimulatedTrade = serde_json::from_value(json!({
            "symbol": "AAPL",
            "entry_price": 185.5,
            "stop_loss": 180.0,
            "take_profit": 199.0
        }))
        .unwrap();
        assert_eq!(trade.position_size, 100);
        assert_eq!(trade.status, "active");
        assert!(trade.exit_price.is_none());
    }
}
