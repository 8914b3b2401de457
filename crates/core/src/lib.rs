pub mod alerts;
pub mod client;
pub mod errors;
pub mod models;
pub mod planner;
pub mod series;
pub mod services;
pub mod storage;

use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

use alerts::{AlertEngine, AlertSink, NullSink};
use client::backend::{Backend, HttpBackend};
use client::types::{
    AnalyzeRequest, EntryOptimization, OptimizeEntryRequest, SetAlertRequest,
    SimulateTradeRequest, WatchlistAddRequest,
};
use errors::CoreError;
use models::alert::Alert;
use models::analysis::AnalysisReport;
use models::search::{ProviderInfo, SymbolMatch};
use models::settings::UserSettings;
use models::simulation::{SimulatedTrade, StrategyStats};
use models::watchlist::WatchlistEntry;
use planner::{PlannerConfig, PullbackPlan, RiskPlan};
use services::{AnalysisService, ChartOptions, ChartSeries, ChartService, SearchService};
use storage::KeyValueStore;

/// Main entry point for the TradeLens core library.
///
/// Owns the dashboard state and every service needed to operate on it: the
/// backend handle, the current analysis, symbol search, chart preparation,
/// the local alert engine, and the trade planner. A frontend holds one of
/// these and renders what it exposes.
#[must_use]
pub struct TradeLens {
    backend: Box<dyn Backend>,
    sink: Box<dyn AlertSink>,
    analysis: AnalysisService,
    search: SearchService,
    charts: ChartService,
    alerts: AlertEngine,
    planner_config: PlannerConfig,
    /// Whether alert evaluation runs on incoming price updates.
    monitoring: bool,
}

impl std::fmt::Debug for TradeLens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TradeLens")
            .field("loaded", &self.analysis.current().is_some())
            .field("loading", &self.analysis.is_loading())
            .field("alerts", &self.alerts.alerts().len())
            .field("monitoring", &self.monitoring)
            .finish()
    }
}

impl TradeLens {
    /// Wire up a dashboard core from its three injected pieces: the analysis
    /// backend, local key-value persistence, and the alert delivery sink.
    pub fn new(
        backend: Box<dyn Backend>,
        store: Box<dyn KeyValueStore>,
        sink: Box<dyn AlertSink>,
    ) -> Self {
        Self {
            backend,
            sink,
            analysis: AnalysisService::new(),
            search: SearchService::new(),
            charts: ChartService::new(),
            alerts: AlertEngine::load(store),
            planner_config: PlannerConfig::default(),
            monitoring: true,
        }
    }

    /// Convenience constructor: HTTP backend from the environment, no
    /// alert delivery (headless).
    pub fn from_env(store: Box<dyn KeyValueStore>) -> Self {
        Self::new(
            Box::new(HttpBackend::from_env()),
            store,
            Box::new(NullSink),
        )
    }

    // ── Analysis ────────────────────────────────────────────────────

    /// Run a full analysis of a symbol and apply it as the current state.
    ///
    /// While a request is outstanding, further calls fail with
    /// [`CoreError::RequestInFlight`]. On success the fresh price is
    /// opportunistically run through the alert engine (when monitoring is
    /// on); the returned ids are the alerts that fired during this update.
    /// The report itself is read back via [`Self::current_analysis`].
    pub async fn analyze(&mut self, request: &AnalyzeRequest) -> Result<Vec<Uuid>, CoreError> {
        self.analysis.analyze(self.backend.as_ref(), request).await?;

        let snapshot = self
            .analysis
            .current()
            .map(|r| (r.symbol.clone(), r.current_price));

        if self.monitoring {
            if let Some((symbol, price)) = snapshot {
                return self
                    .alerts
                    .evaluate(&symbol, price, Utc::now(), self.sink.as_mut());
            }
        }
        Ok(Vec::new())
    }

    /// The analysis currently on screen, if any.
    #[must_use]
    pub fn current_analysis(&self) -> Option<&AnalysisReport> {
        self.analysis.current()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.analysis.is_loading()
    }

    /// Latest fetched price for a symbol, if an analysis has seen one.
    #[must_use]
    pub fn latest_price(&self, symbol: &str) -> Option<f64> {
        self.analysis.latest_price(symbol)
    }

    /// Abandon the outstanding request; its response will be discarded.
    pub fn abandon_analysis(&mut self) {
        self.analysis.invalidate();
    }

    // ── Symbol search ───────────────────────────────────────────────

    /// Debounced symbol search with on-demand ingestion fallback.
    /// Empty queries silently return no matches.
    pub async fn search(&mut self, query: &str) -> Result<Vec<SymbolMatch>, CoreError> {
        self.search
            .search(self.backend.as_ref(), query, Utc::now())
            .await
    }

    // ── Charts ──────────────────────────────────────────────────────

    /// Chart-ready series for the current analysis.
    pub fn chart_series(&self, options: &ChartOptions) -> Result<ChartSeries, CoreError> {
        let report = self
            .analysis
            .current()
            .ok_or_else(|| CoreError::ValidationError("no analysis loaded".to_string()))?;
        self.charts.build(&report.chart_data, options)
    }

    // ── Trade planning ──────────────────────────────────────────────

    /// Local view of the backend's risk block: ratio, favorability, and
    /// the display cap, all under the configured planner constants.
    pub fn risk_plan(&self) -> Result<RiskPlan, CoreError> {
        let report = self
            .analysis
            .current()
            .ok_or_else(|| CoreError::ValidationError("no analysis loaded".to_string()))?;
        let risk = &report.risk_management;
        Ok(RiskPlan::new(
            risk.entry_price,
            risk.stop_loss,
            risk.take_profit,
            &self.planner_config,
        ))
    }

    /// Pullback entry that would achieve `target_rr` with the current
    /// analysis' stop/target levels.
    pub fn plan_pullback(&self, target_rr: f64) -> Result<PullbackPlan, CoreError> {
        let report = self
            .analysis
            .current()
            .ok_or_else(|| CoreError::ValidationError("no analysis loaded".to_string()))?;
        let risk = &report.risk_management;
        Ok(planner::plan_pullback(
            report.current_price,
            risk.stop_loss,
            risk.take_profit,
            target_rr,
            &self.planner_config,
        ))
    }

    #[must_use]
    pub fn planner_config(&self) -> &PlannerConfig {
        &self.planner_config
    }

    pub fn set_planner_config(&mut self, config: PlannerConfig) {
        self.planner_config = config;
    }

    // ── Alerts ──────────────────────────────────────────────────────

    /// Create a pullback alert for the currently analyzed symbol.
    pub fn create_alert(&mut self, target_price: f64) -> Result<Uuid, CoreError> {
        let (symbol, price) = self
            .analysis
            .current()
            .map(|r| (r.symbol.clone(), r.current_price))
            .ok_or_else(|| CoreError::ValidationError("no analysis loaded".to_string()))?;
        self.alerts
            .create_alert(&symbol, target_price, price, Utc::now())
    }

    /// Create a pullback alert for an explicit symbol and reference price.
    pub fn create_alert_for(
        &mut self,
        symbol: &str,
        target_price: f64,
        current_price: f64,
    ) -> Result<Uuid, CoreError> {
        self.alerts
            .create_alert(symbol, target_price, current_price, Utc::now())
    }

    /// Remove an alert. The only way any alert, triggered or not, goes away.
    pub fn remove_alert(&mut self, id: Uuid) -> Result<(), CoreError> {
        self.alerts.remove_alert(id)
    }

    #[must_use]
    pub fn alerts(&self) -> &[Alert] {
        self.alerts.alerts()
    }

    #[must_use]
    pub fn active_alerts(&self) -> Vec<&Alert> {
        self.alerts.active_alerts()
    }

    /// Feed a price observation to the alert engine (for updates that come
    /// from somewhere other than a full analysis).
    pub fn evaluate_alerts(&mut self, symbol: &str, price: f64) -> Result<Vec<Uuid>, CoreError> {
        if !self.monitoring {
            return Ok(Vec::new());
        }
        self.alerts
            .evaluate(symbol, price, Utc::now(), self.sink.as_mut())
    }

    #[must_use]
    pub fn sound_enabled(&self) -> bool {
        self.alerts.sound_enabled()
    }

    pub fn set_sound_enabled(&mut self, enabled: bool) -> Result<(), CoreError> {
        self.alerts.set_sound_enabled(enabled)
    }

    #[must_use]
    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring
    }

    pub fn set_monitoring(&mut self, enabled: bool) {
        self.monitoring = enabled;
    }

    // ── Backend passthroughs ────────────────────────────────────────

    pub async fn providers(&self) -> Result<Vec<ProviderInfo>, CoreError> {
        self.backend.providers().await
    }

    pub async fn market_context(&self) -> Result<Value, CoreError> {
        self.backend.market_context().await
    }

    pub async fn get_settings(&self) -> Result<UserSettings, CoreError> {
        self.backend.get_settings().await
    }

    pub async fn save_settings(&self, settings: &UserSettings) -> Result<(), CoreError> {
        self.backend.save_settings(settings).await
    }

    /// Mirror an alert onto the backend so server-side checks fire too.
    pub async fn mirror_alert(&self, request: &SetAlertRequest) -> Result<(), CoreError> {
        self.backend.set_alert(request).await
    }

    /// Server-side entry optimization (indicator-aware, unlike the local
    /// closed-form planner).
    pub async fn optimize_entry(
        &self,
        request: &OptimizeEntryRequest,
    ) -> Result<EntryOptimization, CoreError> {
        self.backend.optimize_entry(request).await
    }

    pub async fn simulate_trade(
        &self,
        request: &SimulateTradeRequest,
    ) -> Result<SimulatedTrade, CoreError> {
        self.backend.simulate_trade(request).await
    }

    pub async fn watchlist(&self) -> Result<Vec<WatchlistEntry>, CoreError> {
        self.backend.watchlist().await
    }

    pub async fn add_to_watchlist(
        &self,
        request: &WatchlistAddRequest,
    ) -> Result<WatchlistEntry, CoreError> {
        self.backend.watchlist_add(request).await
    }

    pub async fn remove_from_watchlist(&self, id: &str) -> Result<(), CoreError> {
        self.backend.watchlist_remove(id).await
    }

    pub async fn simulations(&self) -> Result<Vec<SimulatedTrade>, CoreError> {
        self.backend.simulations().await
    }

    pub async fn simulation_stats(&self, days: u32) -> Result<StrategyStats, CoreError> {
        self.backend.simulations_audit(days).await
    }
}
