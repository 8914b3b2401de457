use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use crate::errors::CoreError;
use crate::models::analysis::AnalysisReport;
use crate::models::search::{ProviderInfo, SymbolMatch};
use crate::models::settings::UserSettings;
use crate::models::simulation::{SimulatedTrade, StrategyStats};
use crate::models::watchlist::WatchlistEntry;

use super::types::{
    AnalyzeRequest, EntryOptimization, OnDemandFetchRequest, OptimizeEntryRequest,
    ProvidersResponse, SetAlertRequest, SimulateTradeRequest, SimulationAuditRequest,
    SymbolSearchRequest, SymbolSearchResponse, WatchlistAddRequest,
};

/// Environment variable overriding the backend base URL.
const BASE_URL_ENV: &str = "TRADELENS_API_BASE";

/// Default backend base path when the environment does not say otherwise.
const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// The analysis backend as the dashboard consumes it.
///
/// One trait seam for the whole REST contract: the HTTP implementation talks
/// to the real service, tests substitute a mock, and nothing above this
/// layer knows the difference.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait Backend: Send + Sync {
    /// Full technical/fundamental analysis of one symbol.
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalysisReport, CoreError>;

    /// Ranked fuzzy search over known symbols.
    async fn search_symbols(&self, query: &str) -> Result<Vec<SymbolMatch>, CoreError>;

    /// Ask the backend to ingest a symbol it does not know yet.
    async fn fetch_symbol_on_demand(&self, symbol: &str) -> Result<Value, CoreError>;

    async fn providers(&self) -> Result<Vec<ProviderInfo>, CoreError>;

    /// Global market context (index levels, volatility gauges).
    async fn market_context(&self) -> Result<Value, CoreError>;

    async fn get_settings(&self) -> Result<UserSettings, CoreError>;

    async fn save_settings(&self, settings: &UserSettings) -> Result<(), CoreError>;

    /// Mirror an alert onto the backend.
    async fn set_alert(&self, request: &SetAlertRequest) -> Result<(), CoreError>;

    /// Server-side pullback-entry optimization.
    async fn optimize_entry(
        &self,
        request: &OptimizeEntryRequest,
    ) -> Result<EntryOptimization, CoreError>;

    async fn simulate_trade(
        &self,
        request: &SimulateTradeRequest,
    ) -> Result<SimulatedTrade, CoreError>;

    async fn watchlist(&self) -> Result<Vec<WatchlistEntry>, CoreError>;

    async fn watchlist_add(
        &self,
        request: &WatchlistAddRequest,
    ) -> Result<WatchlistEntry, CoreError>;

    async fn watchlist_remove(&self, id: &str) -> Result<(), CoreError>;

    async fn simulations(&self) -> Result<Vec<SimulatedTrade>, CoreError>;

    async fn simulations_audit(&self, days: u32) -> Result<StrategyStats, CoreError>;
}

/// HTTP implementation of [`Backend`] over reqwest.
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    /// Build against an explicit base URL (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Build from `TRADELENS_API_BASE`, falling back to localhost.
    pub fn from_env() -> Self {
        let base = std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, CoreError> {
        let response = self.client.get(self.url(endpoint)).send().await?;
        Self::decode(endpoint, response).await
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, CoreError> {
        let response = self
            .client
            .post(self.url(endpoint))
            .json(body)
            .send()
            .await?;
        Self::decode(endpoint, response).await
    }

    async fn delete(&self, endpoint: &str) -> Result<(), CoreError> {
        let response = self.client.delete(self.url(endpoint)).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CoreError::BackendStatus {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }
        Ok(())
    }

    async fn decode<T: DeserializeOwned>(
        endpoint: &str,
        response: reqwest::Response,
    ) -> Result<T, CoreError> {
        let status = response.status();
        if !status.is_success() {
            return Err(CoreError::BackendStatus {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }
        response.json().await.map_err(|e| CoreError::Api {
            endpoint: endpoint.to_string(),
            message: format!("failed to parse response: {e}"),
        })
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl Backend for HttpBackend {
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalysisReport, CoreError> {
        self.post_json("/analyze", request).await
    }

    async fn search_symbols(&self, query: &str) -> Result<Vec<SymbolMatch>, CoreError> {
        let response: SymbolSearchResponse = self
            .post_json("/symbols/search", &SymbolSearchRequest { query })
            .await?;
        Ok(response.results)
    }

    async fn fetch_symbol_on_demand(&self, symbol: &str) -> Result<Value, CoreError> {
        self.post_json("/symbols/fetch-on-demand", &OnDemandFetchRequest { symbol })
            .await
    }

    async fn providers(&self) -> Result<Vec<ProviderInfo>, CoreError> {
        let response: ProvidersResponse = self.get_json("/providers").await?;
        Ok(response.providers)
    }

    async fn market_context(&self) -> Result<Value, CoreError> {
        self.get_json("/market-context").await
    }

    async fn get_settings(&self) -> Result<UserSettings, CoreError> {
        self.get_json("/settings").await
    }

    async fn save_settings(&self, settings: &UserSettings) -> Result<(), CoreError> {
        let _: Value = self.post_json("/settings", settings).await?;
        Ok(())
    }

    async fn set_alert(&self, request: &SetAlertRequest) -> Result<(), CoreError> {
        let _: Value = self.post_json("/alerts/set", request).await?;
        Ok(())
    }

    async fn optimize_entry(
        &self,
        request: &OptimizeEntryRequest,
    ) -> Result<EntryOptimization, CoreError> {
        self.post_json("/optimize-entry", request).await
    }

    async fn simulate_trade(
        &self,
        request: &SimulateTradeRequest,
    ) -> Result<SimulatedTrade, CoreError> {
        self.post_json("/simulate-trade", request).await
    }

    async fn watchlist(&self) -> Result<Vec<WatchlistEntry>, CoreError> {
        self.get_json("/watchlist").await
    }

    async fn watchlist_add(
        &self,
        request: &WatchlistAddRequest,
    ) -> Result<WatchlistEntry, CoreError> {
        self.post_json("/watchlist/add", request).await
    }

    async fn watchlist_remove(&self, id: &str) -> Result<(), CoreError> {
        self.delete(&format!("/watchlist/{id}")).await
    }

    async fn simulations(&self) -> Result<Vec<SimulatedTrade>, CoreError> {
        self.get_json("/simulations").await
    }

    async fn simulations_audit(&self, days: u32) -> Result<StrategyStats, CoreError> {
        self.post_json("/simulations/audit", &SimulationAuditRequest { days })
            .await
    }
}
