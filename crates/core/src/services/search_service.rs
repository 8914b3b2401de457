use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use crate::client::backend::Backend;
use crate::errors::CoreError;
use crate::models::search::SymbolMatch;

/// Default debounce window for repeated identical queries, milliseconds.
const DEFAULT_DEBOUNCE_MS: i64 = 300;

#[derive(Debug)]
struct LastSearch {
    query: String,
    at: DateTime<Utc>,
    results: Vec<SymbolMatch>,
}

/// Debounced symbol lookup with an on-demand ingestion fallback.
///
/// Typing in the search box re-issues the same query on every keystroke
/// render; repeating a query inside the debounce window answers from the
/// cached result without touching the network. An empty query is a silent
/// no-op. When the backend knows nothing about a query, it is asked to
/// ingest the symbol on demand and the search is retried once.
#[derive(Debug)]
pub struct SearchService {
    debounce_window: Duration,
    last: Option<LastSearch>,
}

impl Default for SearchService {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchService {
    pub fn new() -> Self {
        Self {
            debounce_window: Duration::milliseconds(DEFAULT_DEBOUNCE_MS),
            last: None,
        }
    }

    /// Override the debounce window (default 300 ms).
    pub fn set_debounce_window(&mut self, window: Duration) {
        self.debounce_window = window;
    }

    pub async fn search(
        &mut self,
        backend: &dyn Backend,
        query: &str,
        now: DateTime<Utc>,
    ) -> Result<Vec<SymbolMatch>, CoreError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        if let Some(last) = &self.last {
            if last.query.eq_ignore_ascii_case(query) && now - last.at < self.debounce_window {
                return Ok(last.results.clone());
            }
        }

        let mut results = backend.search_symbols(query).await?;

        // Unknown symbol: ask the backend to ingest it, then look again.
        if results.is_empty() {
            debug!(query, "no matches, requesting on-demand fetch");
            backend.fetch_symbol_on_demand(query).await?;
            results = backend.search_symbols(query).await?;
        }

        self.last = Some(LastSearch {
            query: query.to_string(),
            at: now,
            results: results.clone(),
        });
        Ok(results)
    }
}
