use std::collections::HashMap;

use crate::client::backend::Backend;
use crate::client::types::AnalyzeRequest;
use crate::errors::CoreError;
use crate::models::analysis::AnalysisReport;

/// Handle for one outstanding analysis request.
///
/// Completing with a stale ticket (the consumer moved on, the session was
/// reset) silently discards the response instead of applying it.
#[derive(Debug)]
pub struct RequestTicket {
    generation: u64,
}

/// Holds the dashboard's current analysis and request state.
///
/// The single-threaded, event-driven model of the UI is mirrored here:
/// one request may be in flight at a time (`begin` refuses a second), and a
/// generation counter discards responses that arrive after `invalidate` —
/// the component-unmount analog. No timeouts, no cancellation: a slow
/// response just arrives late and is then either applied or discarded.
#[derive(Debug, Default)]
pub struct AnalysisService {
    current: Option<AnalysisReport>,
    loading: bool,
    generation: u64,
    /// Latest known price per (uppercased) symbol, fed to the alert engine.
    latest_prices: HashMap<String, f64>,
}

impl AnalysisService {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn current(&self) -> Option<&AnalysisReport> {
        self.current.as_ref()
    }

    /// Latest fetched price for a symbol, if any analysis has seen it.
    #[must_use]
    pub fn latest_price(&self, symbol: &str) -> Option<f64> {
        self.latest_prices.get(&symbol.to_uppercase()).copied()
    }

    /// Start a request. Refuses while another one is outstanding, which is
    /// how the UI disables redundant re-submission.
    pub fn begin(&mut self) -> Result<RequestTicket, CoreError> {
        if self.loading {
            return Err(CoreError::RequestInFlight);
        }
        self.loading = true;
        self.generation += 1;
        Ok(RequestTicket {
            generation: self.generation,
        })
    }

    /// Apply (or discard) a finished request.
    ///
    /// Returns `Ok(true)` when the report was applied, `Ok(false)` when the
    /// ticket was stale and the response, success or failure, was dropped.
    /// A current-generation failure clears the loading flag and propagates.
    pub fn complete(
        &mut self,
        ticket: RequestTicket,
        result: Result<AnalysisReport, CoreError>,
    ) -> Result<bool, CoreError> {
        if ticket.generation != self.generation {
            return Ok(false);
        }
        self.loading = false;
        let report = result?;
        self.latest_prices
            .insert(report.symbol.to_uppercase(), report.current_price);
        self.current = Some(report);
        Ok(true)
    }

    /// Abandon the outstanding request, if any. Its eventual response will
    /// be discarded as stale.
    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.loading = false;
    }

    /// Run one analysis round-trip against the backend. On success the
    /// report becomes [`Self::current`].
    pub async fn analyze(
        &mut self,
        backend: &dyn Backend,
        request: &AnalyzeRequest,
    ) -> Result<(), CoreError> {
        let ticket = self.begin()?;
        let result = backend.analyze(request).await;
        self.complete(ticket, result)?;
        Ok(())
    }
}
