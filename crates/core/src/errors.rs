use thiserror::Error;

/// Unified error type for the entire tradelens-core library.
/// Every public fallible function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── API / Network ───────────────────────────────────────────────
    #[error("API error ({endpoint}): {message}")]
    Api {
        endpoint: String,
        message: String,
    },

    #[error("Backend returned HTTP {status} for {endpoint}: {message}")]
    BackendStatus {
        endpoint: String,
        status: u16,
        message: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    // ── Serialization / Storage ─────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Storage error: {0}")]
    Storage(String),

    // ── File I/O (native only) ──────────────────────────────────────
    #[error("File I/O error: {0}")]
    FileIO(String),

    // ── Business Logic ──────────────────────────────────────────────
    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("Malformed price series: {0}")]
    MalformedSeries(String),

    #[error("An analysis request is already in flight")]
    RequestInFlight,

    #[error("Alert not found: {0}")]
    AlertNotFound(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // Sanitize error message: strip query parameters from URLs to prevent
        // API key leakage. reqwest errors often contain full URLs with secrets.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}
