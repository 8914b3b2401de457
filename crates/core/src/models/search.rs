use serde::{Deserialize, Serialize};

/// One ranked candidate from the backend symbol search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolMatch {
    pub symbol: String,
    #[serde(default)]
    pub name: String,
    /// Fuzzy-match score, higher is better.
    #[serde(default)]
    pub score: f64,
}

/// A data provider the backend can pull market data from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderInfo {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub free: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requires_key: bool,
}
