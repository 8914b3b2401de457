use serde::{Deserialize, Serialize};

/// One data-provider entry in the backend-stored user settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub name: String,
    pub enabled: bool,
    #[serde(default)]
    pub api_key: Option<String>,
}

/// User settings as stored by the backend (`GET/POST /settings`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSettings {
    #[serde(default = "default_user_id")]
    pub user_id: String,
    pub providers: Vec<ProviderConfig>,
    #[serde(default = "default_timeframe")]
    pub default_timeframe: String,
}

fn default_user_id() -> String {
    "default".to_string()
}

fn default_timeframe() -> String {
    "1d".to_string()
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            user_id: default_user_id(),
            providers: vec![
                ProviderConfig {
                    name: "yahoo".to_string(),
                    enabled: true,
                    api_key: None,
                },
                ProviderConfig {
                    name: "alphavantage".to_string(),
                    enabled: false,
                    api_key: None,
                },
                ProviderConfig {
                    name: "twelvedata".to_string(),
                    enabled: false,
                    api_key: None,
                },
            ],
            default_timeframe: default_timeframe(),
        }
    }
}
