use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    #[serde(default = "ConfigHelper::default_base_url")]
    pub base_url: String,

    /// Saved login response holding the bearer token.
    #[serde(default = "ConfigHelper::default_token_file")]
    pub token_file: String,

    /// Per-request timeout; requests wait indefinitely when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: ConfigHelper::default_base_url(),
            token_file: ConfigHelper::default_token_file(),
            timeout_secs: None,
        }
    }
}
