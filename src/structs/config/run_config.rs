use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RunConfig {
    #[serde(default = "ConfigHelper::default_registrations")]
    pub registrations: Vec<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            registrations: ConfigHelper::default_registrations(),
        }
    }
}
