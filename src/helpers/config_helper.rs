use crate::config::constants::{DEFAULT_BASE_URL, DEFAULT_REGISTRATIONS, DEFAULT_TOKEN_FILE};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_base_url() -> String {
        DEFAULT_BASE_URL.to_string()
    }

    pub fn default_token_file() -> String {
        DEFAULT_TOKEN_FILE.to_string()
    }

    pub fn default_registrations() -> Vec<String> {
        DEFAULT_REGISTRATIONS.iter().map(|r| r.to_string()).collect()
    }
}
