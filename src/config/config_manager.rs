use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::errors::{SmokeError, SmokeResult};
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {

    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    pub fn load() -> SmokeResult<Config> {
        let path = Self::config_path();

        if path.exists() {
            log::info!("📋 Loading config from: {}", path.display());
            let content = fs::read_to_string(&path)?;
            return Self::parse(&content);
        }

        log::debug!("No config at {}, using defaults", path.display());
        Ok(Config::default())
    }

    pub fn parse(content: &str) -> SmokeResult<Config> {
        Ok(toml::from_str(content)?)
    }

    pub fn create_sample_config() -> SmokeResult<PathBuf> {
        let sample_config = r#"# CarCheck smoke test configuration

[api]
# Where the CarCheck API is listening
base_url = "http://localhost:5171"

# Saved login response (see `carcheck-smoke login`)
token_file = "login-resp.json"

# Per-request timeout in seconds; leave unset to wait indefinitely
# timeout_secs = 30

[run]
# Mock vehicles seeded in the development database
registrations = ["ABC123", "DEF456", "GHI789", "JKL012", "MNO345"]
"#;
        let config_file_path = Self::config_path();
        if config_file_path.exists() {
            return Err(SmokeError::config_error(
                &format!("{} already exists", config_file_path.display()),
                Some("Edit the existing file or remove it first"),
            ));
        }
        if let Some(dir) = config_file_path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&config_file_path, sample_config)?;
        println!("✅ Created sample config at: {}", config_file_path.display());
        Ok(config_file_path)
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        match reqwest::Url::parse(&config.api.base_url) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            Ok(url) => errors.push(format!("Base URL must use http or https, got: {}", url.scheme())),
            Err(e) => errors.push(format!("Base URL '{}' is invalid: {}", config.api.base_url, e)),
        }

        if config.api.token_file.trim().is_empty() {
            errors.push("Token file path is empty".to_string());
        }

        if config.api.timeout_secs == Some(0) {
            errors.push("Timeout must be greater than zero seconds".to_string());
        }

        if config.run.registrations.is_empty() {
            errors.push("No registration numbers configured".to_string());
        }

        let mut seen = HashSet::new();
        for reg in &config.run.registrations {
            if reg.trim().is_empty() {
                errors.push("Blank registration number".to_string());
            } else if !seen.insert(reg.trim().to_uppercase()) {
                errors.push(format!("Duplicate registration number: {}", reg));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

}
