use std::io;
use std::path::PathBuf;
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::errors::{SmokeError, SmokeResult};
use crate::services::carcheck_client::CarCheckClient;
use crate::services::token_store::TokenStore;
use crate::structs::config::config::Config;
use crate::structs::run_summary::RunSummary;
use crate::workers::smoke_runner::SmokeRunner;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner {
    pub fn new() -> Self {
        Self {
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> SmokeResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Run { base_url, token_file, registrations, timeout_secs } => {
                self.run_smoke_test(base_url, token_file, registrations, timeout_secs).await.map(|_| ())
            }
            Commands::Login { email, password, base_url, token_file } => {
                self.login_command(&email, &password, base_url, token_file).await
            }
            Commands::Init => self.init_command(),
            Commands::Validate => self.validate_command(),
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    /// Command-line values take precedence over the config file.
    pub fn apply_overrides(
        mut config: Config,
        base_url: Option<String>,
        token_file: Option<String>,
        registrations: Vec<String>,
        timeout_secs: Option<u64>,
    ) -> Config {
        if let Some(base_url) = base_url {
            config.api.base_url = base_url;
        }
        if let Some(token_file) = token_file {
            config.api.token_file = token_file;
        }
        if !registrations.is_empty() {
            config.run.registrations = registrations;
        }
        if timeout_secs.is_some() {
            config.api.timeout_secs = timeout_secs;
        }
        config
    }

    fn load_checked(overrides: impl FnOnce(Config) -> Config) -> SmokeResult<Config> {
        let config = overrides(ConfigManager::load()?);
        if let Err(errors) = ConfigManager::validate_config(&config) {
            for error in &errors {
                log::error!("❌ {}", error);
            }
            return Err(SmokeError::config_error(
                &errors.join("; "),
                Some("Run 'carcheck-smoke validate' for details"),
            ));
        }
        Ok(config)
    }

    async fn run_smoke_test(
        &self,
        base_url: Option<String>,
        token_file: Option<String>,
        registrations: Vec<String>,
        timeout_secs: Option<u64>,
    ) -> SmokeResult<RunSummary> {
        let config = Self::load_checked(|c| Self::apply_overrides(c, base_url, token_file, registrations, timeout_secs))?;

        let auth = TokenStore::load(&PathBuf::from(&config.api.token_file))?;
        let client = CarCheckClient::new(&config.api.base_url, auth.access_token, config.api.timeout_secs)?;

        log::info!("🔍 Testing {} vehicles against {}", config.run.registrations.len(), config.api.base_url);

        let mut runner = SmokeRunner::new(&client, io::stdout());
        runner.run(&config.run.registrations).await
    }

    async fn login_command(
        &self,
        email: &str,
        password: &str,
        base_url: Option<String>,
        token_file: Option<String>,
    ) -> SmokeResult<()> {
        let config = Self::load_checked(|c| Self::apply_overrides(c, base_url, token_file, Vec::new(), None))?;

        log::info!("🔐 Logging in as {}", email);
        let auth = CarCheckClient::login(&config.api.base_url, email, password, config.api.timeout_secs).await?;
        let path = PathBuf::from(&config.api.token_file);
        TokenStore::save(&path, &auth)?;

        match auth.expires_at {
            Some(expires_at) => println!("✅ Token saved to {} (expires {})", path.display(), expires_at),
            None => println!("✅ Token saved to {}", path.display()),
        }
        Ok(())
    }

    fn init_command(&self) -> SmokeResult<()> {
        log::info!("🚀 Initializing carcheck-smoke configuration...");

        let path = ConfigManager::create_sample_config()?;
        println!("📝 Edit {} to point at your API and vehicles.", path.display());
        println!("🔧 Run 'carcheck-smoke validate' to check your configuration.");
        Ok(())
    }

    fn validate_command(&self) -> SmokeResult<()> {
        let config = ConfigManager::load()?;

        match ConfigManager::validate_config(&config) {
            Ok(()) => {
                println!("✅ Configuration is valid");
                println!("   API:      {}", config.api.base_url);
                println!("   Token:    {}", config.api.token_file);
                println!("   Vehicles: {}", config.run.registrations.join(", "));
                Ok(())
            }
            Err(errors) => {
                println!("❌ Configuration has {} problem(s):", errors.len());
                for error in &errors {
                    println!("   - {}", error);
                }
                Err(SmokeError::config_error("validation failed", None))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_config_values() {
        let config = CommandRunner::apply_overrides(
            Config::default(),
            Some("http://127.0.0.1:9000".to_string()),
            Some("/tmp/token.json".to_string()),
            vec!["XYZ999".to_string()],
            Some(5),
        );

        assert_eq!(config.api.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.api.token_file, "/tmp/token.json");
        assert_eq!(config.run.registrations, vec!["XYZ999"]);
        assert_eq!(config.api.timeout_secs, Some(5));
    }

    #[test]
    fn absent_overrides_keep_config_values() {
        let config = CommandRunner::apply_overrides(Config::default(), None, None, Vec::new(), None);

        assert_eq!(config.api.base_url, "http://localhost:5171");
        assert_eq!(config.run.registrations.len(), 5);
        assert_eq!(config.api.timeout_secs, None);
    }
}
