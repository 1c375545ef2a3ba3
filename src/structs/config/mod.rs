pub mod api_config;
pub mod config;
pub mod run_config;
