pub mod auth_response;
pub mod car_analysis_response;
pub mod car_search_request;
pub mod car_search_response;
pub mod cli;
pub mod config;
pub mod login_request;
pub mod run_summary;
