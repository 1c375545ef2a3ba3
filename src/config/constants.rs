use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5171";
pub const DEFAULT_TOKEN_FILE: &str = "login-resp.json";
pub const DEFAULT_REGISTRATIONS: &[&str] = &["ABC123", "DEF456", "GHI789", "JKL012", "MNO345"];

pub const CONFIG_DIR_NAME: &str = "carcheck";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const SEARCH_PATH: &str = "/api/cars/search";
pub const LOGIN_PATH: &str = "/api/auth/login";

pub const BANNER_WIDTH: usize = 80;
pub const CAR_BANNER_WIDTH: usize = 70;
pub const BAR_WIDTH: usize = 20;
pub const BAR_STEP: f64 = 5.0;
pub const LABEL_WIDTH: usize = 20;
pub const RECOMMENDATION_PREVIEW_CHARS: usize = 60;

pub fn analysis_path(car_id: &uuid::Uuid) -> String {
    format!("/api/cars/{}/analysis", car_id)
}

pub fn timeout_duration_secs(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}
