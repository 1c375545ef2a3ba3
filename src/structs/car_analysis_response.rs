use std::collections::HashMap;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Result of `GET /api/cars/{carId}/analysis`.
///
/// `breakdown` is kept as a plain map so absent categories can be detected
/// instead of failing deserialization.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CarAnalysisResponse {
    pub score: f64,
    pub recommendation: String,
    #[serde(default)]
    pub breakdown: HashMap<String, f64>,
    #[serde(default)]
    pub analysis_id: Option<Uuid>,
    #[serde(default)]
    pub car_id: Option<Uuid>,
    #[serde(default)]
    pub registration_number: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
