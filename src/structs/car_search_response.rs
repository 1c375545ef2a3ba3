use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A vehicle as returned by `POST /api/cars/search`.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CarSearchResponse {
    pub car_id: Uuid,
    pub brand: String,
    pub model: String,
    pub year: i32,
    #[serde(default)]
    pub registration_number: Option<String>,
    #[serde(default)]
    pub mileage: Option<i64>,
    #[serde(default)]
    pub fuel_type: Option<String>,
    #[serde(default)]
    pub horse_power: Option<i32>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub market_value_sek: Option<f64>,
}
