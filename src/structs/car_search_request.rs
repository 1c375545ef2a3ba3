use serde::Serialize;

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CarSearchRequest {
    pub registration_number: String,
}
