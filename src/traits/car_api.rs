use async_trait::async_trait;
use uuid::Uuid;
use crate::errors::SmokeResult;
use crate::structs::car_analysis_response::CarAnalysisResponse;
use crate::structs::car_search_response::CarSearchResponse;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CarApi: Send + Sync {

    async fn search(&self, registration_number: &str) -> SmokeResult<CarSearchResponse>;

    async fn analysis(&self, car_id: &Uuid) -> SmokeResult<CarAnalysisResponse>;
}
