use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use uuid::Uuid;
use crate::config::constants::{analysis_path, timeout_duration_secs, LOGIN_PATH, SEARCH_PATH};
use crate::enums::request_stage::RequestStage;
use crate::errors::{SmokeError, SmokeResult};
use crate::structs::auth_response::AuthResponse;
use crate::structs::car_analysis_response::CarAnalysisResponse;
use crate::structs::car_search_request::CarSearchRequest;
use crate::structs::car_search_response::CarSearchResponse;
use crate::structs::login_request::LoginRequest;
use crate::traits::car_api::CarApi;

/// Authenticated client for the CarCheck car endpoints.
#[derive(Clone)]
pub struct CarCheckClient {
    access_token: String,
    base_url: String,
    client: Client,
}

impl CarCheckClient {
    pub fn new(base_url: &str, access_token: String, timeout_secs: Option<u64>) -> SmokeResult<Self> {
        Ok(Self {
            access_token,
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Self::build_http_client(timeout_secs)?,
        })
    }

    /// Exchanges credentials for tokens. Needs no prior authentication.
    pub async fn login(base_url: &str, email: &str, password: &str, timeout_secs: Option<u64>) -> SmokeResult<AuthResponse> {
        let client = Self::build_http_client(timeout_secs)?;
        let url = format!("{}{}", base_url.trim_end_matches('/'), LOGIN_PATH);
        let request_body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        log::debug!("POST {}", url);
        let response = Self::send(
            RequestStage::Login,
            client
                .post(&url)
                .header("Content-Type", "application/json")
                .json(&request_body),
        )
        .await?;

        Self::decode(RequestStage::Login, response).await
    }

    fn build_http_client(timeout_secs: Option<u64>) -> SmokeResult<Client> {
        let mut builder = Client::builder();
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(timeout_duration_secs(secs));
        }
        builder
            .build()
            .map_err(|e| SmokeError::system_error("building HTTP client", &e.to_string()))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .bearer_auth(&self.access_token)
            .header("Content-Type", "application/json")
    }

    async fn send(stage: RequestStage, request: RequestBuilder) -> SmokeResult<Response> {
        let response = request.send().await.map_err(|e| SmokeError::Network {
            operation: stage.label().to_string(),
            url: e.url().map(|u| u.to_string()),
            reason: e.to_string(),
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| String::new());

            log::debug!("{} returned {}", stage, status);
            return Err(SmokeError::http_error(stage.label(), status.as_u16(), &error_text));
        }

        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(stage: RequestStage, response: Response) -> SmokeResult<T> {
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| SmokeError::Parse {
            content_type: format!("{} response", stage),
            reason: e.to_string(),
        })
    }
}

#[async_trait]
impl CarApi for CarCheckClient {

    async fn search(&self, registration_number: &str) -> SmokeResult<CarSearchResponse> {
        let url = self.url(SEARCH_PATH);
        let request_body = CarSearchRequest {
            registration_number: registration_number.to_string(),
        };

        log::debug!("POST {} ({})", url, registration_number);
        let response = Self::send(
            RequestStage::Search,
            self.authorized(self.client.post(&url)).json(&request_body),
        )
        .await?;

        Self::decode(RequestStage::Search, response).await
    }

    async fn analysis(&self, car_id: &Uuid) -> SmokeResult<CarAnalysisResponse> {
        let url = self.url(&analysis_path(car_id));

        log::debug!("GET {}", url);
        let response = Self::send(RequestStage::Analysis, self.authorized(self.client.get(&url))).await?;

        Self::decode(RequestStage::Analysis, response).await
    }
}
