use carcheck_smoke::errors::SmokeError;
use carcheck_smoke::services::carcheck_client::CarCheckClient;
use carcheck_smoke::services::token_store::TokenStore;
use tempfile::TempDir;
use crate::mock_server::{self, EMAIL, PASSWORD, TOKEN};

#[tokio::test]
async fn login_returns_tokens_that_round_trip_through_the_token_file() {
    let (addr, _) = mock_server::spawn();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("login-resp.json");

    let auth = CarCheckClient::login(&mock_server::base_url(addr), EMAIL, PASSWORD, None)
        .await
        .unwrap();
    assert_eq!(auth.access_token, TOKEN);
    assert_eq!(auth.refresh_token.as_deref(), Some("refresh-token"));

    TokenStore::save(&path, &auth).unwrap();
    let loaded = TokenStore::load(&path).unwrap();
    assert_eq!(loaded.access_token, TOKEN);
    assert_eq!(loaded.expires_at, auth.expires_at);
}

#[tokio::test]
async fn wrong_password_is_unauthorized() {
    let (addr, _) = mock_server::spawn();

    let err = CarCheckClient::login(&mock_server::base_url(addr), EMAIL, "wrong", None)
        .await
        .unwrap_err();

    assert!(matches!(err, SmokeError::Http { status: 401, ref operation, .. } if operation == "Login"));
}
