use std::fs;
use std::path::Path;
use chrono::Utc;
use crate::errors::{SmokeError, SmokeResult};
use crate::structs::auth_response::AuthResponse;

pub struct TokenStore;

impl TokenStore {

    pub fn load(path: &Path) -> SmokeResult<AuthResponse> {
        let display = path.display().to_string();
        let content = fs::read_to_string(path)
            .map_err(|e| SmokeError::token_error(&display, &e.to_string()))?;
        let auth: AuthResponse = serde_json::from_str(&content)
            .map_err(|e| SmokeError::token_error(&display, &format!("invalid JSON: {}", e)))?;

        if auth.access_token.trim().is_empty() {
            return Err(SmokeError::token_error(&display, "accessToken is empty"));
        }

        if auth.is_expired_at(Utc::now()) {
            if let Some(expires_at) = auth.expires_at {
                log::warn!("⚠️ Access token in {} expired at {}, requests may be rejected", display, expires_at);
            }
        }

        Ok(auth)
    }

    pub fn save(path: &Path, auth: &AuthResponse) -> SmokeResult<()> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, serde_json::to_string_pretty(auth)?)?;
        log::info!("💾 Saved token to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use tempfile::TempDir;

    #[test]
    fn loads_login_response_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("login-resp.json");
        fs::write(
            &path,
            r#"{"accessToken":"abc.def.ghi","refreshToken":"r1","expiresAt":"2030-01-01T00:00:00Z"}"#,
        )
        .unwrap();

        let auth = TokenStore::load(&path).unwrap();
        assert_eq!(auth.access_token, "abc.def.ghi");
        assert_eq!(auth.refresh_token.as_deref(), Some("r1"));
        assert_eq!(auth.expires_at, Some(Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap()));
    }

    #[test]
    fn only_access_token_is_required() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("token.json");
        fs::write(&path, r#"{"accessToken":"tok"}"#).unwrap();

        let auth = TokenStore::load(&path).unwrap();
        assert_eq!(auth.access_token, "tok");
        assert!(auth.expires_at.is_none());
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.json");

        let err = TokenStore::load(&path).unwrap_err();
        match err {
            SmokeError::TokenFile { path: p, .. } => assert!(p.ends_with("nope.json")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn invalid_json_and_blank_token_are_rejected() {
        let dir = TempDir::new().unwrap();
        let bad = dir.path().join("bad.json");
        fs::write(&bad, "{not json").unwrap();
        let blank = dir.path().join("blank.json");
        fs::write(&blank, r#"{"accessToken":"  "}"#).unwrap();

        assert!(matches!(TokenStore::load(&bad), Err(SmokeError::TokenFile { ref reason, .. }) if reason.starts_with("invalid JSON")));
        assert!(matches!(TokenStore::load(&blank), Err(SmokeError::TokenFile { ref reason, .. }) if reason == "accessToken is empty"));
    }

    #[test]
    fn expired_token_still_loads() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("old.json");
        fs::write(&path, r#"{"accessToken":"tok","expiresAt":"2001-01-01T00:00:00Z"}"#).unwrap();

        let auth = TokenStore::load(&path).unwrap();
        assert!(auth.is_expired_at(Utc::now()));
        assert!(!auth.is_expired_at(Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap()));
    }

    #[test]
    fn save_then_load_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("login-resp.json");
        let auth = AuthResponse {
            access_token: "fresh".to_string(),
            refresh_token: None,
            expires_at: Some(Utc::now() + Duration::hours(1)),
        };

        TokenStore::save(&path, &auth).unwrap();
        let saved = fs::read_to_string(&path).unwrap();
        assert!(saved.contains("\"accessToken\": \"fresh\""));
        assert!(!saved.contains("refreshToken"));
        assert_eq!(TokenStore::load(&path).unwrap().access_token, "fresh");
    }
}
