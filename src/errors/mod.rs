use thiserror::Error;

pub type SmokeResult<T> = Result<T, SmokeError>;

#[derive(Debug, Error)]
pub enum SmokeError {
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        suggestion: Option<String>,
    },

    #[error("Token file '{path}': {reason}")]
    TokenFile {
        path: String,
        reason: String,
    },

    /// The service answered with a non-success status.
    #[error("{operation} failed: {status} {body}")]
    Http {
        operation: String,
        status: u16,
        body: String,
    },

    /// The request never produced a response.
    #[error("Network error during {operation}: {reason}")]
    Network {
        operation: String,
        url: Option<String>,
        reason: String,
    },

    #[error("Parse error in {content_type}: {reason}")]
    Parse {
        content_type: String,
        reason: String,
    },

    #[error("System error during {operation}: {reason}")]
    System {
        operation: String,
        reason: String,
    },
}

impl SmokeError {
    pub fn config_error(message: &str, suggestion: Option<&str>) -> Self {
        Self::Configuration {
            message: message.to_string(),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn token_error(path: &str, reason: &str) -> Self {
        Self::TokenFile {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn http_error(operation: &str, status: u16, body: &str) -> Self {
        Self::Http {
            operation: operation.to_string(),
            status,
            body: body.to_string(),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::System {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Short form used on `[ERROR]` report lines: `status body` for HTTP
    /// failures, the bare reason otherwise.
    pub fn report_detail(&self) -> String {
        match self {
            Self::Http { status, body, .. } => format!("{} {}", status, body),
            Self::Network { reason, .. } => reason.clone(),
            Self::Parse { content_type, reason } => format!("invalid {}: {}", content_type, reason),
            other => other.to_string(),
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::Configuration { message, suggestion } => {
                let mut msg = format!("Configuration Error: {}", message);
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::TokenFile { path, reason } => {
                format!("Token file error at '{}': {}\n💡 Run 'carcheck-smoke login' to fetch a fresh token", path, reason)
            }
            Self::Http { operation, status, body } => {
                let mut msg = format!("{} returned HTTP {}: {}", operation, status, body);
                if *status == 401 {
                    msg.push_str("\n💡 The access token was rejected, log in again");
                }
                msg
            }
            Self::Network { operation, url, reason } => {
                let mut msg = format!("Network error during {}: {}", operation, reason);
                if let Some(url) = url {
                    msg.push_str(&format!(" (URL: {})", url));
                }
                msg.push_str("\n💡 Check that the CarCheck API is running");
                msg
            }
            Self::Parse { content_type, reason } => {
                format!("Parse error in {}: {}\n💡 Check the format and syntax of the input", content_type, reason)
            }
            Self::System { operation, reason } => {
                format!("System error during {}: {}", operation, reason)
            }
        }
    }
}

impl From<std::io::Error> for SmokeError {
    fn from(error: std::io::Error) -> Self {
        SmokeError::System {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for SmokeError {
    fn from(error: serde_json::Error) -> Self {
        SmokeError::Parse {
            content_type: "JSON".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for SmokeError {
    fn from(error: toml::de::Error) -> Self {
        SmokeError::Parse {
            content_type: "TOML".to_string(),
            reason: error.message().to_string(),
        }
    }
}

impl From<reqwest::Error> for SmokeError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            return SmokeError::Parse {
                content_type: "JSON response".to_string(),
                reason: error.to_string(),
            };
        }
        SmokeError::Network {
            operation: "HTTP request".to_string(),
            url: error.url().map(|u| u.to_string()),
            reason: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_report_detail_has_status_and_body() {
        let err = SmokeError::http_error("Search", 404, r#"{"error":"Car not found"}"#);
        assert_eq!(err.report_detail(), r#"404 {"error":"Car not found"}"#);
    }

    #[test]
    fn unauthorized_gets_login_hint() {
        let err = SmokeError::http_error("Analysis", 401, "");
        assert!(err.user_message().contains("log in again"));
    }

    #[test]
    fn json_errors_become_parse_errors() {
        let err: SmokeError = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err().into();
        assert!(matches!(err, SmokeError::Parse { ref content_type, .. } if content_type == "JSON"));
    }
}
