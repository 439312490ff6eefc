//! Turns raw responses into typed values or classified errors

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use uaa_shared::{ApiErrorBody, Result, UaaError};

/// A response that made it back over the wire, successful or not
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub url: String,
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(url: impl Into<String>, status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            url: url.into(),
            status,
            body: body.into(),
        }
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Decode the body as `T`, or classify why that is not possible.
    ///
    /// Non-2xx statuses become [`UaaError::Api`] when the body is a UAA error
    /// object and [`UaaError::UnparseableApi`] otherwise. A 2xx body that does not
    /// decode is [`UaaError::MalformedResponse`].
    pub fn parse<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        if !self.status.is_success() {
            let err = match serde_json::from_slice::<ApiErrorBody>(&self.body) {
                Ok(api) => UaaError::Api {
                    status: self.status.as_u16(),
                    error: api.error,
                    description: api.error_description,
                },
                Err(_) => UaaError::UnparseableApi {
                    status: self.status.as_u16(),
                    body: self.body_text(),
                },
            };
            tracing::warn!("Request to {} failed: {}", self.url, err);
            return Err(err);
        }

        serde_json::from_slice(&self.body).map_err(|source| {
            tracing::warn!("Could not decode response from {}: {}", self.url, source);
            UaaError::MalformedResponse {
                path: path.to_string(),
                body: self.body_text(),
                source,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uaa_shared::{ErrorKind, TokenResponse};

    const URL: &str = "http://localhost/oauth/token";

    #[test]
    fn test_success_decodes() {
        let raw = RawResponse::new(
            URL,
            StatusCode::OK,
            r#"{"access_token":"abc","token_type":"bearer","expires_in":43199,"scope":"openid","jti":"abc"}"#,
        );
        let token: TokenResponse = raw.parse("/oauth/token").unwrap();
        assert_eq!(token.access_token, "abc");
        assert_eq!(token.expires_in, 43199);
    }

    #[test]
    fn test_api_error_body() {
        let raw = RawResponse::new(
            URL,
            StatusCode::UNAUTHORIZED,
            r#"{"error":"unauthorized","error_description":"Bad credentials"}"#,
        );
        match raw.parse::<TokenResponse>("/oauth/token").unwrap_err() {
            UaaError::Api {
                status,
                error,
                description,
            } => {
                assert_eq!(status, 401);
                assert_eq!(error, "unauthorized");
                assert_eq!(description.as_deref(), Some("Bad credentials"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unparseable_error_body() {
        let raw = RawResponse::new(URL, StatusCode::BAD_REQUEST, "garbage response");
        match raw.parse::<TokenResponse>("/oauth/token").unwrap_err() {
            UaaError::UnparseableApi { status, body } => {
                assert_eq!(status, 400);
                assert_eq!(body, "garbage response");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_malformed_success_body() {
        let raw = RawResponse::new(URL, StatusCode::OK, "<html>not json</html>");
        let err = raw.parse::<TokenResponse>("/oauth/token").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedResponse);
        match err {
            UaaError::MalformedResponse { path, body, .. } => {
                assert_eq!(path, "/oauth/token");
                assert_eq!(body, "<html>not json</html>");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_success_with_wrong_shape_is_malformed() {
        let raw = RawResponse::new(URL, StatusCode::OK, r#"{"token_type":"bearer"}"#);
        let err = raw.parse::<TokenResponse>("/oauth/token").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedResponse);
    }
}
