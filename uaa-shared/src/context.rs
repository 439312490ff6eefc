//! Connection and session state for a single UAA target

use serde::{Deserialize, Serialize};

use crate::types::TokenResponse;

/// One target: where to send requests and what the last token exchange produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UaaContext {
    pub base_url: String,
    pub zone_id: String,
    pub skip_ssl_validation: bool,
    pub client_id: String,
    /// Only lives for the current invocation; never written to disk.
    #[serde(skip)]
    pub client_secret: String,
    pub grant_type: String,
    pub username: String,
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub scope: String,
    pub jti: String,
    pub expires_in: i64,
}

impl UaaContext {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// An empty base URL means no target has been set.
    pub fn has_target(&self) -> bool {
        !self.base_url.is_empty()
    }

    pub fn has_access_token(&self) -> bool {
        !self.access_token.is_empty()
    }

    /// Copy the fields of a successful token response into this context.
    ///
    /// A refresh token is only replaced when the server issued a new one, so a
    /// refresh grant that omits it keeps the stored value usable.
    pub fn apply_token(&mut self, token: TokenResponse) {
        self.access_token = token.access_token;
        self.token_type = token.token_type;
        self.expires_in = token.expires_in;
        self.scope = token.scope;
        self.jti = token.jti;
        if let Some(refresh_token) = token.refresh_token.filter(|t| !t.is_empty()) {
            self.refresh_token = refresh_token;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(access: &str, refresh: Option<&str>) -> TokenResponse {
        TokenResponse {
            access_token: access.to_string(),
            token_type: "bearer".to_string(),
            expires_in: 43199,
            scope: "openid uaa.user".to_string(),
            jti: "jti-1".to_string(),
            refresh_token: refresh.map(str::to_string),
        }
    }

    #[test]
    fn test_default_context_has_no_target() {
        let ctx = UaaContext::default();
        assert!(!ctx.has_target());
        assert!(!ctx.has_access_token());
        assert!(UaaContext::new("https://uaa.example.com").has_target());
    }

    #[test]
    fn test_apply_token_overwrites_token_fields() {
        let mut ctx = UaaContext::new("https://uaa.example.com");
        ctx.access_token = "old".to_string();
        ctx.refresh_token = "old-refresh".to_string();

        ctx.apply_token(token("new", None));

        assert_eq!(ctx.access_token, "new");
        assert_eq!(ctx.token_type, "bearer");
        assert_eq!(ctx.expires_in, 43199);
        assert_eq!(ctx.scope, "openid uaa.user");
        assert_eq!(ctx.jti, "jti-1");
        assert_eq!(ctx.refresh_token, "old-refresh");
        assert_eq!(ctx.base_url, "https://uaa.example.com");

        ctx.apply_token(token("newer", Some("new-refresh")));
        assert_eq!(ctx.refresh_token, "new-refresh");
    }

    #[test]
    fn test_client_secret_is_not_serialized() {
        let mut ctx = UaaContext::new("https://uaa.example.com");
        ctx.client_id = "admin".to_string();
        ctx.client_secret = "adminsecret".to_string();

        let json = serde_json::to_string(&ctx).unwrap();
        assert!(json.contains("admin"));
        assert!(!json.contains("adminsecret"));

        let back: UaaContext = serde_json::from_str(&json).unwrap();
        assert!(back.client_secret.is_empty());
    }

    #[test]
    fn test_missing_fields_default() {
        let ctx: UaaContext =
            serde_json::from_str(r#"{"base_url":"http://localhost:8080"}"#).unwrap();
        assert_eq!(ctx.base_url, "http://localhost:8080");
        assert!(!ctx.skip_ssl_validation);
        assert_eq!(ctx.expires_in, 0);
    }
}
