//! Value objects decoded from UAA responses

use serde::{Deserialize, Serialize};

/// Response of `GET /info`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UaaInfo {
    #[serde(default)]
    pub app: UaaApp,
    #[serde(default)]
    pub links: UaaLinks,
    #[serde(default)]
    pub prompts: UaaPrompts,
    #[serde(default)]
    pub zone_name: String,
    #[serde(rename = "entityID", default)]
    pub entity_id: String,
    #[serde(default)]
    pub commit_id: String,
    #[serde(default)]
    pub timestamp: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UaaApp {
    #[serde(default)]
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UaaLinks {
    #[serde(rename = "passwd", default)]
    pub forgot_password: String,
    #[serde(default)]
    pub uaa: String,
    #[serde(rename = "register", default)]
    pub registration: String,
    #[serde(default)]
    pub login: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UaaPrompts {
    #[serde(default)]
    pub username: Vec<String>,
    #[serde(default)]
    pub password: Vec<String>,
}

/// JSON Web Key returned by `GET /token_key`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Jwk {
    pub kty: String,
    pub e: String,
    #[serde(rename = "use")]
    pub use_: String,
    pub kid: String,
    pub alg: String,
    pub value: String,
    pub n: String,
}

/// Successful response of `POST /oauth/token`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: i64,
    #[serde(default)]
    pub scope: String,
    #[serde(default)]
    pub jti: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

/// Error body UAA sends with 4xx/5xx responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
    #[serde(default)]
    pub error_description: Option<String>,
}
