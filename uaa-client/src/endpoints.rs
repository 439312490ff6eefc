//! Read-only server queries

use crate::UaaClient;
use uaa_shared::{Credentials, Jwk, Result, UaaInfo};

pub const INFO_PATH: &str = "/info";
pub const TOKEN_KEY_PATH: &str = "/token_key";

/// Server version, links and login prompts. Needs no credentials.
pub async fn info(client: &UaaClient) -> Result<UaaInfo> {
    client
        .get_bytes(INFO_PATH, "", &Credentials::None)
        .await?
        .parse(INFO_PATH)
}

/// The key UAA signs tokens with.
pub async fn token_key(client: &UaaClient, credentials: &Credentials) -> Result<Jwk> {
    client
        .get_bytes(TOKEN_KEY_PATH, "", credentials)
        .await?
        .parse(TOKEN_KEY_PATH)
}
