//! Token exchange - runs an OAuth2 grant and persists the result into the active context

use crate::{ClientOptions, UaaClient};
use uaa_shared::{
    Config, ConfigStore, Credentials, GrantRequest, Result, TokenResponse, ValidationError,
};

pub const TOKEN_PATH: &str = "/oauth/token";

/// Runs grants against the active target and saves successful results
pub struct TokenExchange {
    store: ConfigStore,
    options: ClientOptions,
}

impl TokenExchange {
    pub fn new(store: ConfigStore, options: ClientOptions) -> Self {
        Self { store, options }
    }

    /// Run `grant` against the active target of `config`.
    ///
    /// Returns the updated config after it has been written. On any failure
    /// nothing is written and the stored token stays as it was.
    pub async fn fetch(&self, config: &Config, grant: &GrantRequest) -> Result<Config> {
        let context = config.active_context();
        if !context.has_target() {
            return Err(ValidationError::NoTarget.into());
        }
        grant.validate()?;

        tracing::debug!(
            "Requesting {} token for client {} from {}",
            grant.grant_type(),
            grant.client_id(),
            context.base_url
        );

        let client = UaaClient::new(context.clone(), self.options.clone())?;
        let token: TokenResponse = client
            .post_form(TOKEN_PATH, &grant.form_fields(), &Credentials::None)
            .await?
            .parse(TOKEN_PATH)?;

        let mut updated_context = context;
        updated_context.apply_token(token);
        updated_context.client_id = grant.client_id().to_string();
        updated_context.grant_type = grant.grant_type().to_string();
        if let GrantRequest::Password { username, .. } = grant {
            updated_context.username = username.clone();
        }

        let mut updated = config.clone();
        updated.update_active(updated_context)?;
        self.store.write(&updated)?;

        tracing::debug!("Saved new {} token to {}", grant.grant_type(), self.store.path().display());
        Ok(updated)
    }
}
