//! Token grant commands

use super::{CommandError, CommandResult, Session, TOKEN_FAILURE_MESSAGE, TOKEN_SUCCESS_MESSAGE};
use crate::app::{ClientArgs, PasswordTokenArgs};
use uaa_client::TokenExchange;
use uaa_shared::{GrantRequest, UaaError};

pub async fn password_token(session: &Session, args: PasswordTokenArgs) -> CommandResult {
    let grant = GrantRequest::Password {
        client_id: args.client_id.unwrap_or_default(),
        client_secret: args.secret.unwrap_or_default(),
        username: args.username.unwrap_or_default(),
        password: args.password.unwrap_or_default(),
    };
    fetch(session, grant).await
}

pub async fn client_credentials_token(session: &Session, args: ClientArgs) -> CommandResult {
    let grant = GrantRequest::ClientCredentials {
        client_id: args.client_id.unwrap_or_default(),
        client_secret: args.secret.unwrap_or_default(),
    };
    fetch(session, grant).await
}

pub async fn refresh_token(session: &Session, args: ClientArgs) -> CommandResult {
    let grant = GrantRequest::RefreshToken {
        client_id: args.client_id.unwrap_or_default(),
        client_secret: args.secret.unwrap_or_default(),
        refresh_token: session.config.active_context().refresh_token,
    };
    fetch(session, grant).await
}

async fn fetch(session: &Session, grant: GrantRequest) -> CommandResult {
    let exchange = TokenExchange::new(session.store.clone(), session.options.clone());

    match exchange.fetch(&session.config, &grant).await {
        Ok(_) => {
            println!("{TOKEN_SUCCESS_MESSAGE}");
            Ok(())
        }
        Err(UaaError::Validation(v)) => Err(v.into()),
        Err(e) => Err(CommandError::with_detail(TOKEN_FAILURE_MESSAGE, e)),
    }
}
