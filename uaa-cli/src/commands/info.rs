//! `info` and `get-token-key`

use super::{print_json, CommandResult, Session};
use crate::app::ClientArgs;
use uaa_shared::Credentials;

pub async fn info(session: &Session) -> CommandResult {
    let context = session.require_target()?;
    let client = session.client(context)?;

    let info = uaa_client::info(&client).await?;
    print_json(&info)
}

pub async fn token_key(session: &Session, args: ClientArgs) -> CommandResult {
    let mut context = session.require_target()?;

    // client credentials for this call only; they never reach the config file
    if let (Some(client_id), Some(secret)) = (args.client_id, args.secret) {
        context.client_id = client_id;
        context.client_secret = secret;
    }
    let credentials = Credentials::for_context(&context);
    let client = session.client(context)?;

    let key = uaa_client::token_key(&client, &credentials).await?;
    print_json(&key)
}
