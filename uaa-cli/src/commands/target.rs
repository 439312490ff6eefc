//! `target` and `targets`

use super::{CommandError, CommandResult, Session};
use crate::app::TargetArgs;
use uaa_shared::UaaContext;

pub async fn target(mut session: Session, args: TargetArgs) -> CommandResult {
    let Some(url) = args.url else {
        show_target(&session);
        return Ok(());
    };

    let url = url.trim_end_matches('/').to_string();
    let mut context = UaaContext::new(url.clone());
    context.skip_ssl_validation = args.skip_ssl_validation;
    context.zone_id = args.zone_id.unwrap_or_default();

    // only targets that answer /info are saved
    let client = session.client(context.clone())?;
    if let Err(e) = uaa_client::info(&client).await {
        return Err(CommandError::with_detail(
            format!("The target {url} could not be set."),
            e,
        ));
    }

    session.config.add_context(url.clone(), context);
    session.store.write(&session.config)?;

    println!("Target set to {url}");
    Ok(())
}

fn show_target(session: &Session) {
    let context = session.config.active_context();
    if context.has_target() {
        println!("Target: {}", context.base_url);
        if !context.zone_id.is_empty() {
            println!("Zone: {}", context.zone_id);
        }
    } else {
        println!("No target set.");
    }
}

pub fn targets(session: &Session) -> CommandResult {
    let active = session.config.active_context_name();
    let names = session.config.context_names();

    if names.is_empty() {
        println!("No target set.");
        return Ok(());
    }

    for name in names {
        let marker = if Some(name) == active { "*" } else { " " };
        println!("{marker} {name}");
    }
    Ok(())
}
