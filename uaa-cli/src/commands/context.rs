use super::{print_json, CommandResult, Session};

/// Print the active context as JSON.
pub fn context(session: &Session) -> CommandResult {
    let context = session.require_target()?;
    print_json(&context)
}
