//! `uaa` - command-line client for UAA servers
//!
//! Manages saved targets and their tokens in `$UAA_HOME/config.json`
//! (default `~/.uaa`), fetches tokens and queries server metadata.

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

mod app;
mod commands;

use app::{Cli, Commands};
use commands::{CommandResult, Session};
use uaa_shared::ConfigStore;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;
    debug!("uaa {}", env!("CARGO_PKG_VERSION"));

    match run(cli).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            println!("{}", e.message);
            if let Some(detail) = &e.detail {
                debug!("{detail:?}");
                eprintln!("{detail}");
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // stdout belongs to command output and --trace
    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set global logging subscriber: {e}"))
}

async fn run(cli: Cli) -> CommandResult {
    let store = ConfigStore::from_env()?;
    let session = Session::load(store, cli.trace, cli.timeout)?;

    match cli.command {
        Commands::Target(args) => commands::target::target(session, args).await,
        Commands::Targets => commands::target::targets(&session),
        Commands::Context => commands::context::context(&session),
        Commands::Info => commands::info::info(&session).await,
        Commands::GetTokenKey(args) => commands::info::token_key(&session, args).await,
        Commands::GetPasswordToken(args) => commands::token::password_token(&session, args).await,
        Commands::GetClientCredentialsToken(args) => {
            commands::token::client_credentials_token(&session, args).await
        }
        Commands::RefreshToken(args) => commands::token::refresh_token(&session, args).await,
    }
}
