use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "uaa")]
#[command(version)]
#[command(about = "A command-line client for UAA, the Cloud Foundry identity server")]
pub struct Cli {
    /// Print raw HTTP requests and responses
    #[arg(long, global = true)]
    pub trace: bool,

    /// HTTP timeout in seconds
    #[arg(long, global = true, env = "UAA_HTTP_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Set the UAA you are talking to, or show the current one
    Target(TargetArgs),
    /// List every saved target
    Targets,
    /// Show the active context and its tokens
    Context,
    /// See version and global configurations for the targeted UAA
    Info,
    /// View the key for validating UAA's JWT token signatures
    #[command(alias = "token-key")]
    GetTokenKey(ClientArgs),
    /// Obtain an access token using the password grant type
    GetPasswordToken(PasswordTokenArgs),
    /// Obtain an access token using the client_credentials grant type
    GetClientCredentialsToken(ClientArgs),
    /// Obtain a new access token using the stored refresh token
    RefreshToken(ClientArgs),
}

#[derive(Args, Debug)]
pub struct TargetArgs {
    /// Base URL of the UAA
    pub url: Option<String>,

    /// Disable TLS certificate validation for this target
    #[arg(short = 'k', long)]
    pub skip_ssl_validation: bool,

    /// Identity zone to send requests to
    #[arg(long)]
    pub zone_id: Option<String>,
}

#[derive(Args, Debug)]
pub struct ClientArgs {
    /// Client id
    pub client_id: Option<String>,

    /// Client secret
    #[arg(short = 's', long)]
    pub secret: Option<String>,
}

#[derive(Args, Debug)]
pub struct PasswordTokenArgs {
    /// Client id
    pub client_id: Option<String>,

    /// Client secret
    #[arg(short = 's', long)]
    pub secret: Option<String>,

    /// Username
    #[arg(short = 'u', long)]
    pub username: Option<String>,

    /// User password
    #[arg(short = 'p', long)]
    pub password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_password_token_flags() {
        let cli = Cli::try_parse_from([
            "uaa",
            "get-password-token",
            "admin",
            "-s",
            "adminsecret",
            "--username",
            "woodstock",
            "-p",
            "secret",
            "--trace",
        ])
        .unwrap();

        assert!(cli.trace);
        match cli.command {
            Commands::GetPasswordToken(args) => {
                assert_eq!(args.client_id.as_deref(), Some("admin"));
                assert_eq!(args.secret.as_deref(), Some("adminsecret"));
                assert_eq!(args.username.as_deref(), Some("woodstock"));
                assert_eq!(args.password.as_deref(), Some("secret"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_missing_arguments_still_parse() {
        let cli = Cli::try_parse_from(["uaa", "get-password-token", "-u", "woodstock"]).unwrap();
        match cli.command {
            Commands::GetPasswordToken(args) => {
                assert!(args.client_id.is_none());
                assert!(args.secret.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_token_key_alias() {
        let cli = Cli::try_parse_from(["uaa", "token-key"]).unwrap();
        assert!(matches!(cli.command, Commands::GetTokenKey(_)));
    }
}
