//! Command-line surface for the footfall agent.

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "footfall", version, about = "Visit-tracking agent")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Register a visit record and keep it alive until interrupted.
    Run(RunArgs),
    /// Emit a single named action.
    Action(ActionArgs),
}

#[derive(Args)]
pub struct RunArgs {
    /// Tracking server root URL (falls back to FF_SERVER).
    #[arg(long)]
    pub server: Option<String>,
    /// Domain id the record belongs to (falls back to FF_DOMAIN_ID).
    #[arg(long)]
    pub domain_id: Option<String>,
    /// Options document as JSON (falls back to FF_OPTIONS).
    #[arg(long)]
    pub options: Option<String>,
}

#[derive(Args)]
pub struct ActionArgs {
    /// Tracking server root URL (falls back to FF_SERVER).
    #[arg(long)]
    pub server: Option<String>,
    /// Event id the action belongs to.
    #[arg(long)]
    pub event_id: String,
    /// Action attributes as a JSON object.
    #[arg(long)]
    pub attrs: String,
    /// Options document as JSON (falls back to FF_OPTIONS).
    #[arg(long)]
    pub options: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn run_args_parse() {
        let cli = Cli::parse_from([
            "footfall",
            "run",
            "--server",
            "https://a.example",
            "--domain-id",
            "domain-1",
        ]);
        match cli.command {
            Commands::Run(args) => {
                assert_eq!(args.server.as_deref(), Some("https://a.example"));
                assert_eq!(args.domain_id.as_deref(), Some("domain-1"));
                assert!(args.options.is_none());
            }
            _ => panic!("expected run command"),
        }
    }
}
