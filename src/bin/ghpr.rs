use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use ghcli::commands::Command;
use ghcli::commands::approve::{ApproveArgs, ApproveCommand};
use ghcli::commands::comment::{CommentArgs, CommentCommand};
use ghcli::commands::create::{CreateArgs, CreateCommand};
use ghcli::config::FileConfig;
use ghcli::constants;

#[derive(Parser)]
#[command(name = "ghpr")]
#[command(about = "GitHub / GitHub Enterprise pull request CLI tool")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new pull request
    Create(CreateArgs),

    /// Approve a pull request
    Approve(ApproveArgs),

    /// Add a comment to a pull request
    Comment(CommentArgs),

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn load_config(explicit_path: Option<&str>) -> FileConfig {
    FileConfig::load(explicit_path, constants::pr::DEFAULT_CONFIG_FILE)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Create(args) => {
            let config = load_config(args.target.config.as_deref());
            CreateCommand { args }.execute(&config).await
        }
        Commands::Approve(args) => {
            let config = load_config(args.target.config.as_deref());
            ApproveCommand { args }.execute(&config).await
        }
        Commands::Comment(args) => {
            let config = load_config(args.target.config.as_deref());
            CommentCommand { args }.execute(&config).await
        }
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "ghpr", &mut std::io::stdout());
            Ok(())
        }
    }
}
