use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use ghcli::commands::Command;
use ghcli::commands::code::{CodeArgs, CodeCommand};
use ghcli::commands::commits::{CommitsArgs, CommitsCommand};
use ghcli::commands::repos::{ReposArgs, ReposCommand};
use ghcli::config::FileConfig;
use ghcli::constants;

#[derive(Parser)]
#[command(name = "ghsearch")]
#[command(about = "GitHub / GitHub Enterprise search CLI tool")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search GitHub repositories
    Repos(ReposArgs),

    /// Search code across GitHub
    Code(CodeArgs),

    /// Search commits across GitHub
    Commits(CommitsArgs),

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn load_config(explicit_path: Option<&str>) -> FileConfig {
    FileConfig::load(explicit_path, constants::search::DEFAULT_CONFIG_FILE)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Repos(args) => {
            let config = load_config(args.conn.config.as_deref());
            ReposCommand { args }.execute(&config).await
        }
        Commands::Code(args) => {
            let config = load_config(args.conn.config.as_deref());
            CodeCommand { args }.execute(&config).await
        }
        Commands::Commits(args) => {
            let config = load_config(args.conn.config.as_deref());
            CommitsCommand { args }.execute(&config).await
        }
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "ghsearch",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    }
}
