//! Base types for the command pattern
//!
//! Every subcommand is a struct holding its parsed arguments and
//! implementing [`Command`] against the loaded config file. The shared
//! flag groups for each binary also live here.

use anyhow::Result;
use clap::Args;
use ghcli_github::{ClientOptions, GitHubClient};

use crate::auth;
use crate::config::FileConfig;
use crate::constants;

/// Trait that all subcommands implement
#[async_trait::async_trait]
pub trait Command {
    /// Execute the command against the loaded configuration
    async fn execute(&self, config: &FileConfig) -> Result<()>;
}

/// Options shared by every ghsearch subcommand
#[derive(Debug, Clone, Args)]
pub struct ConnectionArgs {
    /// Path to config file (default: ~/.ghsearch.yml)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override API base URL
    #[arg(long)]
    pub api_base: Option<String>,

    /// GitHub token for authentication
    #[arg(long)]
    pub token: Option<String>,

    /// Show API request details and an equivalent curl command
    #[arg(long)]
    pub debug: bool,

    /// Disable TLS certificate verification
    #[arg(long)]
    pub no_verify_tls: bool,
}

impl ConnectionArgs {
    /// TLS override from the command line, `None` when the config file
    /// should decide
    pub fn verify_tls_override(&self) -> Option<bool> {
        if self.no_verify_tls { Some(false) } else { None }
    }
}

/// Options shared by every ghpr subcommand
#[derive(Debug, Clone, Args)]
pub struct PrTargetArgs {
    /// Path to config file (default: ~/.ghpr.yml)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override API base URL
    #[arg(long)]
    pub api_base: Option<String>,

    /// GitHub token for authentication
    #[arg(short, long)]
    pub token: Option<String>,

    /// Repository owner/organization
    #[arg(short, long)]
    pub owner: Option<String>,

    /// Repository name
    #[arg(short, long)]
    pub repo: Option<String>,

    /// SOCKS5h proxy address
    #[arg(short = 'x', long)]
    pub proxy: Option<String>,

    /// Show API request details and an equivalent curl command
    #[arg(long)]
    pub debug: bool,

    /// Disable TLS certificate verification
    #[arg(long)]
    pub no_verify_tls: bool,
}

impl PrTargetArgs {
    pub fn verify_tls_override(&self) -> Option<bool> {
        if self.no_verify_tls { Some(false) } else { None }
    }
}

/// First non-empty string: CLI flag, then config file. Empty values count
/// as unset, like in the `auth` resolvers.
pub(crate) fn pick_string(cli: Option<&str>, config: Option<&str>) -> Option<String> {
    cli.filter(|value| !value.is_empty())
        .or_else(|| config.filter(|value| !value.is_empty()))
        .map(str::to_string)
}

/// First non-zero count: CLI flag, then config file
pub(crate) fn pick_count(cli: Option<u32>, config: Option<u32>) -> Option<u32> {
    cli.filter(|&count| count != 0)
        .or_else(|| config.filter(|&count| count != 0))
}

/// Effective pull-request options after merging CLI, config and environment
#[derive(Debug, Clone)]
pub struct PrSettings {
    pub api_base: String,
    pub token: Option<String>,
    pub owner: Option<String>,
    pub repo: Option<String>,
    pub proxy: Option<String>,
    pub verify_tls: bool,
}

impl PrSettings {
    pub fn resolve(config: &FileConfig, args: &PrTargetArgs) -> Self {
        let section = &config.ghpr;
        Self {
            api_base: auth::resolve_pr_api_base(
                args.api_base.as_deref(),
                section.api_base.as_deref(),
            ),
            token: auth::resolve_pr_token(args.token.as_deref(), section.token.as_deref()),
            owner: pick_string(args.owner.as_deref(), section.owner.as_deref())
                .or_else(|| auth::first_env(&[constants::pr::OWNER_ENV_VAR])),
            repo: pick_string(args.repo.as_deref(), section.repo.as_deref())
                .or_else(|| auth::first_env(&[constants::pr::REPO_ENV_VAR])),
            proxy: pick_string(args.proxy.as_deref(), section.proxy.as_deref()),
            verify_tls: args
                .verify_tls_override()
                .or(section.verify_tls)
                .unwrap_or(true),
        }
    }

    /// Build a client for this target
    pub fn client(&self, debug: bool) -> Result<GitHubClient> {
        GitHubClient::new(
            ClientOptions::new(&self.api_base)
                .with_token(self.token.clone())
                .with_proxy(self.proxy.clone())
                .with_verify_tls(self.verify_tls)
                .with_debug(debug),
        )
    }
}
