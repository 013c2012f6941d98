//! `ghsearch commits` - commit search

use anyhow::Result;
use async_trait::async_trait;
use clap::Args;
use ghcli_github::{ClientOptions, CommitSearchParams, GitHubClient, SearchResults};

use super::base::{Command, ConnectionArgs, pick_count, pick_string};
use crate::auth;
use crate::config::FileConfig;
use crate::constants::search as defaults;
use crate::report;

/// Arguments for the `commits` subcommand
#[derive(Debug, Args)]
#[command(after_help = "Examples:
  # Search commits in a specific repository
  ghsearch commits --query 'performance' --repo 'owner/repo'

  # Search commits by author
  ghsearch commits --query 'refactor' --author 'username'

  # Output per-repository statistics
  ghsearch commits --query 'fix' --stats")]
pub struct CommitsArgs {
    #[command(flatten)]
    pub conn: ConnectionArgs,

    /// Search query
    #[arg(short, long)]
    pub query: Option<String>,

    /// Results per page (max 100)
    #[arg(long)]
    pub per_page: Option<u32>,

    /// Maximum pages to fetch
    #[arg(long)]
    pub max_pages: Option<u32>,

    /// Repository filter (owner/repo)
    #[arg(long)]
    pub repo: Option<String>,

    /// Author filter (username or email)
    #[arg(long)]
    pub author: Option<String>,

    /// Committer filter (username or email)
    #[arg(long)]
    pub committer: Option<String>,

    /// Output repository statistics instead of individual commits
    #[arg(long)]
    pub stats: bool,
}

/// Effective commit-search options after merging CLI, config and environment
#[derive(Debug, Clone)]
pub struct CommitsSettings {
    pub api_base: String,
    pub token: Option<String>,
    pub query: String,
    pub per_page: u32,
    pub max_pages: u32,
    pub repo: Option<String>,
    pub author: Option<String>,
    pub committer: Option<String>,
    pub stats: bool,
    pub verify_tls: bool,
}

impl CommitsSettings {
    pub fn resolve(config: &FileConfig, args: &CommitsArgs) -> Self {
        let section = &config.commits;
        Self {
            api_base: auth::resolve_search_api_base(
                args.conn.api_base.as_deref(),
                section.api_base.as_deref(),
            ),
            token: auth::resolve_search_token(
                args.conn.token.as_deref(),
                section.token.as_deref(),
            ),
            query: pick_string(args.query.as_deref(), section.query.as_deref())
                .unwrap_or_else(|| defaults::DEFAULT_COMMITS_QUERY.to_string()),
            per_page: pick_count(args.per_page, section.per_page)
                .unwrap_or(defaults::DEFAULT_PER_PAGE),
            max_pages: pick_count(args.max_pages, section.max_pages)
                .unwrap_or(defaults::DEFAULT_MAX_PAGES),
            repo: pick_string(args.repo.as_deref(), section.repo.as_deref()),
            author: pick_string(args.author.as_deref(), section.author.as_deref()),
            committer: pick_string(args.committer.as_deref(), section.committer.as_deref()),
            stats: if args.stats {
                true
            } else {
                section.stats.unwrap_or(false)
            },
            verify_tls: args
                .conn
                .verify_tls_override()
                .or(section.verify_tls)
                .unwrap_or(true),
        }
    }
}

/// Commit search command
pub struct CommitsCommand {
    pub args: CommitsArgs,
}

#[async_trait]
impl Command for CommitsCommand {
    async fn execute(&self, config: &FileConfig) -> Result<()> {
        let settings = CommitsSettings::resolve(config, &self.args);

        let client = GitHubClient::new(
            ClientOptions::new(&settings.api_base)
                .with_token(settings.token.clone())
                .with_verify_tls(settings.verify_tls)
                .with_debug(self.args.conn.debug),
        )?;

        let params = CommitSearchParams {
            repo: settings.repo.clone(),
            author: settings.author.clone(),
            committer: settings.committer.clone(),
        };
        let SearchResults {
            query,
            total_count,
            incomplete_results,
            items,
        } = client
            .search_commits(
                &settings.query,
                &params,
                settings.per_page,
                settings.max_pages,
            )
            .await?;

        let report = report::build_commits_report(
            query,
            settings.api_base.clone(),
            total_count,
            incomplete_results,
            report::simplify_commit_results(items),
            report::CommitsFilters {
                repo: settings.repo.clone(),
                author: settings.author.clone(),
                committer: settings.committer.clone(),
            },
            settings.stats,
        );
        report::print_yaml(&report)
    }
}
