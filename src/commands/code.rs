//! `ghsearch code` - code search

use anyhow::Result;
use async_trait::async_trait;
use clap::Args;
use ghcli_github::{ClientOptions, CodeSearchParams, GitHubClient, SearchResults};

use super::base::{Command, ConnectionArgs, pick_count, pick_string};
use crate::auth;
use crate::config::FileConfig;
use crate::constants::search as defaults;
use crate::report;

/// Arguments for the `code` subcommand
#[derive(Debug, Args)]
pub struct CodeArgs {
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

    /// Language filter
    #[arg(long)]
    pub language: Option<String>,

    /// Path filter
    #[arg(long)]
    pub path: Option<String>,
}

/// Effective code-search options after merging CLI, config and environment
#[derive(Debug, Clone)]
pub struct CodeSettings {
    pub api_base: String,
    pub token: Option<String>,
    pub query: String,
    pub per_page: u32,
    pub max_pages: u32,
    pub repo: Option<String>,
    pub language: Option<String>,
    pub path: Option<String>,
    pub verify_tls: bool,
}

impl CodeSettings {
    pub fn resolve(config: &FileConfig, args: &CodeArgs) -> Self {
        let section = &config.code;
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
                .unwrap_or_else(|| defaults::DEFAULT_CODE_QUERY.to_string()),
            per_page: pick_count(args.per_page, section.per_page)
                .unwrap_or(defaults::DEFAULT_PER_PAGE),
            max_pages: pick_count(args.max_pages, section.max_pages)
                .unwrap_or(defaults::DEFAULT_MAX_PAGES),
            repo: pick_string(args.repo.as_deref(), section.repo.as_deref()),
            language: pick_string(args.language.as_deref(), section.language.as_deref()),
            path: pick_string(args.path.as_deref(), section.path.as_deref()),
            verify_tls: args
                .conn
                .verify_tls_override()
                .or(section.verify_tls)
                .unwrap_or(true),
        }
    }
}

/// Code search command
pub struct CodeCommand {
    pub args: CodeArgs,
}

#[async_trait]
impl Command for CodeCommand {
    async fn execute(&self, config: &FileConfig) -> Result<()> {
        let settings = CodeSettings::resolve(config, &self.args);

        let client = GitHubClient::new(
            ClientOptions::new(&settings.api_base)
                .with_token(settings.token.clone())
                .with_verify_tls(settings.verify_tls)
                .with_debug(self.args.conn.debug),
        )?;

        let params = CodeSearchParams {
            repo: settings.repo.clone(),
            language: settings.language.clone(),
            path: settings.path.clone(),
        };
        let SearchResults {
            query,
            total_count,
            incomplete_results,
            items,
        } = client
            .search_code(&settings.query, &params, settings.per_page, settings.max_pages)
            .await?;

        let report = report::build_code_report(
            query,
            settings.api_base.clone(),
            total_count,
            incomplete_results,
            report::simplify_code_results(items),
            report::CodeFilters {
                repo: settings.repo.clone(),
                language: settings.language.clone(),
                path: settings.path.clone(),
            },
        );
        report::print_yaml(&report)
    }
}
