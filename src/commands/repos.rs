//! `ghsearch repos` - repository search

use anyhow::Result;
use async_trait::async_trait;
use clap::Args;
use ghcli_github::{ClientOptions, GitHubClient, SearchResults};

use super::base::{Command, ConnectionArgs, pick_count, pick_string};
use super::validators;
use crate::auth;
use crate::config::FileConfig;
use crate::constants::search as defaults;
use crate::report;

/// Arguments for the `repos` subcommand
#[derive(Debug, Args)]
#[command(after_help = "Examples:
  # Search for repositories with topics
  ghsearch repos --query 'topic:astro topic:template'

  # Find Python repos with minimum stars
  ghsearch repos --query 'language:python' --min-stars 100 --sort-by stars

  # Group by language, keep the top 20
  ghsearch repos --query 'topic:cli' --group-by-language --top-n 20

  # Use GitHub Enterprise
  ghsearch repos --api-base 'https://github.company.com/api/v3' --query 'org:myorg'")]
pub struct ReposArgs {
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

    /// Minimum stars filter
    #[arg(long)]
    pub min_stars: Option<u64>,

    /// Language filter
    #[arg(long)]
    pub language: Option<String>,

    /// Sort by field (stars, forks, updated, created)
    #[arg(long)]
    pub sort_by: Option<String>,

    /// Sort direction (asc or desc)
    #[arg(long)]
    pub sort_direction: Option<String>,

    /// Group results by language
    #[arg(long)]
    pub group_by_language: bool,

    /// Do not group results by language
    #[arg(long, conflicts_with = "group_by_language")]
    pub no_group_by_language: bool,

    /// Limit results to top N
    #[arg(long)]
    pub top_n: Option<usize>,
}

/// Effective repos-search options after merging CLI, config and environment
#[derive(Debug, Clone)]
pub struct ReposSettings {
    pub api_base: String,
    pub token: Option<String>,
    pub query: String,
    pub per_page: u32,
    pub max_pages: u32,
    pub min_stars: Option<u64>,
    pub language: Option<String>,
    pub sort_by: Option<String>,
    pub sort_direction: String,
    pub group_by_language: bool,
    pub top_n: Option<usize>,
    pub verify_tls: bool,
}

impl ReposSettings {
    pub fn resolve(config: &FileConfig, args: &ReposArgs) -> Self {
        let section = &config.repos;
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
                .unwrap_or_else(|| defaults::DEFAULT_REPOS_QUERY.to_string()),
            per_page: pick_count(args.per_page, section.per_page)
                .unwrap_or(defaults::DEFAULT_PER_PAGE),
            max_pages: pick_count(args.max_pages, section.max_pages)
                .unwrap_or(defaults::DEFAULT_MAX_PAGES),
            min_stars: args.min_stars.or(section.min_stars),
            language: pick_string(args.language.as_deref(), section.language.as_deref()),
            sort_by: pick_string(args.sort_by.as_deref(), section.sort_by.as_deref()),
            sort_direction: pick_string(
                args.sort_direction.as_deref(),
                section.sort_direction.as_deref(),
            )
            .unwrap_or_else(|| defaults::DEFAULT_SORT_DIRECTION.to_string()),
            group_by_language: args
                .group_by_override()
                .or(section.group_by_language)
                .unwrap_or(false),
            top_n: args.top_n.or(section.top_n),
            verify_tls: args
                .conn
                .verify_tls_override()
                .or(section.verify_tls)
                .unwrap_or(true),
        }
    }
}

impl ReposArgs {
    /// Grouping override from the command line; --no-group-by-language wins
    fn group_by_override(&self) -> Option<bool> {
        if self.no_group_by_language {
            Some(false)
        } else if self.group_by_language {
            Some(true)
        } else {
            None
        }
    }
}

/// Repository search command
pub struct ReposCommand {
    pub args: ReposArgs,
}

#[async_trait]
impl Command for ReposCommand {
    async fn execute(&self, config: &FileConfig) -> Result<()> {
        let settings = ReposSettings::resolve(config, &self.args);
        validators::validate_sort_options(settings.sort_by.as_deref(), &settings.sort_direction)?;

        let client = GitHubClient::new(
            ClientOptions::new(&settings.api_base)
                .with_token(settings.token.clone())
                .with_verify_tls(settings.verify_tls)
                .with_debug(self.args.conn.debug),
        )?;

        let SearchResults {
            query,
            total_count,
            incomplete_results,
            items,
        } = client
            .search_repositories(&settings.query, settings.per_page, settings.max_pages)
            .await?;

        let simplified = report::simplify_repos(items);
        let filtered = report::apply_filters(
            simplified,
            settings.min_stars,
            settings.language.as_deref(),
        );
        let sorted = report::apply_sorting(
            filtered,
            settings.sort_by.as_deref(),
            &settings.sort_direction,
        );

        let report = report::build_repos_report(
            query,
            settings.api_base.clone(),
            total_count,
            incomplete_results,
            sorted,
            settings.group_by_language,
            settings.top_n,
            settings.min_stars,
            settings.language.clone(),
            settings.sort_by.clone(),
            settings.sort_direction.clone(),
        );
        report::print_yaml(&report)
    }
}
