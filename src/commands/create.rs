//! `ghpr create` - open a pull request

use anyhow::Result;
use async_trait::async_trait;
use clap::Args;
use colored::Colorize;
use ghcli_github::PullRequestParams;

use super::base::{Command, PrSettings, PrTargetArgs};
use super::validators;
use crate::config::FileConfig;
use crate::constants::pr as defaults;

/// Arguments for the `create` subcommand
#[derive(Debug, Args)]
#[command(after_help = "Examples:
  # Create a PR with title and body
  ghpr create --title 'Fix bug' --body 'This fixes the issue' --head feature-branch --base main

  # Create a draft PR
  ghpr create --title 'WIP: Feature' --head feature --base main --draft

  # Create a PR with labels
  ghpr create --title 'Feature' --head feature --base main --label bug --label enhancement")]
pub struct CreateArgs {
    #[command(flatten)]
    pub target: PrTargetArgs,

    /// PR title
    #[arg(long)]
    pub title: String,

    /// Branch to merge from
    #[arg(long)]
    pub head: String,

    /// Branch to merge into
    #[arg(long, default_value = defaults::DEFAULT_BASE_BRANCH)]
    pub base: String,

    /// PR body/description
    #[arg(short, long)]
    pub body: Option<String>,

    /// Create as draft PR
    #[arg(long)]
    pub draft: bool,

    /// Labels to add (can be used multiple times)
    #[arg(long = "label")]
    pub labels: Vec<String>,
}

/// Pull request creation command
pub struct CreateCommand {
    pub args: CreateArgs,
}

#[async_trait]
impl Command for CreateCommand {
    async fn execute(&self, config: &FileConfig) -> Result<()> {
        let settings = PrSettings::resolve(config, &self.args.target);
        let target = validators::validate_pr_target(&settings)?;
        let client = settings.client(self.args.target.debug)?;

        println!(
            "Creating PR: {} ({} -> {})",
            self.args.title, self.args.head, self.args.base
        );
        let pr = client
            .create_pull_request(PullRequestParams {
                owner: target.owner,
                repo: target.repo,
                title: &self.args.title,
                head: &self.args.head,
                base: &self.args.base,
                body: self.args.body.as_deref(),
                draft: self.args.draft,
                labels: &self.args.labels,
            })
            .await?;

        println!("{}", "✓ Pull request created successfully".green());
        println!("  PR #{}: {}", pr.number, pr.html_url);
        println!("  State: {}", pr.state);
        if pr.draft {
            println!("  Draft: yes");
        }
        Ok(())
    }
}
