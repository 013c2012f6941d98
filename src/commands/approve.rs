//! `ghpr approve` - approve a pull request

use anyhow::Result;
use async_trait::async_trait;
use clap::Args;
use colored::Colorize;
use ghcli_github::ReviewEvent;

use super::base::{Command, PrSettings, PrTargetArgs};
use super::validators;
use crate::config::FileConfig;

/// Arguments for the `approve` subcommand
#[derive(Debug, Args)]
pub struct ApproveArgs {
    #[command(flatten)]
    pub target: PrTargetArgs,

    /// Pull request number
    #[arg(long)]
    pub pr_number: u64,

    /// Optional approval comment
    #[arg(long)]
    pub comment: Option<String>,
}

/// Pull request approval command
pub struct ApproveCommand {
    pub args: ApproveArgs,
}

#[async_trait]
impl Command for ApproveCommand {
    async fn execute(&self, config: &FileConfig) -> Result<()> {
        let settings = PrSettings::resolve(config, &self.args.target);
        let target = validators::validate_pr_target(&settings)?;
        let client = settings.client(self.args.target.debug)?;

        println!(
            "Approving PR #{} in {}/{}...",
            self.args.pr_number, target.owner, target.repo
        );
        let review = client
            .submit_review(
                target.owner,
                target.repo,
                self.args.pr_number,
                ReviewEvent::Approve,
                self.args.comment.as_deref(),
            )
            .await?;

        println!("{}", "✓ Pull request approved successfully".green());
        println!("  Review ID: {}", review.id);
        println!("  Review URL: {}", review.html_url);
        println!("  State: {}", review.state);
        Ok(())
    }
}
