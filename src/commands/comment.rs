//! `ghpr comment` - comment on a pull request
//!
//! Review comments go through the reviews endpoint with a COMMENT event;
//! issue comments land in the conversation thread via the issues endpoint.

use anyhow::Result;
use async_trait::async_trait;
use clap::Args;
use colored::Colorize;
use ghcli_github::ReviewEvent;

use super::base::{Command, PrSettings, PrTargetArgs};
use super::validators;
use crate::config::FileConfig;

/// Arguments for the `comment` subcommand
#[derive(Debug, Args)]
pub struct CommentArgs {
    #[command(flatten)]
    pub target: PrTargetArgs,

    /// Pull request number
    #[arg(long)]
    pub pr_number: u64,

    /// Comment text
    #[arg(long)]
    pub comment: String,

    /// Comment type: 'review' or 'issue'
    #[arg(long = "type", default_value = "review")]
    pub comment_type: String,
}

/// Pull request comment command
pub struct CommentCommand {
    pub args: CommentArgs,
}

#[async_trait]
impl Command for CommentCommand {
    async fn execute(&self, config: &FileConfig) -> Result<()> {
        let settings = PrSettings::resolve(config, &self.args.target);
        validators::validate_comment_type(&self.args.comment_type)?;
        let target = validators::validate_pr_target(&settings)?;
        let client = settings.client(self.args.target.debug)?;

        let label = if self.args.comment_type == "review" {
            "review comment"
        } else {
            "comment"
        };
        println!(
            "Adding {label} to PR #{} in {}/{}...",
            self.args.pr_number, target.owner, target.repo
        );

        let (id, url) = if self.args.comment_type == "review" {
            let review = client
                .submit_review(
                    target.owner,
                    target.repo,
                    self.args.pr_number,
                    ReviewEvent::Comment,
                    Some(&self.args.comment),
                )
                .await?;
            (review.id, review.html_url)
        } else {
            let comment = client
                .create_issue_comment(
                    target.owner,
                    target.repo,
                    self.args.pr_number,
                    &self.args.comment,
                )
                .await?;
            (comment.id, comment.html_url)
        };

        println!("{}", format!("✓ {label} added successfully").green());
        println!("  ID: {id}");
        println!("  URL: {url}");
        Ok(())
    }
}
