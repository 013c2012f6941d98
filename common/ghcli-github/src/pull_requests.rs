//! Pull request operations
//!
//! Creation, review submission (approve or comment), and issue-style
//! conversation comments. All of these mutate state and therefore require
//! an authenticated client.

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::client::{GitHubClient, PULLS_ACCEPT, truncate_body};
use crate::debug;
use crate::types::{IssueComment, PullRequest, Review};

#[derive(Serialize)]
struct CreatePullRequestPayload<'a> {
    title: &'a str,
    head: &'a str,
    base: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    draft: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    labels: Option<&'a [String]>,
}

#[derive(Serialize)]
struct ReviewPayload<'a> {
    event: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<&'a str>,
}

#[derive(Serialize)]
struct CommentPayload<'a> {
    body: &'a str,
}

/// Parameters for creating a pull request
#[derive(Debug, Clone)]
pub struct PullRequestParams<'a> {
    pub owner: &'a str,
    pub repo: &'a str,
    pub title: &'a str,
    pub head: &'a str,
    pub base: &'a str,
    pub body: Option<&'a str>,
    pub draft: bool,
    pub labels: &'a [String],
}

/// Review action submitted to the reviews endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewEvent {
    Approve,
    Comment,
}

impl ReviewEvent {
    fn as_api_str(self) -> &'static str {
        match self {
            ReviewEvent::Approve => "APPROVE",
            ReviewEvent::Comment => "COMMENT",
        }
    }
}

impl GitHubClient {
    /// Create a pull request
    ///
    /// # Errors
    /// Returns an error when no token is configured, the API rejects the
    /// request, or the response cannot be parsed.
    pub async fn create_pull_request(&self, params: PullRequestParams<'_>) -> Result<PullRequest> {
        self.require_auth("creating pull requests")?;
        let url = self.endpoint(&format!("/repos/{}/{}/pulls", params.owner, params.repo));
        let payload = CreatePullRequestPayload {
            title: params.title,
            head: params.head,
            base: params.base,
            body: params.body,
            draft: if params.draft { Some(true) } else { None },
            labels: if params.labels.is_empty() {
                None
            } else {
                Some(params.labels)
            },
        };
        self.post_json(&url, &payload, "Failed to create pull request")
            .await
    }

    /// Submit a review on a pull request (approval or review comment)
    pub async fn submit_review(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
        event: ReviewEvent,
        body: Option<&str>,
    ) -> Result<Review> {
        self.require_auth("reviewing pull requests")?;
        let url = self.endpoint(&format!("/repos/{owner}/{repo}/pulls/{pr_number}/reviews"));
        let payload = ReviewPayload {
            event: event.as_api_str(),
            body,
        };
        self.post_json(&url, &payload, "Failed to submit review").await
    }

    /// Add an issue-style conversation comment to a pull request
    pub async fn create_issue_comment(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
        body: &str,
    ) -> Result<IssueComment> {
        self.require_auth("commenting on pull requests")?;
        let url = self.endpoint(&format!("/repos/{owner}/{repo}/issues/{pr_number}/comments"));
        self.post_json(&url, &CommentPayload { body }, "Failed to create comment")
            .await
    }

    fn require_auth(&self, action: &str) -> Result<()> {
        if self.auth.is_none() {
            anyhow::bail!("GitHub token is required for {action}");
        }
        Ok(())
    }

    async fn post_json<P: Serialize, T: DeserializeOwned>(
        &self,
        url: &str,
        payload: &P,
        error_context: &str,
    ) -> Result<T> {
        if self.debug {
            let body = serde_json::to_value(payload).ok();
            debug::print_request("POST", url, &self.request_headers(PULLS_ACCEPT), body.as_ref());
        }

        let response = self
            .post(url)
            .json(payload)
            .send()
            .await
            .with_context(|| format!("{error_context}: request to {url} failed"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!(
                "{error_context} ({} {}): {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown"),
                truncate_body(&body, 500)
            );
        }

        response
            .json()
            .await
            .with_context(|| format!("{error_context}: invalid response body"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClientOptions;

    #[test]
    fn test_review_event_api_strings() {
        assert_eq!(ReviewEvent::Approve.as_api_str(), "APPROVE");
        assert_eq!(ReviewEvent::Comment.as_api_str(), "COMMENT");
    }

    #[test]
    fn test_create_payload_skips_empty_options() {
        let payload = CreatePullRequestPayload {
            title: "Fix",
            head: "feature",
            base: "main",
            body: None,
            draft: None,
            labels: None,
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert!(!json.contains("body"));
        assert!(!json.contains("draft"));
        assert!(!json.contains("labels"));
    }

    #[tokio::test]
    async fn test_mutations_require_token() {
        let client = GitHubClient::new(ClientOptions::default()).unwrap();
        let params = PullRequestParams {
            owner: "owner",
            repo: "repo",
            title: "Title",
            head: "feature",
            base: "main",
            body: None,
            draft: false,
            labels: &[],
        };
        let err = client.create_pull_request(params).await.unwrap_err();
        assert!(err.to_string().contains("token is required"));

        let err = client
            .submit_review("owner", "repo", 1, ReviewEvent::Approve, None)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("token is required"));
    }
}
