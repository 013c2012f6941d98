//! Data structures for GitHub API payloads
//!
//! Deserialization is tolerant: search item fields the API may omit are
//! optional or defaulted, unknown fields are ignored.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One page of a Search API response
#[derive(Debug, Deserialize)]
pub struct SearchPage<T> {
    pub total_count: Option<u64>,
    #[serde(default)]
    pub incomplete_results: bool,
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

/// Search results accumulated across pages
#[derive(Debug)]
pub struct SearchResults<T> {
    /// The query actually sent, including any appended qualifiers
    pub query: String,
    pub total_count: u64,
    pub incomplete_results: bool,
    pub items: Vec<T>,
}

/// Repository license as returned by the search API
#[derive(Debug, Clone, Deserialize)]
pub struct License {
    pub key: Option<String>,
    pub name: Option<String>,
    pub spdx_id: Option<String>,
}

/// An item from `/search/repositories`
#[derive(Debug, Clone, Deserialize)]
pub struct RepoItem {
    pub full_name: String,
    pub html_url: String,
    pub description: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub watchers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    pub language: Option<String>,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub topics: Vec<String>,
    pub license: Option<License>,
    pub default_branch: Option<String>,
    pub pushed_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub score: Option<f64>,
}

/// The repository a code or commit search item belongs to
#[derive(Debug, Clone, Deserialize)]
pub struct RepoRef {
    pub full_name: Option<String>,
    pub html_url: Option<String>,
}

/// An item from `/search/code`
#[derive(Debug, Clone, Deserialize)]
pub struct CodeItem {
    pub name: Option<String>,
    pub path: Option<String>,
    pub sha: Option<String>,
    pub html_url: Option<String>,
    pub repository: Option<RepoRef>,
}

/// Author or committer signature inside a commit
#[derive(Debug, Clone, Deserialize)]
pub struct GitActor {
    pub name: Option<String>,
    pub email: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

/// The `commit` object nested in a commit search item
#[derive(Debug, Clone, Deserialize)]
pub struct CommitDetail {
    pub message: Option<String>,
    pub author: Option<GitActor>,
    pub committer: Option<GitActor>,
}

/// An item from `/search/commits`
#[derive(Debug, Clone, Deserialize)]
pub struct CommitItem {
    pub sha: Option<String>,
    pub html_url: Option<String>,
    pub url: Option<String>,
    pub commit: Option<CommitDetail>,
    pub repository: Option<RepoRef>,
    pub score: Option<f64>,
}

/// A created pull request
#[derive(Debug, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    pub html_url: String,
    pub state: String,
    #[serde(default)]
    pub draft: bool,
}

/// A submitted pull request review
#[derive(Debug, Deserialize)]
pub struct Review {
    pub id: u64,
    pub html_url: String,
    pub state: String,
}

/// An issue-style conversation comment
#[derive(Debug, Deserialize)]
pub struct IssueComment {
    pub id: u64,
    pub html_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_item_tolerates_missing_fields() {
        let item: RepoItem = serde_json::from_str(
            r#"{"full_name": "owner/repo", "html_url": "https://github.com/owner/repo"}"#,
        )
        .unwrap();
        assert_eq!(item.full_name, "owner/repo");
        assert_eq!(item.stargazers_count, 0);
        assert!(item.topics.is_empty());
        assert!(item.license.is_none());
        assert!(item.pushed_at.is_none());
    }

    #[test]
    fn test_repo_item_parses_dates_and_license() {
        let item: RepoItem = serde_json::from_str(
            r#"{
                "full_name": "owner/repo",
                "html_url": "https://github.com/owner/repo",
                "stargazers_count": 42,
                "license": {"key": "mit", "name": "MIT License", "spdx_id": "MIT"},
                "updated_at": "2023-01-01T00:00:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(item.stargazers_count, 42);
        assert_eq!(item.license.unwrap().key.as_deref(), Some("mit"));
        assert_eq!(item.updated_at.unwrap().to_rfc3339(), "2023-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_search_page_defaults() {
        let page: SearchPage<RepoItem> = serde_json::from_str("{}").unwrap();
        assert!(page.total_count.is_none());
        assert!(!page.incomplete_results);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_commit_item_nested_signature() {
        let item: CommitItem = serde_json::from_str(
            r#"{
                "sha": "abc123",
                "commit": {
                    "message": "Fix bug\n\nDetails here",
                    "author": {"name": "Jane", "email": "jane@example.com", "date": "2023-05-01T12:00:00Z"}
                },
                "repository": {"full_name": "owner/repo", "html_url": "https://github.com/owner/repo"}
            }"#,
        )
        .unwrap();
        let commit = item.commit.unwrap();
        assert!(commit.message.unwrap().starts_with("Fix bug"));
        assert_eq!(commit.author.unwrap().name.as_deref(), Some("Jane"));
    }
}
