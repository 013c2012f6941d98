//! GitHub API client library
//!
//! This library provides the shared interface the `ghsearch` and `ghpr`
//! binaries use to talk to GitHub and GitHub Enterprise: a configurable
//! HTTP client, the Search API (repositories, code, commits) with
//! pagination, and pull request operations (create, review, comment).
//!
//! ## Modules
//!
//! - [`client`]: Core client with connection options (API base, token,
//!   proxy, TLS verification)
//! - [`auth`]: Authentication handling and header generation
//! - [`search`]: Paginated Search API operations
//! - [`pull_requests`]: Pull request creation, reviews, and comments
//! - [`types`]: Data structures for API payloads

mod auth;
mod client;
mod debug;
mod pull_requests;
mod search;
mod types;

// Re-export public API
pub use auth::GitHubAuth;
pub use client::{
    API_VERSION, ClientOptions, DEFAULT_API_BASE, GitHubClient, PULLS_ACCEPT, SEARCH_ACCEPT,
};
pub use pull_requests::{PullRequestParams, ReviewEvent};
pub use search::{CodeSearchParams, CommitSearchParams, MAX_SEARCH_RESULTS};
pub use types::{
    CodeItem, CommitDetail, CommitItem, GitActor, IssueComment, License, PullRequest, RepoItem,
    RepoRef, Review, SearchPage, SearchResults,
};
