//! Search API operations
//!
//! Repository, code, and commit search with page-by-page fetching. A page
//! that fails (transport error or HTTP error status) stops pagination with
//! a warning; the items gathered so far are still returned so callers can
//! report partial results.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use crate::client::{GitHubClient, SEARCH_ACCEPT, truncate_body};
use crate::debug;
use crate::types::{CodeItem, CommitItem, RepoItem, SearchPage, SearchResults};

/// GitHub caps search results at 1000 items across all pages
pub const MAX_SEARCH_RESULTS: usize = 1000;

/// Qualifiers appended to a code search query
#[derive(Debug, Clone, Default)]
pub struct CodeSearchParams {
    pub repo: Option<String>,
    pub language: Option<String>,
    pub path: Option<String>,
}

/// Qualifiers appended to a commit search query
#[derive(Debug, Clone, Default)]
pub struct CommitSearchParams {
    pub repo: Option<String>,
    pub author: Option<String>,
    pub committer: Option<String>,
}

impl GitHubClient {
    /// Search repositories matching `query`
    pub async fn search_repositories(
        &self,
        query: &str,
        per_page: u32,
        max_pages: u32,
    ) -> Result<SearchResults<RepoItem>> {
        self.search_paginated("repositories", query.to_string(), per_page, max_pages)
            .await
    }

    /// Search code matching `query`, narrowed by the given qualifiers
    pub async fn search_code(
        &self,
        query: &str,
        params: &CodeSearchParams,
        per_page: u32,
        max_pages: u32,
    ) -> Result<SearchResults<CodeItem>> {
        let mut query = query.to_string();
        if let Some(repo) = &params.repo {
            query.push_str(&format!(" repo:{repo}"));
        }
        if let Some(language) = &params.language {
            query.push_str(&format!(" language:{language}"));
        }
        if let Some(path) = &params.path {
            query.push_str(&format!(" path:{path}"));
        }
        self.search_paginated("code", query, per_page, max_pages)
            .await
    }

    /// Search commits matching `query`, narrowed by the given qualifiers
    pub async fn search_commits(
        &self,
        query: &str,
        params: &CommitSearchParams,
        per_page: u32,
        max_pages: u32,
    ) -> Result<SearchResults<CommitItem>> {
        let mut query = query.to_string();
        if let Some(repo) = &params.repo {
            query.push_str(&format!(" repo:{repo}"));
        }
        if let Some(author) = &params.author {
            query.push_str(&format!(" author:{author}"));
        }
        if let Some(committer) = &params.committer {
            query.push_str(&format!(" committer:{committer}"));
        }
        self.search_paginated("commits", query, per_page, max_pages)
            .await
    }

    async fn search_paginated<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: String,
        per_page: u32,
        max_pages: u32,
    ) -> Result<SearchResults<T>> {
        let base_url = self.endpoint(&format!("/search/{endpoint}"));
        let mut items: Vec<T> = Vec::new();
        let mut total_count: Option<u64> = None;
        let mut incomplete_results = false;

        for page in 1..=max_pages.max(1) {
            let url = reqwest::Url::parse_with_params(
                &base_url,
                &[
                    ("q", query.as_str()),
                    ("per_page", &per_page.to_string()),
                    ("page", &page.to_string()),
                ],
            )
            .with_context(|| format!("Invalid search URL: {base_url}"))?;

            if self.debug && page == 1 {
                debug::print_request(
                    "GET",
                    url.as_str(),
                    &self.request_headers(SEARCH_ACCEPT),
                    None,
                );
            }

            let response = match self.get(url.as_str(), SEARCH_ACCEPT).send().await {
                Ok(response) => response,
                Err(err) => {
                    eprintln!("warning: search request failed: {err}");
                    break;
                }
            };

            if !response.status().is_success() {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                eprintln!(
                    "warning: search returned HTTP {}: {}",
                    status.as_u16(),
                    truncate_body(&body, 500)
                );
                break;
            }

            let has_next = has_next_page(response.headers());
            let page_data: SearchPage<T> = match response.json().await {
                Ok(page_data) => page_data,
                Err(err) => {
                    eprintln!("warning: could not decode search response: {err}");
                    break;
                }
            };

            if total_count.is_none() {
                total_count = page_data.total_count;
                incomplete_results = page_data.incomplete_results;
            }
            if page_data.items.is_empty() {
                break;
            }
            items.extend(page_data.items);
            if items.len() >= MAX_SEARCH_RESULTS || !has_next {
                break;
            }
        }

        items.truncate(MAX_SEARCH_RESULTS);
        Ok(SearchResults {
            total_count: total_count.unwrap_or(items.len() as u64),
            incomplete_results,
            query,
            items,
        })
    }
}

/// Whether the RFC 5988 `Link` header advertises another page
fn has_next_page(headers: &reqwest::header::HeaderMap) -> bool {
    headers
        .get(reqwest::header::LINK)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|link| {
            link.split(',')
                .any(|part| part.contains("rel=\"next\""))
        })
}
