//! GitHub client implementation
//!
//! The [`GitHubClient`] is the entry point for all API operations. It is
//! built from [`ClientOptions`] so both GitHub.com and Enterprise hosts
//! work, with optional proxying and TLS verification control. Endpoint
//! groups live in sibling modules (`search`, `pull_requests`) that extend
//! the client with `impl` blocks.

use std::time::Duration;

use anyhow::{Context, Result};

use crate::auth::GitHubAuth;

/// Default API base for GitHub.com
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// API version header sent with every request
pub const API_VERSION: &str = "2022-11-28";

/// User-Agent header for API requests
pub const USER_AGENT: &str = concat!("ghcli/", env!("CARGO_PKG_VERSION"));

/// Accept header for search endpoints. The mercy preview exposes repository
/// topics; the cloak preview enables commit search.
pub const SEARCH_ACCEPT: &str =
    "application/vnd.github.mercy-preview+json, application/vnd.github.cloak-preview+json";

/// Accept header for pull request and issue endpoints
pub const PULLS_ACCEPT: &str = "application/vnd.github+json";

/// Connection settings for a [`GitHubClient`]
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub api_base: String,
    pub token: Option<String>,
    pub proxy: Option<String>,
    pub verify_tls: bool,
    pub timeout: Duration,
    pub debug: bool,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            token: None,
            proxy: None,
            verify_tls: true,
            timeout: Duration::from_secs(10),
            debug: false,
        }
    }
}

impl ClientOptions {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            ..Default::default()
        }
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    pub fn with_proxy(mut self, proxy: Option<String>) -> Self {
        self.proxy = proxy;
        self
    }

    pub fn with_verify_tls(mut self, verify_tls: bool) -> Self {
        self.verify_tls = verify_tls;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// GitHub API client for making authenticated requests
pub struct GitHubClient {
    pub(crate) http: reqwest::Client,
    pub(crate) api_base: String,
    pub(crate) auth: Option<GitHubAuth>,
    pub(crate) debug: bool,
}

impl GitHubClient {
    /// Create a new client from connection options
    ///
    /// # Errors
    /// Returns an error when the proxy address is invalid or the underlying
    /// HTTP client cannot be constructed.
    pub fn new(options: ClientOptions) -> Result<Self> {
        let mut builder = reqwest::Client::builder().timeout(options.timeout);
        if !options.verify_tls {
            builder = builder.danger_accept_invalid_certs(true);
        }
        if let Some(proxy) = &options.proxy {
            let proxy = reqwest::Proxy::all(proxy)
                .with_context(|| format!("Invalid proxy address: {proxy}"))?;
            builder = builder.proxy(proxy);
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        let auth = options
            .token
            .filter(|token| !token.is_empty())
            .map(GitHubAuth::new);

        Ok(Self {
            http,
            api_base: options.api_base.trim_end_matches('/').to_string(),
            auth,
            debug: options.debug,
        })
    }

    /// Check if the client has authentication configured
    pub fn is_authenticated(&self) -> bool {
        self.auth.is_some()
    }

    /// Get the authentication token (if available)
    pub fn token(&self) -> Option<&str> {
        self.auth.as_ref().map(|auth| auth.token())
    }

    /// The API base URL this client targets, without a trailing slash
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    pub(crate) fn get(&self, url: &str, accept: &str) -> reqwest::RequestBuilder {
        self.apply_headers(self.http.get(url), accept)
    }

    pub(crate) fn post(&self, url: &str) -> reqwest::RequestBuilder {
        self.apply_headers(self.http.post(url), PULLS_ACCEPT)
    }

    fn apply_headers(
        &self,
        request: reqwest::RequestBuilder,
        accept: &str,
    ) -> reqwest::RequestBuilder {
        let mut request = request
            .header("Accept", accept)
            .header("User-Agent", USER_AGENT)
            .header("X-GitHub-Api-Version", API_VERSION);
        if let Some(auth) = &self.auth {
            request = request.header("Authorization", auth.auth_header());
        }
        request
    }

    /// Header list as sent on the wire, for debug output
    pub(crate) fn request_headers(&self, accept: &str) -> Vec<(String, String)> {
        let mut headers = vec![
            ("Accept".to_string(), accept.to_string()),
            ("User-Agent".to_string(), USER_AGENT.to_string()),
            ("X-GitHub-Api-Version".to_string(), API_VERSION.to_string()),
        ];
        if let Some(auth) = &self.auth {
            headers.push(("Authorization".to_string(), auth.auth_header()));
        }
        headers
    }
}

/// Truncate an error body on a char boundary so messages stay readable
pub(crate) fn truncate_body(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
