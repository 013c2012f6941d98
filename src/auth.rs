//! Credential and endpoint resolution
//!
//! Both binaries pick their token and API base from layered sources with a
//! fixed precedence: CLI flag, then config file, then environment
//! variables, then the built-in default. Empty values count as unset at
//! every layer.

use ghcli_github::DEFAULT_API_BASE;

use crate::constants;

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// First non-empty value among the given environment variables
pub fn first_env(keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| std::env::var(key).ok().filter(|v| !v.is_empty()))
}

/// Pick the auth token: CLI > config > the given env vars in order
pub fn resolve_auth_token(
    cli_token: Option<&str>,
    config_token: Option<&str>,
    env_keys: &[&str],
) -> Option<String> {
    if let Some(token) = non_empty(cli_token) {
        return Some(token.to_string());
    }
    if let Some(token) = non_empty(config_token) {
        return Some(token.to_string());
    }
    first_env(env_keys)
}

/// Token for ghsearch: CLI > config > GHSEARCH_TOKEN > GITHUB_TOKEN
pub fn resolve_search_token(cli_token: Option<&str>, config_token: Option<&str>) -> Option<String> {
    resolve_auth_token(cli_token, config_token, constants::search::TOKEN_ENV_VARS)
}

/// Token for ghpr: CLI > config > GHPR_TOKEN > GHE_TOKEN > GITHUB_TOKEN
pub fn resolve_pr_token(cli_token: Option<&str>, config_token: Option<&str>) -> Option<String> {
    resolve_auth_token(cli_token, config_token, constants::pr::TOKEN_ENV_VARS)
}

/// API base for ghsearch: CLI > config > GHSEARCH_API_BASE > default
pub fn resolve_search_api_base(cli_base: Option<&str>, config_base: Option<&str>) -> String {
    if let Some(base) = non_empty(cli_base) {
        return base.to_string();
    }
    if let Some(base) = non_empty(config_base) {
        return base.to_string();
    }
    first_env(&[constants::search::API_BASE_ENV_VAR])
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}

/// API base for ghpr: CLI > config > GHPR_API_BASE > GHE_URL > default
///
/// GHE_URL names the Enterprise host, not its API; it is normalized with
/// [`normalize_ghe_url`] before use.
pub fn resolve_pr_api_base(cli_base: Option<&str>, config_base: Option<&str>) -> String {
    if let Some(base) = non_empty(cli_base) {
        return base.to_string();
    }
    if let Some(base) = non_empty(config_base) {
        return base.to_string();
    }
    if let Some(base) = first_env(&[constants::pr::API_BASE_ENV_VAR]) {
        return base;
    }
    if let Some(url) = first_env(&[constants::pr::GHE_URL_ENV_VAR]) {
        return normalize_ghe_url(&url);
    }
    DEFAULT_API_BASE.to_string()
}

/// Convert an Enterprise host URL into its REST API base
pub fn normalize_ghe_url(url: &str) -> String {
    let trimmed = url.trim_end_matches('/');
    if trimmed.ends_with("/api/v3") {
        trimmed.to_string()
    } else {
        format!("{trimmed}/api/v3")
    }
}
