//! Centralized validation for command arguments
//!
//! Everything here runs before any network request, so bad flag or config
//! values fail fast with a clear message.

use anyhow::{Result, bail};

use super::base::PrSettings;

/// Sort keys accepted by `ghsearch repos`
pub const VALID_SORT_KEYS: &[&str] = &["stars", "forks", "updated", "created"];

/// Validated owner/repo/token triple for a PR operation
#[derive(Debug, Clone, Copy)]
pub struct PrTarget<'a> {
    pub owner: &'a str,
    pub repo: &'a str,
    pub token: &'a str,
}

/// Validate sort options coming from flags or the config file
pub fn validate_sort_options(sort_by: Option<&str>, sort_direction: &str) -> Result<()> {
    if let Some(key) = sort_by
        && !VALID_SORT_KEYS.contains(&key)
    {
        bail!("sort-by must be one of: stars, forks, updated, created");
    }
    if !matches!(
        sort_direction.to_ascii_lowercase().as_str(),
        "asc" | "desc"
    ) {
        bail!("sort-direction must be 'asc' or 'desc'");
    }
    Ok(())
}

/// Validate the `--type` of a PR comment
pub fn validate_comment_type(comment_type: &str) -> Result<()> {
    if !matches!(comment_type, "review" | "issue") {
        bail!("--type must be 'review' or 'issue'");
    }
    Ok(())
}

/// Owner, repo and token must all be present for PR operations
pub fn validate_pr_target(settings: &PrSettings) -> Result<PrTarget<'_>> {
    let (Some(owner), Some(repo)) = (settings.owner.as_deref(), settings.repo.as_deref()) else {
        bail!(
            "--owner and --repo are required (flags, config file, or \
             GHE_PROJECT/GHE_REPO_NAME environment variables)"
        );
    };
    let Some(token) = settings.token.as_deref() else {
        bail!(
            "GitHub token is required. Use --token, the config file, or \
             GHPR_TOKEN/GHE_TOKEN/GITHUB_TOKEN."
        );
    };
    Ok(PrTarget { owner, repo, token })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(
        owner: Option<&str>,
        repo: Option<&str>,
        token: Option<&str>,
    ) -> PrSettings {
        PrSettings {
            api_base: "https://api.github.com".to_string(),
            token: token.map(String::from),
            owner: owner.map(String::from),
            repo: repo.map(String::from),
            proxy: None,
            verify_tls: true,
        }
    }

    #[test]
    fn test_valid_sort_options() {
        assert!(validate_sort_options(None, "desc").is_ok());
        assert!(validate_sort_options(Some("stars"), "asc").is_ok());
        assert!(validate_sort_options(Some("updated"), "DESC").is_ok());
    }

    #[test]
    fn test_invalid_sort_key() {
        let err = validate_sort_options(Some("watchers"), "desc").unwrap_err();
        assert!(err.to_string().contains("sort-by must be one of"));
    }

    #[test]
    fn test_invalid_sort_direction() {
        let err = validate_sort_options(Some("stars"), "sideways").unwrap_err();
        assert!(err.to_string().contains("sort-direction"));
    }

    #[test]
    fn test_comment_type_validation() {
        assert!(validate_comment_type("review").is_ok());
        assert!(validate_comment_type("issue").is_ok());
        assert!(validate_comment_type("inline").is_err());
    }

    #[test]
    fn test_pr_target_complete() {
        let settings = settings(Some("owner"), Some("repo"), Some("token"));
        let target = validate_pr_target(&settings).unwrap();
        assert_eq!(target.owner, "owner");
        assert_eq!(target.repo, "repo");
        assert_eq!(target.token, "token");
    }

    #[test]
    fn test_pr_target_missing_owner() {
        let err = validate_pr_target(&settings(None, Some("repo"), Some("t"))).unwrap_err();
        assert!(err.to_string().contains("--owner and --repo are required"));
    }

    #[test]
    fn test_pr_target_missing_token() {
        let err = validate_pr_target(&settings(Some("o"), Some("r"), None)).unwrap_err();
        assert!(err.to_string().contains("token is required"));
    }
}
