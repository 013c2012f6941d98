//! Authentication handling and token management

use anyhow::Result;

/// Holds a GitHub token and renders the Authorization header value.
#[derive(Debug, Clone)]
pub struct GitHubAuth {
    token: String,
}

impl GitHubAuth {
    pub fn new(token: String) -> Self {
        Self { token }
    }

    /// Get the raw token
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Render the `Authorization` header value
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.token)
    }

    /// Check that a usable token is present
    pub fn validate_token(&self) -> Result<()> {
        if self.token.is_empty() {
            anyhow::bail!("GitHub token is required but empty");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_header_format() {
        let auth = GitHubAuth::new("ghp_test_token_1234567890".to_string());
        assert_eq!(auth.auth_header(), "Bearer ghp_test_token_1234567890");
    }

    #[test]
    fn test_token_accessor() {
        let auth = GitHubAuth::new("ghp_another_token".to_string());
        assert_eq!(auth.token(), "ghp_another_token");
    }

    #[test]
    fn test_validate_token_success() {
        let auth = GitHubAuth::new("ghp_valid".to_string());
        assert!(auth.validate_token().is_ok());
    }

    #[test]
    fn test_validate_token_empty_failure() {
        let auth = GitHubAuth::new(String::new());
        let err = auth.validate_token().unwrap_err();
        assert!(err.to_string().contains("GitHub token is required"));
    }
}
