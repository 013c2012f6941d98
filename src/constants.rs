//! Central constants for the ghsearch and ghpr binaries

/// Defaults and environment variables for the search CLI
pub mod search {
    /// Token environment variables consulted after the CLI flag and config
    /// file, in order
    pub const TOKEN_ENV_VARS: &[&str] = &["GHSEARCH_TOKEN", "GITHUB_TOKEN"];

    /// API base override environment variable
    pub const API_BASE_ENV_VAR: &str = "GHSEARCH_API_BASE";

    /// Config file looked up in the home directory when --config is absent
    pub const DEFAULT_CONFIG_FILE: &str = ".ghsearch.yml";

    /// Default repository search query
    pub const DEFAULT_REPOS_QUERY: &str = "topic:astro topic:template";

    /// Default code search query
    pub const DEFAULT_CODE_QUERY: &str = "test";

    /// Default commit search query
    pub const DEFAULT_COMMITS_QUERY: &str = "fix";

    /// Default results per page (API maximum is 100)
    pub const DEFAULT_PER_PAGE: u32 = 50;

    /// Default number of pages fetched per search
    pub const DEFAULT_MAX_PAGES: u32 = 3;

    /// Default sort direction for repository reports
    pub const DEFAULT_SORT_DIRECTION: &str = "desc";
}

/// Defaults and environment variables for the pull request CLI
pub mod pr {
    /// Token environment variables consulted after the CLI flag and config
    /// file, in order
    pub const TOKEN_ENV_VARS: &[&str] = &["GHPR_TOKEN", "GHE_TOKEN", "GITHUB_TOKEN"];

    /// API base override environment variable
    pub const API_BASE_ENV_VAR: &str = "GHPR_API_BASE";

    /// Enterprise host URL; converted to an API base by appending /api/v3
    pub const GHE_URL_ENV_VAR: &str = "GHE_URL";

    /// Fallback repository owner
    pub const OWNER_ENV_VAR: &str = "GHE_PROJECT";

    /// Fallback repository name
    pub const REPO_ENV_VAR: &str = "GHE_REPO_NAME";

    /// Config file looked up in the home directory when --config is absent
    pub const DEFAULT_CONFIG_FILE: &str = ".ghpr.yml";

    /// Default base branch for new pull requests
    pub const DEFAULT_BASE_BRANCH: &str = "main";
}
