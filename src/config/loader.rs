//! Configuration file loading
//!
//! Both binaries read an optional YAML (or JSON) file with one section per
//! subcommand family. A missing or unparseable file never aborts the run:
//! a warning goes to stderr and defaults apply, so the config file stays a
//! convenience rather than a requirement.

use std::path::PathBuf;

use colored::Colorize;
use serde::Deserialize;

/// Raw on-disk configuration shared by both binaries
///
/// All fields are optional; unknown keys are ignored so one file can serve
/// both tools.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub repos: ReposSection,
    #[serde(default)]
    pub code: CodeSection,
    #[serde(default)]
    pub commits: CommitsSection,
    #[serde(default)]
    pub ghpr: PrSection,
}

/// `repos:` section for `ghsearch repos`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReposSection {
    pub api_base: Option<String>,
    pub token: Option<String>,
    pub query: Option<String>,
    pub per_page: Option<u32>,
    pub max_pages: Option<u32>,
    pub min_stars: Option<u64>,
    pub language: Option<String>,
    pub sort_by: Option<String>,
    pub sort_direction: Option<String>,
    pub group_by_language: Option<bool>,
    pub top_n: Option<usize>,
    pub verify_tls: Option<bool>,
}

/// `code:` section for `ghsearch code`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CodeSection {
    pub api_base: Option<String>,
    pub token: Option<String>,
    pub query: Option<String>,
    pub per_page: Option<u32>,
    pub max_pages: Option<u32>,
    pub repo: Option<String>,
    pub language: Option<String>,
    pub path: Option<String>,
    pub verify_tls: Option<bool>,
}

/// `commits:` section for `ghsearch commits`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommitsSection {
    pub api_base: Option<String>,
    pub token: Option<String>,
    pub query: Option<String>,
    pub per_page: Option<u32>,
    pub max_pages: Option<u32>,
    pub repo: Option<String>,
    pub author: Option<String>,
    pub committer: Option<String>,
    pub stats: Option<bool>,
    pub verify_tls: Option<bool>,
}

/// `ghpr:` section for the pull request CLI
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PrSection {
    pub api_base: Option<String>,
    pub token: Option<String>,
    pub owner: Option<String>,
    pub repo: Option<String>,
    pub proxy: Option<String>,
    pub verify_tls: Option<bool>,
}

impl FileConfig {
    /// Load a config file, falling back to defaults when it is missing or
    /// unparseable
    ///
    /// With no explicit path, `default_file_name` is looked up in the home
    /// directory and its absence is silent. An explicit path that does not
    /// exist gets a warning.
    pub fn load(explicit_path: Option<&str>, default_file_name: &str) -> Self {
        let path = match explicit_path {
            Some(path) => expand_home(path),
            None => match dirs::home_dir() {
                Some(home) => home.join(default_file_name),
                None => return Self::default(),
            },
        };

        if !path.exists() {
            if explicit_path.is_some() {
                eprintln!(
                    "{}",
                    format!("Config file not found: {}", path.display()).yellow()
                );
            }
            return Self::default();
        }

        let data = match std::fs::read_to_string(&path) {
            Ok(data) => data,
            Err(err) => {
                eprintln!(
                    "{}",
                    format!("Could not read config file {}: {err}", path.display()).yellow()
                );
                return Self::default();
            }
        };
        if data.trim().is_empty() {
            return Self::default();
        }

        Self::parse(&data).unwrap_or_else(|| {
            eprintln!(
                "{}",
                format!("Failed to parse config file: {}", path.display()).yellow()
            );
            Self::default()
        })
    }

    /// Parse YAML first, JSON as a fallback
    fn parse(data: &str) -> Option<Self> {
        serde_yaml::from_str(data)
            .ok()
            .or_else(|| serde_json::from_str(data).ok())
    }
}

fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}
