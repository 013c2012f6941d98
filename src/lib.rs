//! ghcli - GitHub search and pull request CLI tools
//!
//! Two binaries share this library: `ghsearch` runs Search API queries
//! (repositories, code, commits) and prints YAML reports, `ghpr` creates,
//! approves, and comments on pull requests. Credentials and endpoints come
//! from layered sources with a fixed precedence: CLI flag, config file,
//! environment, built-in default.

pub mod auth;
pub mod commands;
pub mod config;
pub mod constants;
pub mod report;

pub type Result<T> = anyhow::Result<T>;

// Re-export commonly used types
pub use commands::Command;
pub use config::FileConfig;
