//! Report pipeline integration tests
//!
//! Raw search items flow through simplification, filtering, sorting, and
//! grouping into the YAML report structure. These tests drive the pipeline
//! with realistic API payloads and assert on the rendered YAML.

use ghcli::report::{
    CommitsFilters, apply_filters, apply_sorting, build_commits_report, build_repos_report,
    simplify_commit_results, simplify_repos,
};
use ghcli_github::{CommitItem, RepoItem};
use serde_json::json;

fn repo_items() -> Vec<RepoItem> {
    serde_json::from_value(json!([
        {
            "full_name": "octo/big",
            "html_url": "https://github.com/octo/big",
            "stargazers_count": 500,
            "forks_count": 40,
            "language": "Rust",
            "topics": ["cli", "tools"],
            "license": {"key": "mit", "name": "MIT License", "spdx_id": "MIT"}
        },
        {
            "full_name": "octo/small",
            "html_url": "https://github.com/octo/small",
            "stargazers_count": 3,
            "forks_count": 0,
            "language": "Python"
        },
        {
            "full_name": "octo/medium",
            "html_url": "https://github.com/octo/medium",
            "stargazers_count": 80,
            "forks_count": 12,
            "language": "Rust"
        },
        {
            "full_name": "octo/odd",
            "html_url": "https://github.com/octo/odd",
            "stargazers_count": 100
        }
    ]))
    .unwrap()
}

#[test]
fn test_repos_pipeline_filter_sort_report() {
    let simplified = simplify_repos(repo_items());
    assert_eq!(simplified.len(), 4);
    assert_eq!(
        simplified[0].license.as_ref().unwrap().spdx_id.as_deref(),
        Some("MIT")
    );

    let filtered = apply_filters(simplified, Some(50), Some("rust"));
    assert_eq!(filtered.len(), 2);

    let sorted = apply_sorting(filtered, Some("stars"), "asc");
    assert_eq!(sorted[0].full_name, "octo/medium");
    assert_eq!(sorted[1].full_name, "octo/big");

    let report = build_repos_report(
        "topic:cli".to_string(),
        "https://api.github.com".to_string(),
        4,
        false,
        sorted,
        false,
        None,
        Some(50),
        Some("rust".to_string()),
        Some("stars".to_string()),
        "asc".to_string(),
    );

    let yaml = serde_yaml::to_string(&report).unwrap();
    assert!(yaml.contains("query: topic:cli"));
    assert!(yaml.contains("returned: 2"));
    assert!(yaml.contains("repositories:"));
    assert!(!yaml.contains("groups:"));
    // Top-level metadata precedes the item list
    assert!(yaml.find("total_count:").unwrap() < yaml.find("repositories:").unwrap());
}

#[test]
fn test_repos_grouped_report_has_null_key() {
    let simplified = simplify_repos(repo_items());
    let report = build_repos_report(
        "topic:cli".to_string(),
        "https://api.github.com".to_string(),
        4,
        false,
        simplified,
        true,
        None,
        None,
        None,
        None,
        "desc".to_string(),
    );

    let yaml = serde_yaml::to_string(&report).unwrap();
    assert!(yaml.contains("groups:"));
    assert!(!yaml.contains("repositories:\n"));
    assert!(yaml.contains("Rust"));
    assert!(yaml.contains("Python"));
    // octo/odd has no language and lands under the null group key
    assert!(yaml.contains("null"));
}

#[test]
fn test_commits_pipeline_stats_report() {
    let items: Vec<CommitItem> = serde_json::from_value(json!([
        {
            "sha": "a1",
            "commit": {"message": "Fix one\n\nbody"},
            "repository": {"full_name": "octo/widgets", "html_url": "https://github.com/octo/widgets"}
        },
        {
            "sha": "a2",
            "commit": {"message": "Fix two"},
            "repository": {"full_name": "octo/widgets", "html_url": "https://github.com/octo/widgets"}
        },
        {
            "sha": "b1",
            "commit": {"message": "Fix three"},
            "repository": {"full_name": "octo/gears", "html_url": "https://github.com/octo/gears"}
        }
    ]))
    .unwrap();

    let commits = simplify_commit_results(items);
    assert_eq!(commits[0].message.as_deref(), Some("Fix one"));

    let report = build_commits_report(
        "fix".to_string(),
        "https://api.github.com".to_string(),
        3,
        false,
        commits,
        CommitsFilters {
            repo: None,
            author: None,
            committer: None,
        },
        true,
    );

    let yaml = serde_yaml::to_string(&report).unwrap();
    assert!(yaml.contains("repositories:"));
    // No top-level commit list in stats mode
    assert!(!yaml.lines().any(|line| line.starts_with("commits:")));
    assert!(yaml.contains("total_number_of_commits: 2"));
    assert!(yaml.contains("octo/gears"));
}
