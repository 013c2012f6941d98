//! Search result post-processing and report rendering
//!
//! Raw search items are trimmed down to the fields worth reporting, run
//! through client-side filters and sorting, and wrapped in report structs
//! that serialize to the YAML printed on stdout. Field order in the YAML
//! follows struct declaration order.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use ghcli_github::{CodeItem, CommitItem, RepoItem};
use serde::Serialize;

use crate::Result;

/// License subset carried into reports
#[derive(Debug, Clone, Serialize)]
pub struct LicenseSummary {
    pub key: Option<String>,
    pub name: Option<String>,
    pub spdx_id: Option<String>,
}

/// Trimmed repository record exposed in reports
#[derive(Debug, Clone, Serialize)]
pub struct RepoSummary {
    pub full_name: String,
    pub html_url: String,
    pub description: Option<String>,
    pub stars: u64,
    pub watchers: u64,
    pub forks: u64,
    pub language: Option<String>,
    pub archived: bool,
    pub fork: bool,
    pub topics: Vec<String>,
    pub license: Option<LicenseSummary>,
    pub default_branch: Option<String>,
    pub pushed_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub score: Option<f64>,
}

/// Trimmed code search record
#[derive(Debug, Clone, Serialize)]
pub struct CodeSummary {
    pub name: Option<String>,
    pub path: Option<String>,
    pub sha: Option<String>,
    pub html_url: Option<String>,
    pub repository_full_name: Option<String>,
    pub repository_html_url: Option<String>,
}

/// Trimmed commit search record
#[derive(Debug, Clone, Serialize)]
pub struct CommitSummary {
    pub sha: Option<String>,
    pub html_url: Option<String>,
    pub url: Option<String>,
    pub message: Option<String>,
    pub author_name: Option<String>,
    pub author_email: Option<String>,
    pub author_date: Option<DateTime<Utc>>,
    pub committer_name: Option<String>,
    pub committer_email: Option<String>,
    pub committer_date: Option<DateTime<Utc>>,
    pub repository_full_name: Option<String>,
    pub repository_html_url: Option<String>,
    pub score: Option<f64>,
}

/// Per-repository commit totals for `--stats` output
#[derive(Debug, Clone, Serialize)]
pub struct RepoCommitStats {
    pub repository_full_name: String,
    pub repository_html_url: Option<String>,
    pub total_number_of_commits: u64,
}

pub fn simplify_repos(items: Vec<RepoItem>) -> Vec<RepoSummary> {
    items
        .into_iter()
        .map(|item| RepoSummary {
            full_name: item.full_name,
            html_url: item.html_url,
            description: item.description,
            stars: item.stargazers_count,
            watchers: item.watchers_count,
            forks: item.forks_count,
            language: item.language,
            archived: item.archived,
            fork: item.fork,
            topics: item.topics,
            license: item.license.map(|license| LicenseSummary {
                key: license.key,
                name: license.name,
                spdx_id: license.spdx_id,
            }),
            default_branch: item.default_branch,
            pushed_at: item.pushed_at,
            updated_at: item.updated_at,
            created_at: item.created_at,
            score: item.score,
        })
        .collect()
}

pub fn simplify_code_results(items: Vec<CodeItem>) -> Vec<CodeSummary> {
    items
        .into_iter()
        .map(|item| {
            let repository = item.repository;
            CodeSummary {
                name: item.name,
                path: item.path,
                sha: item.sha,
                html_url: item.html_url,
                repository_full_name: repository.as_ref().and_then(|r| r.full_name.clone()),
                repository_html_url: repository.and_then(|r| r.html_url),
            }
        })
        .collect()
}

pub fn simplify_commit_results(items: Vec<CommitItem>) -> Vec<CommitSummary> {
    items
        .into_iter()
        .map(|item| {
            let commit = item.commit;
            let (message, author, committer) = match commit {
                Some(commit) => (commit.message, commit.author, commit.committer),
                None => (None, None, None),
            };
            let repository = item.repository;
            CommitSummary {
                sha: item.sha,
                html_url: item.html_url,
                url: item.url,
                message: message.map(|m| first_line(&m)),
                author_name: author.as_ref().and_then(|a| a.name.clone()),
                author_email: author.as_ref().and_then(|a| a.email.clone()),
                author_date: author.and_then(|a| a.date),
                committer_name: committer.as_ref().and_then(|c| c.name.clone()),
                committer_email: committer.as_ref().and_then(|c| c.email.clone()),
                committer_date: committer.and_then(|c| c.date),
                repository_full_name: repository.as_ref().and_then(|r| r.full_name.clone()),
                repository_html_url: repository.and_then(|r| r.html_url),
                score: item.score,
            }
        })
        .collect()
}

fn first_line(message: &str) -> String {
    message.lines().next().unwrap_or_default().to_string()
}

/// Keep repositories with at least `min_stars` stars and, when set, a
/// case-insensitive matching primary language
pub fn apply_filters(
    repos: Vec<RepoSummary>,
    min_stars: Option<u64>,
    language: Option<&str>,
) -> Vec<RepoSummary> {
    repos
        .into_iter()
        .filter(|repo| min_stars.is_none_or(|min| repo.stars >= min))
        .filter(|repo| {
            language.is_none_or(|wanted| {
                repo.language
                    .as_deref()
                    .is_some_and(|lang| lang.eq_ignore_ascii_case(wanted))
            })
        })
        .collect()
}

/// Sort by the given key; without a key the API relevance order is kept
pub fn apply_sorting(
    mut repos: Vec<RepoSummary>,
    sort_by: Option<&str>,
    sort_direction: &str,
) -> Vec<RepoSummary> {
    let ascending = sort_direction.eq_ignore_ascii_case("asc");
    match sort_by {
        Some("stars") => sort_stable(&mut repos, ascending, |repo| repo.stars),
        Some("forks") => sort_stable(&mut repos, ascending, |repo| repo.forks),
        Some("updated") => sort_stable(&mut repos, ascending, |repo| repo.updated_at),
        Some("created") => sort_stable(&mut repos, ascending, |repo| repo.created_at),
        // Unknown keys are rejected by validation before this point
        _ => {}
    }
    repos
}

/// Stable sort in either direction. Descending compares reversed rather
/// than reversing the sorted list, so equal keys keep their input order.
fn sort_stable<K: Ord>(
    repos: &mut [RepoSummary],
    ascending: bool,
    key: impl Fn(&RepoSummary) -> K,
) {
    repos.sort_by(|a, b| {
        if ascending {
            key(a).cmp(&key(b))
        } else {
            key(b).cmp(&key(a))
        }
    });
}

/// Group repositories by primary language; `None` collects language-less
/// repositories and renders as a `null` YAML key
pub fn group_by_language(
    repos: Vec<RepoSummary>,
) -> BTreeMap<Option<String>, Vec<RepoSummary>> {
    let mut groups: BTreeMap<Option<String>, Vec<RepoSummary>> = BTreeMap::new();
    for repo in repos {
        groups.entry(repo.language.clone()).or_default().push(repo);
    }
    groups
}

/// Count commits per repository
pub fn aggregate_commits_by_repo(commits: &[CommitSummary]) -> Vec<RepoCommitStats> {
    let mut stats: BTreeMap<String, RepoCommitStats> = BTreeMap::new();
    for commit in commits {
        let Some(full_name) = &commit.repository_full_name else {
            continue;
        };
        stats
            .entry(full_name.clone())
            .or_insert_with(|| RepoCommitStats {
                repository_full_name: full_name.clone(),
                repository_html_url: commit.repository_html_url.clone(),
                total_number_of_commits: 0,
            })
            .total_number_of_commits += 1;
    }
    stats.into_values().collect()
}

#[derive(Debug, Serialize)]
pub struct ReposFilters {
    pub min_stars: Option<u64>,
    pub language: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct Sorting {
    pub sort_by: Option<String>,
    pub sort_direction: String,
}

/// Report for `ghsearch repos`
#[derive(Debug, Serialize)]
pub struct ReposReport {
    pub query: String,
    pub api_base: String,
    pub total_count: u64,
    pub incomplete_results: bool,
    pub returned: usize,
    pub filters: ReposFilters,
    pub sorting: Sorting,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_by: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<BTreeMap<Option<String>, Vec<RepoSummary>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repositories: Option<Vec<RepoSummary>>,
}

#[derive(Debug, Serialize)]
pub struct CodeFilters {
    pub repo: Option<String>,
    pub language: Option<String>,
    pub path: Option<String>,
}

/// Report for `ghsearch code`
#[derive(Debug, Serialize)]
pub struct CodeReport {
    pub query: String,
    pub api_base: String,
    pub total_count: u64,
    pub incomplete_results: bool,
    pub returned: usize,
    pub filters: CodeFilters,
    pub results: Vec<CodeSummary>,
}

#[derive(Debug, Serialize)]
pub struct CommitsFilters {
    pub repo: Option<String>,
    pub author: Option<String>,
    pub committer: Option<String>,
}

/// Report for `ghsearch commits`
#[derive(Debug, Serialize)]
pub struct CommitsReport {
    pub query: String,
    pub api_base: String,
    pub total_count: u64,
    pub incomplete_results: bool,
    pub returned: usize,
    pub filters: CommitsFilters,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repositories: Option<Vec<RepoCommitStats>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commits: Option<Vec<CommitSummary>>,
}

#[allow(clippy::too_many_arguments)]
pub fn build_repos_report(
    query: String,
    api_base: String,
    total_count: u64,
    incomplete_results: bool,
    repos: Vec<RepoSummary>,
    group_by_lang: bool,
    top_n: Option<usize>,
    min_stars: Option<u64>,
    language: Option<String>,
    sort_by: Option<String>,
    sort_direction: String,
) -> ReposReport {
    let mut processed = repos;
    if let Some(top_n) = top_n
        && top_n > 0
    {
        processed.truncate(top_n);
    }
    let returned = processed.len();
    let (group_by, groups, repositories) = if group_by_lang {
        (Some("language"), Some(group_by_language(processed)), None)
    } else {
        (None, None, Some(processed))
    };
    ReposReport {
        query,
        api_base,
        total_count,
        incomplete_results,
        returned,
        filters: ReposFilters {
            min_stars,
            language,
        },
        sorting: Sorting {
            sort_by,
            sort_direction,
        },
        group_by,
        groups,
        repositories,
    }
}

pub fn build_code_report(
    query: String,
    api_base: String,
    total_count: u64,
    incomplete_results: bool,
    results: Vec<CodeSummary>,
    filters: CodeFilters,
) -> CodeReport {
    CodeReport {
        query,
        api_base,
        total_count,
        incomplete_results,
        returned: results.len(),
        filters,
        results,
    }
}

pub fn build_commits_report(
    query: String,
    api_base: String,
    total_count: u64,
    incomplete_results: bool,
    commits: Vec<CommitSummary>,
    filters: CommitsFilters,
    stats: bool,
) -> CommitsReport {
    let returned = commits.len();
    let (repositories, commits) = if stats {
        (Some(aggregate_commits_by_repo(&commits)), None)
    } else {
        (None, Some(commits))
    };
    CommitsReport {
        query,
        api_base,
        total_count,
        incomplete_results,
        returned,
        filters,
        repositories,
        commits,
    }
}

/// Render a report as YAML on stdout
pub fn print_yaml<T: Serialize>(report: &T) -> Result<()> {
    let yaml = serde_yaml::to_string(report)?;
    print!("{yaml}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(name: &str, stars: u64, language: Option<&str>) -> RepoSummary {
        RepoSummary {
            full_name: name.to_string(),
            html_url: format!("https://github.com/{name}"),
            description: None,
            stars,
            watchers: 0,
            forks: 0,
            language: language.map(String::from),
            archived: false,
            fork: false,
            topics: Vec::new(),
            license: None,
            default_branch: None,
            pushed_at: None,
            updated_at: None,
            created_at: None,
            score: None,
        }
    }

    #[test]
    fn test_filter_by_min_stars() {
        let repos = vec![
            summary("a/one", 100, None),
            summary("a/two", 50, None),
            summary("a/three", 200, None),
        ];
        let filtered = apply_filters(repos, Some(100), None);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|repo| repo.stars >= 100));
    }

    #[test]
    fn test_filter_by_language_case_insensitive() {
        let repos = vec![
            summary("a/one", 0, Some("Python")),
            summary("a/two", 0, Some("python")),
            summary("a/three", 0, Some("Rust")),
        ];
        let filtered = apply_filters(repos, None, Some("PYTHON"));
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_sort_by_stars_desc_and_asc() {
        let repos = vec![
            summary("a/one", 50, None),
            summary("a/two", 100, None),
            summary("a/three", 25, None),
        ];
        let sorted = apply_sorting(repos.clone(), Some("stars"), "desc");
        assert_eq!(sorted[0].stars, 100);
        assert_eq!(sorted[2].stars, 25);

        let sorted = apply_sorting(repos, Some("stars"), "asc");
        assert_eq!(sorted[0].stars, 25);
        assert_eq!(sorted[2].stars, 100);
    }

    #[test]
    fn test_sort_desc_keeps_tie_order() {
        let repos = vec![
            summary("a/first", 100, None),
            summary("a/second", 100, None),
            summary("a/third", 50, None),
        ];
        let sorted = apply_sorting(repos, Some("stars"), "desc");
        assert_eq!(sorted[0].full_name, "a/first");
        assert_eq!(sorted[1].full_name, "a/second");
        assert_eq!(sorted[2].full_name, "a/third");
    }

    #[test]
    fn test_sort_without_key_keeps_order() {
        let repos = vec![summary("a/one", 1, None), summary("a/two", 2, None)];
        let sorted = apply_sorting(repos, None, "desc");
        assert_eq!(sorted[0].full_name, "a/one");
        assert_eq!(sorted[1].full_name, "a/two");
    }

    #[test]
    fn test_group_by_language_null_group() {
        let repos = vec![
            summary("a/one", 0, Some("Python")),
            summary("a/two", 0, Some("Rust")),
            summary("a/three", 0, Some("Python")),
            summary("a/four", 0, None),
        ];
        let groups = group_by_language(repos);
        assert_eq!(groups[&Some("Python".to_string())].len(), 2);
        assert_eq!(groups[&Some("Rust".to_string())].len(), 1);
        assert_eq!(groups[&None].len(), 1);
    }

    #[test]
    fn test_top_n_truncates_before_reporting() {
        let repos = (0..5)
            .map(|i| summary(&format!("a/{i}"), i, None))
            .collect();
        let report = build_repos_report(
            "q".to_string(),
            "https://api.github.com".to_string(),
            5,
            false,
            repos,
            false,
            Some(2),
            None,
            None,
            None,
            "desc".to_string(),
        );
        assert_eq!(report.returned, 2);
        assert_eq!(report.repositories.unwrap().len(), 2);
    }

    #[test]
    fn test_commit_message_first_line() {
        assert_eq!(first_line("Fix bug\n\nLong description"), "Fix bug");
        assert_eq!(first_line("single"), "single");
        assert_eq!(first_line(""), "");
    }

    #[test]
    fn test_aggregate_commits_counts_per_repo() {
        let commit = |repo: Option<&str>| CommitSummary {
            sha: None,
            html_url: None,
            url: None,
            message: None,
            author_name: None,
            author_email: None,
            author_date: None,
            committer_name: None,
            committer_email: None,
            committer_date: None,
            repository_full_name: repo.map(String::from),
            repository_html_url: repo.map(|r| format!("https://github.com/{r}")),
            score: None,
        };
        let commits = vec![
            commit(Some("o/one")),
            commit(Some("o/one")),
            commit(Some("o/two")),
            commit(None),
        ];
        let stats = aggregate_commits_by_repo(&commits);
        assert_eq!(stats.len(), 2);
        let one = stats
            .iter()
            .find(|s| s.repository_full_name == "o/one")
            .unwrap();
        assert_eq!(one.total_number_of_commits, 2);
    }

    #[test]
    fn test_stats_report_replaces_commits() {
        let report = build_commits_report(
            "fix".to_string(),
            "https://api.github.com".to_string(),
            0,
            false,
            Vec::new(),
            CommitsFilters {
                repo: None,
                author: None,
                committer: None,
            },
            true,
        );
        assert!(report.commits.is_none());
        assert!(report.repositories.is_some());
    }

    #[test]
    fn test_yaml_field_order_follows_struct() {
        let report = build_code_report(
            "test".to_string(),
            "https://api.github.com".to_string(),
            1,
            false,
            Vec::new(),
            CodeFilters {
                repo: None,
                language: None,
                path: None,
            },
        );
        let yaml = serde_yaml::to_string(&report).unwrap();
        let query_pos = yaml.find("query:").unwrap();
        let results_pos = yaml.find("results:").unwrap();
        assert!(query_pos < results_pos);
    }
}
