use serde::Serialize;
use serde_json::Value;
use std::cmp::Ordering;

use crate::dates::parse_timestamp;
use crate::model::Repository;

pub const DEFAULT_MIN_STARS: u64 = 5;
pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// Repositories with strictly more than `min_stars` stars, in input order.
pub fn filter_by_min_stars(repos: &[Repository], min_stars: u64) -> Vec<Repository> {
    repos
        .iter()
        .filter(|repo| repo.stargazers_count > min_stars)
        .cloned()
        .collect()
}

/// The `limit` most recently updated repositories, newest first.
///
/// Entries without an `updated_at` are skipped. The sort is stable, and
/// timestamps that fail to parse rank below every parseable one.
pub fn recently_updated(repos: &[Repository], limit: usize) -> Vec<Repository> {
    let mut dated: Vec<_> = repos
        .iter()
        .filter(|repo| !repo.updated_at.is_empty())
        .map(|repo| (parse_timestamp(&repo.updated_at), repo))
        .collect();
    dated.sort_by(|(left, _), (right, _)| match (left, right) {
        (Some(left), Some(right)) => right.cmp(left),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    dated
        .into_iter()
        .take(limit)
        .map(|(_, repo)| repo.clone())
        .collect()
}

pub fn total_stars(repos: &[Repository]) -> u64 {
    repos
        .iter()
        .fold(0, |total, repo| total.saturating_add(repo.stargazers_count))
}

/// Star total over an unsanitized payload.
///
/// Non-array input counts as zero, and so does any element whose
/// `stargazers_count` is not a non-negative integer.
pub fn total_stars_value(payload: &Value) -> u64 {
    let Some(items) = payload.as_array() else {
        return 0;
    };
    items
        .iter()
        .map(|item| {
            item.get("stargazers_count")
                .and_then(Value::as_u64)
                .unwrap_or(0)
        })
        .fold(0, u64::saturating_add)
}

/// Everything the renderer shows for one organization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Overview {
    pub organization: String,
    pub repository_count: usize,
    pub total_stars: u64,
    pub popular: Vec<Repository>,
    pub recent: Vec<Repository>,
}

impl Overview {
    pub fn build(
        organization: &str,
        repos: &[Repository],
        min_stars: u64,
        recent_limit: usize,
    ) -> Self {
        Self {
            organization: organization.to_string(),
            repository_count: repos.len(),
            total_stars: total_stars(repos),
            popular: filter_by_min_stars(repos, min_stars),
            recent: recently_updated(repos, recent_limit),
        }
    }
}
