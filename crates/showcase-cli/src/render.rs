use showcase_core::dates::format_relative_date_at;
use showcase_core::language::language_color;
use showcase_core::model::Repository;
use showcase_core::transform::Overview;
use time::OffsetDateTime;

const GENERIC_ERROR: &str = "An unexpected error occurred.";

pub fn loading_line(organization: &str) -> String {
    format!("Loading repositories for {organization}...")
}

/// The failure text shown to the user, with a generic fallback.
pub fn error_text(message: &str) -> &str {
    if message.trim().is_empty() {
        GENERIC_ERROR
    } else {
        message
    }
}

/// Groups digits in threes, e.g. `12345` becomes `12,345`.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn render_overview(overview: &Overview, now: OffsetDateTime) -> String {
    let mut lines = vec![
        format!(
            "{} ({} repositories)",
            overview.organization, overview.repository_count
        ),
        format!("Total stars: {}", format_thousands(overview.total_stars)),
        String::new(),
        "Popular repositories".to_string(),
    ];
    lines.extend(render_repositories(&overview.popular, now));
    lines.push(String::new());
    lines.push("Recently updated".to_string());
    lines.extend(render_repositories(&overview.recent, now));
    lines.join("\n")
}

pub fn render_all(repos: &[Repository], now: OffsetDateTime) -> String {
    let mut lines = vec!["All repositories".to_string()];
    lines.extend(render_repositories(repos, now));
    lines.join("\n")
}

fn render_repositories(repos: &[Repository], now: OffsetDateTime) -> Vec<String> {
    if repos.is_empty() {
        return vec!["  No repositories found.".to_string()];
    }
    repos
        .iter()
        .flat_map(|repo| render_card(repo, now))
        .collect()
}

fn render_card(repo: &Repository, now: OffsetDateTime) -> Vec<String> {
    let description = repo
        .description
        .as_deref()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or("No description available");
    let language = repo.language.as_deref();
    vec![
        format!("  {}  \u{2605} {}", repo.name, repo.stargazers_count),
        format!("    {description}"),
        format!(
            "    {} [{}]  Updated {}",
            language.unwrap_or("Unknown"),
            language_color(language),
            format_relative_date_at(&repo.updated_at, now)
        ),
        format!("    {}", repo.html_url),
    ]
}
