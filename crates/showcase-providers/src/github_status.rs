use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use showcase_core::model::SourceError;

use crate::http::{ratelimit_exhausted, ratelimit_reset_label};

/// Maps a non-success response to the error shown to the user.
///
/// Returns `None` for 2xx statuses.
pub fn status_error(
    organization: &str,
    status: StatusCode,
    headers: &HeaderMap,
) -> Option<SourceError> {
    if status.is_success() {
        return None;
    }
    let code = status.as_u16();
    let message = match status {
        StatusCode::NOT_FOUND => format!("Organization \"{organization}\" not found"),
        StatusCode::FORBIDDEN if ratelimit_exhausted(headers) => {
            let reset = ratelimit_reset_label(headers).unwrap_or_else(|| "a while".to_string());
            format!("GitHub API rate limit exceeded. Try again after {reset}")
        }
        StatusCode::FORBIDDEN => {
            "Access forbidden. Check your credentials and permissions.".to_string()
        }
        StatusCode::UNAUTHORIZED => "Unauthorized. Invalid or missing credentials.".to_string(),
        _ => format!(
            "GitHub API error: {code} {}",
            status.canonical_reason().unwrap_or("")
        )
        .trim_end()
        .to_string(),
    };
    Some(SourceError::api(code, message))
}
