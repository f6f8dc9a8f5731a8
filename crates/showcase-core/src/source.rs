use serde_json::Value;
use std::future::Future;
use std::pin::Pin;
use tracing::debug;

use crate::model::{ErrorKind, Repository, SourceError, SourceResult};
use crate::sanitize::sanitize;

pub type SourceFuture<'a, T> = Pin<Box<dyn Future<Output = SourceResult<T>> + Send + 'a>>;

/// Anything that can list an organization's repositories.
///
/// Implementations sanitize their payload, so every returned entry already
/// passed [`crate::sanitize::is_valid_repository`].
pub trait DataSource: Send + Sync {
    fn fetch_repositories<'a>(&'a self, organization: &'a str)
    -> SourceFuture<'a, Vec<Repository>>;
}

/// Trims and checks an organization name before it is used in a request.
///
/// `.` and `..` are rejected: URL path building drops them as dot segments,
/// which would silently retarget the request.
pub fn validate_organization(organization: &str) -> SourceResult<&str> {
    let trimmed = organization.trim();
    if trimmed.is_empty() {
        return Err(SourceError::validation(
            "Organization name is required and must be a non-empty string",
        ));
    }
    if matches!(trimmed, "." | "..") {
        return Err(SourceError::validation(format!(
            "Invalid organization name \"{trimmed}\""
        )));
    }
    Ok(trimmed)
}

/// In-memory [`DataSource`] that replays a canned payload or failure.
#[derive(Clone, Debug)]
pub enum FixtureSource {
    Payload(Value),
    Failure {
        kind: ErrorKind,
        status: Option<u16>,
        message: String,
    },
}

impl FixtureSource {
    pub fn payload(payload: Value) -> Self {
        Self::Payload(payload)
    }

    pub fn failure(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self::Failure {
            kind,
            status: None,
            message: message.into(),
        }
    }

    /// An API failure carrying a specific HTTP status.
    pub fn api_failure(status: u16, message: impl Into<String>) -> Self {
        Self::Failure {
            kind: ErrorKind::Api,
            status: Some(status),
            message: message.into(),
        }
    }
}

impl DataSource for FixtureSource {
    fn fetch_repositories<'a>(
        &'a self,
        organization: &'a str,
    ) -> SourceFuture<'a, Vec<Repository>> {
        Box::pin(async move {
            let organization = validate_organization(organization)?;
            debug!(organization, "serving fixture repositories");
            match self {
                FixtureSource::Payload(payload) => Ok(sanitize(payload)),
                FixtureSource::Failure {
                    kind,
                    status,
                    message,
                } => Err(match kind {
                    ErrorKind::Network => SourceError::network(message.clone()),
                    ErrorKind::Api => SourceError::api(status.unwrap_or(500), message.clone()),
                    ErrorKind::Validation => SourceError::validation(message.clone()),
                    ErrorKind::Unknown => SourceError::Unknown(anyhow::anyhow!(message.clone())),
                }),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn validate_organization_trims() {
        assert_eq!(validate_organization("  acme ").unwrap(), "acme");
        let err = validate_organization("   ").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(err.to_string().contains("required"));
    }

    #[test]
    fn dot_segments_are_not_organizations() {
        for name in [".", "..", " . ", "\t..\n"] {
            let err = validate_organization(name).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Validation);
            assert!(err.to_string().starts_with("Invalid organization name"));
        }
        assert_eq!(validate_organization(".github").unwrap(), ".github");
        assert_eq!(validate_organization("a..b").unwrap(), "a..b");
    }

    #[tokio::test]
    async fn fixture_sanitizes_payload() {
        let source = FixtureSource::payload(json!([
            {
                "id": 1,
                "name": "api",
                "html_url": "https://github.com/acme/api",
                "stargazers_count": 3,
                "updated_at": "2026-01-01T00:00:00Z"
            },
            { "id": 2, "name": "broken" }
        ]));
        let repos = source.fetch_repositories("acme").await.unwrap();
        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].name, "api");
    }

    #[tokio::test]
    async fn fixture_rejects_blank_organization() {
        let source = FixtureSource::payload(json!([]));
        let err = source.fetch_repositories("").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[tokio::test]
    async fn fixture_replays_failure() {
        let source = FixtureSource::failure(ErrorKind::Network, "offline");
        let dyn_source: &dyn DataSource = &source;
        let err = dyn_source.fetch_repositories("acme").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Network);
        assert_eq!(err.to_string(), "offline");
        assert_eq!(err.status(), None);
    }

    #[tokio::test]
    async fn fixture_replays_api_status() {
        let source = FixtureSource::api_failure(404, "Organization \"ghost\" not found");
        let err = source.fetch_repositories("ghost").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Api);
        assert_eq!(err.status(), Some(404));

        let source = FixtureSource::failure(ErrorKind::Api, "boom");
        let err = source.fetch_repositories("acme").await.unwrap_err();
        assert_eq!(err.status(), Some(500));
    }
}
