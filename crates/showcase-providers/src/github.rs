use reqwest::{Client, Url};
use serde_json::Value;
use showcase_core::model::{Repository, SourceError, SourceResult};
use showcase_core::sanitize::sanitize;
use showcase_core::source::{DataSource, SourceFuture, validate_organization};
use tracing::{debug, info, warn};

use crate::github_status::status_error;
use crate::http::classify_transport;

pub const DEFAULT_HOST: &str = "https://api.github.com";
pub const USER_AGENT: &str = "org-showcase";
pub const ACCEPT: &str = "application/vnd.github+json";
pub const API_VERSION: &str = "2022-11-28";
const PER_PAGE: &str = "100";

/// [`DataSource`] backed by the GitHub REST API.
pub struct GitHubSource {
    client: Client,
    host: String,
    token: Option<String>,
}

impl GitHubSource {
    pub fn new() -> anyhow::Result<Self> {
        Self::with_host(DEFAULT_HOST)
    }

    pub fn with_host(host: &str) -> anyhow::Result<Self> {
        Ok(Self::with_client(Client::builder().build()?, host))
    }

    pub fn with_client(client: Client, host: &str) -> Self {
        Self {
            client,
            host: host_or_default(Some(host)),
            token: None,
        }
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|value| !value.trim().is_empty());
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub(crate) fn repos_url(&self, organization: &str) -> SourceResult<Url> {
        let mut url = Url::parse(&self.host).map_err(|err| {
            SourceError::validation(format!("Invalid API host {}: {err}", self.host))
        })?;
        url.path_segments_mut()
            .map_err(|_| SourceError::validation(format!("Invalid API host {}", self.host)))?
            .pop_if_empty()
            .extend(["orgs", organization, "repos"]);
        url.query_pairs_mut()
            .append_pair("per_page", PER_PAGE)
            .append_pair("sort", "updated");
        Ok(url)
    }

    async fn fetch(&self, organization: &str) -> SourceResult<Vec<Repository>> {
        let organization = validate_organization(organization)?;
        let url = self.repos_url(organization)?;
        debug!(%url, "requesting organization repositories");

        let mut builder = self
            .client
            .get(url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", ACCEPT)
            .header("X-GitHub-Api-Version", API_VERSION);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        let response = builder.send().await.map_err(classify_transport)?;

        let status = response.status();
        if let Some(err) = status_error(organization, status, response.headers()) {
            warn!(organization, status = status.as_u16(), "GitHub list repos failed");
            return Err(err);
        }

        let payload: Value = response.json().await.map_err(classify_transport)?;
        let received = payload.as_array().map(Vec::len).unwrap_or(0);
        let repos = sanitize(&payload);
        if repos.len() < received {
            warn!(
                organization,
                dropped = received - repos.len(),
                "dropped invalid repository records"
            );
        }
        info!(organization, count = repos.len(), "fetched repositories");
        Ok(repos)
    }
}

impl DataSource for GitHubSource {
    fn fetch_repositories<'a>(
        &'a self,
        organization: &'a str,
    ) -> SourceFuture<'a, Vec<Repository>> {
        Box::pin(self.fetch(organization))
    }
}

pub fn host_or_default(host: Option<&str>) -> String {
    host.map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_HOST)
        .trim_end_matches('/')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use showcase_core::model::ErrorKind;

    #[test]
    fn host_or_default_trims_slashes() {
        assert_eq!(host_or_default(None), DEFAULT_HOST);
        assert_eq!(host_or_default(Some("  ")), DEFAULT_HOST);
        assert_eq!(
            host_or_default(Some("https://ghe.example.com/api/v3/")),
            "https://ghe.example.com/api/v3"
        );
    }

    #[test]
    fn repos_url_uses_fixed_query() {
        let source = GitHubSource::new().unwrap();
        let url = source.repos_url("stackbuilders").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.github.com/orgs/stackbuilders/repos?per_page=100&sort=updated"
        );
    }

    #[test]
    fn repos_url_keeps_enterprise_prefix_and_encodes_name() {
        let source = GitHubSource::with_host("https://ghe.example.com/api/v3/").unwrap();
        let url = source.repos_url("my org/x").unwrap();
        assert_eq!(
            url.as_str(),
            "https://ghe.example.com/api/v3/orgs/my%20org%2Fx/repos?per_page=100&sort=updated"
        );
    }

    #[test]
    fn invalid_host_is_validation_error() {
        let source = GitHubSource::with_host("not a url").unwrap();
        let err = source.repos_url("acme").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[tokio::test]
    async fn dot_segment_organization_is_validation_error() {
        let source = GitHubSource::with_host("http://127.0.0.1:9").unwrap();
        for organization in [".", ".."] {
            let err = source.fetch_repositories(organization).await.unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Validation);
        }
    }

    #[test]
    fn blank_token_is_ignored() {
        let source = GitHubSource::new().unwrap().with_token(Some(" ".to_string()));
        assert!(source.token.is_none());
    }
}
