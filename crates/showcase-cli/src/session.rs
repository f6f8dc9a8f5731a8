use showcase_core::model::{Repository, SourceError};
use showcase_core::source::DataSource;
use showcase_core::transform::Overview;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub organization: String,
    pub min_stars: u64,
    pub recent_limit: usize,
    pub timeout: Duration,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewState {
    Idle,
    Loading,
    Loaded(Overview),
    Failed(String),
}

/// Owns the injected data source and the last list it produced.
pub struct Session {
    source: Box<dyn DataSource>,
    settings: Settings,
    repositories: Vec<Repository>,
    state: ViewState,
}

impl Session {
    pub fn new(source: Box<dyn DataSource>, settings: Settings) -> Self {
        Self {
            source,
            settings,
            repositories: Vec::new(),
            state: ViewState::Idle,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn repositories(&self) -> &[Repository] {
        &self.repositories
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Fetches a fresh list, bounded by the configured timeout.
    ///
    /// On success the stored list is replaced wholesale; on failure it is
    /// left as it was.
    pub async fn load(&mut self) -> Result<Overview, SourceError> {
        self.state = ViewState::Loading;
        let organization = self.settings.organization.as_str();
        let fetch = self.source.fetch_repositories(organization);
        let result = match tokio::time::timeout(self.settings.timeout, fetch).await {
            Ok(result) => result,
            Err(_) => Err(SourceError::network(format!(
                "Request timed out after {}s. Please check your internet connection.",
                self.settings.timeout.as_secs()
            ))),
        };
        match result {
            Ok(repos) => {
                let overview = Overview::build(
                    organization,
                    &repos,
                    self.settings.min_stars,
                    self.settings.recent_limit,
                );
                info!(
                    organization,
                    repositories = repos.len(),
                    total_stars = overview.total_stars,
                    "loaded organization overview"
                );
                self.repositories = repos;
                self.state = ViewState::Loaded(overview.clone());
                Ok(overview)
            }
            Err(err) => {
                warn!(organization, kind = %err.kind(), "load failed: {err}");
                self.state = ViewState::Failed(err.to_string());
                Err(err)
            }
        }
    }
}
