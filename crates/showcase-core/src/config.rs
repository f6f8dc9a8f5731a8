use anyhow::Context;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::transform::{DEFAULT_MIN_STARS, DEFAULT_RECENT_LIMIT};

pub const DEFAULT_ORGANIZATION: &str = "stackbuilders";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings persisted as JSON. Tokens never live here; they go to the OS
/// keyring.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub organization: Option<String>,
    pub host: Option<String>,
    pub min_stars: u64,
    pub recent_limit: usize,
    pub timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            organization: None,
            host: None,
            min_stars: DEFAULT_MIN_STARS,
            recent_limit: DEFAULT_RECENT_LIMIT,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = fs::read_to_string(path).context("read config")?;
        let config = serde_json::from_str(&data).context("parse config")?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("create config directory")?;
        }
        let data = serde_json::to_string_pretty(self).context("serialize config")?;
        fs::write(path, data).context("write config")?;
        Ok(())
    }

    pub fn organization(&self) -> &str {
        self.organization
            .as_deref()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or(DEFAULT_ORGANIZATION)
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let project =
        ProjectDirs::from("com", "org-showcase", "org-showcase").context("resolve project dirs")?;
    Ok(project.config_dir().join("config.json"))
}
