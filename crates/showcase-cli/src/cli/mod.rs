use crate::render::{error_text, loading_line, render_all, render_overview};
use crate::session::{Session, Settings, ViewState};
use anyhow::Context;
use clap::Parser;
use showcase_core::config::{AppConfig, default_config_path};
use showcase_providers::GitHubSource;
use showcase_providers::auth;
use showcase_providers::github::host_or_default;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;
use time::OffsetDateTime;
use tracing::{debug, info, warn};

mod args;

use args::*;

pub async fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config_path = match cli.config {
        Some(path) => path,
        None => default_config_path()?,
    };
    match cli.command {
        Commands::Show(args) => handle_show(&config_path, args).await,
        Commands::Config(args) => handle_config(&config_path, args),
    }
}

async fn handle_show(config_path: &Path, args: ShowArgs) -> anyhow::Result<ExitCode> {
    let config = AppConfig::load(config_path)?;
    let settings = settings_for(&config, &args);
    let host = host_or_default(args.host.as_deref().or(config.host.as_deref()));
    let token = token_or_anonymous(&host, auth::get_token(&host));
    let source = GitHubSource::with_host(&host)
        .context("build GitHub client")?
        .with_token(token);
    info!(host = source.host(), "using GitHub source");

    let mut session = Session::new(Box::new(source), settings);
    eprintln!("{}", loading_line(&session.settings().organization));
    if let Err(err) = session.load().await {
        debug!(kind = %err.kind(), "organization overview unavailable");
    }
    match session.state() {
        ViewState::Loaded(overview) => {
            if args.json {
                let text =
                    serde_json::to_string_pretty(overview).context("serialize overview")?;
                println!("{text}");
            } else {
                let now = OffsetDateTime::now_utc();
                println!("{}", render_overview(overview, now));
                if args.all {
                    println!("\n{}", render_all(session.repositories(), now));
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        ViewState::Failed(message) => {
            eprintln!("{}", error_text(message));
            Ok(ExitCode::FAILURE)
        }
        ViewState::Idle | ViewState::Loading => {
            eprintln!("{}", error_text(""));
            Ok(ExitCode::FAILURE)
        }
    }
}

fn handle_config(config_path: &Path, args: ConfigArgs) -> anyhow::Result<ExitCode> {
    match args.command {
        ConfigCommands::Init(args) => {
            let config = config_from_init(&args);
            config.save(config_path)?;
            println!("Config written to {}", config_path.display());
            let token = args.token.as_deref().filter(|value| !value.trim().is_empty());
            if let Some(token) = token {
                let host = host_or_default(config.host.as_deref());
                auth::set_token(&host, token)?;
                println!("Token stored in the system keyring for {host}");
            }
        }
        ConfigCommands::Show => {
            let config = AppConfig::load(config_path)?;
            println!("{}", config_text(&config)?);
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Flags win over the config file, which wins over built-in defaults.
fn settings_for(config: &AppConfig, args: &ShowArgs) -> Settings {
    let organization = args
        .organization
        .clone()
        .unwrap_or_else(|| config.organization().to_string());
    Settings {
        organization,
        min_stars: args.min_stars.unwrap_or(config.min_stars),
        recent_limit: args.recent.unwrap_or(config.recent_limit),
        timeout: Duration::from_secs(args.timeout.unwrap_or(config.timeout_secs)),
    }
}

/// A keyring that cannot be read downgrades to unauthenticated requests.
fn token_or_anonymous(host: &str, lookup: anyhow::Result<Option<String>>) -> Option<String> {
    match lookup {
        Ok(token) => token,
        Err(err) => {
            warn!(
                host,
                error = %format!("{err:#}"),
                "keyring unavailable, continuing without a token"
            );
            None
        }
    }
}

fn config_text(config: &AppConfig) -> anyhow::Result<String> {
    serde_json::to_string_pretty(config).context("serialize config")
}

fn config_from_init(args: &InitArgs) -> AppConfig {
    let defaults = AppConfig::default();
    AppConfig {
        organization: Some(args.org.clone()),
        host: args.host.clone(),
        min_stars: args.min_stars.unwrap_or(defaults.min_stars),
        recent_limit: args.recent.unwrap_or(defaults.recent_limit),
        timeout_secs: args.timeout.unwrap_or(defaults.timeout_secs),
    }
}
