//! CLI argument parsing and release source configuration.
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use git_url_parse::GitUrl;
use secrecy::SecretString;
use std::{env, path::PathBuf};

use crate::{
    config::DEFAULT_CONFIG_FILE,
    error::{ReleaseDigestError, Result},
    source::config::{RemoteConfig, Source},
};

const GITHUB_TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// Render a weekly Markdown digest of the releases published by a repository.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, default_value = DEFAULT_CONFIG_FILE, global = true)]
    /// Path to the configuration file. Defaults apply when it is missing.
    pub config: PathBuf,

    #[arg(long, global = true)]
    /// End of the reporting window as an RFC 3339 timestamp. Defaults to now.
    pub head: Option<String>,

    #[arg(long, global = true)]
    /// Number of days covered by the digest. Overrides window_days.
    pub days: Option<u32>,

    #[arg(long, global = true)]
    /// Write the digest to this file instead of stdout.
    pub out_file: Option<PathBuf>,

    #[arg(long, default_value_t = false, global = true)]
    /// Enable debug logging.
    pub debug: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Release listing subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a digest from a JSON release listing on disk.
    File {
        #[arg(long)]
        /// Path to the JSON payload.
        path: PathBuf,
    },

    /// Render a digest from the GitHub releases of a repository.
    Github {
        #[arg(long)]
        /// GitHub repository URL (https://github.com/owner/repo).
        repo: String,

        #[arg(long)]
        /// GitHub personal access token. Falls back to GITHUB_TOKEN env var.
        token: Option<String>,

        #[arg(long)]
        /// API base URL for GitHub Enterprise. Defaults to api.<host>.
        api_url: Option<String>,
    },
}

impl Args {
    /// Resolve the head of the reporting window.
    pub fn head_date(&self) -> Result<DateTime<Utc>> {
        match &self.head {
            Some(head) => {
                Ok(DateTime::parse_from_rfc3339(head)?.with_timezone(&Utc))
            }
            None => Ok(Utc::now()),
        }
    }

    /// Configure the release source from CLI arguments.
    pub fn get_source(&self) -> Result<Source> {
        match &self.command {
            Command::File { path } => Ok(Source::File(path.clone())),
            Command::Github {
                repo,
                token,
                api_url,
            } => get_github_remote(repo, token.as_deref(), api_url.as_deref())
                .map(Source::Github),
        }
    }
}

/// Validate repository URL uses HTTP or HTTPS scheme.
fn validate_scheme(scheme: git_url_parse::Scheme) -> Result<()> {
    match scheme {
        git_url_parse::Scheme::Http => Ok(()),
        git_url_parse::Scheme::Https => Ok(()),
        _ => Err(ReleaseDigestError::InvalidRemoteUrl(
            "only http and https schemes are supported for repo urls".into(),
        )),
    }
}

/// Configure GitHub remote with URL parsing and token resolution.
fn get_github_remote(
    github_repo: &str,
    github_token: Option<&str>,
    api_url: Option<&str>,
) -> Result<RemoteConfig> {
    let parsed = GitUrl::parse(github_repo)?;

    validate_scheme(parsed.scheme)?;

    let mut token = github_token.unwrap_or_default().to_string();

    if token.is_empty()
        && let Some(parsed_token) = parsed.token.clone()
    {
        token = parsed_token;
    }

    if token.is_empty()
        && let Ok(env_var_token) = env::var(GITHUB_TOKEN_ENV_VAR)
    {
        token = env_var_token;
    }

    let host = parsed.host.clone().ok_or_else(|| {
        ReleaseDigestError::InvalidRemoteUrl(
            "unable to parse host from github repo".into(),
        )
    })?;

    let owner = parsed.owner.clone().ok_or_else(|| {
        ReleaseDigestError::InvalidRemoteUrl(
            "unable to parse owner from github repo".into(),
        )
    })?;

    let scheme = parsed.scheme.to_string();

    let api_url = api_url
        .map(String::from)
        .unwrap_or_else(|| format!("{scheme}://api.{host}"));

    Ok(RemoteConfig {
        host,
        owner,
        repo: parsed.name,
        api_url,
        token: (!token.is_empty()).then(|| SecretString::from(token)),
    })
}
