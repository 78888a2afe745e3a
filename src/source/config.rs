//! Configuration for release source connections.
use secrecy::SecretString;
use std::path::PathBuf;

/// Remote repository connection configuration for listing releases from a
/// forge platform.
#[derive(Debug, Clone, Default)]
pub struct RemoteConfig {
    /// Remote forge host (e.g., "github.com").
    pub host: String,
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Base URL of the forge REST API.
    pub api_url: String,
    /// Optional access token. Public repositories can be read without one.
    pub token: Option<SecretString>,
}

/// Where the releases for a digest come from.
#[derive(Debug, Clone)]
pub enum Source {
    /// JSON payload on disk.
    File(PathBuf),
    /// GitHub releases API.
    Github(RemoteConfig),
}
