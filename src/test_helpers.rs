//! Common test helper functions shared across test modules.
//!
//! This module provides reusable release fixtures and mock objects, reducing
//! code duplication across different test suites.
use chrono::{DateTime, Utc};
use secrecy::SecretString;

use crate::{
    digest::{record::RawRelease, window::Window},
    source::config::RemoteConfig,
};

pub const TEST_RELEASE_BASE_URL: &str =
    "https://github.com/AlQaholic007/test/releases/tag";

/// Parses an RFC 3339 string into a UTC instant.
pub fn utc(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .unwrap()
        .with_timezone(&Utc)
}

/// Head of the reporting window used across digest tests.
pub fn test_head_date() -> DateTime<Utc> {
    utc("2020-04-24T00:00:00Z")
}

/// Week-long window ending at [`test_head_date`].
pub fn test_window() -> Window {
    Window::ending_at(test_head_date(), 7).unwrap()
}

/// Creates a well formed release named `Release <tag>`.
///
/// # Example
/// ```ignore
/// let release = create_test_release("v1.0.0");
/// ```
pub fn create_test_release(tag: &str) -> RawRelease {
    RawRelease {
        tag_name: Some(tag.to_string()),
        name: Some(format!("Release {tag}")),
        html_url: Some(format!("{TEST_RELEASE_BASE_URL}/{tag}")),
        created_at: Some("2020-04-22T10:00:00Z".to_string()),
    }
}

/// Creates a well formed release without a display name.
pub fn create_unnamed_test_release(tag: &str) -> RawRelease {
    RawRelease {
        name: None,
        ..create_test_release(tag)
    }
}

/// Three named releases, newest first.
pub fn many_releases() -> Vec<Option<RawRelease>> {
    vec![
        Some(create_test_release("v1.0.0")),
        Some(create_test_release("v0.1.1")),
        Some(create_test_release("v0.0.1")),
    ]
}

/// Entries that all fail validation.
pub fn useless_releases() -> Vec<Option<RawRelease>> {
    vec![
        None,
        Some(RawRelease::default()),
        Some(RawRelease {
            tag_name: Some("v9.9.9".into()),
            ..Default::default()
        }),
        Some(RawRelease {
            html_url: Some(format!("{TEST_RELEASE_BASE_URL}/v9.9.9")),
            ..Default::default()
        }),
    ]
}

/// Creates a test RemoteConfig pointing at github.com.
pub fn create_test_remote_config() -> RemoteConfig {
    RemoteConfig {
        host: "github.com".to_string(),
        owner: "AlQaholic007".to_string(),
        repo: "test".to_string(),
        api_url: "https://api.github.com".to_string(),
        token: Some(SecretString::from("test-token".to_string())),
    }
}
