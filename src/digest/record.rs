//! Release records as they arrive from a release listing, and the
//! validation step that turns them into well-formed records.
use chrono::{DateTime, Utc};
use log::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Loosely shaped release as returned by a release listing. Every field may
/// be missing, so nothing here is trusted until it passes through
/// [`ReleaseRecord::try_from`].
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawRelease {
    #[serde(alias = "tagName")]
    pub tag_name: Option<String>,
    pub name: Option<String>,
    #[serde(alias = "htmlUrl")]
    pub html_url: Option<String>,
    #[serde(alias = "createdAt")]
    pub created_at: Option<String>,
}

/// Releases handed to the digest. `None` stands for an absent listing, and
/// `None` elements for null or undecodable entries.
pub type ReleaseSet = Option<Vec<Option<RawRelease>>>;

/// Reason a [`RawRelease`] was excluded from the digest.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("release has no tag name")]
    MissingTagName,

    #[error("release {tag} has no html url")]
    MissingHtmlUrl { tag: String },

    #[error("release {tag} has an invalid html url: {url}")]
    InvalidHtmlUrl { tag: String, url: String },
}

/// A release that is safe to count and render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseRecord {
    pub tag_name: String,
    /// Display name, `None` when absent or blank.
    pub name: Option<String>,
    /// Absolute url of the release page, kept exactly as received.
    pub html_url: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl TryFrom<&RawRelease> for ReleaseRecord {
    type Error = Rejection;

    fn try_from(raw: &RawRelease) -> Result<Self, Self::Error> {
        let tag_name = non_blank(raw.tag_name.as_deref())
            .ok_or(Rejection::MissingTagName)?
            .to_string();

        let url = non_blank(raw.html_url.as_deref()).ok_or_else(|| {
            Rejection::MissingHtmlUrl {
                tag: tag_name.clone(),
            }
        })?;

        // Url::parse only accepts absolute urls
        if Url::parse(url).is_err() {
            return Err(Rejection::InvalidHtmlUrl {
                tag: tag_name,
                url: url.to_string(),
            });
        }

        let created_at = raw.created_at.as_deref().and_then(|value| {
            match DateTime::parse_from_rfc3339(value) {
                Ok(date) => Some(date.with_timezone(&Utc)),
                Err(err) => {
                    debug!(
                        "ignoring unparseable created_at for {tag_name}: {value}: {err}"
                    );
                    None
                }
            }
        });

        Ok(Self {
            tag_name,
            name: non_blank(raw.name.as_deref()).map(String::from),
            html_url: url.to_string(),
            created_at,
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Filters a release listing down to its well-formed records, keeping the
/// input order. Null entries and rejected records are dropped.
pub fn validate_releases(
    releases: Option<&[Option<RawRelease>]>,
) -> Vec<ReleaseRecord> {
    let Some(releases) = releases else {
        debug!("no release listing provided");
        return vec![];
    };

    releases
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            let Some(raw) = entry else {
                debug!("skipping null release at index {index}");
                return None;
            };

            match ReleaseRecord::try_from(raw) {
                Ok(record) => Some(record),
                Err(rejection) => {
                    debug!("skipping release at index {index}: {rejection}");
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(
        tag: Option<&str>,
        name: Option<&str>,
        url: Option<&str>,
    ) -> RawRelease {
        RawRelease {
            tag_name: tag.map(String::from),
            name: name.map(String::from),
            html_url: url.map(String::from),
            created_at: None,
        }
    }

    #[test]
    fn accepts_well_formed_release() {
        let mut release = raw(
            Some("v1.0.0"),
            Some("Release v1.0.0"),
            Some("https://github.com/AlQaholic007/test/releases/tag/v1.0.0"),
        );
        release.created_at = Some("2020-04-22T10:00:00Z".into());

        let record = ReleaseRecord::try_from(&release).unwrap();

        assert_eq!(record.tag_name, "v1.0.0");
        assert_eq!(record.name.as_deref(), Some("Release v1.0.0"));
        assert_eq!(
            record.html_url,
            "https://github.com/AlQaholic007/test/releases/tag/v1.0.0"
        );
        assert_eq!(
            record.created_at.unwrap().to_rfc3339(),
            "2020-04-22T10:00:00+00:00"
        );
    }

    #[test]
    fn rejects_missing_or_blank_tag_name() {
        let url = Some("https://example.com/releases/tag/v1");

        assert_eq!(
            ReleaseRecord::try_from(&raw(None, Some("name"), url)),
            Err(Rejection::MissingTagName)
        );
        assert_eq!(
            ReleaseRecord::try_from(&raw(Some("  "), Some("name"), url)),
            Err(Rejection::MissingTagName)
        );
    }

    #[test]
    fn rejects_missing_html_url() {
        let result = ReleaseRecord::try_from(&raw(Some("v1"), None, None));
        assert_eq!(
            result,
            Err(Rejection::MissingHtmlUrl { tag: "v1".into() })
        );
    }

    #[test]
    fn rejects_relative_html_url() {
        let result = ReleaseRecord::try_from(&raw(
            Some("v1"),
            None,
            Some("/releases/tag/v1"),
        ));
        assert!(matches!(result, Err(Rejection::InvalidHtmlUrl { .. })));
    }

    #[test]
    fn blank_name_is_treated_as_absent() {
        let record = ReleaseRecord::try_from(&raw(
            Some("v1"),
            Some(""),
            Some("https://example.com/releases/tag/v1"),
        ))
        .unwrap();
        assert!(record.name.is_none());
    }

    #[test]
    fn keeps_record_with_unparseable_created_at() {
        let mut release =
            raw(Some("v1"), None, Some("https://example.com/releases/tag/v1"));
        release.created_at = Some("last tuesday".into());

        let record = ReleaseRecord::try_from(&release).unwrap();
        assert!(record.created_at.is_none());
    }

    #[test]
    fn validate_releases_drops_nulls_and_rejections_in_order() {
        let releases = vec![
            Some(raw(Some("v3"), None, Some("https://example.com/v3"))),
            None,
            Some(raw(None, Some("no tag"), Some("https://example.com/x"))),
            Some(raw(Some("v2"), None, None)),
            Some(raw(Some("v1"), None, Some("https://example.com/v1"))),
        ];

        let records = validate_releases(Some(releases.as_slice()));

        let tags: Vec<&str> =
            records.iter().map(|r| r.tag_name.as_str()).collect();
        assert_eq!(tags, vec!["v3", "v1"]);
    }

    #[test]
    fn validate_releases_handles_absent_listing() {
        assert!(validate_releases(None).is_empty());
        assert!(validate_releases(Some(&[][..])).is_empty());
    }

    #[test]
    fn raw_release_accepts_camel_and_snake_case() {
        let camel: RawRelease = serde_json::from_str(
            r#"{"tagName":"v1","htmlUrl":"https://e.com","createdAt":"2020-04-20T00:00:00Z"}"#,
        )
        .unwrap();
        let snake: RawRelease = serde_json::from_str(
            r#"{"tag_name":"v1","html_url":"https://e.com","created_at":"2020-04-20T00:00:00Z"}"#,
        )
        .unwrap();

        assert_eq!(camel, snake);
        assert_eq!(camel.tag_name.as_deref(), Some("v1"));
        assert!(camel.name.is_none());
    }
}
