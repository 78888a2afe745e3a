//! Implements the ReleaseSource trait for JSON payloads on disk
use async_trait::async_trait;
use log::*;
use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::{
    digest::{RawRelease, ReleaseSet, Window},
    error::{ReleaseDigestError, Result},
    source::traits::ReleaseSource,
};

/// Reads a release listing captured from a forge API response.
///
/// The payload is taken as-is: it is expected to already hold only the
/// releases of the reporting window.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

#[async_trait]
impl ReleaseSource for FileSource {
    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }

    async fn list_releases(&self, window: &Window) -> Result<ReleaseSet> {
        if !self.path.exists() {
            return Err(ReleaseDigestError::invalid_args(format!(
                "file path does not exist: {}",
                self.path.display()
            )));
        }

        debug!(
            "reading releases from {} for window ending {}",
            self.path.display(),
            window.head().to_rfc3339()
        );

        let content = tokio::fs::read_to_string(&self.path).await?;
        let payload: Value = serde_json::from_str(&content)?;

        Ok(decode_release_set(&payload))
    }
}

/// Decode a release listing payload.
///
/// Accepts a top level array, `null`, or an object whose `data` member holds
/// either. Elements are decoded one by one so a single bad entry never
/// spoils the listing: `null` and undecodable elements become `None`.
pub fn decode_release_set(payload: &Value) -> ReleaseSet {
    let listing = match payload {
        Value::Object(map) => map.get("data").unwrap_or(&Value::Null),
        other => other,
    };

    match listing {
        Value::Array(items) => Some(items.iter().map(decode_release).collect()),
        Value::Null => None,
        other => {
            warn!("ignoring release payload that is not a list: {other}");
            None
        }
    }
}

fn decode_release(item: &Value) -> Option<RawRelease> {
    if !item.is_object() {
        return None;
    }

    match serde_json::from_value::<RawRelease>(item.clone()) {
        Ok(release) => Some(release),
        Err(err) => {
            debug!("skipping undecodable release entry: {err}");
            None
        }
    }
}
