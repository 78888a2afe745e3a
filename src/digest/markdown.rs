//! Markdown rendering of the weekly releases section.
use chrono::{DateTime, Utc};
use log::*;

use crate::digest::record::{RawRelease, ReleaseRecord, validate_releases};

/// Heading every digest starts with.
pub const RELEASES_HEADING: &str = "# RELEASES";

/// Render the releases section for the reporting window
/// `[tail_date, head_date]`.
///
/// The window is context only: `releases` is expected to hold what the
/// listing already narrowed down to the window. Malformed and null entries
/// are dropped before counting, so this never fails.
pub fn markdown_releases(
    releases: Option<&[Option<RawRelease>]>,
    head_date: DateTime<Utc>,
    tail_date: DateTime<Utc>,
) -> String {
    let records = validate_releases(releases);

    debug!(
        "rendering {} release(s) for window {} - {}",
        records.len(),
        tail_date.to_rfc3339(),
        head_date.to_rfc3339()
    );

    let mut lines = vec![
        RELEASES_HEADING.to_string(),
        String::new(),
        summary_line(records.len()),
    ];

    lines.extend(records.iter().map(release_line));

    lines.join("\n")
}

fn summary_line(count: usize) -> String {
    match count {
        0 => "Last week there were no releases.".to_string(),
        1 => "Last week there was 1 release.".to_string(),
        n => format!("Last week there were {n} releases."),
    }
}

fn release_line(record: &ReleaseRecord) -> String {
    let text = match &record.name {
        Some(name) => format!("{name} {}", record.tag_name),
        None => record.tag_name.clone(),
    };

    format!(":rocket: [{text}]({})", record.html_url)
}

#[cfg(test)]
#[path = "./markdown_tests.rs"]
mod tests;
