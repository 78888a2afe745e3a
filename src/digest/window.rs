//! Reporting window a digest covers.
use chrono::{DateTime, Duration, Utc};

use crate::error::{ReleaseDigestError, Result};

/// Default number of days covered by a digest.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Inclusive `[tail, head]` interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    head: DateTime<Utc>,
    tail: DateTime<Utc>,
}

impl Window {
    pub fn new(head: DateTime<Utc>, tail: DateTime<Utc>) -> Result<Self> {
        if tail > head {
            return Err(ReleaseDigestError::invalid_args(format!(
                "window tail {} is after head {}",
                tail.to_rfc3339(),
                head.to_rfc3339()
            )));
        }

        Ok(Self { head, tail })
    }

    /// Window of `days` days ending at `head`.
    pub fn ending_at(head: DateTime<Utc>, days: u32) -> Result<Self> {
        let tail = Duration::try_days(i64::from(days))
            .and_then(|span| head.checked_sub_signed(span))
            .ok_or_else(|| {
                ReleaseDigestError::invalid_args(format!(
                    "a window of {days} days before {} is out of range",
                    head.to_rfc3339()
                ))
            })?;

        Ok(Self { head, tail })
    }

    pub fn head(&self) -> DateTime<Utc> {
        self.head
    }

    pub fn tail(&self) -> DateTime<Utc> {
        self.tail
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.tail && instant <= self.head
    }
}
