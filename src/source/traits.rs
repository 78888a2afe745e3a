//! Traits related to release sources
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::{
    digest::{ReleaseSet, Window},
    error::Result,
};

/// Produces the releases a digest is rendered from.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ReleaseSource {
    /// Human readable description used in logs.
    fn describe(&self) -> String;

    /// List the releases published within `window`, newest first when the
    /// source knows the order.
    async fn list_releases(&self, window: &Window) -> Result<ReleaseSet>;
}
