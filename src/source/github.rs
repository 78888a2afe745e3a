//! Implements the ReleaseSource trait for Github
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::*;
use octocrab::{Octocrab, Page, models::repos::Release};

use crate::{
    config::GithubConfig,
    digest::{RawRelease, ReleaseSet, Window},
    error::Result,
    source::{config::RemoteConfig, traits::ReleaseSource},
};

/// Release as listed by the GitHub API, reduced to what the digest and the
/// window filter need.
#[derive(Debug, Clone)]
struct ListedRelease {
    raw: RawRelease,
    created_at: Option<DateTime<Utc>>,
    draft: bool,
    prerelease: bool,
}

impl From<Release> for ListedRelease {
    fn from(release: Release) -> Self {
        Self {
            raw: RawRelease {
                tag_name: Some(release.tag_name),
                name: release.name,
                html_url: Some(release.html_url.to_string()),
                created_at: release.created_at.map(|d| d.to_rfc3339()),
            },
            created_at: release.created_at,
            draft: release.draft,
            prerelease: release.prerelease,
        }
    }
}

/// GitHub release listing using Octocrab, narrowed to the reporting window.
pub struct Github {
    config: RemoteConfig,
    settings: GithubConfig,
    instance: Octocrab,
}

impl Github {
    /// Create GitHub client with optional personal access token
    /// authentication and API base URL configuration.
    pub fn new(config: RemoteConfig, settings: GithubConfig) -> Result<Self> {
        let mut builder = Octocrab::builder().base_uri(config.api_url.clone())?;

        if let Some(token) = config.token.clone() {
            builder = builder.personal_token(token);
        } else {
            warn!("no github token configured: using unauthenticated requests");
        }

        let instance = builder.build()?;

        Ok(Self {
            config,
            settings,
            instance,
        })
    }

    fn keep(&self, release: &ListedRelease, window: &Window) -> bool {
        if release.draft && !self.settings.include_drafts {
            debug!("skipping draft release: {:?}", release.raw.tag_name);
            return false;
        }

        if release.prerelease && !self.settings.include_prereleases {
            debug!("skipping prerelease: {:?}", release.raw.tag_name);
            return false;
        }

        release.created_at.is_some_and(|d| window.contains(d))
    }
}

/// Releases are listed newest first, so once a page ends before the tail
/// every later page does too.
fn reached_tail(page: &[ListedRelease], window: &Window) -> bool {
    page.iter()
        .rev()
        .find_map(|r| r.created_at)
        .is_some_and(|oldest| oldest < window.tail())
}

#[async_trait]
impl ReleaseSource for Github {
    fn describe(&self) -> String {
        format!(
            "github {}/{}/{}",
            self.config.host, self.config.owner, self.config.repo
        )
    }

    async fn list_releases(&self, window: &Window) -> Result<ReleaseSet> {
        info!(
            "listing releases for {}/{} between {} and {}",
            self.config.owner,
            self.config.repo,
            window.tail().to_rfc3339(),
            window.head().to_rfc3339()
        );

        let mut page: Page<Release> = self
            .instance
            .repos(&self.config.owner, &self.config.repo)
            .releases()
            .list()
            .per_page(self.settings.page_size)
            .send()
            .await?;

        let mut releases = vec![];

        loop {
            let listed = page
                .take_items()
                .into_iter()
                .map(ListedRelease::from)
                .collect::<Vec<ListedRelease>>();

            let done = reached_tail(&listed, window);

            releases.extend(
                listed
                    .into_iter()
                    .filter(|r| self.keep(r, window))
                    .map(|r| Some(r.raw)),
            );

            if done {
                break;
            }

            match self.instance.get_page::<Release>(&page.next).await? {
                Some(next) => page = next,
                None => break,
            }
        }

        info!("found {} release(s) in window", releases.len());

        Ok(Some(releases))
    }
}
