//! Factory for creating release sources based on configuration.
use crate::{
    config::Config,
    error::Result,
    source::{
        config::{RemoteConfig, Source},
        file::FileSource,
        github::Github,
        traits::ReleaseSource,
    },
};

/// Factory for creating release source implementations.
pub struct SourceFactory;

impl SourceFactory {
    /// Create a release source for the given [`Source`].
    pub fn create(
        source: &Source,
        config: &Config,
    ) -> Result<Box<dyn ReleaseSource>> {
        let source: Box<dyn ReleaseSource> = match source {
            Source::File(path) => Box::new(FileSource::new(path)),
            Source::Github(remote) => Self::create_github(remote, config)?,
        };

        Ok(source)
    }

    fn create_github(
        remote: &RemoteConfig,
        config: &Config,
    ) -> Result<Box<dyn ReleaseSource>> {
        Ok(Box::new(Github::new(remote.clone(), config.github.clone())?))
    }
}
