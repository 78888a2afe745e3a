//! Upstream release listings a digest is rendered from.
pub mod config;
pub mod factory;
pub mod file;
pub mod github;
pub mod traits;

pub use config::{RemoteConfig, Source};
pub use factory::SourceFactory;
pub use traits::ReleaseSource;
