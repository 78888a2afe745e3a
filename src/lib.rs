pub mod cli;
mod command;
pub mod config;
pub mod digest;
pub mod error;
pub mod source;

pub use cli::{Args, Command};
pub use command::digest::{execute, render_digest};
pub use digest::{RawRelease, ReleaseSet, Window, markdown_releases};
pub use error::{ReleaseDigestError, Result};

#[cfg(test)]
pub mod test_helpers;
