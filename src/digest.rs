//! Weekly release digest: record validation, reporting window and the
//! Markdown formatter.
pub mod markdown;
pub mod record;
pub mod window;

pub use markdown::{RELEASES_HEADING, markdown_releases};
pub use record::{
    RawRelease, Rejection, ReleaseRecord, ReleaseSet, validate_releases,
};
pub use window::{DEFAULT_WINDOW_DAYS, Window};
