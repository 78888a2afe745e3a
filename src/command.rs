//! Command execution for release-digest.
//!
//! The `digest` command resolves the reporting window, builds the release
//! source named on the command line, renders the Markdown digest and writes
//! it to stdout or a file.

/// Render and write a release digest.
pub mod digest;
