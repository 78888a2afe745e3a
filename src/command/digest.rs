//! Digest command implementation.
use log::*;
use std::path::Path;
use tokio::fs;

use crate::{
    cli::Args,
    config::Config,
    digest::{Window, markdown_releases},
    error::{ReleaseDigestError, Result},
    source::{SourceFactory, traits::ReleaseSource},
};

/// Load configuration, list releases for the reporting window and write the
/// rendered digest.
pub async fn execute(args: &Args) -> Result<()> {
    let config = Config::load(&args.config).await?;
    let window = resolve_window(args, &config)?;
    let source = SourceFactory::create(&args.get_source()?, &config)?;

    let digest = render_digest(source.as_ref(), &window).await?;

    write_digest(&digest, args.out_file.as_deref()).await
}

/// Build the reporting window from CLI overrides and configuration.
pub fn resolve_window(args: &Args, config: &Config) -> Result<Window> {
    let days = args.days.unwrap_or(config.window_days);

    if days == 0 {
        return Err(ReleaseDigestError::invalid_args(
            "--days must be greater than zero",
        ));
    }

    Window::ending_at(args.head_date()?, days)
}

/// List releases from `source` and render them.
pub async fn render_digest(
    source: &dyn ReleaseSource,
    window: &Window,
) -> Result<String> {
    info!("rendering release digest from {}", source.describe());

    let releases = source.list_releases(window).await?;

    Ok(markdown_releases(
        releases.as_deref(),
        window.head(),
        window.tail(),
    ))
}

/// Write the digest to `out_file`, or stdout when none is given.
pub async fn write_digest(digest: &str, out_file: Option<&Path>) -> Result<()> {
    let Some(file_path) = out_file else {
        println!("{digest}");
        return Ok(());
    };

    if let Some(parent) = file_path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).await?;
    }

    info!("writing release digest to: {}", file_path.display());
    fs::write(file_path, format!("{digest}\n")).await?;

    Ok(())
}
