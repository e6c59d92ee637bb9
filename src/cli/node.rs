//! Node command - download a Node.js runtime archive.

use std::path::PathBuf;

use crate::cli::Context;
use crate::core::node::{self, Downloader, NodeRelease};
use crate::error::{DownloadError, Result};

/// Download `version` for the chosen platform.
///
/// Flags take precedence over `[node]` in the config; the platform falls
/// back to the host.
pub fn execute(
    ctx: &Context,
    version: &str,
    platform: Option<String>,
    target_dir: Option<PathBuf>,
) -> Result<()> {
    let settings = &ctx.config.node;

    let platform = match platform.or_else(|| settings.platform.clone()) {
        Some(p) => p,
        None => node::host_platform()
            .map(str::to_string)
            .ok_or_else(|| {
                DownloadError::UnsupportedPlatform(format!(
                    "{}-{}",
                    std::env::consts::OS,
                    std::env::consts::ARCH
                ))
            })?,
    };
    let target_dir = target_dir.unwrap_or_else(|| settings.target_dir.clone());

    let release = NodeRelease::new(version, platform)?;
    let downloader = Downloader::new()?;

    let stdout = std::io::stdout();
    let mut console = stdout.lock();
    node::download(
        &downloader,
        &release,
        &settings.dist_url,
        &target_dir,
        &mut console,
    )?;
    Ok(())
}
