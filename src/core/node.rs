//! Node.js runtime archive download.
//!
//! Fetches `node-<version>-<platform>.tar.xz` from the Node.js distribution
//! host into a local directory, for bundling with game-server builds.

use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{DownloadError, Result};

/// A specific Node.js release for one platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRelease {
    version: String,
    platform: String,
}

impl NodeRelease {
    /// Create a release, adding the leading `v` when missing.
    ///
    /// # Errors
    ///
    /// Returns `DownloadError::InvalidVersion` for an empty version or one
    /// containing `/` or whitespace.
    pub fn new(version: &str, platform: impl Into<String>) -> Result<Self> {
        let version = version.trim();
        if version.is_empty()
            || version == "v"
            || version.contains('/')
            || version.chars().any(char::is_whitespace)
        {
            return Err(DownloadError::InvalidVersion(version.to_string()).into());
        }

        let version = if version.starts_with('v') {
            version.to_string()
        } else {
            format!("v{}", version)
        };

        Ok(Self {
            version,
            platform: platform.into(),
        })
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn platform(&self) -> &str {
        &self.platform
    }

    /// Archive file name, e.g. `node-v20.9.0-linux-x64.tar.xz`.
    pub fn archive_name(&self) -> String {
        format!("node-{}-{}.tar.xz", self.version, self.platform)
    }

    /// Download URL under `dist_url`.
    pub fn url(&self, dist_url: &str) -> String {
        format!(
            "{}/{}/{}",
            dist_url.trim_end_matches('/'),
            self.version,
            self.archive_name()
        )
    }
}

/// Platform suffix of the current host, if Node.js publishes a tarball for it.
pub fn host_platform() -> Option<&'static str> {
    platform_for(std::env::consts::OS, std::env::consts::ARCH)
}

fn platform_for(os: &str, arch: &str) -> Option<&'static str> {
    match (os, arch) {
        ("linux", "x86_64") => Some("linux-x64"),
        ("linux", "aarch64") => Some("linux-arm64"),
        ("macos", "x86_64") => Some("darwin-x64"),
        ("macos", "aarch64") => Some("darwin-arm64"),
        _ => None,
    }
}

/// Blocking HTTP downloader.
pub struct Downloader {
    runtime: tokio::runtime::Runtime,
    client: reqwest::Client,
}

impl Downloader {
    /// Create a downloader with its own current-thread runtime.
    pub fn new() -> Result<Self> {
        Self::with_builder(reqwest::Client::builder())
    }

    fn with_builder(builder: reqwest::ClientBuilder) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| DownloadError::Http(format!("failed to create runtime: {}", e)))?;
        let client = builder
            .user_agent(concat!("liftkit/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(DownloadError::from)?;
        Ok(Self { runtime, client })
    }

    /// GET `url` and return the body.
    ///
    /// # Errors
    ///
    /// Returns `DownloadError::Status` for any status other than 200 and
    /// `DownloadError::Http` for transport failures.
    pub fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        debug!(url, "GET");
        let body = self.runtime.block_on(async {
            let response = self.client.get(url).send().await?;
            let status = response.status();
            debug!(status = status.as_u16(), "response");
            if status != reqwest::StatusCode::OK {
                return Err(DownloadError::Status(status.as_u16()));
            }
            Ok::<_, DownloadError>(response.bytes().await?)
        })?;
        Ok(body.to_vec())
    }
}

/// Download a release archive into `target_dir`, creating it if needed.
///
/// Nothing is written unless the server answers 200.
pub fn download(
    downloader: &Downloader,
    release: &NodeRelease,
    dist_url: &str,
    target_dir: &Path,
    console: &mut dyn Write,
) -> Result<PathBuf> {
    std::fs::create_dir_all(target_dir)?;
    let target = target_dir.join(release.archive_name());

    writeln!(console, "Downloading Node.js version {}...", release.version())?;
    let body = downloader.fetch(&release.url(dist_url))?;
    std::fs::write(&target, &body)?;
    debug!(path = %target.display(), bytes = body.len(), "archive written");
    writeln!(console, "Downloaded Node.js to {}", target.display())?;

    Ok(target)
}
