//! Download-and-unpack installer.

use std::ffi::OsStr;
use std::fs;
use std::io;

use tracing::{debug, info};

use crate::error::{Result, ToolchestError};
use crate::install::{InstallRequest, Installer};
use crate::shell::execute_quiet;

/// How the downloaded archive is unpacked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveKind {
    /// Any `tar`-readable archive (gz, bz2, xz); compression is detected
    /// by tar itself.
    Tarball,
    /// Zip archive.
    Zip,
}

/// Downloads an archive over HTTPS and unpacks it into the destination.
#[derive(Debug, Clone)]
pub struct ArchiveInstaller {
    url: String,
    kind: ArchiveKind,
}

impl ArchiveInstaller {
    /// Build an installer for a tar archive. Fails on a malformed URL so a
    /// bad plugin descriptor is caught at discovery time, not install time.
    pub fn tarball(url: &str) -> Result<Self> {
        Self::new(url, ArchiveKind::Tarball)
    }

    /// Build an installer for a zip archive.
    pub fn zip(url: &str) -> Result<Self> {
        Self::new(url, ArchiveKind::Zip)
    }

    fn new(url: &str, kind: ArchiveKind) -> Result<Self> {
        let parsed = reqwest::Url::parse(url).map_err(|e| ToolchestError::InvalidDownloadUrl {
            url: url.to_string(),
            message: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ToolchestError::InvalidDownloadUrl {
                url: url.to_string(),
                message: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }
        Ok(Self {
            url: url.to_string(),
            kind,
        })
    }

    /// Download URL this installer fetches from.
    pub fn url(&self) -> &str {
        &self.url
    }

    fn download(&self) -> Result<tempfile::NamedTempFile> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("toolchest/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ToolchestError::Download {
                url: self.url.clone(),
                message: e.to_string(),
            })?;

        let mut response = client
            .get(&self.url)
            .send()
            .map_err(|e| ToolchestError::Download {
                url: self.url.clone(),
                message: e.to_string(),
            })?;
        if !response.status().is_success() {
            return Err(ToolchestError::Download {
                url: self.url.clone(),
                message: format!("server answered {}", response.status()),
            });
        }

        let mut file = tempfile::NamedTempFile::new()?;
        io::copy(&mut response, file.as_file_mut()).map_err(|e| ToolchestError::Download {
            url: self.url.clone(),
            message: e.to_string(),
        })?;
        Ok(file)
    }
}

impl Installer for ArchiveInstaller {
    fn install(&self, request: &InstallRequest<'_>) -> Result<()> {
        info!("downloading {} from {}", request.name, self.url);
        let archive = self.download()?;

        fs::create_dir_all(request.install_path)?;
        debug!(
            "unpacking {} into {}",
            archive.path().display(),
            request.install_path.display()
        );

        let output = match self.kind {
            ArchiveKind::Tarball => execute_quiet(
                "tar",
                [
                    OsStr::new("xf"),
                    archive.path().as_os_str(),
                    OsStr::new("-C"),
                    request.install_path.as_os_str(),
                    OsStr::new("--strip-components=1"),
                ],
            )?,
            ArchiveKind::Zip => execute_quiet(
                "unzip",
                [
                    OsStr::new("-q"),
                    OsStr::new("-o"),
                    archive.path().as_os_str(),
                    OsStr::new("-d"),
                    request.install_path.as_os_str(),
                ],
            )?,
        };

        if !output.success {
            return Err(ToolchestError::ExtractFailed {
                dest: request.install_path.to_path_buf(),
                message: output.stderr.trim().to_string(),
            });
        }
        Ok(())
    }
}
