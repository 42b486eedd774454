//! Installation mechanics behind a narrow interface.
//!
//! The registry core only decides *whether* and *where* a framework gets
//! installed; the mechanics of putting bits on disk live behind the
//! [`Installer`] trait so plugins can pick the strategy that fits.

pub mod archive;
pub mod package;

pub use archive::{ArchiveInstaller, ArchiveKind};
pub use package::PackageInstaller;

use std::path::Path;

use crate::error::Result;

/// A single install job, already privilege-checked and path-resolved.
#[derive(Debug)]
pub struct InstallRequest<'a> {
    /// Human-readable framework name, for diagnostics.
    pub name: &'a str,

    /// Destination directory. May not exist yet.
    pub install_path: &'a Path,
}

/// Performs the actual installation of one framework.
pub trait Installer {
    fn install(&self, request: &InstallRequest<'_>) -> Result<()>;
}
