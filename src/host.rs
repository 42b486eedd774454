//! Machine-level collaborators bundled for discovery and dispatch.
//!
//! A [`Host`] is built once in `main` and threaded by reference through the
//! registry, the capability checks, and the installers. There is no global
//! state; tests build hosts from [`StaticPlatform`](crate::platform::StaticPlatform)
//! and [`StaticRequirements`](crate::requirements::StaticRequirements) over a
//! temporary directory.

use std::path::PathBuf;

use crate::config::ConfigStore;
use crate::error::Result;
use crate::platform::{PlatformInfo, SystemPlatform};
use crate::requirements::{DpkgRequirements, RequirementsChecker};

/// Everything the registry needs to know about the machine it runs on.
///
/// Not thread-safe; discovery and dispatch are single-threaded by design.
pub struct Host {
    /// Architecture and OS release answers.
    pub platform: Box<dyn PlatformInfo>,

    /// Package requirement answers.
    pub requirements: Box<dyn RequirementsChecker>,

    /// Persisted configuration (install path overrides).
    pub config: ConfigStore,

    /// Base directory under which frameworks install by default.
    pub tools_root: PathBuf,

    /// Shell-completion fast path: skip every expensive check and register
    /// frameworks unconditionally.
    pub completion_mode: bool,
}

impl Host {
    /// Build a host from explicit collaborators.
    pub fn new(
        platform: Box<dyn PlatformInfo>,
        requirements: Box<dyn RequirementsChecker>,
        config: ConfigStore,
        tools_root: PathBuf,
        completion_mode: bool,
    ) -> Self {
        Self {
            platform,
            requirements,
            config,
            tools_root,
            completion_mode,
        }
    }

    /// Detect the running system.
    ///
    /// Completion mode is flagged by the `COMPLETE` environment variable,
    /// which shell completion scripts set before invoking the binary.
    pub fn detect() -> Result<Self> {
        let tools_root = dirs::data_local_dir()
            .ok_or_else(|| anyhow::anyhow!("could not determine the user data directory"))?
            .join("toolchest");

        Ok(Self::new(
            Box::new(SystemPlatform::new()),
            Box::new(DpkgRequirements::new()),
            ConfigStore::default_location()?,
            tools_root,
            std::env::var_os("COMPLETE").is_some(),
        ))
    }
}
