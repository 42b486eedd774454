//! Platform identification.
//!
//! Frameworks can restrict themselves to a set of machine architectures or
//! OS releases. This module answers "what machine is this?" behind the
//! [`PlatformInfo`] trait so eligibility checks stay testable.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::Result;

/// Answers environment questions used by install eligibility checks.
///
/// Both methods return `Result` so detection failures can be handled fail
/// closed by callers instead of aborting a discovery pass.
pub trait PlatformInfo {
    /// Current machine architecture, in distribution package notation
    /// (`amd64`, `arm64`, `i386`, ...).
    fn arch(&self) -> Result<String>;

    /// Current OS release identifier (the `VERSION_ID` of os-release).
    fn os_version(&self) -> Result<String>;
}

/// [`PlatformInfo`] backed by the running system.
#[derive(Debug, Default)]
pub struct SystemPlatform;

impl SystemPlatform {
    pub fn new() -> Self {
        Self
    }
}

impl PlatformInfo for SystemPlatform {
    fn arch(&self) -> Result<String> {
        Ok(deb_arch(std::env::consts::ARCH).to_string())
    }

    fn os_version(&self) -> Result<String> {
        os_release_version(Path::new("/etc/os-release"))
    }
}

/// Map a Rust target architecture to the package-archive notation used in
/// framework restriction lists.
fn deb_arch(rust_arch: &str) -> &str {
    match rust_arch {
        "x86_64" => "amd64",
        "x86" => "i386",
        "aarch64" => "arm64",
        "arm" => "armhf",
        "powerpc64" => "ppc64el",
        other => other,
    }
}

static RE_VERSION_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?m)^VERSION_ID="?([^"\n]+)"?$"#).unwrap());

/// Extract `VERSION_ID` from an os-release file.
fn os_release_version(path: &Path) -> Result<String> {
    let contents = std::fs::read_to_string(path)?;
    RE_VERSION_ID
        .captures(&contents)
        .map(|caps| caps[1].to_string())
        .ok_or_else(|| {
            anyhow::anyhow!("no VERSION_ID field in {}", path.display()).into()
        })
}

/// Canned [`PlatformInfo`] answers, for tests and dry environments.
#[derive(Debug, Clone)]
pub struct StaticPlatform {
    arch: String,
    os_version: String,
}

impl StaticPlatform {
    pub fn new(arch: &str, os_version: &str) -> Self {
        Self {
            arch: arch.to_string(),
            os_version: os_version.to_string(),
        }
    }
}

impl PlatformInfo for StaticPlatform {
    fn arch(&self) -> Result<String> {
        Ok(self.arch.clone())
    }

    fn os_version(&self) -> Result<String> {
        Ok(self.os_version.clone())
    }
}
