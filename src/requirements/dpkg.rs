//! Requirement checking against the dpkg/apt package database.
//!
//! Probes are shelled out (`dpkg-query` for installed state, `apt-cache`
//! for availability) and cached per package for the lifetime of the
//! checker, so a bucket shared by several frameworks is only probed once.

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::{Result, ToolchestError};
use crate::requirements::RequirementsChecker;
use crate::shell::execute_quiet;

static RE_PACKAGE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9][a-z0-9+.:-]*$").unwrap());

#[derive(Debug, Clone, Copy)]
struct PackageState {
    installed: bool,
    available: bool,
}

/// [`RequirementsChecker`] backed by the system package database.
///
/// Not thread-safe: probe results are cached behind a `RefCell`, matching
/// the single-threaded discovery model of the rest of the crate.
#[derive(Debug, Default)]
pub struct DpkgRequirements {
    cache: RefCell<HashMap<String, PackageState>>,
}

impl DpkgRequirements {
    pub fn new() -> Self {
        Self::default()
    }

    fn package_state(&self, package: &str) -> Result<PackageState> {
        if !RE_PACKAGE_NAME.is_match(package) {
            return Err(ToolchestError::RequirementLookup {
                requirement: package.to_string(),
            });
        }

        if let Some(state) = self.cache.borrow().get(package) {
            return Ok(*state);
        }

        let state = PackageState {
            installed: probe_installed(package)?,
            available: probe_available(package)?,
        };
        debug!(
            "package {}: installed={}, available={}",
            package, state.installed, state.available
        );
        self.cache.borrow_mut().insert(package.to_string(), state);
        Ok(state)
    }
}

impl RequirementsChecker for DpkgRequirements {
    fn is_bucket_installed(&self, bucket: &[String]) -> Result<bool> {
        for package in bucket {
            if !self.package_state(package)?.installed {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn is_bucket_available(&self, bucket: &[String]) -> Result<bool> {
        for package in bucket {
            if !self.package_state(package)?.available {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

fn probe_installed(package: &str) -> Result<bool> {
    let output = execute_quiet(
        "dpkg-query",
        ["-W", "-f=${db:Status-Status}", package],
    )?;
    Ok(output.success && output.stdout.trim() == "installed")
}

fn probe_available(package: &str) -> Result<bool> {
    let output = execute_quiet("apt-cache", ["show", "--no-all-versions", package])?;
    Ok(output.success && !output.stdout.trim().is_empty())
}
