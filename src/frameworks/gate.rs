//! Install eligibility and installed-state checks.
//!
//! Checks run in order: architecture whitelist, OS release whitelist,
//! requirement availability. Collaborator failures never abort a discovery
//! pass; they make the framework not installable (fail closed).

use tracing::{debug, error};

use crate::error::Result;
use crate::frameworks::framework::Framework;
use crate::host::Host;

/// Whether `framework` can be installed on this machine.
pub fn is_installable(framework: &Framework, host: &Host) -> bool {
    match check_installable(framework, host) {
        Ok(verdict) => verdict,
        Err(e) => {
            error!(
                "An error occurred when detecting the platform for '{}', treating it as not installable: {e}",
                framework.name()
            );
            false
        }
    }
}

fn check_installable(framework: &Framework, host: &Host) -> Result<bool> {
    if !framework.only_on_archs().is_empty() {
        let arch = host.platform.arch()?;
        if !framework.only_on_archs().iter().any(|a| *a == arch) {
            debug!(
                "'{}' only supports the {:?} architectures and this machine is {arch}",
                framework.name(),
                framework.only_on_archs()
            );
            return Ok(false);
        }
    }

    if !framework.only_on_versions().is_empty() {
        let version = host.platform.os_version()?;
        if !framework.only_on_versions().iter().any(|v| *v == version) {
            debug!(
                "'{}' only supports the {:?} releases and this machine runs {version}",
                framework.name(),
                framework.only_on_versions()
            );
            return Ok(false);
        }
    }

    if !host
        .requirements
        .is_bucket_available(framework.packages_requirements())?
    {
        debug!(
            "'{}' has package requirements not obtainable on this system",
            framework.name()
        );
        return Ok(false);
    }

    Ok(true)
}

/// Whether `framework` is currently installed: its install directory exists
/// on disk and its requirement bucket is present. Both must hold.
pub fn is_installed(framework: &Framework, host: &Host) -> bool {
    if !framework.install_path().is_dir() {
        return false;
    }
    match host
        .requirements
        .is_bucket_installed(framework.packages_requirements())
    {
        Ok(true) => {
            debug!("'{}' is installed", framework.name());
            true
        }
        Ok(false) => false,
        Err(e) => {
            debug!(
                "requirement lookup failed for '{}', treating as not installed: {e}",
                framework.name()
            );
            false
        }
    }
}
