//! Package-manager-backed installer.

use std::fs;

use tracing::info;

use crate::error::{Result, ToolchestError};
use crate::install::{InstallRequest, Installer};
use crate::shell::execute_quiet;

/// Installs a framework by pulling distribution packages.
///
/// The destination directory is still created so the installed-state check
/// (directory present + requirement bucket installed) holds afterwards.
#[derive(Debug, Clone)]
pub struct PackageInstaller {
    packages: Vec<String>,
}

impl PackageInstaller {
    pub fn new<I, S>(packages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            packages: packages.into_iter().map(Into::into).collect(),
        }
    }
}

impl Installer for PackageInstaller {
    fn install(&self, request: &InstallRequest<'_>) -> Result<()> {
        info!(
            "installing packages for {}: {}",
            request.name,
            self.packages.join(", ")
        );

        let mut args = vec!["install", "-y"];
        args.extend(self.packages.iter().map(String::as_str));
        let output = execute_quiet("apt-get", args)?;
        if !output.success {
            return Err(ToolchestError::InstallFailed {
                framework: request.name.to_string(),
                message: output.stderr.trim().to_string(),
            });
        }

        fs::create_dir_all(request.install_path)?;
        Ok(())
    }
}
