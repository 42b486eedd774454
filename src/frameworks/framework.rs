//! Framework entity: one installable developer tool.

use std::path::{Path, PathBuf};

use tracing::{debug, error, info};

use crate::error::Result;
use crate::frameworks::category::Category;
use crate::frameworks::{gate, prog_name};
use crate::host::Host;
use crate::install::{InstallRequest, Installer};
use crate::shell;

/// Pure plugin descriptor for a framework.
///
/// The installer field is a fallible factory: a descriptor carrying bad
/// data (say, a malformed download URL) fails at discovery time and only
/// that one framework is skipped.
pub struct FrameworkSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub is_category_default: bool,
    /// Install directory relative to the tools root; derived from the
    /// category and framework program names when absent.
    pub install_path_dir: Option<&'static str>,
    /// Architecture whitelist; empty means no restriction.
    pub only_on_archs: &'static [&'static str],
    /// OS release whitelist; empty means no restriction.
    pub only_on_versions: &'static [&'static str],
    pub packages_requirements: &'static [&'static str],
    pub installer: fn(&FrameworkSpec) -> Result<Box<dyn Installer>>,
}

impl FrameworkSpec {
    /// Descriptor template with no restrictions and no default claim.
    pub const fn base(
        name: &'static str,
        description: &'static str,
        installer: fn(&FrameworkSpec) -> Result<Box<dyn Installer>>,
    ) -> Self {
        Self {
            name,
            description,
            is_category_default: false,
            install_path_dir: None,
            only_on_archs: &[],
            only_on_versions: &[],
            packages_requirements: &[],
            installer,
        }
    }
}

/// What a `setup` call amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupOutcome {
    /// The install ran to completion.
    Completed,
    /// The framework is not installable here; nothing was touched.
    Refused,
    /// The process re-executed itself under elevated privileges; the child
    /// did the work and its exit status must become ours.
    Elevated(i32),
}

/// One installable tool, bound to its category at build time.
pub struct Framework {
    name: String,
    prog: String,
    description: String,
    category_prog: String,
    is_category_default: bool,
    only_on_archs: Vec<String>,
    only_on_versions: Vec<String>,
    packages_requirements: Vec<String>,
    need_root_access: bool,
    default_install_path: PathBuf,
    install_path: PathBuf,
    installer: Box<dyn Installer>,
}

impl Framework {
    /// Build a framework from its descriptor, bound to `category`.
    ///
    /// Returns `Ok(None)` when the framework is neither installed nor
    /// installable on this machine: it then stays out of the registry for
    /// this run. An `Err` means the descriptor itself is broken.
    ///
    /// In completion mode every expensive check (package database probes,
    /// configuration reads, eligibility) is skipped and the framework is
    /// registered unconditionally; completion must stay fast.
    pub fn build(spec: &FrameworkSpec, category: &Category, host: &Host) -> Result<Option<Self>> {
        let installer = (spec.installer)(spec)?;

        let mut packages_requirements: Vec<String> = spec
            .packages_requirements
            .iter()
            .map(ToString::to_string)
            .collect();
        packages_requirements.extend(category.packages_requirements().iter().cloned());

        let prog = prog_name(spec.name);
        let relative = match spec.install_path_dir {
            Some(dir) => PathBuf::from(dir),
            None if category.is_main() => PathBuf::from(&prog),
            None => Path::new(category.prog_name()).join(&prog),
        };
        let default_install_path = host.tools_root.join(relative);

        let mut framework = Self {
            name: spec.name.to_string(),
            prog,
            description: spec.description.to_string(),
            category_prog: category.prog_name().to_string(),
            is_category_default: spec.is_category_default,
            only_on_archs: spec.only_on_archs.iter().map(ToString::to_string).collect(),
            only_on_versions: spec
                .only_on_versions
                .iter()
                .map(ToString::to_string)
                .collect(),
            packages_requirements,
            need_root_access: false,
            install_path: default_install_path.clone(),
            default_install_path,
            installer,
        };

        if host.completion_mode {
            return Ok(Some(framework));
        }

        framework.need_root_access = match host
            .requirements
            .is_bucket_installed(&framework.packages_requirements)
        {
            Ok(installed) => !installed,
            Err(_) => false,
        };

        if let Some(path) = host
            .config
            .framework_path(&framework.category_prog, &framework.prog)
        {
            framework.install_path = path;
        }

        if !framework.is_installed(host) && !framework.is_installable(host) {
            info!(
                "Not registering '{}': not installable on this configuration.",
                framework.name
            );
            return Ok(None);
        }

        Ok(Some(framework))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Programmatic, path and CLI compatible name.
    pub fn prog_name(&self) -> &str {
        &self.prog
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Program name of the owning category.
    pub fn category_prog_name(&self) -> &str {
        &self.category_prog
    }

    pub fn is_category_default(&self) -> bool {
        self.is_category_default
    }

    pub(crate) fn clear_category_default(&mut self) {
        self.is_category_default = false;
    }

    pub fn only_on_archs(&self) -> &[String] {
        &self.only_on_archs
    }

    pub fn only_on_versions(&self) -> &[String] {
        &self.only_on_versions
    }

    pub fn packages_requirements(&self) -> &[String] {
        &self.packages_requirements
    }

    pub fn need_root_access(&self) -> bool {
        self.need_root_access
    }

    /// Effective install path: the persisted override when one exists,
    /// otherwise the derived default.
    pub fn install_path(&self) -> &Path {
        &self.install_path
    }

    pub fn default_install_path(&self) -> &Path {
        &self.default_install_path
    }

    /// Whether this framework can be installed on this machine.
    pub fn is_installable(&self, host: &Host) -> bool {
        gate::is_installable(self, host)
    }

    /// Whether this framework is currently installed.
    pub fn is_installed(&self, host: &Host) -> bool {
        gate::is_installed(self, host)
    }

    /// Install this framework.
    ///
    /// In order: refuse when not installable (no side effects); re-execute
    /// elevated when root is needed and we have none, handing back the
    /// child's exit status; otherwise drop any elevated privileges back to
    /// the invoking user, install into `destdir` (or the resolved install
    /// path), and persist where the framework ended up.
    pub fn setup(&self, host: &Host, destdir: Option<&Path>) -> Result<SetupOutcome> {
        if !self.is_installable(host) {
            error!("'{}' can't be installed on this machine", self.name);
            return Ok(SetupOutcome::Refused);
        }

        if self.need_root_access && !shell::is_elevated() {
            debug!("requesting root access for '{}'", self.name);
            let status = shell::reexec_elevated()?;
            return Ok(SetupOutcome::Elevated(status));
        }

        shell::drop_privileges()?;

        let install_path = destdir
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.install_path.clone());

        self.installer.install(&InstallRequest {
            name: &self.name,
            install_path: &install_path,
        })?;
        self.mark_installed(host, &install_path)?;
        info!("'{}' installed in {}", self.name, install_path.display());
        Ok(SetupOutcome::Completed)
    }

    /// Persist the install path, merging into the existing configuration.
    pub fn mark_installed(&self, host: &Host, install_path: &Path) -> Result<()> {
        host.config
            .set_framework_path(&self.category_prog, &self.prog, install_path)
    }

    /// CLI adapter: run an invocation carrying an optional destination
    /// directory override.
    pub fn run_for(&self, host: &Host, destdir: Option<&Path>) -> Result<SetupOutcome> {
        debug!("running '{}'", self.name);
        self.setup(host, destdir)
    }

    #[cfg(test)]
    pub(crate) fn for_tests(
        name: &str,
        category_prog: &str,
        is_category_default: bool,
        install_path: PathBuf,
    ) -> Self {
        struct NoopInstaller;
        impl Installer for NoopInstaller {
            fn install(&self, _request: &InstallRequest<'_>) -> Result<()> {
                Ok(())
            }
        }

        Self {
            name: name.to_string(),
            prog: prog_name(name),
            description: String::new(),
            category_prog: category_prog.to_string(),
            is_category_default,
            only_on_archs: Vec::new(),
            only_on_versions: Vec::new(),
            packages_requirements: Vec::new(),
            need_root_access: false,
            default_install_path: install_path.clone(),
            install_path,
            installer: Box::new(NoopInstaller),
        }
    }
}
