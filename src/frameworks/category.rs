//! Category entity: a named group of installable frameworks.

use std::path::Path;

use tracing::error;

use crate::error::{Result, ToolchestError};
use crate::frameworks::framework::{Framework, SetupOutcome};
use crate::frameworks::prog_name;
use crate::host::Host;

/// Pure plugin descriptor for a category.
#[derive(Debug, Clone, Copy)]
pub struct CategorySpec {
    pub name: &'static str,
    pub description: &'static str,
    /// Package requirements inherited by every member framework.
    pub packages_requirements: &'static [&'static str],
}

/// Aggregate installed state of a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallState {
    NotInstalled,
    PartiallyInstalled,
    FullyInstalled,
}

impl InstallState {
    pub fn as_str(&self) -> &'static str {
        match self {
            InstallState::NotInstalled => "not installed",
            InstallState::PartiallyInstalled => "partially installed",
            InstallState::FullyInstalled => "fully installed",
        }
    }
}

/// A named group of frameworks.
///
/// Owns its member frameworks and enforces the per-category invariants:
/// framework program names are unique, and at most one member holds the
/// category-default flag.
pub struct Category {
    name: String,
    prog: String,
    description: String,
    is_main: bool,
    packages_requirements: Vec<String>,
    frameworks: Vec<Framework>,
}

impl Category {
    pub fn new(
        name: &str,
        description: &str,
        is_main: bool,
        packages_requirements: &[&str],
    ) -> Self {
        Self {
            name: name.to_string(),
            prog: prog_name(name),
            description: description.to_string(),
            is_main,
            packages_requirements: packages_requirements
                .iter()
                .map(ToString::to_string)
                .collect(),
            frameworks: Vec::new(),
        }
    }

    /// The main category. Its frameworks attach directly to the top-level
    /// command, and it can never hold a default framework.
    pub fn main() -> Self {
        Self::new("main", "", true, &[])
    }

    pub fn from_spec(spec: &CategorySpec) -> Self {
        Self::new(spec.name, spec.description, false, spec.packages_requirements)
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

    pub fn is_main(&self) -> bool {
        self.is_main
    }

    pub fn packages_requirements(&self) -> &[String] {
        &self.packages_requirements
    }

    /// Member frameworks, in registration order.
    pub fn frameworks(&self) -> &[Framework] {
        &self.frameworks
    }

    /// Look up a member framework by program name.
    pub fn framework(&self, prog: &str) -> Option<&Framework> {
        self.frameworks.iter().find(|f| f.prog_name() == prog)
    }

    pub fn has_frameworks(&self) -> bool {
        !self.frameworks.is_empty()
    }

    pub fn has_one_framework(&self) -> bool {
        self.frameworks.len() == 1
    }

    /// The member framework carrying the category-default flag, if any.
    pub fn default_framework(&self) -> Option<&Framework> {
        self.frameworks.iter().find(|f| f.is_category_default())
    }

    /// Register a framework into this category.
    ///
    /// Conflicts are resolved here, as one registration-time decision:
    /// - a duplicate program name loses to the first registrant;
    /// - a default claim on the main category is cleared;
    /// - a second default claim clears both the claim and the previous
    ///   holder's flag, so neither ends up default.
    pub fn register_framework(&mut self, mut framework: Framework) {
        if self.framework(framework.prog_name()).is_some() {
            error!(
                "There is already a registered framework named '{}' in '{}'. Not registering the second one.",
                framework.name(),
                self.name
            );
            return;
        }

        if framework.is_category_default() {
            if self.is_main {
                error!(
                    "The main category can't have a default framework, as '{}' requests. Clearing the flag.",
                    framework.name()
                );
                framework.clear_category_default();
            } else if let Some(previous) = self
                .frameworks
                .iter_mut()
                .find(|f| f.is_category_default())
            {
                error!(
                    "Can't set '{}' as default for '{}': this category already has a default framework ('{}'). Clearing both.",
                    framework.name(),
                    self.name,
                    previous.name()
                );
                framework.clear_category_default();
                previous.clear_category_default();
            }
        }

        self.frameworks.push(framework);
    }

    /// Aggregate installed state over the member frameworks.
    ///
    /// An empty category is not installed.
    pub fn install_state(&self, host: &Host) -> InstallState {
        let installed = self
            .frameworks
            .iter()
            .filter(|f| f.is_installed(host))
            .count();
        if installed == 0 {
            InstallState::NotInstalled
        } else if installed == self.frameworks.len() {
            InstallState::FullyInstalled
        } else {
            InstallState::PartiallyInstalled
        }
    }

    /// Route an invocation to a member framework.
    ///
    /// With no framework named, the category default runs; a category with
    /// a single member treats it as the default. A category that reaches
    /// this point with neither is a registration bug and aborts the run.
    pub fn run_for(
        &self,
        host: &Host,
        framework: Option<&str>,
        destdir: Option<&Path>,
    ) -> Result<SetupOutcome> {
        let framework = match framework {
            Some(prog) => self.framework(prog).ok_or_else(|| {
                ToolchestError::UnknownFramework {
                    category: self.name.clone(),
                    name: prog.to_string(),
                }
            })?,
            None => self
                .default_framework()
                .or_else(|| {
                    if self.has_one_framework() {
                        self.frameworks.first()
                    } else {
                        None
                    }
                })
                .ok_or_else(|| {
                    error!(
                        "A default framework for category '{}' was requested where there is none",
                        self.name
                    );
                    ToolchestError::NoDefaultFramework {
                        category: self.name.clone(),
                    }
                })?,
        };
        framework.run_for(host, destdir)
    }
}
