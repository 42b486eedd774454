//! Invocation routing.

use std::io;
use std::path::PathBuf;

use clap::ArgMatches;

use crate::cli::{list, parser};
use crate::error::{Result, ToolchestError};
use crate::frameworks::{Registry, SetupOutcome, MAIN_CATEGORY};
use crate::host::Host;

/// Routes a parsed invocation through the registry.
pub struct CommandDispatcher<'a> {
    registry: &'a Registry,
    host: &'a Host,
}

impl<'a> CommandDispatcher<'a> {
    pub fn new(registry: &'a Registry, host: &'a Host) -> Self {
        Self { registry, host }
    }

    /// Dispatch a parsed invocation.
    ///
    /// Install routes resolve category → framework; a subcommand that is
    /// not a category is a framework of the main category.
    pub fn dispatch(&self, matches: &ArgMatches) -> Result<SetupOutcome> {
        match matches.subcommand() {
            Some(("list", sub)) => {
                list::run(self.registry, self.host, sub.get_flag("json"))?;
                Ok(SetupOutcome::Completed)
            }
            Some(("completions", sub)) => {
                let shell = *sub
                    .get_one::<clap_complete::Shell>("shell")
                    .ok_or_else(|| anyhow::anyhow!("missing shell argument"))?;
                let mut cmd = parser::build_cli(self.registry);
                clap_complete::generate(shell, &mut cmd, "toolchest", &mut io::stdout());
                Ok(SetupOutcome::Completed)
            }
            Some((name, sub)) => self.dispatch_install(name, sub),
            None => Err(anyhow::anyhow!("no command supplied").into()),
        }
    }

    fn dispatch_install(&self, name: &str, sub: &ArgMatches) -> Result<SetupOutcome> {
        if let Some(category) = self.registry.category(name) {
            if !category.is_main() {
                let (framework, destdir) = match sub.subcommand() {
                    Some((framework, fw_sub)) => (
                        Some(framework),
                        fw_sub.get_one::<PathBuf>("destdir").cloned(),
                    ),
                    None => (None, None),
                };
                return category.run_for(self.host, framework, destdir.as_deref());
            }
        }

        let main = self
            .registry
            .main_category()
            .ok_or_else(|| ToolchestError::UnknownCategory {
                name: MAIN_CATEGORY.to_string(),
            })?;
        main.run_for(
            self.host,
            Some(name),
            sub.get_one::<PathBuf>("destdir").cloned().as_deref(),
        )
    }
}
