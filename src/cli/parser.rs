//! Dynamic command tree construction.

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};
use tracing::debug;

use crate::frameworks::{Framework, Registry};

/// Build the full command tree for a populated registry.
///
/// Categories without any registered framework contribute no subcommand.
pub fn build_cli(registry: &Registry) -> Command {
    let mut cmd = Command::new("toolchest")
        .about("Install developer tools on your system")
        .version(env!("CARGO_PKG_VERSION"))
        .arg_required_else_help(true)
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Enable debug logging"),
        )
        .subcommand(
            Command::new("list")
                .about("List available categories and frameworks")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .required(true)
                        .value_parser(value_parser!(clap_complete::Shell)),
                ),
        );

    for category in registry.categories() {
        if !category.has_frameworks() {
            debug!("skipping '{}': no registered framework", category.name());
            continue;
        }
        if category.is_main() {
            for framework in category.frameworks() {
                cmd = cmd.subcommand(framework_command(framework));
            }
        } else {
            let mut sub = Command::new(category.prog_name().to_string())
                .about(category.description().to_string());
            for framework in category.frameworks() {
                sub = sub.subcommand(framework_command(framework));
            }
            cmd = cmd.subcommand(sub);
        }
    }

    cmd
}

fn framework_command(framework: &Framework) -> Command {
    Command::new(framework.prog_name().to_string())
        .about(framework.description().to_string())
        .arg(
            Arg::new("destdir")
                .value_name("DESTDIR")
                .value_parser(value_parser!(PathBuf))
                .help("Destination directory override"),
        )
}
