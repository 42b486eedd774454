//! Command-line interface.
//!
//! The surface has a small static part (`list`, `completions`, global
//! flags) and a dynamic part mirroring the registry: main-category
//! frameworks attach directly to the top-level command, every other
//! category becomes a subcommand holding its frameworks as subcommands.
//!
//! # Architecture
//!
//! - [`parser`] - builds the clap command tree from a registry
//! - [`dispatch`] - routes parsed invocations to category and framework
//! - [`list`] - the `list` subcommand rendering

pub mod dispatch;
pub mod list;
pub mod parser;

pub use dispatch::CommandDispatcher;
pub use parser::build_cli;
