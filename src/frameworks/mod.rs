//! Category and framework registry.
//!
//! This is the heart of Toolchest: plugins declare categories (named groups
//! of installable tools) and frameworks (the tools themselves) as pure
//! descriptors; a discovery pass instantiates them, applies the
//! registration invariants, and produces a [`Registry`] that the CLI
//! mirrors as a subcommand tree.
//!
//! # Modules
//!
//! - [`category`] - named group of frameworks, default resolution
//! - [`framework`] - one installable tool and its setup contract
//! - [`gate`] - install eligibility and installed-state checks
//! - [`registry`] - process-wide category table (an explicit value)
//! - [`discovery`] - walks the plugin list and populates the registry
//! - [`plugins`] - the built-in plugin descriptor set
//!
//! The registry is built once per process (or once per explicit
//! re-discovery) on a single thread; none of these types are thread-safe.

pub mod category;
pub mod discovery;
pub mod framework;
pub mod gate;
pub mod plugins;
pub mod registry;

pub use category::{Category, CategorySpec, InstallState};
pub use discovery::{discover, discover_modules};
pub use framework::{Framework, FrameworkSpec, SetupOutcome};
pub use plugins::PluginModule;
pub use registry::Registry;

/// Program name of the main category, whose frameworks attach directly to
/// the top-level command.
pub const MAIN_CATEGORY: &str = "main";

/// Derive the programmatic, path and CLI compatible name from a display
/// name: lowercased, with spaces and slashes replaced by hyphens.
///
/// The derivation is idempotent.
pub fn prog_name(name: &str) -> String {
    name.to_lowercase().replace(['/', ' '], "-")
}
