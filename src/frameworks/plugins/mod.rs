//! Built-in plugin descriptor set.
//!
//! Each plugin module declares its categories and frameworks as pure
//! descriptors; discovery walks [`modules`] and instantiates them. A module
//! with no category attaches its frameworks to the main category.

pub mod android;
pub mod games;
pub mod go;
pub mod ide;
pub mod web;

use crate::frameworks::category::CategorySpec;
use crate::frameworks::framework::FrameworkSpec;

/// One plugin: the categories it declares and the frameworks that attach
/// to the last of them (or to the main category when it declares none).
pub struct PluginModule {
    pub name: &'static str,
    pub categories: &'static [CategorySpec],
    pub frameworks: &'static [FrameworkSpec],
}

/// Every built-in plugin, in load order.
pub fn modules() -> &'static [PluginModule] {
    static MODULES: &[PluginModule] = &[
        android::MODULE,
        games::MODULE,
        go::MODULE,
        ide::MODULE,
        web::MODULE,
    ];
    MODULES
}
