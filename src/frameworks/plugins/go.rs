//! Go toolchain, attached to the main category.

use crate::error::Result;
use crate::frameworks::framework::FrameworkSpec;
use crate::frameworks::plugins::PluginModule;
use crate::install::{ArchiveInstaller, Installer};

pub const MODULE: PluginModule = PluginModule {
    name: "go",
    categories: &[],
    frameworks: FRAMEWORKS,
};

const FRAMEWORKS: &[FrameworkSpec] = &[FrameworkSpec {
    only_on_archs: &["amd64", "arm64"],
    ..FrameworkSpec::base("Go", "Go language compiler and tools", go_lang)
}];

fn go_lang(_spec: &FrameworkSpec) -> Result<Box<dyn Installer>> {
    Ok(Box::new(ArchiveInstaller::tarball(
        "https://go.dev/dl/go1.22.5.linux-amd64.tar.gz",
    )?))
}
