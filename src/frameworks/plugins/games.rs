//! Games development tools.

use crate::error::Result;
use crate::frameworks::category::CategorySpec;
use crate::frameworks::framework::FrameworkSpec;
use crate::frameworks::plugins::PluginModule;
use crate::install::{ArchiveInstaller, Installer};

pub const MODULE: PluginModule = PluginModule {
    name: "games",
    categories: &[CategorySpec {
        name: "Games",
        description: "Games development environment",
        packages_requirements: &[],
    }],
    frameworks: FRAMEWORKS,
};

const FRAMEWORKS: &[FrameworkSpec] = &[
    FrameworkSpec {
        only_on_archs: &["i386", "amd64"],
        packages_requirements: &["default-jre"],
        ..FrameworkSpec::base("Stencyl", "Stencyl game developer IDE", stencyl)
    },
    FrameworkSpec::base("Twine", "Twine tool for creating interactive stories", twine),
    FrameworkSpec::base(
        "Superpowers",
        "Superpowers HTML5 collaborative game editor",
        superpowers,
    ),
    FrameworkSpec {
        only_on_archs: &["amd64"],
        packages_requirements: &["gconf2", "libgl1"],
        ..FrameworkSpec::base("Unity3D", "Unity 3D game engine editor", unity3d)
    },
];

fn stencyl(_spec: &FrameworkSpec) -> Result<Box<dyn Installer>> {
    Ok(Box::new(ArchiveInstaller::tarball(
        "https://www.stencyl.com/download/get/lin64/Stencyl-full.tar.gz",
    )?))
}

fn twine(_spec: &FrameworkSpec) -> Result<Box<dyn Installer>> {
    Ok(Box::new(ArchiveInstaller::zip(
        "https://github.com/klembot/twinejs/releases/download/2.8.1/twine_2.8.1_linux.zip",
    )?))
}

fn superpowers(_spec: &FrameworkSpec) -> Result<Box<dyn Installer>> {
    Ok(Box::new(ArchiveInstaller::zip(
        "https://github.com/superpowers/superpowers-app/releases/download/v4.0.2/superpowers-v4.0.2-linux-x64.zip",
    )?))
}

fn unity3d(_spec: &FrameworkSpec) -> Result<Box<dyn Installer>> {
    Ok(Box::new(ArchiveInstaller::tarball(
        "https://beta.unity3d.com/download/unity-editor-installer.tar.xz",
    )?))
}
