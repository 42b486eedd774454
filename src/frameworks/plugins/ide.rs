//! General-purpose IDEs.

use crate::error::Result;
use crate::frameworks::category::CategorySpec;
use crate::frameworks::framework::FrameworkSpec;
use crate::frameworks::plugins::PluginModule;
use crate::install::{ArchiveInstaller, Installer};

pub const MODULE: PluginModule = PluginModule {
    name: "ide",
    categories: &[CategorySpec {
        name: "IDE",
        description: "Generic integrated development environments",
        packages_requirements: &[],
    }],
    frameworks: FRAMEWORKS,
};

const FRAMEWORKS: &[FrameworkSpec] = &[
    FrameworkSpec {
        only_on_archs: &["amd64"],
        packages_requirements: &["default-jre"],
        ..FrameworkSpec::base("Eclipse", "Eclipse Java IDE", eclipse)
    },
    FrameworkSpec {
        is_category_default: true,
        only_on_archs: &["amd64", "arm64"],
        ..FrameworkSpec::base(
            "IntelliJ IDEA",
            "IntelliJ IDEA Community Edition",
            idea,
        )
    },
];

fn eclipse(_spec: &FrameworkSpec) -> Result<Box<dyn Installer>> {
    Ok(Box::new(ArchiveInstaller::tarball(
        "https://download.eclipse.org/technology/epp/downloads/release/2024-06/R/eclipse-java-2024-06-R-linux-gtk-x86_64.tar.gz",
    )?))
}

fn idea(_spec: &FrameworkSpec) -> Result<Box<dyn Installer>> {
    Ok(Box::new(ArchiveInstaller::tarball(
        "https://download.jetbrains.com/idea/ideaIC-2024.1.4.tar.gz",
    )?))
}
