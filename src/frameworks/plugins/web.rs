//! Web development tools.

use crate::error::Result;
use crate::frameworks::category::CategorySpec;
use crate::frameworks::framework::FrameworkSpec;
use crate::frameworks::plugins::PluginModule;
use crate::install::{ArchiveInstaller, Installer};

pub const MODULE: PluginModule = PluginModule {
    name: "web",
    categories: &[CategorySpec {
        name: "Web",
        description: "Web developer environment",
        packages_requirements: &[],
    }],
    frameworks: FRAMEWORKS,
};

const FRAMEWORKS: &[FrameworkSpec] = &[
    FrameworkSpec {
        only_on_archs: &["i386", "amd64"],
        ..FrameworkSpec::base(
            "Firefox Dev",
            "Firefox Developer Edition",
            firefox_dev,
        )
    },
    FrameworkSpec {
        is_category_default: true,
        only_on_archs: &["amd64", "arm64"],
        ..FrameworkSpec::base(
            "Visual Studio Code",
            "Visual Studio focused on modern web and cloud",
            visual_studio_code,
        )
    },
];

fn firefox_dev(_spec: &FrameworkSpec) -> Result<Box<dyn Installer>> {
    Ok(Box::new(ArchiveInstaller::tarball(
        "https://download.mozilla.org/?product=firefox-devedition-latest-ssl&os=linux64&lang=en-US",
    )?))
}

fn visual_studio_code(_spec: &FrameworkSpec) -> Result<Box<dyn Installer>> {
    Ok(Box::new(ArchiveInstaller::tarball(
        "https://update.code.visualstudio.com/latest/linux-x64/stable",
    )?))
}
