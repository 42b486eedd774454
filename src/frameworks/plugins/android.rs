//! Android development tools.

use crate::error::Result;
use crate::frameworks::category::CategorySpec;
use crate::frameworks::framework::FrameworkSpec;
use crate::frameworks::plugins::PluginModule;
use crate::install::{ArchiveInstaller, Installer, PackageInstaller};

pub const MODULE: PluginModule = PluginModule {
    name: "android",
    categories: &[CategorySpec {
        name: "Android",
        description: "Android mobile development platform",
        packages_requirements: &["default-jre"],
    }],
    frameworks: FRAMEWORKS,
};

const FRAMEWORKS: &[FrameworkSpec] = &[
    FrameworkSpec {
        is_category_default: true,
        only_on_archs: &["amd64"],
        ..FrameworkSpec::base(
            "Android Studio",
            "Android IDE from Google",
            android_studio,
        )
    },
    FrameworkSpec {
        packages_requirements: &["adb", "fastboot"],
        ..FrameworkSpec::base(
            "Platform Tools",
            "adb and fastboot command line tools",
            platform_tools,
        )
    },
];

fn android_studio(_spec: &FrameworkSpec) -> Result<Box<dyn Installer>> {
    Ok(Box::new(ArchiveInstaller::tarball(
        "https://dl.google.com/dl/android/studio/ide-zips/2024.1.1.11/android-studio-2024.1.1.11-linux.tar.gz",
    )?))
}

fn platform_tools(_spec: &FrameworkSpec) -> Result<Box<dyn Installer>> {
    Ok(Box::new(PackageInstaller::new(["adb", "fastboot"])))
}
