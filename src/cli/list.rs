//! The `list` subcommand.

use serde::Serialize;

use crate::error::Result;
use crate::frameworks::Registry;
use crate::host::Host;

#[derive(Debug, Serialize)]
struct CategoryListing<'a> {
    name: &'a str,
    prog_name: &'a str,
    description: &'a str,
    state: &'static str,
    frameworks: Vec<FrameworkListing<'a>>,
}

#[derive(Debug, Serialize)]
struct FrameworkListing<'a> {
    name: &'a str,
    prog_name: &'a str,
    description: &'a str,
    is_default: bool,
    is_installed: bool,
}

fn listings<'a>(registry: &'a Registry, host: &Host) -> Vec<CategoryListing<'a>> {
    registry
        .categories()
        .iter()
        .map(|category| CategoryListing {
            name: category.name(),
            prog_name: category.prog_name(),
            description: category.description(),
            state: category.install_state(host).as_str(),
            frameworks: category
                .frameworks()
                .iter()
                .map(|framework| FrameworkListing {
                    name: framework.name(),
                    prog_name: framework.prog_name(),
                    description: framework.description(),
                    is_default: framework.is_category_default(),
                    is_installed: framework.is_installed(host),
                })
                .collect(),
        })
        .collect()
}

/// Print every category with its frameworks and install state.
pub fn run(registry: &Registry, host: &Host, json: bool) -> Result<()> {
    let listings = listings(registry, host);

    if json {
        println!("{}", serde_json::to_string_pretty(&listings).map_err(anyhow::Error::from)?);
        return Ok(());
    }

    for category in &listings {
        if category.frameworks.is_empty() {
            continue;
        }
        println!("{} [{}]", category.prog_name, category.state);
        for framework in &category.frameworks {
            let mut tags = String::new();
            if framework.is_default {
                tags.push_str(" (default)");
            }
            if framework.is_installed {
                tags.push_str(" [installed]");
            }
            println!("  {}{}  {}", framework.prog_name, tags, framework.description);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigStore;
    use crate::frameworks::discovery::discover_modules;
    use crate::frameworks::plugins::PluginModule;
    use crate::frameworks::{CategorySpec, FrameworkSpec};
    use crate::install::{InstallRequest, Installer};
    use crate::platform::StaticPlatform;
    use crate::requirements::StaticRequirements;
    use tempfile::TempDir;

    struct NoopInstaller;

    impl Installer for NoopInstaller {
        fn install(&self, _request: &InstallRequest<'_>) -> Result<()> {
            Ok(())
        }
    }

    fn noop_installer(_spec: &FrameworkSpec) -> Result<Box<dyn Installer>> {
        Ok(Box::new(NoopInstaller))
    }

    const WEB: &[CategorySpec] = &[CategorySpec {
        name: "Web",
        description: "Web developer environment",
        packages_requirements: &[],
    }];

    const WEB_FRAMEWORKS: &[FrameworkSpec] = &[
        FrameworkSpec {
            is_category_default: true,
            ..FrameworkSpec::base("Visual Studio Code", "", noop_installer)
        },
        FrameworkSpec::base("Firefox Dev", "", noop_installer),
    ];

    #[test]
    fn listings_expose_state_and_default_marker() {
        let temp = TempDir::new().unwrap();
        let host = Host::new(
            Box::new(StaticPlatform::new("amd64", "24.04")),
            Box::new(StaticRequirements::new(true, true)),
            ConfigStore::new(temp.path().join("config.yml")),
            temp.path().join("tools"),
            false,
        );
        let modules = [PluginModule {
            name: "web",
            categories: WEB,
            frameworks: WEB_FRAMEWORKS,
        }];
        let registry = discover_modules(&modules, &host);
        // One of the two frameworks present on disk.
        std::fs::create_dir_all(temp.path().join("tools/web/firefox-dev")).unwrap();

        let listings = listings(&registry, &host);
        let web = listings.iter().find(|c| c.prog_name == "web").unwrap();
        assert_eq!(web.state, "partially installed");

        let vscode = web
            .frameworks
            .iter()
            .find(|f| f.prog_name == "visual-studio-code")
            .unwrap();
        assert!(vscode.is_default);
        assert!(!vscode.is_installed);

        let firefox = web
            .frameworks
            .iter()
            .find(|f| f.prog_name == "firefox-dev")
            .unwrap();
        assert!(firefox.is_installed);

        let json = serde_json::to_value(&listings).unwrap();
        assert_eq!(json[1]["prog_name"], "web");
        assert_eq!(json[1]["frameworks"][0]["prog_name"], "visual-studio-code");
    }
}
