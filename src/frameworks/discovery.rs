//! Discovery: walk the plugin list and populate a registry.

use tracing::{debug, error};

use crate::frameworks::category::Category;
use crate::frameworks::framework::Framework;
use crate::frameworks::plugins::{self, PluginModule};
use crate::frameworks::registry::Registry;
use crate::frameworks::MAIN_CATEGORY;
use crate::host::Host;

/// Run discovery over the built-in plugin set.
pub fn discover(host: &Host) -> Registry {
    discover_modules(plugins::modules(), host)
}

/// Run discovery over an explicit plugin set.
///
/// Builds a fresh registry every time: re-running with the same plugin set
/// reproduces the same registry state, including the same benign conflicts.
/// No entry can abort the pass; broken descriptors are reported and
/// skipped one by one.
pub fn discover_modules(modules: &[PluginModule], host: &Host) -> Registry {
    let mut registry = Registry::new();
    registry.register_category(Category::main());

    for module in modules {
        debug!("loading plugin module '{}'", module.name);

        // Frameworks attach to the module's last declared category, or to
        // the main category when it declares none. Frameworks following a
        // category that lost a registration conflict are dropped.
        let mut current = MAIN_CATEGORY.to_string();
        let mut conflicted = false;
        for spec in module.categories {
            debug!("found category '{}'", spec.name);
            let category = Category::from_spec(spec);
            current = category.prog_name().to_string();
            conflicted = !registry.register_category(category);
        }

        for spec in module.frameworks {
            if conflicted {
                error!(
                    "Can't attach '{}': category '{}' lost a registration conflict",
                    spec.name, current
                );
                continue;
            }
            let Some(category) = registry.category_mut(&current) else {
                continue;
            };
            match Framework::build(spec, category, host) {
                Ok(Some(framework)) => {
                    debug!(
                        "attaching framework '{}' to '{}'",
                        framework.name(),
                        category.name()
                    );
                    category.register_framework(framework);
                }
                Ok(None) => {}
                Err(e) => {
                    error!(
                        "Can't attach '{}' to '{}': {e}",
                        spec.name,
                        category.name()
                    );
                }
            }
        }
    }

    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigStore;
    use crate::error::Result;
    use crate::frameworks::category::CategorySpec;
    use crate::frameworks::framework::FrameworkSpec;
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

    fn broken_installer(spec: &FrameworkSpec) -> Result<Box<dyn Installer>> {
        Err(crate::error::ToolchestError::InvalidDownloadUrl {
            url: format!("bad url for {}", spec.name),
            message: "relative URL without a base".into(),
        })
    }

    fn test_host(temp: &TempDir) -> Host {
        Host::new(
            Box::new(StaticPlatform::new("amd64", "24.04")),
            Box::new(StaticRequirements::new(true, true)),
            ConfigStore::new(temp.path().join("config.yml")),
            temp.path().join("tools"),
            false,
        )
    }

    const GAMES: CategorySpec = CategorySpec {
        name: "Games",
        description: "Games development environment",
        packages_requirements: &[],
    };

    const TWINE: FrameworkSpec = FrameworkSpec::base("Twine", "Interactive stories", noop_installer);

    #[test]
    fn zero_category_module_attaches_to_main() {
        const FRAMEWORKS: &[FrameworkSpec] =
            &[FrameworkSpec::base("Go", "Go compiler", noop_installer)];
        let temp = TempDir::new().unwrap();
        let host = test_host(&temp);
        let modules = [PluginModule {
            name: "go",
            categories: &[],
            frameworks: FRAMEWORKS,
        }];

        let registry = discover_modules(&modules, &host);
        let main = registry.main_category().unwrap();
        assert!(main.framework("go").is_some());
    }

    #[test]
    fn frameworks_attach_to_last_declared_category() {
        const CATEGORIES: &[CategorySpec] = &[
            CategorySpec {
                name: "Unused",
                description: "",
                packages_requirements: &[],
            },
            GAMES,
        ];
        const FRAMEWORKS: &[FrameworkSpec] = &[TWINE];
        let temp = TempDir::new().unwrap();
        let host = test_host(&temp);
        let modules = [PluginModule {
            name: "games",
            categories: CATEGORIES,
            frameworks: FRAMEWORKS,
        }];

        let registry = discover_modules(&modules, &host);
        assert!(registry.category("games").unwrap().framework("twine").is_some());
        assert!(!registry.category("unused").unwrap().has_frameworks());
    }

    #[test]
    fn broken_descriptor_skips_only_that_framework() {
        const FRAMEWORKS: &[FrameworkSpec] = &[
            FrameworkSpec::base("Stencyl", "", broken_installer),
            TWINE,
        ];
        let temp = TempDir::new().unwrap();
        let host = test_host(&temp);
        let modules = [PluginModule {
            name: "games",
            categories: &[GAMES],
            frameworks: FRAMEWORKS,
        }];

        let registry = discover_modules(&modules, &host);
        let games = registry.category("games").unwrap();
        assert!(games.framework("stencyl").is_none());
        assert!(games.framework("twine").is_some());
    }

    #[test]
    fn duplicate_category_drops_its_frameworks() {
        const FIRST: &[FrameworkSpec] = &[TWINE];
        const SECOND: &[FrameworkSpec] =
            &[FrameworkSpec::base("Superpowers", "", noop_installer)];
        let temp = TempDir::new().unwrap();
        let host = test_host(&temp);
        let modules = [
            PluginModule {
                name: "games",
                categories: &[GAMES],
                frameworks: FIRST,
            },
            PluginModule {
                name: "games-clone",
                categories: &[GAMES],
                frameworks: SECOND,
            },
        ];

        let registry = discover_modules(&modules, &host);
        let games = registry.category("games").unwrap();
        assert!(games.framework("twine").is_some());
        assert!(games.framework("superpowers").is_none());
        assert_eq!(registry.len(), 2); // main + games
    }

    #[test]
    fn ineligible_framework_is_absent_from_registry() {
        const FRAMEWORKS: &[FrameworkSpec] = &[FrameworkSpec {
            only_on_archs: &["arm64"],
            ..FrameworkSpec::base("Unity3D", "", noop_installer)
        }];
        let temp = TempDir::new().unwrap();
        let host = test_host(&temp);
        let modules = [PluginModule {
            name: "games",
            categories: &[GAMES],
            frameworks: FRAMEWORKS,
        }];

        let registry = discover_modules(&modules, &host);
        assert!(registry.category("games").unwrap().framework("unity3d").is_none());
    }

    #[test]
    fn rediscovery_is_idempotent() {
        // Includes a benign conflict (double default claim) to check it
        // resolves the same way on both passes.
        const FRAMEWORKS: &[FrameworkSpec] = &[
            FrameworkSpec {
                is_category_default: true,
                ..FrameworkSpec::base("Stencyl", "", noop_installer)
            },
            FrameworkSpec {
                is_category_default: true,
                ..FrameworkSpec::base("Twine", "", noop_installer)
            },
        ];
        let temp = TempDir::new().unwrap();
        let host = test_host(&temp);
        let modules = [PluginModule {
            name: "games",
            categories: &[GAMES],
            frameworks: FRAMEWORKS,
        }];

        let snapshot = |registry: &Registry| -> Vec<(String, Vec<(String, bool)>)> {
            registry
                .categories()
                .iter()
                .map(|c| {
                    (
                        c.prog_name().to_string(),
                        c.frameworks()
                            .iter()
                            .map(|f| (f.prog_name().to_string(), f.is_category_default()))
                            .collect(),
                    )
                })
                .collect()
        };

        let first = discover_modules(&modules, &host);
        let second = discover_modules(&modules, &host);
        assert_eq!(snapshot(&first), snapshot(&second));
        assert!(first.category("games").unwrap().default_framework().is_none());
    }
}
