//! Configuration file reading and structural-merge writing.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Result, ToolchestError};

/// On-disk configuration shape.
///
/// Unknown top-level keys and unknown per-framework keys are captured so a
/// read-modify-write cycle never clobbers entries this version of the tool
/// does not understand.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ConfigData {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    frameworks: BTreeMap<String, BTreeMap<String, FrameworkEntry>>,

    #[serde(flatten)]
    extra: BTreeMap<String, serde_yaml::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct FrameworkEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    path: Option<String>,

    #[serde(flatten)]
    extra: BTreeMap<String, serde_yaml::Value>,
}

/// Handle on the persisted configuration file.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Use an explicit configuration file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Use the default per-user location (`~/.config/toolchest/config.yml`).
    pub fn default_location() -> Result<Self> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("could not determine the user config directory"))?;
        Ok(Self::new(config_dir.join("toolchest").join("config.yml")))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Recorded install path for a framework, if one is present and
    /// well-formed. Any missing or malformed entry is `None`, not an error.
    pub fn framework_path(&self, category: &str, framework: &str) -> Option<PathBuf> {
        self.load()
            .frameworks
            .get(category)?
            .get(framework)?
            .path
            .as_ref()
            .map(PathBuf::from)
    }

    /// Record the install path for a framework, merging into whatever else
    /// the file already holds.
    pub fn set_framework_path(&self, category: &str, framework: &str, path: &Path) -> Result<()> {
        let mut data = self.load();
        data.frameworks
            .entry(category.to_string())
            .or_default()
            .entry(framework.to_string())
            .or_default()
            .path = Some(path.to_string_lossy().into_owned());
        self.save(&data)
    }

    fn load(&self) -> ConfigData {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(_) => {
                debug!("no configuration at {}", self.path.display());
                return ConfigData::default();
            }
        };
        match serde_yaml::from_str(&contents) {
            Ok(data) => data,
            Err(e) => {
                warn!(
                    "malformed configuration at {}, using defaults: {e}",
                    self.path.display()
                );
                ConfigData::default()
            }
        }
    }

    fn save(&self, data: &ConfigData) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_yaml::to_string(data).map_err(|e| ToolchestError::ConfigWrite {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}
