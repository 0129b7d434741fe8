use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result, bail};
use launch_config::config::{SETTINGS_PATH_KEY, THEME_KEY, WORKING_DIRECTORY_KEY};
use launch_config::store::{self, ConfigMap, Value};
use launch_config::{ConfigDefaults, ConfigError, LaunchConfig};

pub const DISPLAY_NAME_KEY: &str = "DisplayName";
pub const DEFAULT_DISPLAY_NAME: &str = "Run themed app";

/// Run-configuration id to its persisted map.
pub type ProjectFile = BTreeMap<String, ConfigMap>;

/// One run configuration as the host sees it: its own keys plus the launch
/// parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfiguration {
    pub id: String,
    pub display_name: String,
    pub launch: LaunchConfig,
}

impl RunConfiguration {
    pub fn new(id: impl Into<String>, defaults: &ConfigDefaults) -> Self {
        Self {
            id: id.into(),
            display_name: DEFAULT_DISPLAY_NAME.to_string(),
            launch: LaunchConfig::new(defaults.theme.clone()),
        }
    }

    pub fn from_map(id: &str, map: &ConfigMap, defaults: &ConfigDefaults) -> Result<Self, ConfigError> {
        let display_name = match map.get(DISPLAY_NAME_KEY) {
            None => DEFAULT_DISPLAY_NAME.to_string(),
            Some(Value::String(name)) => name.clone(),
            Some(other) => {
                return Err(ConfigError::Malformed {
                    key: DISPLAY_NAME_KEY,
                    expected: "string",
                    found: other.kind(),
                });
            }
        };
        Ok(Self {
            id: id.to_string(),
            display_name,
            launch: LaunchConfig::from_map(map, defaults)?,
        })
    }

    /// Writes this record over `map`, keeping keys owned by someone else.
    pub fn store_into(&self, map: &mut ConfigMap, defaults: &ConfigDefaults) {
        for key in [WORKING_DIRECTORY_KEY, SETTINGS_PATH_KEY, THEME_KEY] {
            map.remove(key);
        }
        map.insert(
            DISPLAY_NAME_KEY.to_string(),
            Value::from(self.display_name.clone()),
        );
        map.extend(self.launch.to_map(defaults));
    }
}

pub fn load_project(path: &Path) -> Result<ProjectFile> {
    store::load_document(path).with_context(|| format!("Failed to load {}", path.display()))
}

pub fn load_project_or_empty(path: &Path) -> Result<ProjectFile> {
    if !path.exists() {
        return Ok(ProjectFile::new());
    }
    load_project(path)
}

pub fn save_project(path: &Path, project: &ProjectFile) -> Result<()> {
    store::save_document(path, project).with_context(|| format!("Failed to write {}", path.display()))
}

pub fn load_record(
    project: &ProjectFile,
    id: &str,
    defaults: &ConfigDefaults,
) -> Result<RunConfiguration> {
    let Some(map) = project.get(id) else {
        bail!("run configuration `{id}` not found");
    };
    RunConfiguration::from_map(id, map, defaults)
        .with_context(|| format!("Failed to load run configuration `{id}`"))
}

pub fn store_record(project: &mut ProjectFile, record: &RunConfiguration, defaults: &ConfigDefaults) {
    let map = project.entry(record.id.clone()).or_default();
    record.store_into(map, defaults);
}
