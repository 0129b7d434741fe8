use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::store::{ConfigMap, Value};

pub const WORKING_DIRECTORY_KEY: &str = "WorkingDirectory";
pub const SETTINGS_PATH_KEY: &str = "SettingsPath";
pub const THEME_KEY: &str = "Theme";

/// Placeholder template meaning "the build output directory".
pub const DEFAULT_WORKING_DIRECTORY: &str = "%{buildDir}";
pub const DEFAULT_THEME: &str = "default";

/// How file names compare when deciding whether a path equals its default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathCase {
    Sensitive,
    Insensitive,
}

impl PathCase {
    pub fn host() -> Self {
        if cfg!(any(target_os = "windows", target_os = "macos")) {
            PathCase::Insensitive
        } else {
            PathCase::Sensitive
        }
    }

    pub fn same(self, a: &str, b: &str) -> bool {
        match self {
            PathCase::Sensitive => a == b,
            PathCase::Insensitive => a == b || a.to_lowercase() == b.to_lowercase(),
        }
    }
}

/// Defaults a persisted map is compared against on save and filled from on load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDefaults {
    pub path_case: PathCase,
    pub theme: String,
}

/// Only built through [`LaunchConfig::new`], the setters and
/// [`LaunchConfig::from_map`], so the working directory is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchConfig {
    working_directory: String,
    settings_path: Option<String>,
    theme_name: String,
    // set once the theme was chosen explicitly rather than inherited from the host
    theme_pinned: bool,
}

impl LaunchConfig {
    /// A fresh configuration: build directory as working directory, no
    /// settings override, and the host's active theme.
    pub fn new(active_theme: impl Into<String>) -> Self {
        Self {
            working_directory: DEFAULT_WORKING_DIRECTORY.to_string(),
            settings_path: None,
            theme_name: active_theme.into(),
            theme_pinned: false,
        }
    }

    pub fn working_directory(&self) -> &str {
        &self.working_directory
    }

    pub fn settings_path(&self) -> Option<&str> {
        self.settings_path.as_deref()
    }

    pub fn theme_name(&self) -> &str {
        &self.theme_name
    }

    /// An empty template falls back to the build directory placeholder.
    pub fn set_working_directory(&mut self, template: impl Into<String>) {
        let template = template.into();
        self.working_directory = if template.is_empty() {
            DEFAULT_WORKING_DIRECTORY.to_string()
        } else {
            template
        };
    }

    pub fn set_settings_path(&mut self, path: Option<String>) {
        self.settings_path = path;
    }

    /// Pins the theme: it is persisted from now on, even when it matches the
    /// host's active theme.
    pub fn set_theme_name(&mut self, theme: impl Into<String>) {
        self.theme_name = theme.into();
        self.theme_pinned = true;
    }

    pub fn is_theme_pinned(&self) -> bool {
        self.theme_pinned
    }

    pub fn has_default_working_directory(&self, path_case: PathCase) -> bool {
        path_case.same(&self.working_directory, DEFAULT_WORKING_DIRECTORY)
    }

    /// Persists only the values that differ from their defaults.
    pub fn to_map(&self, defaults: &ConfigDefaults) -> ConfigMap {
        let mut map = ConfigMap::new();
        if !self.has_default_working_directory(defaults.path_case) {
            map.insert(
                WORKING_DIRECTORY_KEY.to_string(),
                Value::from(self.working_directory.clone()),
            );
        }
        if let Some(settings_path) = &self.settings_path {
            map.insert(
                SETTINGS_PATH_KEY.to_string(),
                Value::from(settings_path.clone()),
            );
        }
        if self.theme_pinned {
            map.insert(THEME_KEY.to_string(), Value::from(self.theme_name.clone()));
        }
        map
    }

    /// Reads the known keys; anything else in `map` is ignored.
    pub fn from_map(map: &ConfigMap, defaults: &ConfigDefaults) -> Result<Self, ConfigError> {
        let working_directory = string_value(map, WORKING_DIRECTORY_KEY)?
            .unwrap_or_else(|| DEFAULT_WORKING_DIRECTORY.to_string());
        let settings_path = string_value(map, SETTINGS_PATH_KEY)?;

        let mut config = Self::new(defaults.theme.clone());
        if let Some(theme) = string_value(map, THEME_KEY)? {
            config.set_theme_name(theme);
        }
        config.set_working_directory(working_directory);
        config.set_settings_path(settings_path);
        Ok(config)
    }
}

fn string_value(map: &ConfigMap, key: &'static str) -> Result<Option<String>, ConfigError> {
    match map.get(key) {
        None => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(other) => Err(ConfigError::Malformed {
            key,
            expected: "string",
            found: other.kind(),
        }),
    }
}

pub fn serialize(config: &LaunchConfig, defaults: &ConfigDefaults) -> ConfigMap {
    config.to_map(defaults)
}

pub fn deserialize(map: &ConfigMap, defaults: &ConfigDefaults) -> Result<LaunchConfig, ConfigError> {
    LaunchConfig::from_map(map, defaults)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sensitive() -> ConfigDefaults {
        ConfigDefaults {
            path_case: PathCase::Sensitive,
            theme: "default".to_string(),
        }
    }

    fn insensitive() -> ConfigDefaults {
        ConfigDefaults {
            path_case: PathCase::Insensitive,
            theme: "default".to_string(),
        }
    }

    #[test]
    fn new_config_uses_placeholders() {
        let config = LaunchConfig::new("flat-dark");
        assert_eq!(config.working_directory(), "%{buildDir}");
        assert_eq!(config.settings_path(), None);
        assert_eq!(config.theme_name(), "flat-dark");
    }

    #[test]
    fn defaults_are_not_persisted() {
        let config = LaunchConfig::new("default");
        assert!(serialize(&config, &sensitive()).is_empty());
    }

    #[test]
    fn working_directory_default_follows_case_rule() {
        let mut config = LaunchConfig::new("default");
        config.set_working_directory("%{BuildDir}");

        let map = serialize(&config, &sensitive());
        assert_eq!(
            map.get(WORKING_DIRECTORY_KEY),
            Some(&Value::from("%{BuildDir}"))
        );
        assert!(serialize(&config, &insensitive()).is_empty());
    }

    #[test]
    fn settings_path_is_stored_raw() {
        let mut config = LaunchConfig::new("default");
        config.set_settings_path(Some("/home/user/my settings".to_string()));

        let map = serialize(&config, &sensitive());
        assert_eq!(
            map.get(SETTINGS_PATH_KEY),
            Some(&Value::from("/home/user/my settings"))
        );
    }

    #[test]
    fn round_trip_preserves_non_default_fields() {
        let mut config = LaunchConfig::new("default");
        config.set_theme_name("dark");
        config.set_working_directory("/srv/run dir");
        config.set_settings_path(Some(String::new()));

        let map = serialize(&config, &sensitive());
        let loaded = deserialize(&map, &sensitive()).expect("deserialize");
        assert_eq!(loaded, config);
    }

    #[test]
    fn inherited_theme_follows_host_but_picked_theme_sticks() {
        let dark_host = ConfigDefaults {
            path_case: PathCase::Sensitive,
            theme: "dark".to_string(),
        };

        let inherited = LaunchConfig::new("dark");
        assert!(!inherited.is_theme_pinned());
        assert!(serialize(&inherited, &dark_host).is_empty());

        let mut picked = LaunchConfig::new("dark");
        picked.set_theme_name("dark");
        let map = serialize(&picked, &dark_host);
        assert_eq!(map.get(THEME_KEY), Some(&Value::from("dark")));

        let reloaded = deserialize(&map, &sensitive()).expect("deserialize");
        assert_eq!(reloaded.theme_name(), "dark");
        assert!(reloaded.is_theme_pinned());
    }

    #[test]
    fn empty_stored_working_directory_loads_as_placeholder() {
        let mut map = ConfigMap::new();
        map.insert(WORKING_DIRECTORY_KEY.to_string(), Value::from(""));

        let loaded = deserialize(&map, &sensitive()).expect("deserialize");
        assert_eq!(loaded.working_directory(), DEFAULT_WORKING_DIRECTORY);
        assert!(serialize(&loaded, &sensitive()).is_empty());
    }

    #[test]
    fn empty_map_loads_defaults() {
        let loaded = deserialize(&ConfigMap::new(), &sensitive()).expect("deserialize");
        assert_eq!(loaded, LaunchConfig::new("default"));
    }

    #[test]
    fn unknown_keys_are_ignored_and_theme_kept_verbatim() {
        let mut map = ConfigMap::new();
        map.insert("FutureKey".to_string(), Value::Integer(7));
        map.insert(THEME_KEY.to_string(), Value::from("not-installed"));

        let loaded = deserialize(&map, &sensitive()).expect("deserialize");
        assert_eq!(loaded.theme_name(), "not-installed");
    }

    #[test]
    fn wrong_kind_is_malformed() {
        let mut map = ConfigMap::new();
        map.insert(SETTINGS_PATH_KEY.to_string(), Value::Bool(true));

        let err = deserialize(&map, &sensitive()).unwrap_err();
        match err {
            ConfigError::Malformed {
                key,
                expected,
                found,
            } => {
                assert_eq!(key, SETTINGS_PATH_KEY);
                assert_eq!(expected, "string");
                assert_eq!(found, "bool");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
