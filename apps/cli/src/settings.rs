use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Args;
use launch_config::{ConfigDefaults, PathCase};
use launch_config::config::DEFAULT_THEME;
use serde::Deserialize;
use tracing::debug;

#[derive(Args, Debug, Default)]
pub struct SettingsArgs {
    /// Theme the host currently displays; new configurations start with it.
    #[arg(long, global = true, value_name = "THEME")]
    active_theme: Option<String>,

    /// Directory holding the built-in `themes/` folder.
    #[arg(long, global = true, value_name = "DIR")]
    resource_dir: Option<PathBuf>,

    /// Directory holding user-installed `themes/`.
    #[arg(long, global = true, value_name = "DIR")]
    user_resource_dir: Option<PathBuf>,

    /// Alternative settings file (defaults to `<config dir>/launchcfg/settings.toml`).
    #[arg(long, global = true, value_name = "FILE")]
    settings: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct FileSettings {
    #[serde(default)]
    active_theme: Option<String>,
    #[serde(default)]
    resource_dir: Option<PathBuf>,
    #[serde(default)]
    user_resource_dir: Option<PathBuf>,
    #[serde(default)]
    path_case: Option<PathCase>,
}

#[derive(Debug, Clone)]
pub struct CliSettings {
    pub active_theme: String,
    pub resource_dir: Option<PathBuf>,
    pub user_resource_dir: Option<PathBuf>,
    pub path_case: PathCase,
}

impl CliSettings {
    pub fn defaults(&self) -> ConfigDefaults {
        ConfigDefaults {
            path_case: self.path_case,
            theme: self.active_theme.clone(),
        }
    }
}

pub fn resolve(args: SettingsArgs) -> Result<CliSettings> {
    let file = match (&args.settings, default_settings_path()) {
        (Some(path), _) => load_file_settings(path, true)?,
        (None, Some(path)) => load_file_settings(&path, false)?,
        (None, None) => FileSettings::default(),
    };
    Ok(merge(args, file, |key| std::env::var(key).ok()))
}

fn merge(
    args: SettingsArgs,
    file: FileSettings,
    env: impl Fn(&str) -> Option<String>,
) -> CliSettings {
    let active_theme = normalize_optional(args.active_theme)
        .or_else(|| normalize_optional(env("LAUNCHCFG_THEME")))
        .or_else(|| normalize_optional(file.active_theme))
        .unwrap_or_else(|| DEFAULT_THEME.to_string());

    let resource_dir = args
        .resource_dir
        .or_else(|| normalize_optional(env("LAUNCHCFG_RESOURCE_DIR")).map(PathBuf::from))
        .or(file.resource_dir);

    let user_resource_dir = args
        .user_resource_dir
        .or_else(|| normalize_optional(env("LAUNCHCFG_USER_RESOURCE_DIR")).map(PathBuf::from))
        .or(file.user_resource_dir)
        .or_else(default_user_resource_dir);

    CliSettings {
        active_theme,
        resource_dir,
        user_resource_dir,
        path_case: file.path_case.unwrap_or_else(PathCase::host),
    }
}

/// A missing file is only tolerated at the default location.
fn load_file_settings(path: &Path, explicit: bool) -> Result<FileSettings> {
    let contents = match fs::read_to_string(path) {
        Ok(value) => value,
        Err(err) if !explicit && err.kind() == ErrorKind::NotFound => {
            debug!("no settings file at {}", path.display());
            return Ok(FileSettings::default());
        }
        Err(err) => bail!("Failed to read settings file {}: {err}", path.display()),
    };
    toml::from_str(&contents).with_context(|| format!("Failed to parse {}", path.display()))
}

fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join("launchcfg").join("settings.toml"))
}

fn default_user_resource_dir() -> Option<PathBuf> {
    if let Some(base) = dirs::data_dir() {
        return Some(base.join("launchcfg"));
    }
    dirs::home_dir().map(|home| home.join(".launchcfg"))
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value.and_then(|val| {
        let trimmed = val.trim().to_string();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    })
}
