use std::path::Path;

use crate::config::LaunchConfig;
use crate::errors::ConfigError;
use crate::expand::{MacroExpander, expand_with};

/// A single user edit of a [`LaunchConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigEdit {
    SetWorkingDirectory(String),
    /// `None` turns the alternative settings path off.
    SetSettingsPath(Option<String>),
    SetTheme(String),
}

/// What an edit is validated against.
#[derive(Clone, Copy, Default)]
pub struct EditContext<'a> {
    pub expander: Option<&'a dyn MacroExpander>,
    pub themes: &'a [String],
}

impl LaunchConfig {
    /// Applies `edit` if it validates; otherwise `self` is left untouched.
    pub fn apply(&mut self, edit: ConfigEdit, ctx: &EditContext<'_>) -> Result<(), ConfigError> {
        match edit {
            ConfigEdit::SetWorkingDirectory(text) => {
                let template = from_user_input(&text);
                ensure_directory(&template, ctx.expander)?;
                self.set_working_directory(template);
            }
            ConfigEdit::SetSettingsPath(None) => self.set_settings_path(None),
            ConfigEdit::SetSettingsPath(Some(text)) => {
                let path = from_user_input(&text);
                if !path.is_empty() {
                    ensure_directory(&path, ctx.expander)?;
                }
                self.set_settings_path(Some(path));
            }
            ConfigEdit::SetTheme(name) => {
                if !ctx.themes.iter().any(|theme| theme == &name) {
                    return Err(ConfigError::UnknownTheme(name));
                }
                self.set_theme_name(name);
            }
        }
        Ok(())
    }
}

/// Normalizes a path typed by the user: trims it, uses `/` separators on
/// Windows and expands a leading `~/`.
pub fn from_user_input(text: &str) -> String {
    let trimmed = text.trim();
    let clean = if cfg!(windows) {
        trimmed.replace('\\', "/")
    } else {
        trimmed.to_string()
    };

    if let Some(rest) = clean.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            let home = home.to_string_lossy().replace('\\', "/");
            return format!("{}/{rest}", home.trim_end_matches('/'));
        }
    }
    clean
}

fn ensure_directory(template: &str, expander: Option<&dyn MacroExpander>) -> Result<(), ConfigError> {
    let expanded = expand_with(expander, template);
    if expanded.is_empty() || !Path::new(&expanded).is_dir() {
        return Err(ConfigError::InvalidDirectory(expanded));
    }
    Ok(())
}
