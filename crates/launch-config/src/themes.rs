use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::{debug, warn};

use crate::config::DEFAULT_THEME;
use crate::errors::ConfigError;

pub const THEMES_DIR: &str = "themes";
pub const THEME_EXTENSION: &str = "creatortheme";

/// Themes installed under `<builtin_root>/themes` followed by those under
/// `<user_root>/themes`. The built-in `default` theme comes first and user
/// themes never repeat a built-in name.
pub fn list_available_themes(
    builtin_root: &Path,
    user_root: Option<&Path>,
) -> Result<Vec<String>, ConfigError> {
    let mut themes = theme_names_in(&builtin_root.join(THEMES_DIR))?;

    match themes.iter().position(|name| name == DEFAULT_THEME) {
        Some(index) => {
            let default = themes.remove(index);
            themes.insert(0, default);
        }
        None => warn!(
            "\"{DEFAULT_THEME}\" theme not found in {}",
            builtin_root.join(THEMES_DIR).display()
        ),
    }

    if let Some(user_root) = user_root {
        for name in theme_names_in(&user_root.join(THEMES_DIR))? {
            if !themes.contains(&name) {
                themes.push(name);
            }
        }
    }

    debug!("available themes: {themes:?}");
    Ok(themes)
}

fn theme_names_in(dir: &Path) -> Result<Vec<String>, ConfigError> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(err.into()),
    };

    let mut names = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let is_theme = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(THEME_EXTENSION));
        if !is_theme {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
            names.push(stem.to_string());
        }
    }

    names.sort_by_key(|name| name.to_lowercase());
    Ok(names)
}
