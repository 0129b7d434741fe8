use log::debug;

use crate::config::LaunchConfig;
use crate::expand::{MacroExpander, expand_with};

mod plan;
pub use plan::LaunchPlan;

#[cfg(test)]
mod tests;

pub const THEME_FLAG: &str = "-theme";
pub const PLUGIN_PATH_FLAG: &str = "-pluginpath";
pub const SETTINGS_PATH_FLAG: &str = "-settingspath";

impl LaunchConfig {
    pub fn build_argv(
        &self,
        plugins_path: &str,
        expander: Option<&dyn MacroExpander>,
    ) -> Vec<String> {
        build_argv(self, plugins_path, expander)
    }

    pub fn launch_plan(
        &self,
        plugins_path: &str,
        expander: Option<&dyn MacroExpander>,
    ) -> LaunchPlan {
        LaunchPlan {
            working_directory: resolve_working_directory(self, expander),
            argv: build_argv(self, plugins_path, expander),
        }
    }
}

pub fn resolve_working_directory(
    config: &LaunchConfig,
    expander: Option<&dyn MacroExpander>,
) -> String {
    expand_with(expander, config.working_directory())
}

/// Theme, plugin path, then the optional settings path, in that order.
pub fn build_argv(
    config: &LaunchConfig,
    plugins_path: &str,
    expander: Option<&dyn MacroExpander>,
) -> Vec<String> {
    let mut argv = vec![THEME_FLAG.to_string(), config.theme_name().to_string()];

    argv.push(PLUGIN_PATH_FLAG.to_string());
    argv.push(quote_path_argument(plugins_path));

    // presence of the field decides, not the expanded value
    if let Some(settings_path) = config.settings_path() {
        let expanded = expand_with(expander, settings_path);
        argv.push(SETTINGS_PATH_FLAG.to_string());
        argv.push(quote_path_argument(&expanded));
    }

    debug!("launch command line arguments: {argv:?}");
    argv
}

/// Escapes `"` as `\"`, then wraps the result in quotes if it holds a space.
pub fn quote_path_argument(path: &str) -> String {
    let escaped = path.replace('"', "\\\"");
    if escaped.contains(' ') {
        format!("\"{escaped}\"")
    } else {
        escaped
    }
}
