use super::*;
use crate::expand::VariableExpander;

fn config_with_settings(settings_path: Option<&str>) -> LaunchConfig {
    let mut config = LaunchConfig::new("default");
    config.set_settings_path(settings_path.map(ToString::to_string));
    config
}

#[test]
fn argv_without_settings_path() {
    let config = config_with_settings(None);
    let argv = build_argv(&config, "/opt/plugins", None);
    assert_eq!(argv, vec!["-theme", "default", "-pluginpath", "/opt/plugins"]);
}

#[test]
fn settings_path_with_space_is_quoted() {
    let config = config_with_settings(Some("/home/user/my settings"));
    let argv = build_argv(&config, "/opt/plugins", None);
    assert_eq!(
        &argv[4..],
        &["-settingspath", "\"/home/user/my settings\""]
    );
}

#[test]
fn plugin_path_is_wrapped_only_when_it_has_spaces() {
    let config = config_with_settings(None);
    assert_eq!(build_argv(&config, "/My Plugins", None)[3], "\"/My Plugins\"");
    assert_eq!(build_argv(&config, "/plugins", None)[3], "/plugins");
}

#[test]
fn quotes_are_escaped_before_wrapping() {
    assert_eq!(quote_path_argument("/a\"b"), "/a\\\"b");
    assert_eq!(quote_path_argument("/a \"b\""), "\"/a \\\"b\\\"\"");
}

#[test]
fn empty_plugin_path_is_still_emitted() {
    let config = config_with_settings(None);
    let argv = build_argv(&config, "", None);
    assert_eq!(argv, vec!["-theme", "default", "-pluginpath", ""]);
}

#[test]
fn settings_path_expanding_to_empty_keeps_flag() {
    let config = config_with_settings(Some("%{settingsDir}"));
    let expander = VariableExpander::new().with("settingsDir", "");
    let argv = build_argv(&config, "/p", Some(&expander));
    assert_eq!(&argv[4..], &["-settingspath", ""]);
}

#[test]
fn settings_path_is_expanded_before_quoting() {
    let config = config_with_settings(Some("%{buildDir}/settings"));
    let expander = VariableExpander::new().with("buildDir", "/work/my build");
    let argv = build_argv(&config, "/p", Some(&expander));
    assert_eq!(argv[5], "\"/work/my build/settings\"");
}

#[test]
fn plugin_path_is_not_expanded() {
    let config = config_with_settings(None);
    let expander = VariableExpander::new().with("buildDir", "/b");
    let argv = build_argv(&config, "%{buildDir}", Some(&expander));
    assert_eq!(argv[3], "%{buildDir}");
}

#[test]
fn theme_name_is_passed_verbatim() {
    let mut config = LaunchConfig::new("my theme");
    config.set_settings_path(None);
    let argv = build_argv(&config, "/p", None);
    assert_eq!(&argv[..2], &["-theme", "my theme"]);
}

#[test]
fn working_directory_uses_expander_when_available() {
    let config = LaunchConfig::new("default");
    let expander = VariableExpander::new().with("buildDir", "/work/build");
    assert_eq!(resolve_working_directory(&config, Some(&expander)), "/work/build");
    assert_eq!(resolve_working_directory(&config, None), "%{buildDir}");
}

#[test]
fn launch_plan_bundles_directory_and_argv() {
    let config = config_with_settings(Some("/s"));
    let expander = VariableExpander::new().with("buildDir", "/work/build");
    let plan = config.launch_plan("/opt/plugins", Some(&expander));
    assert_eq!(plan.working_directory, "/work/build");
    assert_eq!(
        plan.argv,
        vec!["-theme", "default", "-pluginpath", "/opt/plugins", "-settingspath", "/s"]
    );
}
