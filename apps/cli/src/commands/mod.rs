use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use launch_config::VariableExpander;
use launch_config::themes::list_available_themes;

use crate::settings::CliSettings;

pub mod completion;
pub mod edit;
pub mod init;
pub mod plan;
pub mod show;
pub mod themes;

/// Selects one run configuration inside a project file.
#[derive(Args, Debug)]
pub struct RecordArgs {
    /// Project file (`.json` or `.toml`).
    #[arg(long, value_name = "FILE")]
    pub project: PathBuf,

    /// Run configuration id.
    #[arg(long, value_name = "ID")]
    pub id: String,
}

/// Values for `%{name}` variables in stored paths.
#[derive(Args, Debug, Default)]
pub struct ExpansionArgs {
    /// Value of `%{buildDir}`.
    #[arg(long, value_name = "DIR")]
    pub build_dir: Option<PathBuf>,

    /// Extra variable as NAME=VALUE (repeatable).
    #[arg(long = "var", value_name = "NAME=VALUE", value_parser = parse_var)]
    pub vars: Vec<(String, String)>,
}

impl ExpansionArgs {
    /// `None` when no variable was given, so templates stay unexpanded.
    pub fn expander(&self) -> Option<VariableExpander> {
        let mut expander = VariableExpander::new();
        if let Some(build_dir) = &self.build_dir {
            expander.insert("buildDir", build_dir.to_string_lossy());
        }
        for (name, value) in &self.vars {
            expander.insert(name.clone(), value.clone());
        }
        if expander.is_empty() {
            None
        } else {
            Some(expander)
        }
    }
}

fn parse_var(raw: &str) -> Result<(String, String), String> {
    let Some((name, value)) = raw.split_once('=') else {
        return Err(format!("expected NAME=VALUE, got `{raw}`"));
    };
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing variable name in `{raw}`"));
    }
    Ok((name.to_string(), value.to_string()))
}

pub fn available_themes(settings: &CliSettings) -> Result<Vec<String>> {
    let resource_dir = settings
        .resource_dir
        .as_deref()
        .context("No theme resource directory (pass --resource-dir or set LAUNCHCFG_RESOURCE_DIR)")?;
    list_available_themes(resource_dir, settings.user_resource_dir.as_deref())
        .context("Failed to list available themes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use launch_config::MacroExpander;

    #[test]
    fn parses_variables() {
        assert_eq!(
            parse_var("sourceDir=/src/a=b"),
            Ok(("sourceDir".to_string(), "/src/a=b".to_string()))
        );
        assert!(parse_var("novalue").is_err());
        assert!(parse_var("=x").is_err());
    }

    #[test]
    fn no_variables_means_no_expander() {
        assert!(ExpansionArgs::default().expander().is_none());

        let args = ExpansionArgs {
            build_dir: Some(PathBuf::from("/work/build")),
            vars: vec![("name".to_string(), "app".to_string())],
        };
        let expander = args.expander().expect("expander");
        assert_eq!(expander.expand("%{buildDir}/%{name}"), "/work/build/app");
    }
}
