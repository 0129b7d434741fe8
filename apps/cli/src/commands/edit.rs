use anyhow::{Context, Result, bail};
use clap::Args;
use dialoguer::{FuzzySelect, theme::ColorfulTheme};
use launch_config::{ConfigEdit, EditContext, MacroExpander};
use tracing::info;

use super::{ExpansionArgs, RecordArgs};
use crate::project::{self, RunConfiguration};
use crate::settings::CliSettings;

#[derive(Args)]
pub struct SetArgs {
    #[command(flatten)]
    record: RecordArgs,

    #[arg(long, value_name = "DIR")]
    working_dir: Option<String>,

    /// Use an alternative settings path.
    #[arg(long, value_name = "DIR", conflicts_with = "no_settings_path")]
    settings_path: Option<String>,

    /// Stop passing an alternative settings path.
    #[arg(long)]
    no_settings_path: bool,

    #[arg(long, value_name = "THEME")]
    theme: Option<String>,

    #[arg(long, value_name = "NAME")]
    display_name: Option<String>,

    #[command(flatten)]
    expansion: ExpansionArgs,
}

#[derive(Args)]
pub struct PickThemeArgs {
    #[command(flatten)]
    record: RecordArgs,
}

impl SetArgs {
    fn edits(&self) -> Vec<ConfigEdit> {
        let mut edits = Vec::new();
        if let Some(dir) = &self.working_dir {
            edits.push(ConfigEdit::SetWorkingDirectory(dir.clone()));
        }
        if self.no_settings_path {
            edits.push(ConfigEdit::SetSettingsPath(None));
        } else if let Some(path) = &self.settings_path {
            edits.push(ConfigEdit::SetSettingsPath(Some(path.clone())));
        }
        if let Some(theme) = &self.theme {
            edits.push(ConfigEdit::SetTheme(theme.clone()));
        }
        edits
    }
}

pub fn run_set(args: SetArgs, settings: &CliSettings) -> Result<()> {
    let edits = args.edits();
    if edits.is_empty() && args.display_name.is_none() {
        bail!("Nothing to change. Pass --working-dir, --settings-path, --no-settings-path, --theme or --display-name.");
    }

    let themes = if args.theme.is_some() {
        super::available_themes(settings)?
    } else {
        Vec::new()
    };
    let expander = args.expansion.expander();
    let ctx = EditContext {
        expander: expander.as_ref().map(|e| e as &dyn MacroExpander),
        themes: &themes,
    };

    update_record(&args.record, settings, |record| {
        for edit in edits {
            let described = format!("{edit:?}");
            record
                .launch
                .apply(edit, &ctx)
                .with_context(|| format!("Rejected edit {described}"))?;
        }
        if let Some(name) = &args.display_name {
            record.display_name = name.clone();
        }
        Ok(())
    })
}

pub fn run_pick_theme(args: PickThemeArgs, settings: &CliSettings) -> Result<()> {
    let themes = super::available_themes(settings)?;
    if themes.is_empty() {
        bail!("No themes installed");
    }

    update_record(&args.record, settings, |record| {
        let current = themes
            .iter()
            .position(|theme| theme == record.launch.theme_name())
            .unwrap_or(0);
        let index = FuzzySelect::with_theme(&ColorfulTheme::default())
            .with_prompt("Theme")
            .items(&themes)
            .default(current)
            .interact()
            .context("Failed to read theme selection")?;

        let ctx = EditContext {
            expander: None,
            themes: &themes,
        };
        record
            .launch
            .apply(ConfigEdit::SetTheme(themes[index].clone()), &ctx)?;
        Ok(())
    })
}

fn update_record(
    target: &RecordArgs,
    settings: &CliSettings,
    change: impl FnOnce(&mut RunConfiguration) -> Result<()>,
) -> Result<()> {
    let defaults = settings.defaults();
    let mut project = project::load_project(&target.project)?;
    let mut record = project::load_record(&project, &target.id, &defaults)?;

    change(&mut record)?;

    project::store_record(&mut project, &record, &defaults);
    project::save_project(&target.project, &project)?;
    info!("updated run configuration {} in {}", record.id, target.project.display());
    println!("Updated `{}`", record.id);
    Ok(())
}
