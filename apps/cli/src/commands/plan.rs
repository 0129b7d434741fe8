use anyhow::{Context, Result};
use clap::Args;
use launch_config::MacroExpander;
use launch_config::expand::unresolved_variables;
use tracing::warn;

use super::{ExpansionArgs, RecordArgs};
use crate::project;
use crate::settings::CliSettings;

#[derive(Args)]
pub struct PlanArgs {
    #[command(flatten)]
    record: RecordArgs,

    /// Plugin output directory of the active build.
    #[arg(long, value_name = "DIR")]
    plugins_path: String,

    #[command(flatten)]
    expansion: ExpansionArgs,

    /// Print the plan as JSON.
    #[arg(long)]
    json: bool,
}

pub fn run(args: PlanArgs, settings: &CliSettings) -> Result<()> {
    let project = project::load_project(&args.record.project)?;
    let record = project::load_record(&project, &args.record.id, &settings.defaults())?;

    let expander = args.expansion.expander();
    let expander_ref = expander.as_ref().map(|e| e as &dyn MacroExpander);
    let plan = record.launch.launch_plan(&args.plugins_path, expander_ref);

    let unresolved = unresolved_variables(&plan.working_directory);
    if !unresolved.is_empty() {
        warn!("working directory has unresolved variables: {unresolved:?}");
    }

    if args.json {
        let text = serde_json::to_string_pretty(&plan).context("Failed to serialize launch plan")?;
        println!("{text}");
        return Ok(());
    }

    println!("{}", plan.working_directory);
    for arg in &plan.argv {
        println!("{arg}");
    }
    Ok(())
}
