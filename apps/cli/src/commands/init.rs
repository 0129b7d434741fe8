use anyhow::{Result, bail};
use clap::Args;
use tracing::info;

use super::RecordArgs;
use crate::project::{self, RunConfiguration};
use crate::settings::CliSettings;

#[derive(Args)]
pub struct InitArgs {
    #[command(flatten)]
    record: RecordArgs,

    #[arg(long, value_name = "NAME")]
    display_name: Option<String>,
}

pub fn run(args: InitArgs, settings: &CliSettings) -> Result<()> {
    let path = &args.record.project;
    let mut project = project::load_project_or_empty(path)?;
    if project.contains_key(&args.record.id) {
        bail!(
            "run configuration `{}` already exists in {}",
            args.record.id,
            path.display()
        );
    }

    let defaults = settings.defaults();
    let mut record = RunConfiguration::new(args.record.id, &defaults);
    if let Some(name) = args.display_name {
        record.display_name = name;
    }

    project::store_record(&mut project, &record, &defaults);
    project::save_project(path, &project)?;
    info!("created run configuration {} in {}", record.id, path.display());

    println!("Created `{}` ({})", record.id, record.display_name);
    Ok(())
}
