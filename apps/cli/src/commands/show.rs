use anyhow::Result;
use clap::Args;

use super::RecordArgs;
use crate::project;
use crate::settings::CliSettings;

#[derive(Args)]
pub struct ShowArgs {
    #[command(flatten)]
    record: RecordArgs,
}

pub fn run(args: ShowArgs, settings: &CliSettings) -> Result<()> {
    let project = project::load_project(&args.record.project)?;
    let record = project::load_record(&project, &args.record.id, &settings.defaults())?;
    let launch = &record.launch;

    println!("{} ({})", record.display_name, record.id);
    println!("  working directory: {}", launch.working_directory());
    match launch.settings_path() {
        Some(path) => println!("  settings path:     {path}"),
        None => println!("  settings path:     <none>"),
    }
    if launch.is_theme_pinned() {
        println!("  theme:             {}", launch.theme_name());
    } else {
        println!("  theme:             {} (follows host)", launch.theme_name());
    }
    Ok(())
}
