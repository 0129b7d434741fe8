use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod project;
mod settings;

use commands::{completion, edit, init, plan, show, themes};

#[derive(Parser)]
#[command(name = "launchcfg", version, about = "Launch configurations for themed application runs")]
struct Cli {
    #[command(flatten)]
    settings: settings::SettingsArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Init(init::InitArgs),
    Show(show::ShowArgs),
    Set(edit::SetArgs),
    PickTheme(edit::PickThemeArgs),
    Plan(plan::PlanArgs),
    Themes,
    Completion(completion::CompletionArgs),
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_env("LAUNCHCFG_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = settings::resolve(cli.settings)?;

    match cli.command {
        Commands::Init(args) => init::run(args, &settings),
        Commands::Show(args) => show::run(args, &settings),
        Commands::Set(args) => edit::run_set(args, &settings),
        Commands::PickTheme(args) => edit::run_pick_theme(args, &settings),
        Commands::Plan(args) => plan::run(args, &settings),
        Commands::Themes => themes::run(&settings),
        Commands::Completion(args) => completion::run(args),
    }
}
