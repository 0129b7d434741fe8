use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, ValueEnum};
use clap_complete::{generate, shells};

#[derive(Args)]
pub struct CompletionArgs {
    #[arg(value_enum)]
    shell: CompletionShell,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell", alias = "pwsh")]
    Powershell,
}

pub fn run(args: CompletionArgs) -> Result<()> {
    let script = render_completion(args.shell)?;
    io::stdout()
        .write_all(script.as_bytes())
        .context("Failed to write completion script to stdout")?;
    Ok(())
}

fn render_completion(shell: CompletionShell) -> Result<String> {
    let mut cmd = crate::Cli::command();
    let command_name = cmd.get_name().to_owned();
    let mut out = Vec::new();

    match shell {
        CompletionShell::Bash => generate(shells::Bash, &mut cmd, command_name, &mut out),
        CompletionShell::Zsh => generate(shells::Zsh, &mut cmd, command_name, &mut out),
        CompletionShell::Fish => generate(shells::Fish, &mut cmd, command_name, &mut out),
        CompletionShell::Powershell => {
            generate(shells::PowerShell, &mut cmd, command_name, &mut out)
        }
    }

    String::from_utf8(out).context("Generated completion script was not valid UTF-8")
}
