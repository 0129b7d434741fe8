use anyhow::Result;

use crate::settings::CliSettings;

pub fn run(settings: &CliSettings) -> Result<()> {
    for theme in super::available_themes(settings)? {
        println!("{theme}");
    }
    Ok(())
}
