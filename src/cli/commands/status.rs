//! Status command implementation

use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use crate::software::{status, Software};

/// Execute the status command
pub fn execute(ctx: &CommandContext, file_override: bool) -> Result<()> {
    let msg = ctx.messages;

    for software in Software::ALL {
        let config_override = (file_override && software == ctx.software)
            .then_some(ctx.config_file.as_path());
        let info = status(software, config_override);

        let (icon, state) = if info.installed {
            ("✓".green(), msg.installed.green())
        } else {
            ("✗".red(), msg.not_installed.red())
        };
        println!(
            "{} {:<6} {}",
            icon,
            software.display_name().bold(),
            state
        );

        if let Some(version) = &info.version {
            println!("    {}", version.dimmed());
        }
        match &info.config_path {
            Some(path) => {
                let modified = info.last_modified.as_deref().unwrap_or("");
                println!("    {} {}", path.display(), modified.dimmed());
            }
            None => println!("    {}", msg.no_config_file.dimmed()),
        }
    }

    Ok(())
}
