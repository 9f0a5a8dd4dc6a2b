//! Format command implementation

use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use crate::codec;
use crate::i18n::fill;

/// Execute the format command
pub fn execute(ctx: &CommandContext, dry_run: bool) -> Result<()> {
    ctx.ensure_editable()?;
    let msg = ctx.messages;

    let current = ctx
        .store
        .read(ctx.software)?
        .map(|c| c.content)
        .unwrap_or_default();
    let parsed = codec::parse(&current);
    let formatted = codec::serialize(&parsed);

    if formatted == current {
        ctx.print_success(msg.format_unchanged);
        return Ok(());
    }

    if dry_run {
        print!("{}", formatted);
        eprintln!(
            "{}",
            format!(
                "{} -> {} lines",
                current.lines().count(),
                formatted.lines().count()
            )
            .dimmed()
        );
        return Ok(());
    }

    let file = ctx.config_file.display().to_string();
    ctx.save_parsed(parsed, "Format".to_string(), &fill(msg.file_formatted, &[&file]))?;

    Ok(())
}
