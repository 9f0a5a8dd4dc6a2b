//! Version history commands

use anyhow::Result;
use colored::Colorize;
use dialoguer::Confirm;

use super::{terminal_width, truncate_value, CommandContext};
use crate::cli::args::HistoryCommands;
use crate::i18n::fill;

/// Execute a `history` subcommand
pub fn execute(ctx: &CommandContext, command: &HistoryCommands) -> Result<()> {
    match command {
        HistoryCommands::List { limit } => list(ctx, *limit),
        HistoryCommands::Show { id } => show(ctx, id),
        HistoryCommands::Restore { id, yes } => restore(ctx, id, *yes),
        HistoryCommands::Delete { id } => delete(ctx, id),
        HistoryCommands::Backup { note } => backup(ctx, note.clone()),
        HistoryCommands::Max { value } => max_versions(ctx, *value),
    }
}

fn list(ctx: &CommandContext, limit: Option<usize>) -> Result<()> {
    let msg = ctx.messages;
    let versions = ctx.store.versions().history(ctx.software, limit)?;

    if versions.is_empty() {
        println!("{}", msg.no_versions.dimmed());
        return Ok(());
    }

    let width = terminal_width();
    println!(
        "{:<28} {:<26} {:<8} {}",
        "ID".bold().cyan(),
        "CREATED".bold().cyan(),
        "TYPE".bold().cyan(),
        "NOTE".bold().cyan()
    );
    println!("{}", "─".repeat(width.min(90)).dimmed());

    let note_width = width.saturating_sub(28 + 26 + 8 + 3).max(20);
    for version in &versions {
        let kind = if version.is_auto_save {
            msg.label_auto.dimmed()
        } else {
            msg.label_manual.green()
        };
        println!(
            "{:<28} {:<26} {:<8} {}",
            version.id.white(),
            version.created_at.dimmed(),
            kind,
            truncate_value(version.note.as_deref().unwrap_or(""), note_width)
        );
    }

    println!();
    println!("{}", format!("Total: {} version(s)", versions.len()).dimmed());
    Ok(())
}

fn show(ctx: &CommandContext, id: &str) -> Result<()> {
    let version = ctx.store.versions().get_version(ctx.software, id)?;
    print!("{}", version.content);
    Ok(())
}

fn restore(ctx: &CommandContext, id: &str, yes: bool) -> Result<()> {
    let msg = ctx.messages;
    let version = ctx.store.versions().get_version(ctx.software, id)?;

    println!("{} ({})", version.id.cyan(), version.created_at.dimmed());

    if !yes
        && !Confirm::new()
            .with_prompt(fill(msg.restore_prompt, &[id]))
            .default(false)
            .interact()?
    {
        println!("{}", msg.cancelled);
        return Ok(());
    }

    let restored = ctx.store.restore(ctx.software, id)?;
    ctx.print_success(&fill(msg.version_restored, &[id]));
    ctx.print_saved(&restored);
    ctx.print_reload_hint();
    Ok(())
}

fn delete(ctx: &CommandContext, id: &str) -> Result<()> {
    ctx.store.versions().delete_version(ctx.software, id)?;
    ctx.print_success(&fill(ctx.messages.version_deleted, &[id]));
    Ok(())
}

fn backup(ctx: &CommandContext, note: Option<String>) -> Result<()> {
    let version = ctx.store.create_backup(ctx.software, note)?;
    ctx.print_success(&fill(ctx.messages.backup_created, &[&version.id]));
    Ok(())
}

fn max_versions(ctx: &CommandContext, value: Option<u64>) -> Result<()> {
    let msg = ctx.messages;
    match value {
        None => {
            let current = ctx.store.versions().get_max_versions(ctx.software)?;
            println!("{}", fill(msg.max_versions_current, &[&current.to_string()]));
        }
        Some(value) => {
            ctx.store
                .versions()
                .set_max_versions(ctx.software, value as usize)?;
            ctx.print_success(&fill(msg.max_versions_set, &[&value.to_string()]));
        }
    }
    Ok(())
}
