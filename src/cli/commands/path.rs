//! PATH commands

use anyhow::{bail, Result};
use colored::Colorize;

use super::CommandContext;
use crate::cli::args::PathCommands;
use crate::i18n::fill;
use crate::model::PathMove;
use crate::pathcheck::PathCheckResult;

/// Execute a `path` subcommand
pub fn execute(ctx: &CommandContext, command: &PathCommands) -> Result<()> {
    match command {
        PathCommands::Add { dir } => add(ctx, dir),
        PathCommands::Remove { dir } => remove(ctx, dir),
        PathCommands::Move { index, direction } => move_entry(ctx, *index, *direction),
        PathCommands::Check => check(ctx),
    }
}

fn add(ctx: &CommandContext, dir: &str) -> Result<()> {
    let msg = ctx.messages;
    let mut parsed = ctx.load_for_edit()?;
    if !parsed.add_path(dir) {
        ctx.print_warning(&fill(msg.path_exists, &[dir]));
        return Ok(());
    }

    let probe = ctx.paths.check(dir);
    if !probe.exists {
        ctx.print_warning(&format!("{}: {}", probe.expanded, msg.path_missing));
    }

    ctx.save_parsed(parsed, format!("Add {} to PATH", dir), &fill(msg.path_added, &[dir]))?;
    Ok(())
}

fn remove(ctx: &CommandContext, dir: &str) -> Result<()> {
    let msg = ctx.messages;
    let mut parsed = ctx.load_for_edit()?;
    if !parsed.remove_path(dir) {
        bail!(fill(msg.path_not_found, &[dir]));
    }
    ctx.save_parsed(
        parsed,
        format!("Remove {} from PATH", dir),
        &fill(msg.path_removed, &[dir]),
    )?;
    Ok(())
}

/// `index` is 1-based, as printed by `show path`
fn move_entry(ctx: &CommandContext, index: usize, direction: PathMove) -> Result<()> {
    let msg = ctx.messages;
    let mut parsed = ctx.load_for_edit()?;
    let direction_name = format!("{:?}", direction).to_lowercase();

    let moved = index
        .checked_sub(1)
        .and_then(|i| parsed.paths.get(i).cloned().map(|p| (i, p)));
    let Some((from, path)) = moved else {
        bail!(fill(msg.path_move_invalid, &[&index.to_string(), &direction_name]));
    };
    let Some(to) = parsed.move_path(from, direction) else {
        bail!(fill(msg.path_move_invalid, &[&index.to_string(), &direction_name]));
    };

    ctx.save_parsed(
        parsed,
        format!("Move {} {}", path, direction_name),
        &fill(msg.path_moved, &[&path, &(to + 1).to_string()]),
    )?;
    Ok(())
}

fn check(ctx: &CommandContext) -> Result<()> {
    let msg = ctx.messages;
    let parsed = ctx.load_parsed()?;

    if parsed.paths.is_empty() {
        println!("{}", msg.none.dimmed());
        return Ok(());
    }

    let results = ctx.paths.check_batch(&parsed.paths);
    for (i, result) in results.iter().enumerate() {
        let (icon, label) = status_label(ctx, result);
        print!("  {:>3}. {} {}", i + 1, icon, result.original);
        if result.expanded != result.original {
            print!(" {}", format!("→ {}", result.expanded).dimmed());
        }
        println!(" {}", label);
    }

    Ok(())
}

fn status_label(
    ctx: &CommandContext,
    result: &PathCheckResult,
) -> (colored::ColoredString, colored::ColoredString) {
    let msg = ctx.messages;
    if !result.exists {
        ("⚠".yellow(), format!("[{}]", msg.path_missing).yellow())
    } else if !result.is_directory {
        ("✗".red(), format!("[{}]", msg.path_not_dir).red())
    } else {
        ("✓".green(), format!("[{}]", msg.path_ok).dimmed())
    }
}
