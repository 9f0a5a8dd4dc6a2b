//! Environment variable commands

use anyhow::{bail, Result};

use super::CommandContext;
use crate::cli::args::{split_definition, DefinitionKind, EnvCommands};
use crate::i18n::fill;
use crate::knowledge;

/// Execute an `env` subcommand
pub fn execute(ctx: &CommandContext, command: &EnvCommands) -> Result<()> {
    match command {
        EnvCommands::Set { definition } => set(ctx, definition),
        EnvCommands::Unset { name } => unset(ctx, name),
    }
}

fn set(ctx: &CommandContext, definition: &str) -> Result<()> {
    let msg = ctx.messages;
    let (name, value) = split_definition(definition, DefinitionKind::Export)?;
    if name == "PATH" {
        bail!("PATH is edited with 'rcedit path add|remove|move'");
    }

    if let Some(problem) = knowledge::validate_named(name, value).message() {
        ctx.print_warning(&fill(msg.value_warning, &[problem]));
    }

    let mut parsed = ctx.load_for_edit()?;
    parsed.set_variable(name, value);
    ctx.save_parsed(
        parsed,
        format!("Set {}", name),
        &fill(msg.var_set, &[name, value]),
    )?;
    Ok(())
}

fn unset(ctx: &CommandContext, name: &str) -> Result<()> {
    let msg = ctx.messages;
    let mut parsed = ctx.load_for_edit()?;
    if parsed.remove_variable(name).is_none() {
        bail!(fill(msg.var_not_found, &[name]));
    }
    ctx.save_parsed(
        parsed,
        format!("Remove {}", name),
        &fill(msg.var_removed, &[name]),
    )?;
    Ok(())
}
