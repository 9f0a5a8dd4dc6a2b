//! Alias commands

use anyhow::{bail, Result};

use super::CommandContext;
use crate::cli::args::{split_definition, AliasCommands, DefinitionKind};
use crate::i18n::fill;

/// Execute an `alias` subcommand
pub fn execute(ctx: &CommandContext, command: &AliasCommands) -> Result<()> {
    let msg = ctx.messages;
    let mut parsed = ctx.load_for_edit()?;

    let (note, message) = match command {
        AliasCommands::Set { definition } => {
            let (name, value) = split_definition(definition, DefinitionKind::Alias)?;
            parsed.set_alias(name, value);
            (format!("Set alias {}", name), fill(msg.alias_set, &[name, value]))
        }
        AliasCommands::Unset { name } => {
            if parsed.remove_alias(name).is_none() {
                bail!(fill(msg.alias_not_found, &[name]));
            }
            (format!("Remove alias {}", name), fill(msg.alias_removed, &[name]))
        }
        AliasCommands::Toggle { name } => match parsed.toggle_alias(name) {
            Some(true) => (format!("Disable alias {}", name), fill(msg.alias_disabled, &[name])),
            Some(false) => (format!("Enable alias {}", name), fill(msg.alias_enabled, &[name])),
            None => bail!(fill(msg.alias_not_found, &[name])),
        },
    };

    ctx.save_parsed(parsed, note, &message)?;
    Ok(())
}
