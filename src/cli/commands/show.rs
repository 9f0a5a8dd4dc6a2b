//! Show command implementation

use anyhow::Result;
use colored::Colorize;

use super::{terminal_width, truncate_value, CommandContext};
use crate::cli::args::Section;
use crate::model::{ParsedConfig, VariableEntry};

/// Execute the show command
pub fn execute(ctx: &CommandContext, section: Option<Section>) -> Result<()> {
    let parsed = ctx.load_parsed()?;
    let width = terminal_width();

    let sections = match section {
        Some(section) => vec![section],
        None => vec![Section::Env, Section::Path, Section::Alias, Section::Other],
    };

    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_section(ctx, &parsed, *section, width);
    }

    Ok(())
}

fn print_section(ctx: &CommandContext, parsed: &ParsedConfig, section: Section, width: usize) {
    let msg = ctx.messages;
    let (title, count) = match section {
        Section::Env => (msg.section_env, parsed.environment_variables.len()),
        Section::Path => (msg.section_path, parsed.paths.len()),
        Section::Alias => (msg.section_alias, parsed.aliases.len()),
        Section::Other => (msg.section_other, parsed.other_lines.len()),
    };

    println!("{} {}", title.bold().cyan(), format!("({})", count).dimmed());
    println!("{}", "─".repeat(width.min(60)).dimmed());

    if count == 0 {
        println!("  {}", msg.none.dimmed());
        return;
    }

    match section {
        Section::Env => {
            for (name, entry) in &parsed.environment_variables {
                print_entry(ctx, name.yellow().to_string(), name.len(), entry, width);
            }
        }
        Section::Path => {
            for (i, path) in parsed.paths.iter().enumerate() {
                println!("  {:>3}. {}", i + 1, truncate_value(path, width.saturating_sub(8)));
            }
        }
        Section::Alias => {
            for (name, entry) in &parsed.aliases {
                print_entry(ctx, name.green().to_string(), name.len(), entry, width);
            }
        }
        Section::Other => {
            for line in &parsed.other_lines {
                println!("  {}", truncate_value(line, width.saturating_sub(2)).dimmed());
            }
        }
    }
}

fn print_entry(ctx: &CommandContext, name: String, name_len: usize, entry: &VariableEntry, width: usize) {
    let value_width = width.saturating_sub(name_len + 5).max(10);
    let mut line = format!("  {} = {}", name, truncate_value(entry.value(), value_width));
    if let Some(suffix) = entry.suffix() {
        line.push_str(&format!(" {}", suffix.trim().dimmed()));
    }
    if entry.is_disabled() {
        line.push_str(&format!(" {}", ctx.messages.disabled_marker.red()));
    }
    println!("{}", line);
}
