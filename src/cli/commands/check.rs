//! Check command implementation

use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use crate::checker::{check_all, CheckInput, Severity};
use crate::codec;
use crate::i18n::fill;

/// Execute the check command. Returns whether any error was found.
pub fn execute(ctx: &CommandContext) -> Result<bool> {
    ctx.ensure_editable()?;
    let msg = ctx.messages;

    let text = ctx
        .store
        .read(ctx.software)?
        .map(|c| c.content)
        .unwrap_or_default();
    let parsed = codec::parse(&text);
    let check_result = check_all(
        &CheckInput {
            text: &text,
            parsed: &parsed,
        },
        &ctx.paths,
    );

    if check_result.is_ok() {
        ctx.print_success(msg.no_issues_found);
        return Ok(false);
    }

    println!("{}", msg.issues_found.red().bold());
    for issue in &check_result.issues {
        let icon = match issue.severity {
            Severity::Error => "✗".red(),
            Severity::Warning => "⚠".yellow(),
        };

        let severity = match issue.severity {
            Severity::Error => "ERROR".red(),
            Severity::Warning => "WARNING".yellow(),
        };

        print!("  {} [{}]", icon, severity);

        if let Some(line) = issue.line_number {
            print!(" Line {}", line);
        }

        if let Some(ref name) = issue.entry_name {
            print!(" ({})", name.cyan());
        }

        println!(": {}", issue.message);
    }

    // Summary
    println!();
    let error_count = check_result.count(Severity::Error);
    let warning_count = check_result.count(Severity::Warning);
    let summary = fill(
        msg.found_errors_warnings,
        &[&error_count.to_string(), &warning_count.to_string()],
    );
    if check_result.has_errors() {
        println!("{}", summary.red());
    } else {
        println!("{}", summary.yellow());
    }

    Ok(check_result.has_errors())
}
