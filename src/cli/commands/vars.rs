//! Knowledge base lookup

use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use crate::knowledge::{self, VariableInfo};

/// Execute the vars command
pub fn execute(ctx: &CommandContext, query: Option<&str>, category: Option<&str>) -> Result<()> {
    let msg = ctx.messages;

    // An exact name match gets the detailed view
    if let (Some(name), None) = (query, category) {
        if let Some(info) = knowledge::lookup(name) {
            print_details(ctx, info);
            return Ok(());
        }
    }

    let mut found: Vec<&VariableInfo> = match query {
        Some(query) => knowledge::search(query),
        None => knowledge::VARIABLES.iter().collect(),
    };
    if let Some(category) = category {
        found.retain(|v| v.category.eq_ignore_ascii_case(category));
    }

    if found.is_empty() {
        println!("{}", msg.no_variables_found.dimmed());
        println!(
            "{}",
            format!("Categories: {}", knowledge::categories().join(", ")).dimmed()
        );
        return Ok(());
    }

    let mut current_category = "";
    for info in &found {
        if info.category != current_category {
            if !current_category.is_empty() {
                println!();
            }
            println!("{}", info.category.bold().cyan());
            current_category = info.category;
        }
        println!("  {:<24} {}", info.name.yellow(), info.description);
    }

    if query.is_none() && category.is_none() {
        print_suggestions(ctx);
    }

    Ok(())
}

fn print_details(ctx: &CommandContext, info: &VariableInfo) {
    let msg = ctx.messages;
    println!("{} {}", info.name.bold().yellow(), format!("[{}]", info.category).dimmed());
    println!("  {}", info.description);
    println!("  {} {}", msg.label_format.bold(), info.value_format);
    if !info.examples.is_empty() {
        println!("  {} {}", msg.label_examples.bold(), info.examples.join(", "));
    }

    if let Ok(parsed) = ctx.store.load(ctx.software) {
        let current = if info.name == "PATH" {
            (!parsed.paths.is_empty()).then(|| parsed.paths.join(":"))
        } else {
            parsed
                .environment_variables
                .get(info.name)
                .map(|e| e.value().to_string())
        };
        if let Some(value) = current {
            println!("  {} {}", msg.label_current.bold(), value.green());
            if let Some(problem) = knowledge::validate(info, &value).message() {
                ctx.print_warning(&crate::i18n::fill(msg.value_warning, &[problem]));
            }
        }
    }
}

fn print_suggestions(ctx: &CommandContext) {
    let Ok(parsed) = ctx.store.load(ctx.software) else {
        return;
    };
    let mut existing: Vec<&str> = parsed
        .environment_variables
        .keys()
        .map(String::as_str)
        .collect();
    if !parsed.paths.is_empty() {
        existing.push("PATH");
    }

    let suggestions = knowledge::suggested(existing);
    if suggestions.is_empty() {
        return;
    }
    println!();
    println!("{}", ctx.messages.suggested_header.bold());
    for info in suggestions {
        println!(
            "  {:<24} {}",
            info.name.yellow(),
            format!("e.g. {}", knowledge::default_value(info)).dimmed()
        );
    }
}
