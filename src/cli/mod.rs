//! CLI module

pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::CommandContext;

use anyhow::Result;

use args::Commands;

/// What the process should exit with after a command ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// `check` found errors
    IssuesFound,
}

/// Dispatch a parsed command line
pub fn run(cli: &Cli) -> Result<Outcome> {
    let ctx = CommandContext::from_cli(cli)?;
    tracing::debug!(
        software = %ctx.software,
        file = %ctx.config_file.display(),
        "running command"
    );

    match &cli.command {
        Commands::Show { section } => commands::show::execute(&ctx, *section)?,
        Commands::Format { dry_run } => commands::format::execute(&ctx, *dry_run)?,
        Commands::Env { env_command } => commands::env::execute(&ctx, env_command)?,
        Commands::Path { path_command } => commands::path::execute(&ctx, path_command)?,
        Commands::Alias { alias_command } => commands::alias::execute(&ctx, alias_command)?,
        Commands::History { history_command } => {
            commands::history::execute(&ctx, history_command)?
        }
        Commands::Status => commands::status::execute(&ctx, cli.file.is_some())?,
        Commands::Check => {
            if commands::check::execute(&ctx)? {
                return Ok(Outcome::IssuesFound);
            }
        }
        Commands::Vars { query, category } => {
            commands::vars::execute(&ctx, query.as_deref(), category.as_deref())?
        }
    }

    Ok(Outcome::Success)
}
