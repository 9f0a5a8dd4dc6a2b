//! CLI argument definitions using Clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::codec::patterns::{ALIAS_NAME_RE, EXPORT_NAME_RE};
use crate::error::Error;
use crate::model::{PathMove, Software};

#[derive(Parser)]
#[command(name = "rcedit")]
#[command(about = "Structured editor for shell resource files")]
#[command(version)]
#[command(author)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file to operate on instead of the software's default
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Software whose config is edited (zsh, bash, vim, git, tmux)
    #[arg(short, long, global = true, default_value = "zsh", value_parser = parse_software)]
    pub software: Software,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

fn parse_software(s: &str) -> Result<Software, String> {
    s.parse().map_err(|e: Error| e.to_string())
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the parsed configuration
    #[command(visible_alias = "ls")]
    Show {
        /// Only this section
        section: Option<Section>,
    },

    /// Rewrite the file in canonical form
    Format {
        /// Print the formatted output instead of writing it
        #[arg(long)]
        dry_run: bool,
    },

    /// Environment variables
    Env {
        #[command(subcommand)]
        env_command: EnvCommands,
    },

    /// PATH entries
    Path {
        #[command(subcommand)]
        path_command: PathCommands,
    },

    /// Aliases
    Alias {
        #[command(subcommand)]
        alias_command: AliasCommands,
    },

    /// Version history
    History {
        #[command(subcommand)]
        history_command: HistoryCommands,
    },

    /// Installation and config status of known software
    Status,

    /// Check for duplicates, bad values and missing PATH directories
    Check,

    /// Look up well-known environment variables
    Vars {
        /// Search name, description and category
        query: Option<String>,
        /// Only variables in this category
        #[arg(short, long)]
        category: Option<String>,
    },
}

/// Sections printed by `show`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Section {
    Env,
    Path,
    Alias,
    Other,
}

#[derive(Subcommand)]
pub enum EnvCommands {
    /// Set a variable
    Set {
        /// NAME=VALUE format
        definition: String,
    },
    /// Remove a variable
    #[command(visible_alias = "rm")]
    Unset { name: String },
}

#[derive(Subcommand)]
pub enum PathCommands {
    /// Append a directory
    Add { dir: String },
    /// Remove a directory
    #[command(visible_alias = "rm")]
    Remove { dir: String },
    /// Reorder an entry (1-based index)
    Move {
        index: usize,
        #[arg(value_parser = parse_move)]
        direction: PathMove,
    },
    /// Report which entries exist on disk
    Check,
}

fn parse_move(s: &str) -> Result<PathMove, String> {
    s.parse()
}

#[derive(Subcommand)]
pub enum AliasCommands {
    /// Define an alias
    Set {
        /// NAME=VALUE format
        definition: String,
    },
    /// Remove an alias
    #[command(visible_alias = "rm")]
    Unset { name: String },
    /// Enable or disable an alias
    Toggle { name: String },
}

#[derive(Subcommand)]
pub enum HistoryCommands {
    /// List saved versions, newest first
    #[command(visible_alias = "ls")]
    List {
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Print the content of a version
    Show { id: String },
    /// Write a version back to the config file
    Restore {
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Delete a version
    #[command(visible_alias = "rm")]
    Delete { id: String },
    /// Record the current file as a manual version
    Backup {
        #[arg(short, long)]
        note: Option<String>,
    },
    /// Show or set how many auto-saved versions are kept
    Max {
        #[arg(value_parser = clap::value_parser!(u64).range(1..=100))]
        value: Option<u64>,
    },
}

/// What a `NAME=VALUE` argument assigns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionKind {
    Export,
    Alias,
}

/// Split `NAME=VALUE`; the value may itself contain `=`.
///
/// The name must be one the parser reads back for `kind` and the value must
/// stay on one line, otherwise the saved entry would not survive a reload.
pub fn split_definition(definition: &str, kind: DefinitionKind) -> Result<(&str, &str), Error> {
    let invalid = || Error::InvalidEntry(definition.to_string());
    let (name, value) = definition.split_once('=').ok_or_else(invalid)?;

    let name_re = match kind {
        DefinitionKind::Export => &*EXPORT_NAME_RE,
        DefinitionKind::Alias => &*ALIAS_NAME_RE,
    };
    if !name_re.is_match(name) || value.contains(['\n', '\r']) {
        return Err(invalid());
    }
    Ok((name, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_split_definition() {
        use DefinitionKind::{Alias, Export};

        assert_eq!(split_definition("A=1", Export).unwrap(), ("A", "1"));
        assert_eq!(split_definition("ll=ls -la", Alias).unwrap(), ("ll", "ls -la"));
        assert_eq!(split_definition("A=b=c", Export).unwrap(), ("A", "b=c"));
        assert_eq!(split_definition("A=", Export).unwrap(), ("A", ""));
        assert!(split_definition("=1", Export).is_err());
        assert!(split_definition("A B=1", Export).is_err());
        assert!(split_definition("novalue", Alias).is_err());
    }

    #[test]
    fn test_split_definition_follows_parser_grammar() {
        use DefinitionKind::{Alias, Export};

        assert!(matches!(
            split_definition("foo=bar", Export),
            Err(Error::InvalidEntry(_))
        ));
        assert!(split_definition("1ABC=x", Export).is_err());
        assert!(split_definition("..=cd ..", Alias).is_err());
        assert!(split_definition("-g=grep", Alias).is_err());
        assert_eq!(split_definition("gitLog=git log", Alias).unwrap().0, "gitLog");
        assert!(split_definition("gitLog=git log", Export).is_err());
    }

    #[test]
    fn test_split_definition_rejects_multiline_values() {
        assert!(split_definition("A=one\ntwo", DefinitionKind::Export).is_err());
        assert!(split_definition("ll=ls\r", DefinitionKind::Alias).is_err());
    }

    #[test]
    fn test_parse_global_options() {
        let cli = Cli::try_parse_from(["rcedit", "--software", "bash", "status"]).unwrap();
        assert_eq!(cli.software, Software::Bash);
        assert!(Cli::try_parse_from(["rcedit", "-s", "emacs", "status"]).is_err());
        assert!(Cli::try_parse_from(["rcedit", "history", "max", "0"]).is_err());
        assert!(Cli::try_parse_from(["rcedit", "history", "max", "100"]).is_ok());

        let cli = Cli::try_parse_from(["rcedit", "path", "move", "2", "top"]).unwrap();
        match cli.command {
            Commands::Path {
                path_command: PathCommands::Move { index, direction },
            } => {
                assert_eq!(index, 2);
                assert_eq!(direction, PathMove::Top);
            }
            _ => panic!("expected path move"),
        }
    }
}
