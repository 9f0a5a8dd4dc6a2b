//! CLI command implementations

pub mod alias;
pub mod check;
pub mod env;
pub mod format;
pub mod history;
pub mod path;
pub mod show;
pub mod status;
pub mod vars;

use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;
use tracing::warn;

use crate::cli::args::Cli;
use crate::error::Error;
use crate::history::ConfigVersion;
use crate::i18n::{fill, init_messages, Language, Messages};
use crate::model::{Config, ParsedConfig, Software};
use crate::pathcheck::PathChecker;
use crate::store::ConfigStore;

/// Common context for command execution
pub struct CommandContext {
    pub config: Config,
    pub software: Software,
    pub config_file: PathBuf,
    pub store: ConfigStore,
    pub paths: PathChecker,
    pub messages: &'static Messages,
}

impl CommandContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = Config::load()?;

        // Initialize i18n based on config
        let lang: Language = config.ui.language.parse().unwrap_or_default();
        let messages = init_messages(lang);

        let store = ConfigStore::from_config(&config, cli.file.clone());
        let config_file = store.config_path(cli.software);
        let paths = PathChecker::from_config(&config);

        Ok(Self {
            config,
            software: cli.software,
            config_file,
            store,
            paths,
            messages,
        })
    }

    /// Fail unless the selected software has a structured editor
    pub fn ensure_editable(&self) -> Result<()> {
        if !self.software.is_editable() {
            return Err(Error::UnsupportedSoftware(self.software.display_name().to_string()).into());
        }
        Ok(())
    }

    /// Load the parsed config for display. A file that cannot be read
    /// degrades to an empty config with a warning.
    pub fn load_parsed(&self) -> Result<ParsedConfig> {
        match self.store.load(self.software) {
            Ok(parsed) => Ok(parsed),
            Err(e @ Error::UnsupportedSoftware(_)) => Err(e.into()),
            Err(e) => {
                warn!(error = %e, "falling back to an empty config");
                self.print_warning(&fill(self.messages.load_failed, &[&e.to_string()]));
                Ok(ParsedConfig::default())
            }
        }
    }

    /// Load the parsed config for an edit. Read errors are returned, never
    /// papered over, since the result is written back to the file.
    pub fn load_for_edit(&self) -> Result<ParsedConfig> {
        Ok(self.store.load(self.software)?)
    }

    /// Serialize and save an edited config, then report `message`.
    pub fn save_parsed(&self, parsed: ParsedConfig, note: String, message: &str) -> Result<ConfigVersion> {
        let version = self.store.save_parsed(self.software, parsed, Some(note))?;
        self.print_success(message);
        self.print_saved(&version);
        self.print_reload_hint();
        Ok(version)
    }

    /// Print a success message
    pub fn print_success(&self, message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print a warning message
    pub fn print_warning(&self, message: &str) {
        println!("{} {}", "⚠".yellow(), message);
    }

    pub fn print_saved(&self, version: &ConfigVersion) {
        println!(
            "  {}",
            fill(
                self.messages.saved_version,
                &[&self.config_file.display().to_string(), &version.id]
            )
            .dimmed()
        );
    }

    /// Print reload hint after modifying configuration
    pub fn print_reload_hint(&self) {
        let reload_cmd = format!("source {}", self.config_file.display());
        println!(
            "{} {}",
            "→".cyan(),
            fill(self.messages.reload_hint, &[&reload_cmd]).dimmed()
        );
    }
}

/// Shorten `s` to `max_width` characters, ending in "..." when cut
pub fn truncate_value(s: &str, max_width: usize) -> String {
    let s = s.replace('\n', "\\n");

    if s.chars().count() <= max_width {
        s
    } else if max_width <= 3 {
        s.chars().take(max_width).collect()
    } else {
        format!("{}...", s.chars().take(max_width - 3).collect::<String>())
    }
}

/// Get terminal width, defaulting to 80 if unable to detect
pub fn terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_value() {
        assert_eq!(truncate_value("short", 10), "short");
        assert_eq!(truncate_value("abcdefghij", 8), "abcde...");
        assert_eq!(truncate_value("abcdef", 2), "ab");
        assert_eq!(truncate_value("a\nb", 10), "a\\nb");
    }
}
