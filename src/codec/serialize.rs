//! Canonical zsh text generation
//!
//! Output layout, sections in fixed order, each omitted entirely when it
//! has nothing to show:
//!
//! ```text
//! # Zsh Configuration
//! # Generated by rcedit
//!
//! # Environment Variables
//! export KEY="value"
//!
//! # PATH Configuration
//! export PATH="/a:/b:$PATH"
//!
//! # Aliases
//! alias ll="ls -la"
//!
//! # Other Configurations
//! ...verbatim lines...
//! ```

use crate::model::{ParsedConfig, VariableEntry};

use super::path_merge::PATH_PLACEHOLDER;
use super::quote::escape_value;

pub const BANNER: [&str; 2] = ["# Zsh Configuration", "# Generated by rcedit"];
pub const ENV_HEADER: &str = "# Environment Variables";
pub const PATH_HEADER: &str = "# PATH Configuration";
pub const ALIAS_HEADER: &str = "# Aliases";
pub const OTHER_HEADER: &str = "# Other Configurations";

/// Whether a trimmed comment line is one the serializer writes itself.
pub fn is_generated_header(line: &str) -> bool {
    BANNER.contains(&line)
        || [ENV_HEADER, PATH_HEADER, ALIAS_HEADER, OTHER_HEADER].contains(&line)
}

/// Render a parsed config back to zsh text.
pub fn serialize(config: &ParsedConfig) -> String {
    let mut lines: Vec<String> = BANNER.iter().map(|s| s.to_string()).collect();
    lines.push(String::new());

    if !config.environment_variables.is_empty() {
        lines.push(ENV_HEADER.to_string());
        for (name, entry) in &config.environment_variables {
            lines.push(format_assignment("export", name, entry));
        }
        lines.push(String::new());
    }

    if !config.paths.is_empty() {
        lines.push(PATH_HEADER.to_string());
        lines.push(format!(
            "export PATH=\"{}:{}\"",
            config.paths.join(":"),
            PATH_PLACEHOLDER
        ));
        lines.push(String::new());
    }

    if !config.aliases.is_empty() {
        lines.push(ALIAS_HEADER.to_string());
        for (name, entry) in &config.aliases {
            let line = format_assignment("alias", name, entry);
            if entry.is_disabled() {
                lines.push(format!("# {}", line));
            } else {
                lines.push(line);
            }
        }
        lines.push(String::new());
    }

    if !config.other_lines.is_empty() {
        lines.push(OTHER_HEADER.to_string());
        lines.extend(config.other_lines.iter().cloned());
        lines.push(String::new());
    }

    lines.join("\n")
}

fn format_assignment(keyword: &str, name: &str, entry: &VariableEntry) -> String {
    format!(
        "{} {}=\"{}\"{}",
        keyword,
        name,
        escape_value(entry.value()),
        entry.suffix().unwrap_or("")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config() {
        assert_eq!(
            serialize(&ParsedConfig::new()),
            "# Zsh Configuration\n# Generated by rcedit\n"
        );
    }

    #[test]
    fn test_all_sections() {
        let mut config = ParsedConfig::new();
        config.set_variable("EDITOR", "vim");
        config.add_path("/a");
        config.add_path("/b");
        config.set_alias("ll", "ls -la");
        config.other_lines.push("  setopt autocd".into());

        let expected = "\
# Zsh Configuration
# Generated by rcedit

# Environment Variables
export EDITOR=\"vim\"

# PATH Configuration
export PATH=\"/a:/b:$PATH\"

# Aliases
alias ll=\"ls -la\"

# Other Configurations
  setopt autocd
";
        assert_eq!(serialize(&config), expected);
    }

    #[test]
    fn test_suffix_appended_verbatim() {
        let mut config = ParsedConfig::new();
        config.environment_variables.insert(
            "EDITOR".into(),
            VariableEntry::with_suffix("vim", Some(" && echo done".into())),
        );
        assert!(serialize(&config).contains("export EDITOR=\"vim\" && echo done\n"));
    }

    #[test]
    fn test_quotes_escaped() {
        let mut config = ParsedConfig::new();
        config.set_variable("GREETING", r#"say "hi""#);
        assert!(serialize(&config).contains(r#"export GREETING="say \"hi\"""#));
    }

    #[test]
    fn test_disabled_alias_commented_out() {
        let mut config = ParsedConfig::new();
        config.set_alias("ll", "ls -la");
        config.toggle_alias("ll");
        assert!(serialize(&config).contains("# alias ll=\"ls -la\"\n"));
    }

    #[test]
    fn test_generated_headers() {
        assert!(is_generated_header("# Zsh Configuration"));
        assert!(is_generated_header("# PATH Configuration"));
        assert!(!is_generated_header("# my aliases"));
    }
}
