//! Single forward pass from zsh text to [`ParsedConfig`]

use crate::model::{ParsedConfig, VariableEntry};

use super::classify::{classify_line, LineKind};
use super::path_merge::PathAccumulator;

/// Parse zsh resource text. Never fails: unrecognized lines are kept
/// verbatim in `other_lines`.
pub fn parse(text: &str) -> ParsedConfig {
    let mut config = ParsedConfig::new();
    let mut paths = PathAccumulator::new();

    for line in text.lines() {
        match classify_line(line) {
            LineKind::Blank | LineKind::GeneratedHeader => {}
            LineKind::Comment | LineKind::Other => config.other_lines.push(line.to_string()),
            LineKind::Export {
                name,
                value,
                suffix,
            } => {
                if name == "PATH" {
                    paths.merge(&value);
                } else {
                    config
                        .environment_variables
                        .insert(name, VariableEntry::with_suffix(value, suffix));
                }
            }
            LineKind::Alias {
                name,
                value,
                suffix,
            } => {
                config
                    .aliases
                    .insert(name, VariableEntry::with_suffix(value, suffix));
            }
            LineKind::BarePath { value } => {
                paths.merge(&value);
            }
        }
    }

    config.paths = paths.into_paths();
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(parse("").is_empty());
        assert!(parse("\n\n   \n").is_empty());
    }

    #[test]
    fn test_reassignment_keeps_first_position() {
        let config = parse("export A=1\nexport B=2\nexport A=3\n");
        let entries: Vec<_> = config
            .environment_variables
            .iter()
            .map(|(k, v)| (k.as_str(), v.value()))
            .collect();
        assert_eq!(entries, vec![("A", "3"), ("B", "2")]);
    }

    #[test]
    fn test_path_never_an_env_var() {
        let config = parse("export PATH=\"/usr/local/bin:$PATH\"\n");
        assert!(!config.environment_variables.contains_key("PATH"));
        assert_eq!(config.paths, vec!["/usr/local/bin"]);
    }

    #[test]
    fn test_path_suffix_dropped() {
        let config = parse("export PATH=\"/a:$PATH\" && rehash\n");
        assert_eq!(config.paths, vec!["/a"]);
        assert!(config.other_lines.is_empty());
    }

    #[test]
    fn test_crlf_lines() {
        let config = parse("export A=1\r\nalias ll='ls'\r\n");
        assert_eq!(config.environment_variables["A"].value(), "1");
        assert_eq!(config.aliases["ll"].value(), "ls");
    }

    #[test]
    fn test_other_lines_untrimmed() {
        let config = parse("if true; then\n  echo hi\nfi\n# comment\n");
        assert_eq!(
            config.other_lines,
            vec!["if true; then", "  echo hi", "fi", "# comment"]
        );
    }
}
