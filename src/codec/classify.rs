//! # Line Classification
//!
//! Each line is classified on its own, by trying the patterns in a fixed
//! order: export, alias, bare PATH, fallback. The first match wins and a
//! line has at most one structural effect.
//!
//! ## Separator handling
//!
//! Whether the trimmed line contains `&&`, `||` or `;` is computed once and
//! selects one of two value extraction branches:
//!
//! | Separator present | Branch | Value | Suffix |
//! |-------------------|--------|-------|--------|
//! | no | unbounded | rest of the line | none |
//! | yes | bounded | up to the first separator outside quotes | separator to end of line |
//!
//! The bare `PATH=` form never splits off a suffix.

use super::patterns::{ALIAS_RE, BARE_PATH_RE, EXPORT_RE};
use super::quote::{has_command_separator, quoted_span, split_bounded, unquote};
use super::serialize::is_generated_header;

/// What a single source line means to the codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Empty or whitespace-only
    Blank,
    /// A banner or section header emitted by the serializer itself
    GeneratedHeader,
    /// Any other line starting with `#`
    Comment,
    /// `export NAME=VALUE`
    Export {
        name: String,
        value: String,
        suffix: Option<String>,
    },
    /// `alias NAME=VALUE`
    Alias {
        name: String,
        value: String,
        suffix: Option<String>,
    },
    /// `PATH=VALUE` without `export`
    BarePath { value: String },
    /// Nothing the codec understands
    Other,
}

/// Classify one untrimmed source line.
pub fn classify_line(line: &str) -> LineKind {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    if trimmed.starts_with('#') {
        if is_generated_header(trimmed) {
            return LineKind::GeneratedHeader;
        }
        return LineKind::Comment;
    }

    let has_separator = has_command_separator(trimmed);

    if let Some(caps) = EXPORT_RE.captures(trimmed) {
        if let Some((value, suffix)) = extract_value(&caps[2], has_separator) {
            return LineKind::Export {
                name: caps[1].to_string(),
                value,
                suffix,
            };
        }
    }

    if let Some(caps) = ALIAS_RE.captures(trimmed) {
        if let Some((value, suffix)) = extract_value(&caps[2], has_separator) {
            return LineKind::Alias {
                name: caps[1].to_string(),
                value,
                suffix,
            };
        }
    }

    if let Some(caps) = BARE_PATH_RE.captures(trimmed) {
        return LineKind::BarePath {
            value: unquote(&caps[1]).to_string(),
        };
    }

    LineKind::Other
}

/// Extract the clean value and optional suffix from the text after `=`.
///
/// Returns `None` when the bounded branch leaves no value at all
/// (`export A=; echo`), which does not count as an assignment.
fn extract_value(raw: &str, has_separator: bool) -> Option<(String, Option<String>)> {
    let (head, suffix) = if has_separator {
        let (head, suffix) = split_bounded(raw);
        if head.trim().is_empty() {
            return None;
        }
        (head, suffix)
    } else {
        (raw, None)
    };

    let head = head.trim();
    let actual = quoted_span(head).unwrap_or(head);
    Some((unquote(actual).to_string(), suffix.map(str::to_string)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn export(name: &str, value: &str, suffix: Option<&str>) -> LineKind {
        LineKind::Export {
            name: name.into(),
            value: value.into(),
            suffix: suffix.map(Into::into),
        }
    }

    fn alias(name: &str, value: &str, suffix: Option<&str>) -> LineKind {
        LineKind::Alias {
            name: name.into(),
            value: value.into(),
            suffix: suffix.map(Into::into),
        }
    }

    #[test]
    fn test_blank_and_comment() {
        assert_eq!(classify_line(""), LineKind::Blank);
        assert_eq!(classify_line("   \t"), LineKind::Blank);
        assert_eq!(classify_line("  # note"), LineKind::Comment);
        assert_eq!(classify_line("# Aliases"), LineKind::GeneratedHeader);
    }

    #[test]
    fn test_export_unbounded() {
        assert_eq!(classify_line("export EDITOR=vim"), export("EDITOR", "vim", None));
        assert_eq!(
            classify_line(r#"  export GOPATH="$HOME/go"  "#),
            export("GOPATH", "$HOME/go", None)
        );
        assert_eq!(classify_line("export EMPTY="), export("EMPTY", "", None));
    }

    #[test]
    fn test_export_quoted_ignores_trailing_text() {
        assert_eq!(
            classify_line(r#"export EDITOR="vim" # main editor"#),
            export("EDITOR", "vim", None)
        );
    }

    #[test]
    fn test_export_with_chain() {
        assert_eq!(
            classify_line(r#"export EDITOR="vim" && echo done"#),
            export("EDITOR", "vim", Some(" && echo done"))
        );
        assert_eq!(
            classify_line("export A=1;export B=2"),
            export("A", "1", Some(";export B=2"))
        );
        assert_eq!(
            classify_line("export A=1 || true"),
            export("A", "1", Some(" || true"))
        );
    }

    #[test]
    fn test_export_separator_inside_quotes() {
        assert_eq!(
            classify_line(r#"export PS="a;b""#),
            export("PS", "a;b", None)
        );
        assert_eq!(
            classify_line(r#"export PS="a;b"; echo"#),
            export("PS", "a;b", Some("; echo"))
        );
    }

    #[test]
    fn test_export_without_value_before_separator_is_other() {
        assert_eq!(classify_line("export A=; echo"), LineKind::Other);
    }

    #[test]
    fn test_alias() {
        assert_eq!(classify_line("alias ll='ls -la'"), alias("ll", "ls -la", None));
        assert_eq!(
            classify_line(r#"alias gs="git status"; clear"#),
            alias("gs", "git status", Some("; clear"))
        );
        assert_eq!(
            classify_line("alias up='cd .. && ls'"),
            alias("up", "cd .. && ls", None)
        );
    }

    #[test]
    fn test_bare_path_has_no_suffix_handling() {
        assert_eq!(
            classify_line(r#"PATH="/opt/bin:$PATH""#),
            LineKind::BarePath {
                value: "/opt/bin:$PATH".into()
            }
        );
        assert_eq!(
            classify_line("PATH=/a:$PATH && rehash"),
            LineKind::BarePath {
                value: "/a:$PATH && rehash".into()
            }
        );
    }

    #[test]
    fn test_other() {
        assert_eq!(classify_line("function foo() { echo hi }"), LineKind::Other);
        assert_eq!(classify_line("source ~/.profile"), LineKind::Other);
        assert_eq!(classify_line("export lower=1"), LineKind::Other);
        assert_eq!(classify_line("alias ..='cd ..'"), LineKind::Other);
    }
}
