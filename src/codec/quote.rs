//! Quoting, escaping and command-separator helpers shared by the parser and
//! the serializer.

/// Command separators that may chain further commands after an assignment.
pub const SEPARATORS: [&str; 3] = ["&&", "||", ";"];

/// Whether the line contains a command separator anywhere, quoted or not.
///
/// This only selects between the bounded and unbounded value extraction;
/// the bounded branch then looks for a separator outside quotes.
pub fn has_command_separator(line: &str) -> bool {
    SEPARATORS.iter().any(|sep| line.contains(sep))
}

/// Byte index of the first separator outside single or double quotes.
///
/// A backslash escapes the next character outside quotes and inside double
/// quotes. If a quote is left open the quoting is unreliable, so the first
/// separator anywhere is returned instead.
pub fn find_separator(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut quote: Option<u8> = None;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        match quote {
            Some(q) => {
                if b == b'\\' && q == b'"' {
                    i += 2;
                    continue;
                }
                if b == q {
                    quote = None;
                }
            }
            None => match b {
                b'\\' => {
                    i += 2;
                    continue;
                }
                b'"' | b'\'' => quote = Some(b),
                b';' => return Some(i),
                b'&' | b'|' if bytes.get(i + 1) == Some(&b) => return Some(i),
                _ => {}
            },
        }
        i += 1;
    }

    if quote.is_some() {
        return find_any_separator(text);
    }
    None
}

fn find_any_separator(text: &str) -> Option<usize> {
    SEPARATORS.iter().filter_map(|sep| text.find(sep)).min()
}

/// Split a raw value at the first separator outside quotes.
///
/// Returns the value part (trailing whitespace removed) and the suffix, which
/// starts with the whitespace before the separator and runs to end of line.
///
/// ```text
/// "vim" && echo done   ->   ("\"vim\"", Some(" && echo done"))
/// ```
pub fn split_bounded(raw: &str) -> (&str, Option<&str>) {
    match find_separator(raw) {
        Some(index) => {
            let value = raw[..index].trim_end();
            (value, Some(&raw[value.len()..]))
        }
        None => (raw, None),
    }
}

/// The leading quoted span of `value`, quotes included, if it starts with
/// a quote that is closed later on.
///
/// Anything after the closing quote is ignored.
pub fn quoted_span(value: &str) -> Option<&str> {
    let quote = value.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    let close = value[1..].find(quote)?;
    Some(&value[..close + 2])
}

/// Strip one matching pair of surrounding quotes.
///
/// The trimmed value must be at least two characters long and start and end
/// with the same quote character. Nested or escaped quotes are not handled.
pub fn unquote(value: &str) -> &str {
    let value = value.trim();
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Escape a value for interpolation inside double quotes.
///
/// Only `"` is escaped. `$`, backslashes and backticks pass through so that
/// expansions written by the user keep working when the file is sourced.
pub fn escape_value(value: &str) -> String {
    value.replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_command_separator() {
        assert!(has_command_separator("export A=1 && echo"));
        assert!(has_command_separator("export A=1 || true"));
        assert!(has_command_separator("export A=1; echo"));
        assert!(has_command_separator(r#"export A="x;y""#));
        assert!(!has_command_separator("export A=a&b|c"));
        assert!(!has_command_separator("export A=1"));
    }

    #[test]
    fn test_find_separator_skips_quoted() {
        assert_eq!(find_separator(r#""a;b" ; echo"#), Some(6));
        assert_eq!(find_separator("'x && y' && z"), Some(9));
        assert_eq!(find_separator(r#""a\"; b""#), None);
        assert_eq!(find_separator("a & b | c"), None);
    }

    #[test]
    fn test_find_separator_escaped() {
        assert_eq!(find_separator(r"a\;b; c"), Some(4));
    }

    #[test]
    fn test_find_separator_unclosed_quote_falls_back() {
        assert_eq!(find_separator(r#""abc; echo"#), Some(4));
    }

    #[test]
    fn test_split_bounded() {
        assert_eq!(
            split_bounded(r#""vim" && echo done"#),
            (r#""vim""#, Some(" && echo done"))
        );
        assert_eq!(split_bounded("value;next"), ("value", Some(";next")));
        assert_eq!(split_bounded(r#""a;b""#), (r#""a;b""#, None));
    }

    #[test]
    fn test_quoted_span() {
        assert_eq!(quoted_span(r#""vim" trailing"#), Some(r#""vim""#));
        assert_eq!(quoted_span("'ls -la'"), Some("'ls -la'"));
        assert_eq!(quoted_span(r#""unterminated"#), None);
        assert_eq!(quoted_span("plain"), None);
        assert_eq!(quoted_span(r#""""#), Some(r#""""#));
    }

    #[test]
    fn test_unquote() {
        assert_eq!(unquote(r#""hello""#), "hello");
        assert_eq!(unquote("'hello'"), "hello");
        assert_eq!(unquote("  'padded'  "), "padded");
        assert_eq!(unquote(r#""mixed'"#), r#""mixed'"#);
        assert_eq!(unquote(r#"""#), r#"""#);
        assert_eq!(unquote(r#""""#), "");
        assert_eq!(unquote("bare"), "bare");
    }

    #[test]
    fn test_unquote_strips_one_layer() {
        assert_eq!(unquote(r#""'inner'""#), "'inner'");
    }

    #[test]
    fn test_escape_value() {
        assert_eq!(escape_value(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(escape_value(r"$HOME/bin\x"), r"$HOME/bin\x");
        assert_eq!(escape_value("it's"), "it's");
    }
}
