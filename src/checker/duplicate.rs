//! Duplicate definition checker

use indexmap::IndexMap;

use super::{CheckInput, CheckIssue, CheckResult, Checker};
use crate::codec::{classify_line, LineKind};

/// Reports exports and aliases assigned on more than one line.
///
/// Later assignments silently win when the file is parsed, so the earlier
/// ones are dead code. PATH is exempt: extending it in several places is
/// normal.
pub struct DuplicateChecker;

impl Checker for DuplicateChecker {
    fn check(&self, input: &CheckInput) -> CheckResult {
        let mut result = CheckResult::new();

        // (kind, name) -> 1-based line numbers, in first-seen order
        let mut seen: IndexMap<(&str, String), Vec<usize>> = IndexMap::new();

        for (index, line) in input.text.lines().enumerate() {
            let key = match classify_line(line) {
                LineKind::Export { name, .. } if name != "PATH" => ("export", name),
                LineKind::Alias { name, .. } => ("alias", name),
                _ => continue,
            };
            seen.entry(key).or_default().push(index + 1);
        }

        for ((kind, name), lines) in seen {
            if lines.len() < 2 {
                continue;
            }
            let listed: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
            result.add_issue(
                CheckIssue::warning(format!(
                    "Duplicate {} '{}' defined on lines: {}",
                    kind,
                    name,
                    listed.join(", ")
                ))
                .with_line(lines[0])
                .with_entry(name),
            );
        }

        result
    }
}
