//! PATH entry existence checker

use super::{CheckInput, CheckIssue, CheckResult, Checker};
use crate::pathcheck::PathChecker;

/// Reports PATH entries that are missing or are not directories.
pub struct PathEntryChecker<'a> {
    paths: &'a PathChecker,
}

impl<'a> PathEntryChecker<'a> {
    pub fn new(paths: &'a PathChecker) -> Self {
        Self { paths }
    }
}

impl Checker for PathEntryChecker<'_> {
    fn check(&self, input: &CheckInput) -> CheckResult {
        let mut result = CheckResult::new();

        for status in self.paths.check_batch(&input.parsed.paths) {
            if !status.exists {
                result.add_issue(
                    CheckIssue::warning(format!(
                        "PATH entry does not exist: {}",
                        status.expanded
                    ))
                    .with_entry(status.original),
                );
            } else if !status.is_directory {
                result.add_issue(
                    CheckIssue::error(format!(
                        "PATH entry is not a directory: {}",
                        status.expanded
                    ))
                    .with_entry(status.original),
                );
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::Severity;
    use crate::model::ParsedConfig;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn test_path_entries() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("tool");
        std::fs::write(&file, "").unwrap();

        let mut parsed = ParsedConfig::new();
        parsed.add_path(temp.path().to_string_lossy());
        parsed.add_path(file.to_string_lossy());
        parsed.add_path(temp.path().join("missing").to_string_lossy());

        let paths = PathChecker::new(Duration::from_secs(5));
        let result = PathEntryChecker::new(&paths).check(&CheckInput {
            text: "",
            parsed: &parsed,
        });

        let severities: Vec<_> = result.issues.iter().map(|i| i.severity).collect();
        assert_eq!(severities, vec![Severity::Error, Severity::Warning]);
    }
}
