//! Value checker backed by the variable knowledge base

use super::{CheckInput, CheckIssue, CheckResult, Checker};
use crate::knowledge::{validate_named, Validation};

/// Flags values of well-known variables that do not fit their format.
pub struct ValueChecker;

impl Checker for ValueChecker {
    fn check(&self, input: &CheckInput) -> CheckResult {
        let mut result = CheckResult::new();

        for (name, entry) in &input.parsed.environment_variables {
            if let Validation::Invalid { message } = validate_named(name, entry.value()) {
                result.add_issue(CheckIssue::warning(message).with_entry(name.as_str()));
            }
        }

        if !input.parsed.paths.is_empty() {
            if let Validation::Invalid { message } =
                validate_named("PATH", &input.parsed.paths.join(":"))
            {
                result.add_issue(CheckIssue::warning(message).with_entry("PATH"));
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::parse;

    fn run(text: &str) -> CheckResult {
        let parsed = parse(text);
        ValueChecker.check(&CheckInput {
            text,
            parsed: &parsed,
        })
    }

    #[test]
    fn test_valid_values() {
        assert!(run("export HISTSIZE=1000\nexport GO111MODULE=on\nexport FOO=bar\n").is_ok());
    }

    #[test]
    fn test_invalid_values() {
        let result = run("export HISTSIZE=big\nexport NODE_ENV=prod\n");
        let names: Vec<_> = result
            .issues
            .iter()
            .filter_map(|i| i.entry_name.as_deref())
            .collect();
        assert_eq!(names, vec!["HISTSIZE", "NODE_ENV"]);
    }

    #[test]
    fn test_relative_path_entry() {
        let result = run("export PATH=\"bin:$PATH\"\n");
        assert_eq!(result.issues.len(), 1);
        assert!(result.issues[0].message.contains("bin"));
    }
}
