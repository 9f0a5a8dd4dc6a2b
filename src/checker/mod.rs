//! Checker module for validating zsh configurations

mod duplicate;
mod path_entry;
mod value;

pub use duplicate::DuplicateChecker;
pub use path_entry::PathEntryChecker;
pub use value::ValueChecker;

use crate::model::ParsedConfig;
use crate::pathcheck::PathChecker;

/// What a checker looks at: the raw file and its parsed form
#[derive(Debug, Clone, Copy)]
pub struct CheckInput<'a> {
    pub text: &'a str,
    pub parsed: &'a ParsedConfig,
}

/// Check result
#[derive(Debug)]
pub struct CheckResult {
    pub issues: Vec<CheckIssue>,
}

impl CheckResult {
    pub fn new() -> Self {
        Self { issues: Vec::new() }
    }

    pub fn add_issue(&mut self, issue: CheckIssue) {
        self.issues.push(issue);
    }

    pub fn has_errors(&self) -> bool {
        self.count(Severity::Error) > 0
    }

    pub fn has_warnings(&self) -> bool {
        self.count(Severity::Warning) > 0
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }

    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }
}

impl Default for CheckResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Issue severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// A single check issue
#[derive(Debug)]
pub struct CheckIssue {
    pub severity: Severity,
    pub message: String,
    pub line_number: Option<usize>,
    pub entry_name: Option<String>,
}

impl CheckIssue {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            line_number: None,
            entry_name: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            line_number: None,
            entry_name: None,
        }
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line_number = Some(line);
        self
    }

    pub fn with_entry(mut self, name: impl Into<String>) -> Self {
        self.entry_name = Some(name.into());
        self
    }
}

/// Trait for checkers
pub trait Checker {
    fn check(&self, input: &CheckInput) -> CheckResult;
}

/// Run every checker
pub fn check_all(input: &CheckInput, paths: &PathChecker) -> CheckResult {
    let checkers: [&dyn Checker; 3] = [
        &DuplicateChecker,
        &ValueChecker,
        &PathEntryChecker::new(paths),
    ];

    let mut result = CheckResult::new();
    for checker in checkers {
        result.issues.extend(checker.check(input).issues);
    }
    result
}
