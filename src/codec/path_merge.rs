//! PATH assignment decomposition
//!
//! Every PATH assignment in a file is broken into its directory entries and
//! appended to one ordered, duplicate-free list. The `$PATH` placeholder marks
//! where the inherited value goes; it is never recorded as an entry.

use std::collections::HashSet;

/// Placeholder for the inherited PATH inside an assignment.
pub const PATH_PLACEHOLDER: &str = "$PATH";

/// How a PATH assignment relates to the inherited value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathAssignment {
    /// References `$PATH`: entries on both sides of it are additions.
    Extend,
    /// No `$PATH`: the assignment replaces the inherited value outright.
    Override,
}

impl PathAssignment {
    pub fn of(value: &str) -> Self {
        if value.contains(PATH_PLACEHOLDER) {
            PathAssignment::Extend
        } else {
            PathAssignment::Override
        }
    }
}

/// Collects PATH entries across all assignments of one parse.
///
/// Deduplication is global: a directory seen on an earlier line is not
/// recorded again, and it keeps its first position.
#[derive(Debug, Default)]
pub struct PathAccumulator {
    paths: Vec<String>,
    seen: HashSet<String>,
}

impl PathAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge the unquoted value of one PATH assignment.
    pub fn merge(&mut self, value: &str) -> PathAssignment {
        let assignment = PathAssignment::of(value);
        match assignment {
            PathAssignment::Extend => {
                for fragment in value.split(PATH_PLACEHOLDER) {
                    self.push_segments(fragment);
                }
            }
            PathAssignment::Override => self.push_segments(value),
        }
        assignment
    }

    fn push_segments(&mut self, fragment: &str) {
        for segment in fragment.split(':').filter(|s| !s.is_empty()) {
            if self.seen.insert(segment.to_string()) {
                self.paths.push(segment.to_string());
            }
        }
    }

    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    pub fn into_paths(self) -> Vec<String> {
        self.paths
    }
}
