//! Structured representation of a zsh resource file

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Value of an environment variable or alias.
///
/// Most assignments carry nothing but a value and stay `Plain`. An entry
/// becomes `Annotated` when the source line chained further commands after
/// the assignment (`export A=1 && echo ok`), or when an alias has been
/// switched off in the editor.
///
/// Serialized untagged, so a plain entry is a JSON string and an annotated
/// one is `{"value": ..., "suffix": ..., "disabled": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VariableEntry {
    Plain(String),
    Annotated {
        value: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        suffix: Option<String>,
        #[serde(default, skip_serializing_if = "std::ops::Not::not")]
        disabled: bool,
    },
}

impl VariableEntry {
    /// Build an entry from a parsed value and optional command-chain suffix.
    pub fn with_suffix(value: impl Into<String>, suffix: Option<String>) -> Self {
        match suffix {
            Some(suffix) => VariableEntry::Annotated {
                value: value.into(),
                suffix: Some(suffix),
                disabled: false,
            },
            None => VariableEntry::Plain(value.into()),
        }
    }

    pub fn value(&self) -> &str {
        match self {
            VariableEntry::Plain(value) => value,
            VariableEntry::Annotated { value, .. } => value,
        }
    }

    pub fn suffix(&self) -> Option<&str> {
        match self {
            VariableEntry::Plain(_) => None,
            VariableEntry::Annotated { suffix, .. } => suffix.as_deref(),
        }
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, VariableEntry::Annotated { disabled: true, .. })
    }

    /// Replace the value, keeping suffix and disabled flag.
    pub fn set_value(&mut self, new_value: impl Into<String>) {
        match self {
            VariableEntry::Plain(value) => *value = new_value.into(),
            VariableEntry::Annotated { value, .. } => *value = new_value.into(),
        }
    }

    /// Flip the disabled flag and return the new state.
    pub fn toggle_disabled(&mut self) -> bool {
        match self {
            VariableEntry::Plain(value) => {
                *self = VariableEntry::Annotated {
                    value: std::mem::take(value),
                    suffix: None,
                    disabled: true,
                };
                true
            }
            VariableEntry::Annotated { disabled, .. } => {
                *disabled = !*disabled;
                *disabled
            }
        }
    }
}

impl From<&str> for VariableEntry {
    fn from(value: &str) -> Self {
        VariableEntry::Plain(value.to_string())
    }
}

impl From<String> for VariableEntry {
    fn from(value: String) -> Self {
        VariableEntry::Plain(value)
    }
}

/// Direction for reordering a PATH entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathMove {
    Up,
    Down,
    Top,
    Bottom,
}

impl std::str::FromStr for PathMove {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "up" => Ok(PathMove::Up),
            "down" => Ok(PathMove::Down),
            "top" => Ok(PathMove::Top),
            "bottom" => Ok(PathMove::Bottom),
            _ => Err(format!("Unknown move: {}", s)),
        }
    }
}

/// Result of parsing a zsh resource file.
///
/// # Field Semantics
/// - `environment_variables`: `export NAME=VALUE` assignments other than PATH,
///   keyed by name in first-seen order
/// - `paths`: directories collected from every PATH assignment, search order,
///   no duplicates, never the `$PATH` placeholder itself
/// - `aliases`: `alias NAME=VALUE` definitions in first-seen order
/// - `other_lines`: untrimmed source lines nothing else claimed, in order
///
/// None of the collections is ever sorted: output order is source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedConfig {
    pub environment_variables: IndexMap<String, VariableEntry>,
    pub paths: Vec<String>,
    pub aliases: IndexMap<String, VariableEntry>,
    pub other_lines: Vec<String>,
}

impl ParsedConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.environment_variables.is_empty()
            && self.paths.is_empty()
            && self.aliases.is_empty()
            && self.other_lines.is_empty()
    }

    // =========================================================================
    // Environment variables
    // =========================================================================

    /// Insert or update a variable. Editing an existing entry keeps its position
    /// and its suffix.
    pub fn set_variable(&mut self, name: &str, value: impl Into<String>) {
        match self.environment_variables.get_mut(name) {
            Some(entry) => entry.set_value(value),
            None => {
                self.environment_variables
                    .insert(name.to_string(), VariableEntry::Plain(value.into()));
            }
        }
    }

    pub fn remove_variable(&mut self, name: &str) -> Option<VariableEntry> {
        self.environment_variables.shift_remove(name)
    }

    // =========================================================================
    // PATH entries
    // =========================================================================

    /// Append a directory unless it is already listed.
    pub fn add_path(&mut self, path: impl Into<String>) -> bool {
        let path = path.into();
        if path.is_empty() || self.paths.contains(&path) {
            return false;
        }
        self.paths.push(path);
        true
    }

    pub fn remove_path(&mut self, path: &str) -> bool {
        let before = self.paths.len();
        self.paths.retain(|p| p != path);
        self.paths.len() != before
    }

    /// Replace the entry at `index`. Refused if the new value is empty or
    /// already present elsewhere.
    pub fn replace_path(&mut self, index: usize, path: impl Into<String>) -> bool {
        let path = path.into();
        if path.is_empty() || index >= self.paths.len() {
            return false;
        }
        if self
            .paths
            .iter()
            .enumerate()
            .any(|(i, p)| i != index && *p == path)
        {
            return false;
        }
        self.paths[index] = path;
        true
    }

    /// Move the entry at `index`, returning its new index.
    pub fn move_path(&mut self, index: usize, direction: PathMove) -> Option<usize> {
        let len = self.paths.len();
        if index >= len {
            return None;
        }

        let target = match direction {
            PathMove::Up if index > 0 => index - 1,
            PathMove::Down if index + 1 < len => index + 1,
            PathMove::Top if index > 0 => 0,
            PathMove::Bottom if index + 1 < len => len - 1,
            _ => return None,
        };

        match direction {
            PathMove::Up | PathMove::Down => self.paths.swap(index, target),
            PathMove::Top | PathMove::Bottom => {
                let path = self.paths.remove(index);
                self.paths.insert(target, path);
            }
        }
        Some(target)
    }

    // =========================================================================
    // Aliases
    // =========================================================================

    pub fn set_alias(&mut self, name: &str, command: impl Into<String>) {
        match self.aliases.get_mut(name) {
            Some(entry) => entry.set_value(command),
            None => {
                self.aliases
                    .insert(name.to_string(), VariableEntry::Plain(command.into()));
            }
        }
    }

    pub fn remove_alias(&mut self, name: &str) -> Option<VariableEntry> {
        self.aliases.shift_remove(name)
    }

    /// Toggle an alias on or off. Returns the new disabled state.
    pub fn toggle_alias(&mut self, name: &str) -> Option<bool> {
        self.aliases.get_mut(name).map(VariableEntry::toggle_disabled)
    }
}
