//! Built-in knowledge about common environment variables
//!
//! Used to describe variables in `vars`, to suggest variables worth setting
//! and to flag values that cannot be right (a PATH entry without a leading
//! `/`, a non-numeric HISTSIZE, ...).

mod table;

use std::collections::{BTreeSet, HashSet};

pub use table::VARIABLES;

/// Description of one well-known variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariableInfo {
    pub name: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub value_format: &'static str,
    pub examples: &'static [&'static str],
}

/// Outcome of [`validate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Valid,
    Invalid { message: String },
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Validation::Valid => None,
            Validation::Invalid { message } => Some(message),
        }
    }
}

/// Variables suggested when they are not set yet
const COMMON: [&str; 7] = ["PATH", "HOME", "USER", "SHELL", "TERM", "EDITOR", "LANG"];

const INTEGER_VARS: [&str; 5] = ["HISTSIZE", "SAVEHIST", "HISTFILESIZE", "UID", "SHLVL"];
const NODE_ENV_VALUES: [&str; 4] = ["development", "production", "test", "staging"];
const GO111MODULE_VALUES: [&str; 3] = ["on", "off", "auto"];

pub fn lookup(name: &str) -> Option<&'static VariableInfo> {
    VARIABLES.iter().find(|v| v.name == name)
}

pub fn by_category(category: &str) -> Vec<&'static VariableInfo> {
    VARIABLES.iter().filter(|v| v.category == category).collect()
}

/// Case-insensitive substring search over name, description and category
pub fn search(query: &str) -> Vec<&'static VariableInfo> {
    let query = query.to_lowercase();
    VARIABLES
        .iter()
        .filter(|v| {
            v.name.to_lowercase().contains(&query)
                || v.description.to_lowercase().contains(&query)
                || v.category.to_lowercase().contains(&query)
        })
        .collect()
}

/// All categories, sorted
pub fn categories() -> Vec<&'static str> {
    VARIABLES
        .iter()
        .map(|v| v.category)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Common variables missing from `existing`
pub fn suggested<'a, I>(existing: I) -> Vec<&'static VariableInfo>
where
    I: IntoIterator<Item = &'a str>,
{
    let existing: HashSet<&str> = existing.into_iter().collect();
    COMMON
        .iter()
        .filter(|name| !existing.contains(*name))
        .filter_map(|name| lookup(name))
        .collect()
}

/// A reasonable starting value for a new assignment
pub fn default_value(info: &VariableInfo) -> &'static str {
    if let Some(first) = info.examples.first() {
        return *first;
    }
    match info.name {
        "PATH" => "/usr/local/bin:/usr/bin:/bin",
        "HOME" => "$HOME",
        "USER" => "$USER",
        "SHELL" => "/bin/zsh",
        "EDITOR" => "vim",
        "LANG" => "en_US.UTF-8",
        "NODE_ENV" => "development",
        _ => "",
    }
}

pub fn validate(info: &VariableInfo, value: &str) -> Validation {
    if is_path_list(info.name) {
        let invalid: Vec<&str> = value
            .split(':')
            .filter(|p| {
                !p.is_empty() && !p.starts_with('/') && !p.starts_with('~') && !p.starts_with('$')
            })
            .collect();
        if !invalid.is_empty() {
            return Validation::Invalid {
                message: format!(
                    "paths should start with '/', '~' or '$'; invalid: {}",
                    invalid.join(", ")
                ),
            };
        }
    }

    if INTEGER_VARS.contains(&info.name)
        && (value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()))
    {
        return Validation::Invalid {
            message: format!("{} should be a non-negative integer", info.name),
        };
    }

    let allowed: &[&str] = match info.name {
        "NODE_ENV" => &NODE_ENV_VALUES,
        "GO111MODULE" => &GO111MODULE_VALUES,
        _ => &[],
    };
    if !allowed.is_empty() && !allowed.contains(&value) {
        return Validation::Invalid {
            message: format!("{} should be one of: {}", info.name, allowed.join(", ")),
        };
    }

    Validation::Valid
}

/// Validate by name; unknown variables are always valid.
pub fn validate_named(name: &str, value: &str) -> Validation {
    lookup(name).map_or(Validation::Valid, |info| validate(info, value))
}

fn is_path_list(name: &str) -> bool {
    name == "PATH" || name.contains("_PATH")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_unique() {
        let mut seen = HashSet::new();
        for v in VARIABLES {
            assert!(seen.insert(v.name), "duplicate entry {}", v.name);
        }
    }

    #[test]
    fn test_lookup() {
        let info = lookup("EDITOR").unwrap();
        assert_eq!(info.category, table::DEFAULT_APPS);
        assert!(lookup("editor").is_none());
        assert!(lookup("NOT_A_VAR").is_none());
    }

    #[test]
    fn test_by_category_and_categories() {
        let go: Vec<_> = by_category(table::GO).iter().map(|v| v.name).collect();
        assert_eq!(go, vec!["GOROOT", "GOPATH", "GO111MODULE"]);

        let cats = categories();
        let mut sorted = cats.clone();
        sorted.sort();
        assert_eq!(cats, sorted);
        assert!(cats.contains(&table::PROXY));
    }

    #[test]
    fn test_search_case_insensitive() {
        let names: Vec<_> = search("proxy").iter().map(|v| v.name).collect();
        assert!(names.contains(&"HTTP_PROXY"));
        assert!(names.contains(&"NO_PROXY"));
        assert!(search("JAVA").iter().any(|v| v.name == "JAVA_HOME"));
    }

    #[test]
    fn test_suggested_skips_existing() {
        let names: Vec<_> = suggested(["PATH", "EDITOR"]).iter().map(|v| v.name).collect();
        assert_eq!(names, vec!["HOME", "USER", "SHELL", "TERM", "LANG"]);
    }

    #[test]
    fn test_default_value() {
        assert_eq!(default_value(lookup("LANG").unwrap()), "en_US.UTF-8");
        let bare = VariableInfo {
            name: "SHELL",
            category: "",
            description: "",
            value_format: "",
            examples: &[],
        };
        assert_eq!(default_value(&bare), "/bin/zsh");
    }

    #[test]
    fn test_validate_path_lists() {
        let path = lookup("PATH").unwrap();
        assert!(validate(path, "/usr/bin:~/bin:$HOME/.cargo/bin").is_valid());
        let result = validate(path, "/usr/bin:relative/bin");
        assert!(result.message().unwrap().contains("relative/bin"));

        assert!(!validate_named("PKG_CONFIG_PATH", "lib/pkgconfig").is_valid());
        assert!(validate_named("PYTHONPATH", "relative").is_valid());
    }

    #[test]
    fn test_validate_integers() {
        assert!(validate_named("HISTSIZE", "10000").is_valid());
        assert!(!validate_named("HISTSIZE", "lots").is_valid());
        assert!(!validate_named("SAVEHIST", "-1").is_valid());
        assert!(!validate_named("SHLVL", "").is_valid());
    }

    #[test]
    fn test_validate_enums() {
        assert!(validate_named("NODE_ENV", "staging").is_valid());
        assert!(!validate_named("NODE_ENV", "prod").is_valid());
        assert!(validate_named("GO111MODULE", "auto").is_valid());
        assert!(!validate_named("GO111MODULE", "yes").is_valid());
        assert!(validate_named("UNKNOWN", "anything").is_valid());
    }
}
