//! `~` and environment variable expansion for path strings

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    /// `${NAME}` (group 1) or `$NAME` (group 2)
    static ref VAR_RE: Regex = Regex::new(
        r"\$\{([^}]+)\}|\$([A-Za-z_][A-Za-z0-9_]*)"
    ).unwrap();
}

/// Expand a leading `~` and every `${VAR}` / `$VAR` reference.
///
/// Unset variables are left as written, so `$NOPE/bin` stays `$NOPE/bin`.
pub fn expand_path(path: &str) -> String {
    let path = expand_home(path);
    VAR_RE
        .replace_all(&path, |caps: &Captures| {
            let name = caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str());
            std::env::var(name).unwrap_or_else(|_| caps[0].to_string())
        })
        .into_owned()
}

fn expand_home(path: &str) -> String {
    if path == "~" || path.starts_with("~/") {
        if let Some(home) = dirs::home_dir() {
            return format!("{}{}", home.display(), &path[1..]);
        }
    }
    path.to_string()
}
