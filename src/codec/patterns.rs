//! # Line Patterns
//!
//! Regex patterns recognizing the three assignment forms the codec understands.
//!
//! All patterns run against the *trimmed* line. They capture the raw value
//! text after `=`; splitting off a command-chain suffix and unquoting happen
//! in [`super::quote`], not here.
//!
//! Rust's `regex` crate has no backreferences, so quote matching is done by
//! hand in [`super::quote::quoted_span`].

use lazy_static::lazy_static;
use regex::Regex;

/// Names `export NAME=` accepts
pub const EXPORT_NAME: &str = "[A-Z_][A-Z0-9_]*";

/// Names `alias NAME=` accepts
pub const ALIAS_NAME: &str = "[a-zA-Z_][a-zA-Z0-9_]*";

lazy_static! {
    /// Matches `export NAME=VALUE`.
    ///
    /// Captures:
    /// - Group 1: variable name (upper case, digits, underscore)
    /// - Group 2: raw value (rest of the line)
    pub static ref EXPORT_RE: Regex = Regex::new(
        &format!(r#"^export\s+({})=(.*)$"#, EXPORT_NAME)
    ).unwrap();

    /// Matches `alias NAME=VALUE`.
    ///
    /// Captures:
    /// - Group 1: alias name (letters, digits, underscore)
    /// - Group 2: raw value (rest of the line)
    pub static ref ALIAS_RE: Regex = Regex::new(
        &format!(r#"^alias\s+({})=(.*)$"#, ALIAS_NAME)
    ).unwrap();

    /// A whole string that is a valid export name
    pub static ref EXPORT_NAME_RE: Regex = Regex::new(
        &format!("^{}$", EXPORT_NAME)
    ).unwrap();

    /// A whole string that is a valid alias name
    pub static ref ALIAS_NAME_RE: Regex = Regex::new(
        &format!("^{}$", ALIAS_NAME)
    ).unwrap();

    /// Matches a PATH assignment without `export`: `PATH=VALUE`.
    ///
    /// Captures:
    /// - Group 1: raw value
    pub static ref BARE_PATH_RE: Regex = Regex::new(
        r#"^PATH=(.*)$"#
    ).unwrap();
}
