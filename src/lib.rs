//! rcedit - structured editor for shell resource files
//!
//! Reads a zsh resource file into environment variables, PATH entries,
//! aliases and untouched lines, edits them, and writes a canonical file back.
//!
//! # Features
//!
//! - Lossless round trip of lines the parser does not understand
//! - PATH assignments merged into one ordered, duplicate-free list
//! - Version history with auto-saves before every edit
//! - Checks for duplicate definitions, suspicious values and missing PATH directories
//! - Knowledge base of common environment variables
//! - Installation status of zsh, bash, vim, git and tmux

pub mod checker;
pub mod cli;
pub mod codec;
pub mod error;
pub mod history;
pub mod i18n;
pub mod knowledge;
pub mod model;
pub mod pathcheck;
pub mod software;
pub mod store;
pub mod utils;

pub use checker::check_all;
pub use codec::{parse, serialize};
pub use error::{Error, Result};
pub use history::{ConfigVersion, VersionStore};
pub use model::{Config, ParsedConfig, Software, VariableEntry};
pub use store::ConfigStore;
