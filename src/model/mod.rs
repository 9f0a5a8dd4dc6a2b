//! Core data models for rcedit

mod config;
mod entry;
mod software;

pub use config::{Config, HistoryConfig, PathCheckConfig, UiConfig};
pub use entry::{ParsedConfig, PathMove, VariableEntry};
pub use software::Software;
