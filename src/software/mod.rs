//! Installation and configuration status of known software

use std::path::{Path, PathBuf};
use std::process::Command;

use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tracing::debug;

pub use crate::model::Software;

/// What is known about one software on this machine
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftwareStatus {
    pub id: String,
    pub installed: bool,
    pub config_exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// RFC 3339 modification time of the config file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
}

/// Detect the status of `software`.
///
/// `config_override` replaces the candidate list when the user pointed at a
/// specific file.
pub fn status(software: Software, config_override: Option<&Path>) -> SoftwareStatus {
    let binary = which::which(software.binary()).ok();
    let version = binary
        .as_deref()
        .and_then(|path| detect_version(path, software.version_flag()));

    let config_path = match config_override {
        Some(path) => Some(path.to_path_buf()).filter(|p| p.exists()),
        None => software.config_paths().into_iter().find(|p| p.exists()),
    };
    let last_modified = config_path.as_deref().and_then(modified_time);

    debug!(software = %software, installed = binary.is_some(), "detected status");

    SoftwareStatus {
        id: software.id().to_string(),
        installed: binary.is_some(),
        config_exists: config_path.is_some(),
        config_path,
        version,
        last_modified,
    }
}

/// Status of every known software
pub fn status_all() -> Vec<SoftwareStatus> {
    Software::ALL.iter().map(|s| status(*s, None)).collect()
}

/// First non-empty line printed by `<binary> <flag>`, if it exits successfully
fn detect_version(binary: &Path, flag: &str) -> Option<String> {
    let output = Command::new(binary).arg(flag).output().ok()?;
    if !output.status.success() {
        return None;
    }
    first_line(&String::from_utf8_lossy(&output.stdout))
}

fn first_line(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .map(str::to_string)
}

fn modified_time(path: &Path) -> Option<String> {
    let modified = std::fs::metadata(path).ok()?.modified().ok()?;
    OffsetDateTime::from(modified).format(&Rfc3339).ok()
}
