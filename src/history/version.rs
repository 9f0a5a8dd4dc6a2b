//! On-disk version records

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use time::macros::format_description;
use time::OffsetDateTime;

use crate::model::ParsedConfig;

/// One saved snapshot of a config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigVersion {
    pub id: String,
    pub software_id: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parsed_content: Option<ParsedConfig>,
    pub checksum: String,
    /// RFC 3339, UTC
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub is_auto_save: bool,
}

/// Index entry; the content lives in `<id>.json` next to the index.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VersionMetadata {
    pub id: String,
    pub software_id: String,
    pub checksum: String,
    pub created_at: String,
    #[serde(default)]
    pub note: Option<String>,
    pub is_auto_save: bool,
}

impl VersionMetadata {
    pub fn file_name(&self) -> String {
        format!("{}.json", self.id)
    }

    pub fn into_version(self, body: VersionBody) -> ConfigVersion {
        ConfigVersion {
            id: self.id,
            software_id: self.software_id,
            content: body.content,
            parsed_content: body.parsed_content,
            checksum: self.checksum,
            created_at: self.created_at,
            note: self.note,
            is_auto_save: self.is_auto_save,
        }
    }
}

/// Contents of a per-version file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VersionBody {
    pub content: String,
    #[serde(default)]
    pub parsed_content: Option<ParsedConfig>,
}

/// `index.json`: versions oldest first, plus the retention limit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VersionIndex {
    pub versions: Vec<VersionMetadata>,
    pub max_versions: usize,
}

impl VersionIndex {
    pub fn new(max_versions: usize) -> Self {
        Self {
            versions: Vec::new(),
            max_versions,
        }
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.versions.iter().position(|v| v.id == id)
    }

    /// A fresh id for content saved at `now`, unique within this index.
    pub fn next_id(&self, now: OffsetDateTime, checksum: &str) -> String {
        let stamp = now
            .format(format_description!(
                "[year][month][day]T[hour][minute][second]"
            ))
            .unwrap_or_else(|_| now.unix_timestamp().to_string());
        let base = format!("{}-{}", stamp, &checksum[..8.min(checksum.len())]);

        if self.position(&base).is_none() {
            return base;
        }
        (2..)
            .map(|n| format!("{}-{}", base, n))
            .find(|candidate| self.position(candidate).is_none())
            .unwrap_or(base)
    }

    /// Drop the oldest auto-saves beyond `max_versions`. Manual versions are
    /// never touched. Returns the removed entries.
    pub fn prune(&mut self) -> Vec<VersionMetadata> {
        let auto_saves = self.versions.iter().filter(|v| v.is_auto_save).count();
        let mut excess = auto_saves.saturating_sub(self.max_versions);
        if excess == 0 {
            return Vec::new();
        }

        let mut removed = Vec::new();
        self.versions.retain(|v| {
            if excess > 0 && v.is_auto_save {
                excess -= 1;
                removed.push(v.clone());
                false
            } else {
                true
            }
        });
        removed
    }
}

/// SHA-256 of the content, lower-case hex.
pub fn checksum(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}
