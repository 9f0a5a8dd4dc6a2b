//! Version history for config files
//!
//! Every software gets its own directory under the versions root:
//!
//! ```text
//! versions/zsh/index.json                      metadata, oldest first
//! versions/zsh/20240305T070809-abcdef01.json   {content, parsedContent}
//! ```

mod version;

pub use version::{checksum, ConfigVersion};

use std::path::{Path, PathBuf};

use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tracing::{debug, info, instrument};

use crate::codec;
use crate::error::{Error, Result};
use crate::model::{Config, ParsedConfig, Software};
use crate::utils::path::write_file;

use version::{VersionBody, VersionIndex, VersionMetadata};

/// Default note for versions created by `create_backup`
pub const MANUAL_BACKUP_NOTE: &str = "Manual backup";

/// File-backed version store
pub struct VersionStore {
    root: PathBuf,
    default_max_versions: usize,
}

impl VersionStore {
    pub fn new(root: impl Into<PathBuf>, default_max_versions: usize) -> Self {
        Self {
            root: root.into(),
            default_max_versions,
        }
    }

    /// Store rooted at the user's data directory
    pub fn from_config(config: &Config) -> Self {
        Self::new(Config::versions_dir(), config.history.max_versions)
    }

    fn software_dir(&self, software: Software) -> PathBuf {
        self.root.join(software.id())
    }

    fn index_path(&self, software: Software) -> PathBuf {
        self.software_dir(software).join("index.json")
    }

    fn load_index(&self, software: Software) -> Result<VersionIndex> {
        let path = self.index_path(software);
        if !path.exists() {
            return Ok(VersionIndex::new(self.default_max_versions));
        }
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        serde_json::from_str(&content).map_err(|e| Error::json(&path, e))
    }

    fn save_index(&self, software: Software, index: &VersionIndex) -> Result<()> {
        let path = self.index_path(software);
        write_json(&path, index)
    }

    fn remove_files(&self, software: Software, removed: &[VersionMetadata]) -> Result<()> {
        let dir = self.software_dir(software);
        for meta in removed {
            let path = dir.join(meta.file_name());
            if path.exists() {
                std::fs::remove_file(&path).map_err(|e| Error::io(&path, e))?;
            }
            debug!(id = %meta.id, "pruned version");
        }
        Ok(())
    }

    /// Record a new version.
    ///
    /// An auto-save whose content matches the newest version is not stored
    /// again; the newest version is returned instead.
    #[instrument(skip(self, content, parsed))]
    pub fn save_version(
        &self,
        software: Software,
        content: &str,
        parsed: Option<ParsedConfig>,
        note: Option<String>,
        is_auto_save: bool,
    ) -> Result<ConfigVersion> {
        let mut index = self.load_index(software)?;
        let checksum = checksum(content);

        if is_auto_save {
            if let Some(last) = index.versions.last() {
                if last.checksum == checksum {
                    debug!(id = %last.id, "content unchanged, skipping auto-save");
                    let id = last.id.clone();
                    return self.get_version(software, &id);
                }
            }
        }

        let now = OffsetDateTime::now_utc();
        let meta = VersionMetadata {
            id: index.next_id(now, &checksum),
            software_id: software.id().to_string(),
            checksum,
            created_at: now
                .format(&Rfc3339)
                .unwrap_or_else(|_| now.unix_timestamp().to_string()),
            note,
            is_auto_save,
        };
        let body = VersionBody {
            content: content.to_string(),
            parsed_content: parsed,
        };

        write_json(&self.software_dir(software).join(meta.file_name()), &body)?;
        index.versions.push(meta.clone());

        if is_auto_save {
            let removed = index.prune();
            self.remove_files(software, &removed)?;
        }
        self.save_index(software, &index)?;

        info!(id = %meta.id, is_auto_save, "saved version");
        Ok(meta.into_version(body))
    }

    /// Versions newest first, at most `limit` of them.
    #[instrument(skip(self))]
    pub fn history(&self, software: Software, limit: Option<usize>) -> Result<Vec<ConfigVersion>> {
        let index = self.load_index(software)?;
        let limit = limit.unwrap_or(usize::MAX);

        index
            .versions
            .into_iter()
            .rev()
            .take(limit)
            .map(|meta| self.load_body(software, meta))
            .collect()
    }

    pub fn get_version(&self, software: Software, id: &str) -> Result<ConfigVersion> {
        let index = self.load_index(software)?;
        let meta = index
            .versions
            .into_iter()
            .find(|v| v.id == id)
            .ok_or_else(|| Error::VersionNotFound(id.to_string()))?;
        self.load_body(software, meta)
    }

    fn load_body(&self, software: Software, meta: VersionMetadata) -> Result<ConfigVersion> {
        let path = self.software_dir(software).join(meta.file_name());
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let body: VersionBody = serde_json::from_str(&content).map_err(|e| Error::json(&path, e))?;
        Ok(meta.into_version(body))
    }

    #[instrument(skip(self))]
    pub fn delete_version(&self, software: Software, id: &str) -> Result<()> {
        let mut index = self.load_index(software)?;
        let pos = index
            .position(id)
            .ok_or_else(|| Error::VersionNotFound(id.to_string()))?;

        let removed = index.versions.remove(pos);
        self.remove_files(software, std::slice::from_ref(&removed))?;
        self.save_index(software, &index)?;

        info!(id, "deleted version");
        Ok(())
    }

    pub fn get_max_versions(&self, software: Software) -> Result<usize> {
        Ok(self.load_index(software)?.max_versions)
    }

    /// Change the auto-save retention limit, pruning right away.
    #[instrument(skip(self))]
    pub fn set_max_versions(&self, software: Software, max_versions: usize) -> Result<()> {
        let mut index = self.load_index(software)?;
        index.max_versions = max_versions;
        let removed = index.prune();
        self.remove_files(software, &removed)?;
        self.save_index(software, &index)
    }

    /// Write a stored version back to `target`.
    ///
    /// The current file, if any, is recorded first so the restore can be
    /// undone. The restored content is then recorded as a new version.
    #[instrument(skip(self))]
    pub fn restore(&self, software: Software, id: &str, target: &Path) -> Result<ConfigVersion> {
        let version = self.get_version(software, id)?;

        if target.exists() {
            let current = std::fs::read_to_string(target).map_err(|e| Error::io(target, e))?;
            let parsed = parse_for(software, &current);
            self.save_version(
                software,
                &current,
                parsed,
                Some(format!("Before restoring {}", id)),
                false,
            )?;
        }

        write_file(target, &version.content)?;
        info!(id, target = %target.display(), "restored version");

        let parsed = version
            .parsed_content
            .clone()
            .or_else(|| parse_for(software, &version.content));
        self.save_version(
            software,
            &version.content,
            parsed,
            Some(format!("Restored from version {}", id)),
            false,
        )
    }

    /// Record the current content of `source` as a manual version.
    pub fn create_backup(
        &self,
        software: Software,
        source: &Path,
        note: Option<String>,
    ) -> Result<ConfigVersion> {
        let content = match std::fs::read_to_string(source) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(e) => return Err(Error::io(source, e)),
        };
        let parsed = parse_for(software, &content);
        self.save_version(
            software,
            &content,
            parsed,
            Some(note.unwrap_or_else(|| MANUAL_BACKUP_NOTE.to_string())),
            false,
        )
    }
}

fn parse_for(software: Software, content: &str) -> Option<ParsedConfig> {
    software.is_editable().then(|| codec::parse(content))
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(|e| Error::json(path, e))?;
    write_file(path, &json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn store(dir: &Path, max: usize) -> VersionStore {
        VersionStore::new(dir.join("versions"), max)
    }

    #[test]
    fn test_save_and_get_version() {
        let temp = tempdir().unwrap();
        let store = store(temp.path(), 20);

        let saved = store
            .save_version(Software::Zsh, "export A=1\n", None, Some("first".into()), false)
            .unwrap();
        assert_eq!(saved.checksum, checksum("export A=1\n"));
        assert_eq!(saved.software_id, "zsh");

        let loaded = store.get_version(Software::Zsh, &saved.id).unwrap();
        assert_eq!(loaded, saved);
    }

    #[test]
    fn test_auto_save_dedup() {
        let temp = tempdir().unwrap();
        let store = store(temp.path(), 20);

        let first = store
            .save_version(Software::Zsh, "same", None, None, true)
            .unwrap();
        let second = store
            .save_version(Software::Zsh, "same", None, None, true)
            .unwrap();
        assert_eq!(first.id, second.id);
        assert_eq!(store.history(Software::Zsh, None).unwrap().len(), 1);

        store
            .save_version(Software::Zsh, "same", None, None, false)
            .unwrap();
        assert_eq!(store.history(Software::Zsh, None).unwrap().len(), 2);
    }

    #[test]
    fn test_history_newest_first_with_limit() {
        let temp = tempdir().unwrap();
        let store = store(temp.path(), 20);

        for n in 0..3 {
            store
                .save_version(Software::Zsh, &format!("v{}", n), None, None, false)
                .unwrap();
        }

        let all: Vec<_> = store
            .history(Software::Zsh, None)
            .unwrap()
            .into_iter()
            .map(|v| v.content)
            .collect();
        assert_eq!(all, vec!["v2", "v1", "v0"]);

        let limited = store.history(Software::Zsh, Some(2)).unwrap();
        assert_eq!(limited.len(), 2);
        assert_eq!(limited[0].content, "v2");
    }

    #[test]
    fn test_auto_saves_capped_manual_kept() {
        let temp = tempdir().unwrap();
        let store = store(temp.path(), 2);

        store
            .save_version(Software::Zsh, "manual", None, None, false)
            .unwrap();
        for n in 0..4 {
            store
                .save_version(Software::Zsh, &format!("auto{}", n), None, None, true)
                .unwrap();
        }

        let contents: Vec<_> = store
            .history(Software::Zsh, None)
            .unwrap()
            .into_iter()
            .map(|v| v.content)
            .collect();
        assert_eq!(contents, vec!["auto3", "auto2", "manual"]);

        let files = std::fs::read_dir(temp.path().join("versions/zsh"))
            .unwrap()
            .count();
        assert_eq!(files, 4);
    }

    #[test]
    fn test_set_max_versions_prunes() {
        let temp = tempdir().unwrap();
        let store = store(temp.path(), 10);
        for n in 0..5 {
            store
                .save_version(Software::Zsh, &format!("auto{}", n), None, None, true)
                .unwrap();
        }

        assert_eq!(store.get_max_versions(Software::Zsh).unwrap(), 10);
        store.set_max_versions(Software::Zsh, 1).unwrap();
        assert_eq!(store.get_max_versions(Software::Zsh).unwrap(), 1);

        let history = store.history(Software::Zsh, None).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].content, "auto4");
    }

    #[test]
    fn test_delete_version() {
        let temp = tempdir().unwrap();
        let store = store(temp.path(), 20);
        let saved = store
            .save_version(Software::Zsh, "x", None, None, false)
            .unwrap();

        store.delete_version(Software::Zsh, &saved.id).unwrap();
        assert!(store.history(Software::Zsh, None).unwrap().is_empty());
        assert!(matches!(
            store.delete_version(Software::Zsh, &saved.id),
            Err(Error::VersionNotFound(_))
        ));
        assert!(matches!(
            store.get_version(Software::Zsh, "nope"),
            Err(Error::VersionNotFound(_))
        ));
    }

    #[test]
    fn test_restore_snapshots_current_state() {
        let temp = tempdir().unwrap();
        let store = store(temp.path(), 20);
        let target = temp.path().join(".zshrc");

        std::fs::write(&target, "export A=1\n").unwrap();
        let old = store.create_backup(Software::Zsh, &target, None).unwrap();
        assert_eq!(old.note.as_deref(), Some(MANUAL_BACKUP_NOTE));
        assert!(old.parsed_content.is_some());

        std::fs::write(&target, "export A=2\n").unwrap();
        let restored = store.restore(Software::Zsh, &old.id, &target).unwrap();

        assert_eq!(std::fs::read_to_string(&target).unwrap(), "export A=1\n");
        assert_eq!(
            restored.note,
            Some(format!("Restored from version {}", old.id))
        );

        let history = store.history(Software::Zsh, None).unwrap();
        assert_eq!(history.len(), 3);
        assert_eq!(history[1].content, "export A=2\n");
        assert_eq!(
            history[1].note,
            Some(format!("Before restoring {}", old.id))
        );
    }

    #[test]
    fn test_create_backup_of_missing_file() {
        let temp = tempdir().unwrap();
        let store = store(temp.path(), 20);
        let version = store
            .create_backup(Software::Zsh, &temp.path().join("missing"), Some("n".into()))
            .unwrap();
        assert_eq!(version.content, "");
        assert_eq!(version.note.as_deref(), Some("n"));
    }

    #[test]
    fn test_software_isolated() {
        let temp = tempdir().unwrap();
        let store = store(temp.path(), 20);
        store
            .save_version(Software::Zsh, "z", None, None, false)
            .unwrap();
        assert!(store.history(Software::Bash, None).unwrap().is_empty());
    }
}
