//! Reading and saving config files
//!
//! Every save goes through [`ConfigStore::save`], which writes the file and
//! records the written content in the version history.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::codec;
use crate::error::{Error, Result};
use crate::history::{ConfigVersion, VersionStore};
use crate::model::{Config, ParsedConfig, Software};
use crate::utils::path::{normalize_path, write_file};

/// Raw text of a config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigContent {
    pub path: PathBuf,
    pub content: String,
}

pub struct ConfigStore {
    versions: VersionStore,
    file_override: Option<PathBuf>,
    auto_save: bool,
}

impl ConfigStore {
    pub fn new(versions: VersionStore, file_override: Option<PathBuf>, auto_save: bool) -> Self {
        Self {
            versions,
            file_override: file_override.map(|p| normalize_path(&p)),
            auto_save,
        }
    }

    pub fn from_config(config: &Config, file_override: Option<PathBuf>) -> Self {
        Self::new(
            VersionStore::from_config(config),
            file_override,
            config.history.auto_save,
        )
    }

    pub fn versions(&self) -> &VersionStore {
        &self.versions
    }

    /// Location of the config file for `software`
    pub fn config_path(&self, software: Software) -> PathBuf {
        self.file_override
            .clone()
            .unwrap_or_else(|| software.default_config_path())
    }

    /// Read the config file. `None` if it does not exist yet.
    pub fn read(&self, software: Software) -> Result<Option<ConfigContent>> {
        let path = self.config_path(software);
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                debug!(path = %path.display(), bytes = content.len(), "read config");
                Ok(Some(ConfigContent { path, content }))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "config file does not exist");
                Ok(None)
            }
            Err(e) => Err(Error::io(path, e)),
        }
    }

    /// Read and parse the config of an editable software.
    pub fn load(&self, software: Software) -> Result<ParsedConfig> {
        ensure_editable(software)?;
        Ok(self
            .read(software)?
            .map(|c| codec::parse(&c.content))
            .unwrap_or_default())
    }

    /// Record the file as it is now, before an edit overwrites it.
    ///
    /// Does nothing when auto-save is turned off or the file is missing.
    pub fn snapshot(&self, software: Software) -> Result<Option<ConfigVersion>> {
        if !self.auto_save {
            return Ok(None);
        }
        match self.read(software)? {
            Some(current) => self.record_snapshot(software, &current).map(Some),
            None => Ok(None),
        }
    }

    fn record_snapshot(&self, software: Software, current: &ConfigContent) -> Result<ConfigVersion> {
        let parsed = software
            .is_editable()
            .then(|| codec::parse(&current.content));
        self.versions
            .save_version(software, &current.content, parsed, None, true)
    }

    /// Write `content` to the config file and record it as a version.
    pub fn save(
        &self,
        software: Software,
        content: &str,
        parsed: Option<ParsedConfig>,
        note: Option<String>,
    ) -> Result<ConfigVersion> {
        let path = self.config_path(software);
        write_file(&path, content)?;
        info!(path = %path.display(), "saved config");

        self.versions
            .save_version(software, content, parsed, note, false)
    }

    /// Serialize `parsed`, snapshot the current file, then save.
    ///
    /// Nothing is written when the current file exists but cannot be read.
    pub fn save_parsed(
        &self,
        software: Software,
        parsed: ParsedConfig,
        note: Option<String>,
    ) -> Result<ConfigVersion> {
        ensure_editable(software)?;
        // An unreadable file is never replaced
        let current = self.read(software)?;
        if self.auto_save {
            if let Some(current) = &current {
                self.record_snapshot(software, current)?;
            }
        }
        let content = codec::serialize(&parsed);
        self.save(software, &content, Some(parsed), note)
    }

    pub fn restore(&self, software: Software, id: &str) -> Result<ConfigVersion> {
        self.versions
            .restore(software, id, &self.config_path(software))
    }

    pub fn create_backup(&self, software: Software, note: Option<String>) -> Result<ConfigVersion> {
        self.versions
            .create_backup(software, &self.config_path(software), note)
    }

    pub fn config_exists(&self, software: Software) -> bool {
        self.config_path(software).exists()
    }
}

fn ensure_editable(software: Software) -> Result<()> {
    if software.is_editable() {
        Ok(())
    } else {
        Err(Error::UnsupportedSoftware(software.display_name().to_string()))
    }
}
