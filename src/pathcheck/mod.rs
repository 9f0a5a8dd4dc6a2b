//! Filesystem checks for PATH entries and other path-like values
//!
//! [`check_path`] probes the filesystem directly. [`PathChecker`] puts a
//! short-lived cache in front of it so that re-rendering a list of PATH
//! entries does not hit the disk every time.

mod expand;

pub use expand::expand_path;

use std::collections::HashMap;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::Config;

/// What the filesystem says about one path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathCheckResult {
    /// The path as written
    pub original: String,
    /// After `~` and variable expansion
    pub expanded: String,
    pub exists: bool,
    pub is_directory: bool,
    pub is_file: bool,
    pub is_symlink: bool,
    pub readable: bool,
    pub writable: bool,
}

impl PathCheckResult {
    /// Conservative result used when a path could not be checked
    pub fn unknown(path: &str) -> Self {
        Self {
            original: path.to_string(),
            expanded: path.to_string(),
            exists: false,
            is_directory: false,
            is_file: false,
            is_symlink: false,
            readable: false,
            writable: false,
        }
    }
}

/// Probe one path. Never fails; anything that cannot be determined is `false`.
pub fn check_path(path: &str) -> PathCheckResult {
    let expanded = expand_path(path);
    let target = Path::new(&expanded);

    PathCheckResult {
        original: path.to_string(),
        exists: target.metadata().is_ok(),
        is_directory: target.is_dir(),
        is_file: target.is_file(),
        is_symlink: target.is_symlink(),
        readable: target.metadata().is_ok(),
        writable: is_writable(target),
        expanded,
    }
}

fn is_writable(path: &Path) -> bool {
    if path.is_dir() {
        return std::fs::read_dir(path).is_ok();
    }
    if path.is_file() {
        return OpenOptions::new().write(true).open(path).is_ok();
    }
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && parent.exists() => is_writable(parent),
        _ => false,
    }
}

struct CacheEntry {
    result: PathCheckResult,
    checked_at: Instant,
}

/// Cached path checks, keyed by the path string as written.
pub struct PathChecker {
    cache: Mutex<HashMap<String, CacheEntry>>,
    ttl: Duration,
    probe: fn(&str) -> PathCheckResult,
}

impl PathChecker {
    pub fn new(ttl: Duration) -> Self {
        Self::with_probe(ttl, check_path)
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(Duration::from_secs(config.path_check.cache_ttl_secs))
    }

    /// Use a custom probe instead of the filesystem
    pub fn with_probe(ttl: Duration, probe: fn(&str) -> PathCheckResult) -> Self {
        Self {
            cache: Mutex::new(HashMap::new()),
            ttl,
            probe,
        }
    }

    fn cached(&self, path: &str) -> Option<PathCheckResult> {
        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        match cache.get(path) {
            Some(entry) if entry.checked_at.elapsed() <= self.ttl => Some(entry.result.clone()),
            Some(_) => {
                cache.remove(path);
                None
            }
            None => None,
        }
    }

    fn store(&self, result: &PathCheckResult) {
        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        cache.insert(
            result.original.clone(),
            CacheEntry {
                result: result.clone(),
                checked_at: Instant::now(),
            },
        );
    }

    pub fn check(&self, path: &str) -> PathCheckResult {
        if let Some(result) = self.cached(path) {
            return result;
        }
        let result = (self.probe)(path);
        self.store(&result);
        result
    }

    /// Check several paths; results come back in input order and only
    /// uncached paths are probed.
    pub fn check_batch<S: AsRef<str>>(&self, paths: &[S]) -> Vec<PathCheckResult> {
        let mut probed = 0;
        let results: Vec<PathCheckResult> = paths
            .iter()
            .map(|path| {
                let path = path.as_ref();
                self.cached(path).unwrap_or_else(|| {
                    probed += 1;
                    let result = (self.probe)(path);
                    self.store(&result);
                    result
                })
            })
            .collect();
        debug!(total = paths.len(), probed, "batch path check");
        results
    }

    pub fn invalidate(&self, path: &str) {
        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        cache.remove(path);
    }

    pub fn clear(&self) {
        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        cache.clear();
    }
}
