//! Path utilities

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Expand a leading `~` to the home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if path == "~" || path.starts_with("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(path[1..].trim_start_matches('/'));
        }
    }
    PathBuf::from(path)
}

/// Normalize a path (expand tilde, resolve relative paths)
pub fn normalize_path(path: &Path) -> PathBuf {
    let expanded = expand_tilde(&path.to_string_lossy());
    if expanded.is_absolute() {
        expanded
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(expanded)
    }
}

/// Write file content, creating parent directories as needed
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    std::fs::write(path, content).map_err(|e| Error::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_tilde() {
        let path = expand_tilde("~/.zshrc");
        assert!(!path.to_string_lossy().starts_with('~'));
        assert!(path.ends_with(".zshrc"));
        assert_eq!(expand_tilde("~user/x"), PathBuf::from("~user/x"));
    }

    #[test]
    fn test_normalize_absolute_path() {
        let path = normalize_path(Path::new("/etc/zshrc"));
        assert_eq!(path, PathBuf::from("/etc/zshrc"));
    }

    #[test]
    fn test_write_file_creates_parents() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("a/b/.zshrc");
        write_file(&path, "export A=1\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "export A=1\n");
    }
}
