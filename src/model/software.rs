//! Known software and their configuration file locations

use std::path::PathBuf;

/// Software whose configuration rcedit knows about.
///
/// Only [`Software::Zsh`] has a structured editor; the others are reported
/// by `status` so users can see what is installed and configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Software {
    Zsh,
    Bash,
    Vim,
    Git,
    Tmux,
}

impl Software {
    pub const ALL: [Software; 5] = [
        Software::Zsh,
        Software::Bash,
        Software::Vim,
        Software::Git,
        Software::Tmux,
    ];

    /// Identifier used on the command line and for history storage
    pub fn id(&self) -> &'static str {
        match self {
            Software::Zsh => "zsh",
            Software::Bash => "bash",
            Software::Vim => "vim",
            Software::Git => "git",
            Software::Tmux => "tmux",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Software::Zsh => "Zsh",
            Software::Bash => "Bash",
            Software::Vim => "Vim",
            Software::Git => "Git",
            Software::Tmux => "tmux",
        }
    }

    /// Executable looked up on PATH to decide whether it is installed
    pub fn binary(&self) -> &'static str {
        self.id()
    }

    /// Flag that makes the binary print its version
    pub fn version_flag(&self) -> &'static str {
        match self {
            Software::Tmux => "-V",
            _ => "--version",
        }
    }

    /// Config file locations relative to the home directory, most preferred first
    pub fn config_candidates(&self) -> &'static [&'static str] {
        match self {
            Software::Zsh => &[".zshrc"],
            Software::Bash => &[".bashrc", ".bash_profile"],
            Software::Vim => &[".vimrc", ".vim/vimrc"],
            Software::Git => &[".gitconfig", ".config/git/config"],
            Software::Tmux => &[".tmux.conf", ".config/tmux/tmux.conf"],
        }
    }

    /// Whether the zsh codec can read and write this software's config
    pub fn is_editable(&self) -> bool {
        matches!(self, Software::Zsh)
    }

    /// All candidate config paths, expanded against the home directory
    pub fn config_paths(&self) -> Vec<PathBuf> {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("~"));
        self.config_candidates()
            .iter()
            .map(|candidate| home.join(candidate))
            .collect()
    }

    /// The first existing candidate, or the preferred one if none exists yet
    pub fn default_config_path(&self) -> PathBuf {
        let paths = self.config_paths();
        paths
            .iter()
            .find(|p| p.exists())
            .cloned()
            .unwrap_or_else(|| paths[0].clone())
    }
}

impl std::fmt::Display for Software {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl std::str::FromStr for Software {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "zsh" => Ok(Software::Zsh),
            "bash" => Ok(Software::Bash),
            "vim" => Ok(Software::Vim),
            "git" => Ok(Software::Git),
            "tmux" => Ok(Software::Tmux),
            _ => Err(crate::error::Error::UnknownSoftware(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_software_id_round_trip() {
        for software in Software::ALL {
            assert_eq!(software.id().parse::<Software>().unwrap(), software);
        }
        assert!("emacs".parse::<Software>().is_err());
    }

    #[test]
    fn test_only_zsh_is_editable() {
        let editable: Vec<_> = Software::ALL.iter().filter(|s| s.is_editable()).collect();
        assert_eq!(editable, vec![&Software::Zsh]);
    }

    #[test]
    fn test_default_config_path() {
        let path = Software::Zsh.default_config_path();
        assert!(path.to_string_lossy().ends_with(".zshrc"));
    }
}
