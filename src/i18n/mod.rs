//! Internationalization (i18n) module for rcedit
//!
//! English and Traditional Chinese message tables, chosen from
//! `ui.language` in the config file. Templates use `{}` placeholders that
//! are filled in order by [`fill`].

mod en;
mod zh_tw;

use std::sync::OnceLock;

/// All translatable messages in the application
#[derive(Debug, Clone)]
pub struct Messages {
    // === General ===
    pub cancelled: &'static str,
    pub load_failed: &'static str,
    pub saved_version: &'static str,
    pub reload_hint: &'static str,
    pub none: &'static str,

    // === Show ===
    pub section_env: &'static str,
    pub section_path: &'static str,
    pub section_alias: &'static str,
    pub section_other: &'static str,
    pub disabled_marker: &'static str,

    // === Format ===
    pub file_formatted: &'static str,
    pub format_unchanged: &'static str,

    // === Variables ===
    pub var_set: &'static str,
    pub var_removed: &'static str,
    pub var_not_found: &'static str,
    pub value_warning: &'static str,

    // === PATH ===
    pub path_added: &'static str,
    pub path_exists: &'static str,
    pub path_removed: &'static str,
    pub path_not_found: &'static str,
    pub path_moved: &'static str,
    pub path_move_invalid: &'static str,
    pub path_ok: &'static str,
    pub path_missing: &'static str,
    pub path_not_dir: &'static str,

    // === Aliases ===
    pub alias_set: &'static str,
    pub alias_removed: &'static str,
    pub alias_not_found: &'static str,
    pub alias_enabled: &'static str,
    pub alias_disabled: &'static str,

    // === History ===
    pub no_versions: &'static str,
    pub label_auto: &'static str,
    pub label_manual: &'static str,
    pub backup_created: &'static str,
    pub restore_prompt: &'static str,
    pub version_restored: &'static str,
    pub version_deleted: &'static str,
    pub max_versions_current: &'static str,
    pub max_versions_set: &'static str,

    // === Status ===
    pub installed: &'static str,
    pub not_installed: &'static str,
    pub no_config_file: &'static str,

    // === Check ===
    pub no_issues_found: &'static str,
    pub issues_found: &'static str,
    pub found_errors_warnings: &'static str,

    // === Knowledge base ===
    pub no_variables_found: &'static str,
    pub suggested_header: &'static str,
    pub label_format: &'static str,
    pub label_examples: &'static str,
    pub label_current: &'static str,
}

/// Supported UI languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    TraditionalChinese,
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "en" | "en-us" | "english" => Ok(Language::English),
            "zh-tw" | "zh-hant" | "zh" => Ok(Language::TraditionalChinese),
            _ => Err(format!("Unsupported language: {}", s)),
        }
    }
}

static MESSAGES: OnceLock<&'static Messages> = OnceLock::new();

/// Messages for a language
pub fn messages_for(lang: Language) -> &'static Messages {
    match lang {
        Language::English => en::messages(),
        Language::TraditionalChinese => zh_tw::messages(),
    }
}

/// Initialize and get the global messages instance
pub fn init_messages(lang: Language) -> &'static Messages {
    MESSAGES.get_or_init(|| messages_for(lang))
}

/// Replace each `{}` in `template` with the next argument
pub fn fill(template: &str, args: &[&str]) -> String {
    args.iter()
        .fold(template.to_string(), |acc, arg| acc.replacen("{}", arg, 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_from_str() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::English);
        assert_eq!("zh-TW".parse::<Language>().unwrap(), Language::TraditionalChinese);
        assert_eq!("zh_tw".parse::<Language>().unwrap(), Language::TraditionalChinese);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_fill() {
        assert_eq!(fill("Set {} = {}", &["A", "1"]), "Set A = 1");
        assert_eq!(fill("no placeholders", &["x"]), "no placeholders");
        assert_eq!(fill("{} and {}", &["{}", "b"]), "b and {}");
    }

    #[test]
    fn test_tables_have_matching_placeholders() {
        let en = messages_for(Language::English);
        let zh = messages_for(Language::TraditionalChinese);
        let pairs = [
            (en.saved_version, zh.saved_version),
            (en.var_set, zh.var_set),
            (en.path_moved, zh.path_moved),
            (en.found_errors_warnings, zh.found_errors_warnings),
            (en.load_failed, zh.load_failed),
        ];
        for (a, b) in pairs {
            assert_eq!(a.matches("{}").count(), b.matches("{}").count(), "{}", a);
        }
    }
}
