//! English language messages

use super::Messages;
use std::sync::OnceLock;

static EN_MESSAGES: OnceLock<Messages> = OnceLock::new();

pub fn messages() -> &'static Messages {
    EN_MESSAGES.get_or_init(|| Messages {
        // === General ===
        cancelled: "Cancelled.",
        load_failed: "Could not read configuration: {}. Starting from an empty configuration.",
        saved_version: "Saved {} (version {})",
        reload_hint: "Run '{}' to apply the changes",
        none: "(none)",

        // === Show ===
        section_env: "Environment Variables",
        section_path: "PATH",
        section_alias: "Aliases",
        section_other: "Other Lines",
        disabled_marker: "(disabled)",

        // === Format ===
        file_formatted: "Formatted {}",
        format_unchanged: "Already formatted, nothing to do.",

        // === Variables ===
        var_set: "Set {} = {}",
        var_removed: "Removed variable {}",
        var_not_found: "Variable not found: {}",
        value_warning: "Value may be wrong: {}",

        // === PATH ===
        path_added: "Added {} to PATH",
        path_exists: "{} is already in PATH",
        path_removed: "Removed {} from PATH",
        path_not_found: "{} is not in PATH",
        path_moved: "Moved {} to position {}",
        path_move_invalid: "Cannot move entry {} {}",
        path_ok: "ok",
        path_missing: "missing",
        path_not_dir: "not a directory",

        // === Aliases ===
        alias_set: "Set alias {} = {}",
        alias_removed: "Removed alias {}",
        alias_not_found: "Alias not found: {}",
        alias_enabled: "Enabled alias {}",
        alias_disabled: "Disabled alias {}",

        // === History ===
        no_versions: "No versions recorded.",
        label_auto: "auto",
        label_manual: "manual",
        backup_created: "Created backup {}",
        restore_prompt: "Restore version {}? The current file is saved first.",
        version_restored: "Restored version {}",
        version_deleted: "Deleted version {}",
        max_versions_current: "Keeping up to {} auto-saved versions",
        max_versions_set: "Now keeping up to {} auto-saved versions",

        // === Status ===
        installed: "installed",
        not_installed: "not installed",
        no_config_file: "no config file",

        // === Check ===
        no_issues_found: "No issues found!",
        issues_found: "Issues found:",
        found_errors_warnings: "Found {} error(s) and {} warning(s)",

        // === Knowledge base ===
        no_variables_found: "No matching variables.",
        suggested_header: "Common variables not set yet:",
        label_format: "Format:",
        label_examples: "Examples:",
        label_current: "Current value:",
    })
}
