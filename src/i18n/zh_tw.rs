//! Traditional Chinese (zh-TW) language messages

use super::Messages;
use std::sync::OnceLock;

static ZH_TW_MESSAGES: OnceLock<Messages> = OnceLock::new();

pub fn messages() -> &'static Messages {
    ZH_TW_MESSAGES.get_or_init(|| Messages {
        // === General ===
        cancelled: "已取消。",
        load_failed: "無法讀取設定：{}。改用空白設定。",
        saved_version: "已儲存 {}（版本 {}）",
        reload_hint: "執行 '{}' 以套用變更",
        none: "（無）",

        // === Show ===
        section_env: "環境變數",
        section_path: "PATH",
        section_alias: "別名",
        section_other: "其他內容",
        disabled_marker: "（已停用）",

        // === Format ===
        file_formatted: "已格式化 {}",
        format_unchanged: "已是標準格式，無需變更。",

        // === Variables ===
        var_set: "已設定 {} = {}",
        var_removed: "已移除變數 {}",
        var_not_found: "找不到變數：{}",
        value_warning: "值可能有誤：{}",

        // === PATH ===
        path_added: "已將 {} 加入 PATH",
        path_exists: "{} 已在 PATH 中",
        path_removed: "已從 PATH 移除 {}",
        path_not_found: "{} 不在 PATH 中",
        path_moved: "已將 {} 移至位置 {}",
        path_move_invalid: "無法移動條目 {} {}",
        path_ok: "正常",
        path_missing: "不存在",
        path_not_dir: "不是目錄",

        // === Aliases ===
        alias_set: "已設定別名 {} = {}",
        alias_removed: "已移除別名 {}",
        alias_not_found: "找不到別名：{}",
        alias_enabled: "已啟用別名 {}",
        alias_disabled: "已停用別名 {}",

        // === History ===
        no_versions: "尚無任何版本紀錄。",
        label_auto: "自動",
        label_manual: "手動",
        backup_created: "已建立備份 {}",
        restore_prompt: "還原版本 {}？目前的檔案會先被保存。",
        version_restored: "已還原版本 {}",
        version_deleted: "已刪除版本 {}",
        max_versions_current: "最多保留 {} 個自動儲存版本",
        max_versions_set: "現在最多保留 {} 個自動儲存版本",

        // === Status ===
        installed: "已安裝",
        not_installed: "未安裝",
        no_config_file: "無設定檔",

        // === Check ===
        no_issues_found: "未發現問題！",
        issues_found: "發現問題：",
        found_errors_warnings: "發現 {} 個錯誤和 {} 個警告",

        // === Knowledge base ===
        no_variables_found: "找不到符合的變數。",
        suggested_header: "尚未設定的常用變數：",
        label_format: "格式：",
        label_examples: "範例：",
        label_current: "目前的值：",
    })
}
