//! i18n - Internationalization Module
//!
//! Provides simple translation functions using HashMap-based lookups.

use std::collections::HashMap;
use std::sync::OnceLock;

use gpui::SharedString;
use serde::{Deserialize, Serialize};

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    /// English (US)
    #[default]
    #[serde(rename = "en")]
    EnUS,
    /// Chinese (Simplified)
    #[serde(rename = "zh")]
    ZhCN,
}

impl Locale {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::EnUS => "English",
            Locale::ZhCN => "中文",
        }
    }

    /// Map a language tag such as `zh-CN` or `en_US` to a locale
    pub fn from_tag(tag: &str) -> Self {
        let lang = tag.split(['-', '_']).next().unwrap_or_default();
        if lang.eq_ignore_ascii_case("zh") {
            Locale::ZhCN
        } else {
            Locale::EnUS
        }
    }

    /// Locale of the user's system
    pub fn detect() -> Self {
        Self::from_tag(&locale_config::Locale::current().to_string())
    }
}

/// Translation resources
static TRANSLATIONS: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> = OnceLock::new();

/// Initialize translations (key -> (en, zh))
fn init_translations() -> HashMap<&'static str, (&'static str, &'static str)> {
    let mut map = HashMap::new();

    // App
    map.insert("app-title", ("Design Kit", "设计组件库"));

    // Gallery sections
    map.insert("section-buttons", ("Buttons", "按钮"));
    map.insert("section-badges", ("Badges & Tags", "徽标与标签"));
    map.insert("section-inputs", ("Inputs", "输入框"));
    map.insert("section-controls", ("Controls", "控件"));
    map.insert("section-steppers", ("Steppers", "步骤条"));
    map.insert("section-progress", ("Progress & Rating", "进度与评分"));
    map.insert("section-table", ("Team Members", "团队成员"));

    // Form fields
    map.insert("field-name", ("Name", "名称"));
    map.insert("field-name-placeholder", ("Type your name", "请输入名称"));
    map.insert("field-email", ("Email", "邮箱"));
    map.insert("field-email-invalid", ("Invalid email address", "邮箱地址无效"));
    map.insert("field-quantity", ("Quantity", "数量"));

    // Steps
    map.insert("step-account", ("Account", "账户"));
    map.insert("step-profile", ("Profile", "资料"));
    map.insert("step-review", ("Review", "确认"));
    map.insert("step-done", ("Done", "完成"));

    // Actions
    map.insert("action-edit", ("Edit", "编辑"));
    map.insert("action-delete", ("Delete", "删除"));
    map.insert("action-save", ("Save", "保存"));
    map.insert("action-cancel", ("Cancel", "取消"));

    // Table columns
    map.insert("col-member", ("Member", "成员"));
    map.insert("col-teams", ("Teams", "团队"));
    map.insert("col-rating", ("Rating", "评分"));
    map.insert("col-collaborators", ("Collaborators", "协作者"));
    map.insert("col-progress", ("Progress", "进度"));
    map.insert("col-links", ("Links", "链接"));

    // Table
    map.insert("table-no-data", ("No data", "无数据"));
    map.insert("table-loading", ("Loading...", "加载中..."));
    map.insert("table-items", ("items", "条"));

    map
}

/// Get translations
fn translations() -> &'static HashMap<&'static str, (&'static str, &'static str)> {
    TRANSLATIONS.get_or_init(init_translations)
}

/// Translate a key
pub fn t(locale: Locale, key: &str) -> SharedString {
    if let Some(&(en, zh)) = translations().get(key) {
        match locale {
            Locale::EnUS => SharedString::from(en),
            Locale::ZhCN => SharedString::from(zh),
        }
    } else {
        // Fallback: return the key itself
        SharedString::from(key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_known_keys() {
        assert_eq!(t(Locale::EnUS, "table-no-data").as_ref(), "No data");
        assert_eq!(t(Locale::ZhCN, "table-no-data").as_ref(), "无数据");
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        assert_eq!(t(Locale::ZhCN, "missing-key").as_ref(), "missing-key");
    }

    #[test]
    fn language_tags_map_to_locales() {
        assert_eq!(Locale::from_tag("zh-CN"), Locale::ZhCN);
        assert_eq!(Locale::from_tag("ZH_tw"), Locale::ZhCN);
        assert_eq!(Locale::from_tag("en-US"), Locale::EnUS);
        assert_eq!(Locale::from_tag("fr"), Locale::EnUS);
        assert_eq!(Locale::from_tag(""), Locale::EnUS);
    }
}
