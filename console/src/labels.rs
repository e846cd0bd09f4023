//! Localized display labels.
//!
//! Labels live in a nested lookup table (`key -> language -> text`). Missing
//! translations fall back to English, and unknown keys render as the key
//! itself so a gap in the table never blanks out the editor.

use std::collections::HashMap;
use std::str::FromStr;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ar")]
    Arabic,
}

impl Language {
    /// ISO 639-1 code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Arabic => "ar",
        }
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::English, Self::Arabic]
    }
}

/// Language code not supported by the console.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported language: {0}")]
pub struct UnsupportedLanguage(pub String);

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|lang| lang.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnsupportedLanguage(s.to_string()))
    }
}

/// `(key, english, arabic)`
type LabelRow = (&'static str, &'static str, &'static str);

const LABEL_ROWS: &[LabelRow] = &[
    // === Roles ===
    ("role.user", "User", "مستخدم"),
    ("role.admin", "Admin", "مسؤول"),
    ("role.super_admin", "Super admin", "مسؤول أعلى"),
    // === Groups ===
    ("group.users", "Users", "المستخدمون"),
    ("group.members", "Members", "الأعضاء"),
    ("group.families", "Families", "العائلات"),
    ("group.meetings", "Meetings", "الاجتماعات"),
    ("group.sectors", "Sectors", "القطاعات"),
    ("group.confessions", "Confessions", "الاعترافات"),
    ("group.visitations", "Visitations", "الافتقاد"),
    ("group.notifications", "Notifications", "الإشعارات"),
    // === Summary ===
    ("summary.extra_granted", "extra granted", "صلاحية إضافية"),
    ("summary.revoked", "revoked", "صلاحية ملغاة"),
    ("summary.effective_total", "effective total", "إجمالي الصلاحيات الفعلية"),
    // === Permissions ===
    ("USERS_VIEW_SELF", "View own account", "عرض الحساب الشخصي"),
    ("USERS_VIEW", "View users", "عرض المستخدمين"),
    ("USERS_CREATE", "Create users", "إنشاء مستخدمين"),
    ("USERS_UPDATE", "Edit users", "تعديل المستخدمين"),
    ("USERS_DELETE", "Delete users", "حذف المستخدمين"),
    ("USERS_MANAGE_PERMISSIONS", "Manage user permissions", "إدارة صلاحيات المستخدمين"),
    ("MEMBERS_VIEW", "View members", "عرض الأعضاء"),
    ("MEMBERS_CREATE", "Add members", "إضافة أعضاء"),
    ("MEMBERS_UPDATE", "Edit members", "تعديل الأعضاء"),
    ("MEMBERS_DELETE", "Delete members", "حذف الأعضاء"),
    ("MEMBERS_EXPORT", "Export member lists", "تصدير قوائم الأعضاء"),
    ("FAMILIES_VIEW", "View families", "عرض العائلات"),
    ("FAMILIES_CREATE", "Create families", "إنشاء عائلات"),
    ("FAMILIES_UPDATE", "Edit families", "تعديل العائلات"),
    ("FAMILIES_DELETE", "Delete families", "حذف العائلات"),
    ("MEETINGS_VIEW", "View meetings", "عرض الاجتماعات"),
    ("MEETINGS_CREATE", "Create meetings", "إنشاء اجتماعات"),
    ("MEETINGS_UPDATE", "Edit meetings", "تعديل الاجتماعات"),
    ("MEETINGS_DELETE", "Delete meetings", "حذف الاجتماعات"),
    ("SECTORS_VIEW", "View sectors", "عرض القطاعات"),
    ("SECTORS_CREATE", "Create sectors", "إنشاء قطاعات"),
    ("SECTORS_UPDATE", "Edit sectors", "تعديل القطاعات"),
    ("SECTORS_DELETE", "Delete sectors", "حذف القطاعات"),
    ("CONFESSIONS_VIEW", "View confession sessions", "عرض مواعيد الاعتراف"),
    ("CONFESSIONS_SCHEDULE", "Schedule confession sessions", "جدولة مواعيد الاعتراف"),
    ("CONFESSIONS_UPDATE", "Edit confession sessions", "تعديل مواعيد الاعتراف"),
    ("CONFESSIONS_CANCEL", "Cancel confession sessions", "إلغاء مواعيد الاعتراف"),
    ("VISITATIONS_VIEW", "View visitations", "عرض الافتقادات"),
    ("VISITATIONS_CREATE", "Record visitations", "تسجيل الافتقادات"),
    ("VISITATIONS_UPDATE", "Edit visitations", "تعديل الافتقادات"),
    ("VISITATIONS_DELETE", "Delete visitations", "حذف الافتقادات"),
    ("NOTIFICATIONS_VIEW", "View notifications", "عرض الإشعارات"),
    ("NOTIFICATIONS_SEND", "Send notifications", "إرسال الإشعارات"),
];

lazy_static! {
    static ref LABELS: HashMap<&'static str, HashMap<Language, &'static str>> = LABEL_ROWS
        .iter()
        .map(|&(key, en, ar)| {
            (
                key,
                HashMap::from([(Language::English, en), (Language::Arabic, ar)]),
            )
        })
        .collect();
}

/// Display text for `key` in `language`.
#[must_use]
pub fn label_for<'a>(key: &'a str, language: Language) -> &'a str {
    let Some(translations) = LABELS.get(key) else {
        return key;
    };

    match translations
        .get(&language)
        .or_else(|| translations.get(&Language::English))
    {
        Some(text) => *text,
        None => key,
    }
}
