use serde::Serialize;

use crate::i18n::Language;

/// All localized UI strings for a language.
///
/// The table is served verbatim to the client (`GET /api/i18n/:lang`) so the
/// front end can label navigation and common actions without shipping its own
/// translation bundle.
#[derive(Debug, Clone, Serialize)]
pub struct LanguageStrings {
    // ==================== Navigation ====================
    pub nav_home: &'static str,
    pub nav_teachings: &'static str,
    pub nav_articles: &'static str,
    pub nav_faq: &'static str,
    pub nav_ebooks: &'static str,
    pub nav_contact: &'static str,
    pub nav_search: &'static str,

    // ==================== Common Actions ====================
    pub common_loading: &'static str,
    pub common_search: &'static str,
    pub common_read_more: &'static str,
    pub common_download: &'static str,
    pub common_submit: &'static str,
    pub common_cancel: &'static str,
    pub common_back: &'static str,

    // ==================== Home Page ====================
    pub home_title: &'static str,
    pub home_subtitle: &'static str,
    pub home_teachings_title: &'static str,
    pub home_faq_title: &'static str,

    // ==================== Category Filter ====================
    /// Label for the "all" sentinel chip that disables the category filter
    pub filter_all_categories: &'static str,
}

impl LanguageStrings {
    /// Get the string table for a language.
    pub fn for_language(language: Language) -> &'static LanguageStrings {
        if language == Language::AMHARIC {
            &AMHARIC_STRINGS
        } else {
            &ENGLISH_STRINGS
        }
    }
}

// ==================== English Strings ====================

/// English UI strings (canonical)
pub const ENGLISH_STRINGS: LanguageStrings = LanguageStrings {
    nav_home: "Home",
    nav_teachings: "Teachings",
    nav_articles: "Articles",
    nav_faq: "FAQ",
    nav_ebooks: "eBooks",
    nav_contact: "Contact",
    nav_search: "Search",

    common_loading: "Loading...",
    common_search: "Search",
    common_read_more: "Read More",
    common_download: "Download",
    common_submit: "Submit",
    common_cancel: "Cancel",
    common_back: "Back",

    home_title: "Welcome to EOTC Answers",
    home_subtitle:
        "Explore the rich teachings and traditions of the Ethiopian Orthodox Tewahedo Church",
    home_teachings_title: "Sacred Teachings",
    home_faq_title: "Frequently Asked",

    filter_all_categories: "All Categories",
};

// ==================== Amharic Strings ====================

/// Amharic UI strings
pub const AMHARIC_STRINGS: LanguageStrings = LanguageStrings {
    nav_home: "መነሻ",
    nav_teachings: "ትምህርቶች",
    nav_articles: "ጽሑፎች",
    nav_faq: "ጥያቄና መልስ",
    nav_ebooks: "መጽሐፍት",
    nav_contact: "አድራሻ",
    nav_search: "ፈልግ",

    common_loading: "በመጫን ላይ...",
    common_search: "ፈልግ",
    common_read_more: "ተጨማሪ አንብብ",
    common_download: "አውርድ",
    common_submit: "ላክ",
    common_cancel: "ሰርዝ",
    common_back: "ተመለስ",

    home_title: "እንኳን ወደ ኢ.ኦ.ተ.ቤ መልሶች በደህና መጡ",
    home_subtitle: "የኢትዮጵያ ኦርቶዶክስ ተዋሕዶ ቤተክርስቲያንን ሀብታም ትምህርቶች እና ወጎች ያግኙ",
    home_teachings_title: "ቅዱሳን ትምህርቶች",
    home_faq_title: "ተደጋጋሚ ጥያቄዎች",

    filter_all_categories: "ሁሉም ምድቦች",
};
