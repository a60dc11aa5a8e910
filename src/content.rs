//! Bilingual content resolution and client-side style search/filter/grouping.
//!
//! Every list view in the application funnels through these four operations:
//! per-field language resolution, case-insensitive substring filtering with an
//! independent category filter, subject grouping, and category-chip
//! derivation. All of them are pure, synchronous functions over an immutable
//! snapshot of records; none of them can fail.

use std::collections::{BTreeMap, HashSet};

use crate::i18n::Language;

/// Sentinel category value that disables the category filter.
pub const ALL_CATEGORIES: &str = "all";

/// Resolve the display string for a translatable field.
///
/// Returns the translated override when the requested language is a
/// non-canonical language and the override is a non-empty string; in every
/// other case (canonical language, missing override, empty override) the
/// primary string is returned. A missing override and an empty-string
/// override are treated identically as "absent", so the result is never
/// empty while the primary is non-empty.
pub fn resolve_field<'a>(
    language: Language,
    primary: &'a str,
    secondary: Option<&'a str>,
) -> &'a str {
    match secondary {
        Some(s) if !language.is_canonical() && !s.is_empty() => s,
        _ => primary,
    }
}

/// A record that can be matched by the search/filter engine.
///
/// `search_fields` returns the resolved display strings the keyword search
/// runs over (each view configures its own set: title/description for
/// teachings, question/answer for FAQs, and so on). Tags are matched
/// individually on top of that set; the category participates in the exact
/// equality filter, not the substring search, unless a view also lists it in
/// `search_fields`.
pub trait Searchable {
    /// Resolved field values the substring search applies to.
    fn search_fields(&self, language: Language) -> Vec<&str>;

    /// Tags, each matched individually by the substring search.
    fn tags(&self) -> &[String] {
        &[]
    }

    /// Single-valued classification used by the category filter.
    fn category(&self) -> &str;
}

/// Filter a snapshot of records by search term and category.
///
/// Matching is case-insensitive substring containment, disjunctive across the
/// record's search fields and each of its tags. A whitespace-only term
/// matches every record. The category filter is an exact equality test,
/// disabled by the [`ALL_CATEGORIES`] sentinel, and composes with the search
/// via AND. The output preserves the input's relative order.
pub fn filter_records<'a, T: Searchable>(
    records: &'a [T],
    search_term: &str,
    category_filter: &str,
    language: Language,
) -> Vec<&'a T> {
    let needle = search_term.to_lowercase();
    let match_all = needle.trim().is_empty();

    records
        .iter()
        .filter(|record| {
            let matches_search = match_all
                || record
                    .search_fields(language)
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
                || record
                    .tags()
                    .iter()
                    .any(|tag| tag.to_lowercase().contains(&needle));

            let matches_category =
                category_filter == ALL_CATEGORIES || record.category() == category_filter;

            matches_search && matches_category
        })
        .collect()
}

/// Partition records into groups keyed by a chosen field.
///
/// Every record lands in exactly one group, keyed by the exact
/// (case-sensitive) value of the grouping field; records with an empty key go
/// into the `""` group. The returned map iterates keys in lexicographic
/// order; members keep their input order.
pub fn group_by<'a, T, F>(records: &'a [T], key: F) -> BTreeMap<String, Vec<&'a T>>
where
    F: Fn(&T) -> &str,
{
    let mut groups: BTreeMap<String, Vec<&'a T>> = BTreeMap::new();
    for record in records {
        groups.entry(key(record).to_string()).or_default().push(record);
    }
    groups
}

/// Derive the category-chip list for a snapshot of records.
///
/// The output is `["all", ...distinct categories in first-seen order]`;
/// duplicates collapse to one entry and empty category values are skipped.
pub fn distinct_categories<T, F>(records: &[T], category: F) -> Vec<String>
where
    F: Fn(&T) -> &str,
{
    let mut categories = vec![ALL_CATEGORIES.to_string()];
    let mut seen: HashSet<&str> = HashSet::new();

    for record in records {
        let value = category(record);
        if !value.is_empty() && seen.insert(value) {
            categories.push(value.to_string());
        }
    }

    categories
}
