//! Keyword-based category detection.
//!
//! The cheapest classifier in the pipeline: a substring scan over a fixed
//! category-to-keywords table. Used standalone as a pre-filter and as the
//! fallback whenever the reasoning service is skipped or unavailable.
//!
//! The table lives in `data/categories.yaml` and its declaration order is
//! the match priority: the first category with a hit wins, so a query
//! touching several categories always resolves to the earliest one.

use std::sync::LazyLock;

use serde::Deserialize;

use toolscout_core::Category;

const CATEGORIES_YAML: &str = include_str!("../data/categories.yaml");

/// One row of the keyword table.
#[derive(Debug, Deserialize)]
struct CategoryKeywords {
    category: Category,
    keywords: Vec<String>,
}

static KEYWORD_TABLE: LazyLock<Vec<CategoryKeywords>> = LazyLock::new(|| {
    serde_yaml::from_str(CATEGORIES_YAML).expect("bundled categories.yaml must parse")
});

/// Detect the category of a query by keyword substring match.
///
/// Returns `None` when no keyword of any category occurs in the query.
/// No side effects, no failure mode.
#[must_use]
pub fn detect_category(query: &str) -> Option<Category> {
    let query = query.to_lowercase();

    for entry in KEYWORD_TABLE.iter() {
        for keyword in &entry.keywords {
            if query.contains(keyword.as_str()) {
                return Some(entry.category);
            }
        }
    }

    None
}

/// All keywords registered for a category.
#[must_use]
pub fn keywords_for_category(category: Category) -> &'static [String] {
    KEYWORD_TABLE
        .iter()
        .find(|entry| entry.category == category)
        .map_or(&[], |entry| entry.keywords.as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_every_category() {
        for category in Category::ALL {
            assert!(
                !keywords_for_category(category).is_empty(),
                "no keywords for {category}"
            );
        }
    }

    #[test]
    fn test_detects_audio_from_voice_over() {
        assert_eq!(
            detect_category("I need a podcast voice-over"),
            Some(Category::Audio)
        );
    }

    #[test]
    fn test_detects_visual_from_logo() {
        assert_eq!(detect_category("design a logo"), Some(Category::Visual));
    }

    #[test]
    fn test_detects_code() {
        assert_eq!(
            detect_category("help me debug this python function"),
            Some(Category::Code)
        );
    }

    #[test]
    fn test_unrelated_text_detects_nothing() {
        assert_eq!(detect_category("random unrelated text"), None);
    }

    #[test]
    fn test_first_category_wins_on_overlap() {
        // "design" (visual) and "dashboard" (data) both match; visual is
        // declared first so it wins. This is the documented policy, not an
        // accident - the assertion pins it.
        assert_eq!(
            detect_category("design a dashboard"),
            Some(Category::Visual)
        );
    }

    #[test]
    fn test_detection_is_case_insensitive() {
        assert_eq!(detect_category("MAKE A POSTER"), Some(Category::Visual));
    }
}
