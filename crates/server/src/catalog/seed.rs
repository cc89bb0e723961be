//! Bundled seed catalog.
//!
//! The catalog ships with the binary as YAML and is parsed exactly once.
//! It is the initial content of the key-value store and the read fallback
//! whenever the store is unreachable.

use std::sync::LazyLock;

use toolscout_core::Tool;

const SEED_YAML: &str = include_str!("../data/tools.yaml");

static SEED_TOOLS: LazyLock<Vec<Tool>> = LazyLock::new(|| {
    serde_yaml::from_str(SEED_YAML).expect("bundled tools.yaml must parse")
});

/// The bundled tool catalog.
#[must_use]
pub fn seed_tools() -> &'static [Tool] {
    &SEED_TOOLS
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use toolscout_core::Category;

    #[test]
    fn test_seed_parses_and_is_nonempty() {
        let tools = seed_tools();
        assert_eq!(tools.len(), 26);
    }

    #[test]
    fn test_seed_names_are_unique() {
        let tools = seed_tools();
        let names: HashSet<&str> = tools.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names.len(), tools.len());
    }

    #[test]
    fn test_seed_covers_every_category() {
        let tools = seed_tools();
        for category in Category::ALL {
            assert!(
                tools.iter().any(|t| t.category == category),
                "no seed tool for category {category}"
            );
        }
    }

    #[test]
    fn test_seed_strengths_in_range() {
        for tool in seed_tools() {
            assert!(
                tool.strength > 0.0 && tool.strength <= 10.0,
                "{} has out-of-range strength {}",
                tool.name,
                tool.strength
            );
        }
    }

    #[test]
    fn test_seed_tools_have_capabilities() {
        for tool in seed_tools() {
            assert!(!tool.best_for.is_empty(), "{} has no bestFor", tool.name);
        }
    }
}
