//! Workflow template library and matcher.
//!
//! Templates are data, not code: hand-authored YAML parsed once at startup.
//! The matcher accumulates a score per template from trigger phrases in the
//! query and from the intent's workflow hints; a minimum score keeps weak,
//! coincidental keyword overlap from forcing a multi-step workflow onto
//! what should be a simple recommendation.

use std::sync::LazyLock;

use toolscout_core::WorkflowTemplate;

const WORKFLOWS_YAML: &str = include_str!("../../data/workflows.yaml");

/// Score for a full trigger phrase contained in the query.
const TRIGGER_PHRASE_SCORE: i32 = 10;
/// Score for an individual trigger word (longer than 3 chars) in the query.
const TRIGGER_WORD_SCORE: i32 = 3;
/// Score for a workflow hint contained in a trigger.
const HINT_TRIGGER_SCORE: i32 = 5;
/// Score for a workflow hint contained in a template tag.
const HINT_TAG_SCORE: i32 = 3;
/// Trigger words this short are too common to count.
const MIN_TRIGGER_WORD_LEN: usize = 4;
/// Best matches below this score are discarded.
const MIN_MATCH_SCORE: i32 = 5;

static TEMPLATE_LIBRARY: LazyLock<Vec<WorkflowTemplate>> = LazyLock::new(|| {
    serde_yaml::from_str(WORKFLOWS_YAML).expect("bundled workflows.yaml must parse")
});

/// The full template library.
#[must_use]
pub fn all_templates() -> &'static [WorkflowTemplate] {
    &TEMPLATE_LIBRARY
}

/// Look up a template by its stable id.
#[must_use]
pub fn template_by_id(id: &str) -> Option<&'static WorkflowTemplate> {
    TEMPLATE_LIBRARY.iter().find(|template| template.id == id)
}

/// Find the best-matching template for a query, or `None` when nothing
/// scores high enough.
#[must_use]
pub fn find_matching_template(
    query: &str,
    workflow_hints: &[String],
) -> Option<&'static WorkflowTemplate> {
    let query = query.to_lowercase();
    let hints: Vec<String> = workflow_hints.iter().map(|h| h.to_lowercase()).collect();

    let best = TEMPLATE_LIBRARY
        .iter()
        .map(|template| (template, score_template(template, &query, &hints)))
        .max_by_key(|(_, score)| *score)?;

    (best.1 >= MIN_MATCH_SCORE).then_some(best.0)
}

fn score_template(template: &WorkflowTemplate, query: &str, hints: &[String]) -> i32 {
    let mut score = 0;

    for trigger in &template.triggers {
        let trigger = trigger.to_lowercase();
        if query.contains(&trigger) {
            score += TRIGGER_PHRASE_SCORE;
        }
        for word in trigger.split_whitespace() {
            if word.len() >= MIN_TRIGGER_WORD_LEN && query.contains(word) {
                score += TRIGGER_WORD_SCORE;
            }
        }
    }

    for hint in hints {
        if template
            .triggers
            .iter()
            .any(|t| t.to_lowercase().contains(hint.as_str()))
        {
            score += HINT_TRIGGER_SCORE;
        }
        if template
            .tags
            .iter()
            .any(|t| t.to_lowercase().contains(hint.as_str()))
        {
            score += HINT_TAG_SCORE;
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_library_loads_fifteen_templates() {
        assert_eq!(all_templates().len(), 15);
    }

    #[test]
    fn test_template_ids_are_unique() {
        let ids: HashSet<&str> = all_templates().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids.len(), all_templates().len());
    }

    #[test]
    fn test_template_steps_are_ordered_and_nonempty() {
        for template in all_templates() {
            assert!(!template.steps.is_empty(), "{} has no steps", template.id);
            assert!(!template.triggers.is_empty(), "{} has no triggers", template.id);
            for (i, step) in template.steps.iter().enumerate() {
                assert_eq!(
                    usize::from(step.order),
                    i + 1,
                    "{} step order is not sequential",
                    template.id
                );
                assert!(
                    !step.capabilities.is_empty(),
                    "{} step {} has no capabilities",
                    template.id,
                    step.order
                );
            }
        }
    }

    #[test]
    fn test_comic_query_matches_comic_template() {
        let template =
            find_matching_template("I want to make a comic book", &[]).expect("match found");
        assert_eq!(template.id, "comic-creation");
    }

    #[test]
    fn test_plain_email_query_matches_nothing() {
        assert!(find_matching_template("write me an email", &[]).is_none());
    }

    #[test]
    fn test_hints_can_tip_the_score() {
        // "a complete series" alone matches no template, but hints from the
        // intent push the podcast template over the threshold.
        let hints = vec!["podcast".to_string()];
        let template = find_matching_template("a complete series", &hints).expect("match found");
        assert_eq!(template.id, "podcast-creation");
    }

    #[test]
    fn test_template_by_id() {
        assert!(template_by_id("brand-identity").is_some());
        assert!(template_by_id("no-such-template").is_none());
    }
}
